use crossbeam::channel::{self, Receiver, Sender};
use log::trace;
use std::io::{self, BufRead, BufReader, Stdin};
use std::thread;

#[cfg(test)]
pub mod mock;

pub type Answer = io::Result<Option<String>>;

/// Where answers come from, one line at a time. `Ok(None)` means there will never be another one.
pub trait AnswerSource: Send + 'static {
    fn read_answer(&mut self) -> Answer;
}

pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead + Send + 'static> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource { reader }
    }

    /// Blocks until the player presses enter. Running out of input here is fine, the quiz
    /// will notice on its first question.
    pub fn wait_for_start(&mut self) -> io::Result<()> {
        self.read_answer().map(|_| ())
    }
}

impl<R: BufRead + Send + 'static> AnswerSource for LineSource<R> {
    fn read_answer(&mut self) -> Answer {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

pub fn stdin() -> LineSource<BufReader<Stdin>> {
    LineSource::new(BufReader::new(io::stdin()))
}

/// Owns an answer source on a dedicated thread, reading exactly one answer per request.
///
/// Dropping the reader abandons whatever read is in flight: its reply has nowhere to go and
/// the thread stops as soon as the source returns.
pub struct AnswerReader {
    requests: Sender<()>,
    replies: Receiver<Answer>,
}

impl AnswerReader {
    pub fn spawn<S: AnswerSource>(mut source: S) -> io::Result<Self> {
        let (requests, pending_requests) = channel::bounded::<()>(1);
        let (reply_sender, replies) = channel::bounded(1);

        thread::Builder::new()
            .name("answer-reader".to_owned())
            .spawn(move || {
                for () in pending_requests.iter() {
                    let answer = source.read_answer();
                    let source_done = !matches!(answer, Ok(Some(_)));
                    if reply_sender.send(answer).is_err() || source_done {
                        break;
                    }
                }
                trace!("Answer reader stopped");
            })?;

        Ok(AnswerReader { requests, replies })
    }

    pub fn request(&self) {
        // A closed request channel means the reader is gone, which `replies` reports too.
        self.requests.send(()).ok();
    }

    pub fn replies(&self) -> &Receiver<Answer> {
        &self.replies
    }
}

#[cfg(test)]
impl AnswerReader {
    /// A reader whose answers are all waiting already, as if typed ahead of every prompt.
    pub fn answered_ahead(answers: Vec<Answer>) -> Self {
        let (requests, _) = channel::unbounded();
        let (reply_sender, replies) = channel::unbounded();
        for answer in answers {
            reply_sender.send(answer).ok();
        }
        AnswerReader { requests, replies }
    }
}
