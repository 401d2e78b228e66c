use crossbeam::channel::{self, select, Receiver};
use log::{debug, info, warn};
use std::time::Instant;

use self::definition::QuestionSet;
use self::error::QuizError;
use self::result::{Outcome, QuizResult, Tally};
use crate::input::{AnswerReader, AnswerSource};
use crate::output::{Message, QuizOutput};

pub mod definition;
pub mod error;
pub mod result;
mod settings;

pub use self::settings::*;


/// Asks every question in order while a deadline runs, whichever finishes first ends the quiz.
pub struct TimedQuiz<O> {
    questions: QuestionSet,
    settings: Settings,
    output: O,
}

impl<O: QuizOutput> TimedQuiz<O> {
    pub fn new(questions: QuestionSet, settings: Settings, output: O) -> Self {
        TimedQuiz {
            questions,
            settings,
            output,
        }
    }

    /// Runs the quiz against `source`. The returned result is final: answers the source
    /// produces after the quiz ended are discarded.
    pub fn run<S: AnswerSource>(&mut self, source: S) -> Result<QuizResult, QuizError> {
        let start_time = Instant::now();
        let deadline = match self.settings.time_limit {
            TimeLimit::Limited(limit) => channel::after(limit),
            TimeLimit::Unlimited => channel::never(),
        };
        let reader = AnswerReader::spawn(source).map_err(QuizError::AnswerSource)?;
        info!(
            "Starting quiz with {} questions ({:?})",
            self.questions.len(),
            self.settings.time_limit
        );

        let mut tally = Tally::new(self.questions.len());
        let outcome = self.ask_questions(&reader, &deadline, &mut tally)?;
        let result = tally.finish(outcome, start_time.elapsed());
        drop(reader);

        let message = match outcome {
            Outcome::Completed => Message::QuizCompleted,
            Outcome::TimeUp => Message::TimeUp,
            Outcome::InputExhausted => Message::AnswersExhausted,
        };
        self.output.say(&message)?;

        if outcome == Outcome::Completed {
            info!("Quiz completed in {:?}", result.elapsed);
        } else {
            warn!(
                "Quiz ended early ({:?}) with {} unanswered questions",
                outcome, result.unanswered
            );
        }
        Ok(result)
    }

    fn ask_questions(
        &mut self,
        reader: &AnswerReader,
        deadline: &Receiver<Instant>,
        tally: &mut Tally,
    ) -> Result<Outcome, QuizError> {
        let mut expired = false;

        for (index, question) in self.questions.iter().enumerate() {
            if expired || deadline.try_recv().is_ok() {
                return Ok(Outcome::TimeUp);
            }

            self.output
                .say(&Message::QuestionBegins(index + 1, question.prompt.clone()))?;
            reader.request();

            let reply = select! {
                recv(reader.replies()) -> reply => reply,
                recv(deadline) -> _ => match reader.replies().try_recv() {
                    // An answer ready at the same instant as the deadline still counts.
                    Ok(answer) => {
                        expired = true;
                        Ok(answer)
                    }
                    Err(_) => return Ok(Outcome::TimeUp),
                },
            };

            match reply {
                Ok(Ok(Some(guess))) => {
                    let is_correct = question.is_guess_correct(&guess);
                    debug!("Question #{} answered, correct: {}", index + 1, is_correct);
                    tally.record(is_correct);
                }
                Ok(Ok(None)) | Err(_) => return self.on_input_exhausted(tally),
                Ok(Err(e)) => return Err(QuizError::AnswerSource(e)),
            }
        }

        Ok(Outcome::Completed)
    }

    fn on_input_exhausted(&self, tally: &Tally) -> Result<Outcome, QuizError> {
        debug!(
            "Answer source ran dry after {} answers",
            tally.answered()
        );
        match self.settings.on_input_exhausted {
            ExhaustionPolicy::Finish => Ok(Outcome::InputExhausted),
            ExhaustionPolicy::Fail => Err(QuizError::InputExhausted {
                answered: tally.answered(),
                total: tally.total(),
            }),
        }
    }
}
