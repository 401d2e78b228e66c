use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use crate::input::{Answer, AnswerSource};

/// Replays canned answers, each after an optional delay, then runs dry.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<(Duration, String)>,
}

impl ScriptedAnswers {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedAnswers {
            answers: answers
                .iter()
                .map(|a| (Duration::default(), a.to_string()))
                .collect(),
        }
    }

    pub fn then_after(mut self, delay: Duration, answer: &str) -> Self {
        self.answers.push_back((delay, answer.to_owned()));
        self
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_answer(&mut self) -> Answer {
        match self.answers.pop_front() {
            Some((delay, answer)) => {
                thread::sleep(delay);
                Ok(Some(answer))
            }
            None => Ok(None),
        }
    }
}

/// Answers the scripted lines, then blocks forever like a player who walked away.
pub struct StalledAnswers {
    script: ScriptedAnswers,
}

impl StalledAnswers {
    pub fn after(script: ScriptedAnswers) -> Self {
        StalledAnswers { script }
    }
}

impl AnswerSource for StalledAnswers {
    fn read_answer(&mut self) -> Answer {
        if let Some(answer) = self.script.read_answer()? {
            return Ok(Some(answer));
        }
        loop {
            thread::park();
        }
    }
}

pub struct BrokenAnswers;

impl AnswerSource for BrokenAnswers {
    fn read_answer(&mut self) -> Answer {
        Err(io::Error::new(io::ErrorKind::Other, "stdin went away"))
    }
}
