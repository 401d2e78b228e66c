use anyhow::*;

use crate::quiz::result::QuizResult;
use crate::quiz::TimeLimit;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    QuizRules(TimeLimit),
    QuestionBegins(usize, String),
    TimeUp,
    QuizCompleted,
    AnswersExhausted,
    QuizResults(QuizResult),
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message) -> Result<()>;
}
