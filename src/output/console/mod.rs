use anyhow::*;
use std::io::{self, Stdout, Write};

use crate::output::{Message, QuizOutput};
use crate::quiz::TimeLimit;


pub struct ConsoleOutput<W> {
    writer: W,
}

impl ConsoleOutput<Stdout> {
    pub fn stdout() -> Self {
        ConsoleOutput::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        ConsoleOutput { writer }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuizRules(TimeLimit::Limited(limit)) => format!(
                "Welcome to the Quiz. You have {} seconds to complete the quiz.\nPress enter to start the quiz.",
                limit.as_secs()
            ),
            QuizRules(TimeLimit::Unlimited) => {
                "Welcome to the Quiz. There is no time limit.\nPress enter to start the quiz.".into()
            }
            QuestionBegins(number, prompt) => format!("{}) {}", number, prompt),
            TimeUp => "You have run out of time to complete the quiz.".into(),
            QuizCompleted => "You have completed the quiz.".into(),
            AnswersExhausted => "No more answers, ending the quiz.".into(),
            QuizResults(result) => {
                let mut message = "Quiz Results:".to_owned();
                message += &format!("\nTotal Questions: {}", result.total);
                message += &format!("\nCorrect: {}", result.correct);
                message += &format!("\nIncorrect: {}", result.incorrect);
                message += &format!("\nUnanswered: {}", result.unanswered);
                message += &format!(
                    "\nTime Elapsed: {:.2} seconds",
                    result.elapsed.as_secs_f64()
                );
                if let Some(score) = result.score() {
                    message += &format!("\nScore: {:.2}", score);
                }
                message
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> QuizOutput for ConsoleOutput<W> {
    fn say(&mut self, message: &Message) -> Result<()> {
        let text = self.interpret_message(message);
        writeln!(self.writer, "{}", text).context("Could not write to console")?;
        self.writer.flush().context("Could not flush console")?;
        Ok(())
    }
}
