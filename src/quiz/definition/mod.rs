use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::quiz::error::QuizError;

pub mod question;

pub use question::{Question, QuestionSet, RawQuestion};

#[cfg(test)]
mod tests;

const QUIZ_FILE_EXTENSION: &'static str = "csv";

/// Rows of a quiz file, as read from disk.
#[derive(Debug)]
pub struct QuizDefinition {
    raw_questions: Vec<RawQuestion>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, QuizError> {
        let is_csv = source
            .extension()
            .map(|e| e.eq_ignore_ascii_case(QUIZ_FILE_EXTENSION))
            .unwrap_or(false);
        if !is_csv {
            return Err(QuizError::UnsupportedFileType(source.to_path_buf()));
        }

        let file = File::open(source).map_err(QuizError::Io)?;
        let definition = QuizDefinition::from_reader(file)?;
        debug!(
            "Read {} questions from {:?}",
            definition.raw_questions.len(),
            source
        );
        Ok(definition)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition, QuizError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut raw_questions = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            raw_questions.push(record.iter().map(str::to_owned).collect());
        }

        if raw_questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        Ok(QuizDefinition { raw_questions })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.raw_questions.shuffle(rng);
    }

    pub fn into_question_set(self) -> Result<QuestionSet, QuizError> {
        QuestionSet::build(self.raw_questions)
    }
}
