use std::convert::TryFrom;
use std::slice;

use crate::quiz::error::QuizError;

pub type RawQuestion = Vec<String>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new<P: Into<String>, A: Into<String>>(prompt: P, answer: A) -> Self {
        Question {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Surrounding whitespace is ignored on both sides, everything else must match exactly.
    pub fn is_guess_correct(&self, guess: &str) -> bool {
        guess.trim() == self.answer.trim()
    }
}

/// Questions in the order they will be asked. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn build<I>(raw_questions: I) -> Result<QuestionSet, QuizError>
    where
        I: IntoIterator<Item = RawQuestion>,
    {
        let mut questions = Vec::new();
        for (index, raw_question) in raw_questions.into_iter().enumerate() {
            let [prompt, answer] =
                <[String; 2]>::try_from(raw_question).map_err(|fields| QuizError::MalformedRecord {
                    position: index + 1,
                    field_count: fields.len(),
                })?;
            questions.push(Question::new(prompt, answer));
        }

        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        Ok(QuestionSet { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }
}
