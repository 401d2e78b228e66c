use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Question #{position} has {field_count} fields, expected a prompt and an answer")]
    MalformedRecord { position: usize, field_count: usize },
    #[error("The quiz does not contain any question")]
    EmptyQuestionSet,
    #[error("Ran out of answers after {answered} of {total} questions")]
    InputExhausted { answered: usize, total: usize },
    #[error("Quiz file {0:?} is not a .csv file")]
    UnsupportedFileType(PathBuf),
    #[error("Could not read quiz file")]
    Io(#[source] io::Error),
    #[error("Could not parse quiz file")]
    Csv(#[from] csv::Error),
    #[error("Could not read answer")]
    AnswerSource(#[source] io::Error),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}
