use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use super::*;

const PROBLEMS: &'static str = "5+5,10\n1+1,2\n8+3,11\n\"what is 2+2, roughly?\",4\n";

fn prompts(question_set: &QuestionSet) -> Vec<&str> {
    question_set.iter().map(|q| q.prompt.as_str()).collect()
}

#[test]
fn reads_questions_in_file_order() {
    let definition = QuizDefinition::from_reader(PROBLEMS.as_bytes()).unwrap();
    let question_set = definition.into_question_set().unwrap();
    assert_eq!(
        prompts(&question_set),
        vec!["5+5", "1+1", "8+3", "what is 2+2, roughly?"]
    );
    assert_eq!(question_set.iter().last().unwrap().answer, "4");
}

#[test]
fn first_row_is_a_question() {
    let definition = QuizDefinition::from_reader("prompt,answer\n".as_bytes()).unwrap();
    let question_set = definition.into_question_set().unwrap();
    assert_eq!(question_set.len(), 1);
    assert_eq!(question_set.iter().next().unwrap(), &Question::new("prompt", "answer"));
}

#[test]
fn empty_file_is_rejected() {
    match QuizDefinition::from_reader("".as_bytes()) {
        Err(QuizError::EmptyQuestionSet) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn short_row_is_rejected() {
    let definition = QuizDefinition::from_reader("1+1,2\nonlyprompt\n".as_bytes()).unwrap();
    match definition.into_question_set() {
        Err(QuizError::MalformedRecord {
            position,
            field_count,
        }) => {
            assert_eq!(position, 2);
            assert_eq!(field_count, 1);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn long_row_is_rejected() {
    let definition = QuizDefinition::from_reader("1+1,2,3\n".as_bytes()).unwrap();
    match definition.into_question_set() {
        Err(QuizError::MalformedRecord {
            position,
            field_count,
        }) => {
            assert_eq!(position, 1);
            assert_eq!(field_count, 3);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn empty_fields_are_allowed() {
    let definition = QuizDefinition::from_reader(",\n".as_bytes()).unwrap();
    let question_set = definition.into_question_set().unwrap();
    assert_eq!(question_set.iter().next().unwrap(), &Question::new("", ""));
}

#[test]
fn shuffle_keeps_every_question() {
    let mut definition = QuizDefinition::from_reader(PROBLEMS.as_bytes()).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    definition.shuffle(&mut rng);
    let question_set = definition.into_question_set().unwrap();

    let mut shuffled = prompts(&question_set);
    shuffled.sort();
    assert_eq!(shuffled, vec!["1+1", "5+5", "8+3", "what is 2+2, roughly?"]);
}

#[test]
fn rejects_non_csv_files() {
    match QuizDefinition::open(Path::new("problems.txt")) {
        Err(QuizError::UnsupportedFileType(path)) => assert_eq!(path, Path::new("problems.txt")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn reports_missing_files() {
    match QuizDefinition::open(Path::new("does/not/exist.CSV")) {
        Err(QuizError::Io(_)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn building_from_nothing_fails() {
    match QuestionSet::build(Vec::new()) {
        Err(QuizError::EmptyQuestionSet) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn guesses_ignore_surrounding_whitespace() {
    let question = Question::new("Capital of France?", "Paris");
    assert!(question.is_guess_correct(" Paris\n"));
    assert!(question.is_guess_correct("Paris"));
    assert!(!question.is_guess_correct("paris"));
    assert!(!question.is_guess_correct("Pa ris"));
}

#[test]
fn expected_answer_is_trimmed_too() {
    let question = Question::new("2+2?", " 4 ");
    assert!(question.is_guess_correct("4"));
}
