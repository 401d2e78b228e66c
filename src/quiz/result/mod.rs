use std::time::Duration;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Completed,
    TimeUp,
    InputExhausted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub elapsed: Duration,
    pub outcome: Outcome,
}

impl QuizResult {
    /// Percentage of correct answers, `None` for a quiz without questions.
    pub fn score(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Running counts for a quiz in progress. Only the thread asking questions touches it.
#[derive(Debug)]
pub(crate) struct Tally {
    total: usize,
    correct: usize,
    incorrect: usize,
}

impl Tally {
    pub fn new(total: usize) -> Self {
        Tally {
            total,
            correct: 0,
            incorrect: 0,
        }
    }

    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn answered(&self) -> usize {
        self.correct + self.incorrect
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn finish(self, outcome: Outcome, elapsed: Duration) -> QuizResult {
        QuizResult {
            total: self.total,
            correct: self.correct,
            incorrect: self.incorrect,
            unanswered: self.total - self.answered(),
            elapsed,
            outcome,
        }
    }
}
