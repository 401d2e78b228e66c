use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeLimit {
    Limited(Duration),
    Unlimited,
}

impl TimeLimit {
    /// Zero seconds means the quiz is not timed.
    pub fn from_secs(seconds: u64) -> Self {
        match seconds {
            0 => TimeLimit::Unlimited,
            s => TimeLimit::Limited(Duration::from_secs(s)),
        }
    }
}

/// What to do when the player runs out of answers before the quiz is over.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExhaustionPolicy {
    /// Stop the quiz and count the remaining questions as unanswered.
    Finish,
    /// Abort with `QuizError::InputExhausted`.
    Fail,
}

impl FromStr for ExhaustionPolicy {
    type Err = ();

    /// Case-insensitive, `finish` or `fail`.
    fn from_str(value: &str) -> Result<Self, ()> {
        match value.trim().to_lowercase().as_str() {
            "finish" => Ok(ExhaustionPolicy::Finish),
            "fail" => Ok(ExhaustionPolicy::Fail),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub time_limit: TimeLimit,
    pub on_input_exhausted: ExhaustionPolicy,
}
