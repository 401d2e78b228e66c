use anyhow::*;
use log::{debug, info};
use std::env;

use crate::output::console::ConsoleOutput;
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::TimedQuiz;
use crate::settings::{Command, USAGE};

mod input;
mod output;
mod quiz;
mod settings;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = match settings::load(env::args().skip(1), None)? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run(settings) => settings,
    };
    debug!("Settings: {:?}", settings);

    let mut definition = QuizDefinition::open(&settings.filename)
        .with_context(|| format!("Could not load quiz from {:?}", settings.filename))?;
    if settings.random {
        info!("Shuffling questions");
        definition.shuffle(&mut rand::thread_rng());
    }
    let questions = definition
        .into_question_set()
        .with_context(|| format!("Invalid quiz file {:?}", settings.filename))?;

    let quiz_settings = settings.quiz_settings();
    let mut console = ConsoleOutput::stdout();
    console.say(&Message::QuizRules(quiz_settings.time_limit))?;

    let mut answers = input::stdin();
    answers
        .wait_for_start()
        .context("Could not read from standard input")?;

    let mut quiz = TimedQuiz::new(questions, quiz_settings, ConsoleOutput::stdout());
    let result = quiz.run(answers).context("The quiz was interrupted")?;
    console.say(&Message::QuizResults(result))?;

    Ok(())
}
