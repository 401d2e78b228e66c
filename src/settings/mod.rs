use anyhow::*;
use config::{Config, Environment, Map};
use serde::de;
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

use crate::quiz::{self, ExhaustionPolicy, TimeLimit};


pub const USAGE: &'static str = "Usage: timed-quiz [OPTIONS]

Options:
  --filename <path>                 CSV file of prompt,answer rows [default: problems.csv]
  --time-limit <seconds>            Time allowed for the whole quiz, 0 for no limit [default: 30]
  --random <Y|N>                    Shuffle questions before asking them [default: Y]
  --on-input-exhausted <finish|fail>
                                    What to do when input ends early [default: finish]
  --help                            Print this message

Every option can also be set with a QUIZ_* environment variable, e.g. QUIZ_TIME_LIMIT=60.";

const ENV_PREFIX: &'static str = "QUIZ";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub filename: PathBuf,
    pub time_limit: u64,
    #[serde(deserialize_with = "bool_from_yes_no")]
    pub random: bool,
    #[serde(deserialize_with = "policy_from_string")]
    pub on_input_exhausted: ExhaustionPolicy,
}

impl Settings {
    pub fn quiz_settings(&self) -> quiz::Settings {
        quiz::Settings {
            time_limit: TimeLimit::from_secs(self.time_limit),
            on_input_exhausted: self.on_input_exhausted,
        }
    }
}

#[derive(Debug)]
pub enum Command {
    Run(Settings),
    Help,
}

#[derive(Debug, Default, PartialEq)]
struct CommandLine {
    filename: Option<String>,
    time_limit: Option<String>,
    random: Option<String>,
    on_input_exhausted: Option<String>,
    help: bool,
}

impl CommandLine {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<CommandLine> {
        let mut command_line = CommandLine::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.find('=') {
                Some(index) => (arg[..index].to_owned(), Some(arg[index + 1..].to_owned())),
                None => (arg.clone(), None),
            };

            if flag == "--help" || flag == "-h" {
                command_line.help = true;
                continue;
            }

            let slot = match flag.as_str() {
                "--filename" | "-filename" => &mut command_line.filename,
                "--time-limit" | "--timeLimit" | "-timeLimit" => &mut command_line.time_limit,
                "--random" | "-random" => &mut command_line.random,
                "--on-input-exhausted" => &mut command_line.on_input_exhausted,
                _ => bail!("Unknown argument `{}`\n\n{}", arg, USAGE),
            };

            let value = match inline_value {
                Some(value) => value,
                None => args
                    .next()
                    .with_context(|| format!("Missing value for `{}`", flag))?,
            };
            *slot = Some(value);
        }

        Ok(command_line)
    }
}

fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

fn bool_from_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_yes_no(&value)
        .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&value), &"Y or N"))
}

fn policy_from_string<'de, D>(deserializer: D) -> Result<ExhaustionPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse()
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&value), &"finish or fail"))
}

/// Defaults, then `QUIZ_*` environment variables, then command line arguments.
/// `environment` replaces the process environment when set.
pub fn load<I>(args: I, environment: Option<Map<String, String>>) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let command_line = CommandLine::parse(args)?;
    if command_line.help {
        return Ok(Command::Help);
    }

    let settings = Config::builder()
        .set_default("filename", "problems.csv")?
        .set_default("time_limit", 30)?
        .set_default("random", "Y")?
        .set_default("on_input_exhausted", "finish")?
        .add_source(Environment::with_prefix(ENV_PREFIX).source(environment))
        .set_override_option("filename", command_line.filename)?
        .set_override_option("time_limit", command_line.time_limit)?
        .set_override_option("random", command_line.random)?
        .set_override_option("on_input_exhausted", command_line.on_input_exhausted)?
        .build()
        .context("Could not read settings")?
        .try_deserialize::<Settings>()
        .context("Invalid settings")?;

    Ok(Command::Run(settings))
}
