//! Line-oriented command loop: parse a line, run it, render the result.

use census::Bucket;
use serde::Serialize;
use std::str::SplitWhitespace;
use tracing::debug;

use crate::commands::{config, households, people, population};
use crate::error::AppError;
use crate::render;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddHead {
        gender: String,
        date_of_birth: String,
        name: String,
    },
    AddMember {
        household: String,
        gender: String,
        date_of_birth: String,
        name: String,
    },
    List {
        page: usize,
    },
    Stats {
        expand: Option<Bucket>,
    },
    Age {
        date_of_birth: String,
    },
    Show {
        person: String,
    },
    Config,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Empty,
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
///
/// Missing fields are passed through as empty strings so that validation,
/// not the parser, reports them.
pub fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "head" => {
            let gender = next_token(&mut tokens);
            let date_of_birth = next_token(&mut tokens);
            Command::AddHead {
                gender,
                date_of_birth,
                name: rest(tokens),
            }
        }
        "member" => {
            let household = next_token(&mut tokens);
            let gender = next_token(&mut tokens);
            let date_of_birth = next_token(&mut tokens);
            Command::AddMember {
                household,
                gender,
                date_of_birth,
                name: rest(tokens),
            }
        }
        "list" => {
            let page = match tokens.next() {
                Some(raw) => raw
                    .parse::<usize>()
                    .ok()
                    .filter(|page| *page > 0)
                    .ok_or_else(|| AppError::InvalidPage(raw.to_string()))?,
                None => 1,
            };
            Command::List { page }
        }
        "stats" => Command::Stats {
            expand: tokens.next().map(parse_bucket).transpose()?,
        },
        "age" => Command::Age {
            date_of_birth: next_token(&mut tokens),
        },
        "show" => Command::Show {
            person: next_token(&mut tokens),
        },
        "config" => Command::Config,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

pub fn parse_bucket(raw: &str) -> Result<Bucket, AppError> {
    match raw.to_lowercase().as_str() {
        "males" | "male" | "m" => Ok(Bucket::Males),
        "females" | "female" | "f" => Ok(Bucket::Females),
        "0-5" | "children" | "age0to5" => Ok(Bucket::Age0To5),
        "30+" | "above30" | "ageabove30" => Ok(Bucket::AgeAbove30),
        "total" | "all" => Ok(Bucket::Total),
        _ => Err(AppError::UnknownBucket(raw.to_string())),
    }
}

pub fn execute(state: &mut AppState, command: Command) -> Result<Outcome, AppError> {
    debug!(?command, "Executing command");
    let json = state.config.json;
    let locale = state.locale();

    match command {
        Command::AddHead {
            gender,
            date_of_birth,
            name,
        } => {
            let added = households::add_head(state, &name, &gender, &date_of_birth)?;
            output(json, &added, render::added)
        }
        Command::AddMember {
            household,
            gender,
            date_of_birth,
            name,
        } => {
            let added = households::add_member(state, &household, &name, &gender, &date_of_birth)?;
            output(json, &added, render::added)
        }
        Command::List { page } => {
            let page = households::list_households(state, page);
            output(json, &page, |p| render::household_page(p, locale))
        }
        Command::Stats { expand } => {
            let data = population::get_demographics(state);
            output(json, &data, |d| render::demographics(d, expand, locale))
        }
        Command::Age { date_of_birth } => {
            let report = people::get_age(state, &date_of_birth)?;
            output(json, &report, render::age)
        }
        Command::Show { person } => {
            let data = people::get_person(state, &person)?;
            output(json, &data, render::person)
        }
        Command::Config => {
            let config = config::get_config(state);
            Ok(Outcome::Output(serde_json::to_string_pretty(&config)?))
        }
        Command::Help => Ok(Outcome::Output(render::HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

/// Parse and run one line.
pub fn run_line(state: &mut AppState, line: &str) -> Result<Outcome, AppError> {
    match parse_command(line)? {
        Some(command) => execute(state, command),
        None => Ok(Outcome::Empty),
    }
}

fn output<T, F>(json: bool, value: &T, text: F) -> Result<Outcome, AppError>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        Ok(Outcome::Output(serde_json::to_string_pretty(value)?))
    } else {
        Ok(Outcome::Output(text(value)))
    }
}

fn next_token(tokens: &mut SplitWhitespace<'_>) -> String {
    tokens.next().unwrap_or_default().to_string()
}

fn rest(tokens: SplitWhitespace<'_>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}
