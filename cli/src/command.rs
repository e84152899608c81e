use std::str::FromStr;

use lightsout_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Press(Coord2),
    Hint,
    Solve,
    Restart,
    New,
    Show,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, try `<row> <col>`, hint, solve, restart, new, show or quit")]
    Unknown(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Expected `<row> <col>`")]
    MissingCol,
}

fn parse_coord(text: &str) -> Result<Coord, CommandError> {
    text.parse()
        .map_err(|_| CommandError::InvalidCoord(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|word| !word.is_empty());

        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };

        if first.starts_with(|ch: char| ch.is_ascii_digit()) {
            let row = parse_coord(first)?;
            let col = parse_coord(words.next().ok_or(CommandError::MissingCol)?)?;
            return Ok(Command::Press((row, col)));
        }

        Ok(match first.to_ascii_lowercase().as_str() {
            "h" | "hint" => Command::Hint,
            "solve" => Command::Solve,
            "r" | "restart" => Command::Restart,
            "n" | "new" => Command::New,
            "s" | "show" => Command::Show,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(first.to_string())),
        })
    }
}
