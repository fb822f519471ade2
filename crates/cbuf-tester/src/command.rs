use std::io::{self, Write};
use std::str::FromStr;

use cbuf_common::{Empty, RingBuffer};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  put <int>   insert a value at the tail
  get         remove the value at the head
  count       print the number of stored values
  peek        print the oldest and newest values without removing them
  list        print the stored values, oldest first
  dump        print every slot and both cursors
  help        print this message
  quit        leave the console";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Put(i32),
    Get,
    Count,
    Peek,
    List,
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`put` needs a value")]
    MissingValue,
    #[error("invalid value `{0}`, expected a 32-bit integer")]
    InvalidValue(String),
    #[error("unexpected argument `{0}`")]
    TrailingArgument(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Accepts `put 5` as well as `put:5`, so operations can be given as
    /// single command line arguments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(|c: char| c.is_whitespace() || c == ':').filter(|p| !p.is_empty());
        let name = parts.next().ok_or(ParseCommandError::Empty)?;

        let cmd = match name.to_ascii_lowercase().as_str() {
            "put" => {
                let value = parts.next().ok_or(ParseCommandError::MissingValue)?;
                let value = value.parse().map_err(|_| ParseCommandError::InvalidValue(value.to_string()))?;
                Command::Put(value)
            }
            "get" => Command::Get,
            "count" => Command::Count,
            "peek" => Command::Peek,
            "list" => Command::List,
            "dump" => Command::Dump,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(ParseCommandError::TrailingArgument(extra.to_string())),
            None => Ok(cmd),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Applies `cmd` to `rb` and prints its result to `out`. A full or empty
/// buffer is reported like any other result.
pub fn execute<W: Write>(rb: &mut RingBuffer, cmd: Command, out: &mut W) -> io::Result<Outcome> {
    match cmd {
        Command::Put(value) => match rb.insert(value) {
            Ok(()) => writeln!(out, "put({})", value)?,
            Err(e) => writeln!(out, "put({}): {}", value, e)?,
        },
        Command::Get => match rb.remove() {
            Ok(value) => writeln!(out, "get() -> {}", value)?,
            Err(e) => writeln!(out, "get(): {}", e)?,
        },
        Command::Count => writeln!(out, "count: {}", rb.occupancy())?,
        Command::Peek => match (rb.peek_first(), rb.peek_last()) {
            (Some(first), Some(last)) => writeln!(out, "peek: first {}, last {}", first, last)?,
            _ => writeln!(out, "peek: {}", Empty)?,
        },
        Command::List => {
            let values: Vec<String> = rb.iter().map(i32::to_string).collect();
            writeln!(out, "list: [{}]", values.join(", "))?
        }
        Command::Dump => writeln!(out, "{}", rb.snapshot())?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}
