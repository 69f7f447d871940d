//! Parsing of console input lines into commands.
//!
//! Commands are case-sensitive. The first whitespace-delimited token names
//! the command and the remainder is its argument:
//!
//! - `GET name` / `GET *`
//! - `SET name=value` (split on the first `=`)
//! - `DEFINE name kind`
//! - `DELETE name`
//! - `COUNT`, `HELP`, `EXIT`

use propstore_types::PrimitiveKind;
use thiserror::Error;

/// What a `GET` reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    All,
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Get(Target),
    Set { name: String, value: String },
    Define { name: String, kind: PrimitiveKind },
    Delete(String),
    Count,
    Help,
    Exit,
    /// A blank line.
    Empty,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A known command with missing or malformed arguments.
    #[error("Wrong syntax.")]
    WrongSyntax,
    /// `DEFINE` with a kind name that is not supported.
    #[error("Unknown property type: {0}.")]
    UnknownKind(String),
    /// The first token is not a command.
    #[error("Unknown command.")]
    UnknownCommand(String),
}

/// Split `line` into the command token and the untrimmed remainder.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], &line[idx..]),
        None => (line, ""),
    }
}

/// Split `text` on the first `=` into a trimmed name and the raw value.
///
/// Without a `=` the whole text is the name and the value is empty.
pub fn split_assignment(text: &str) -> (&str, &str) {
    match text.split_once('=') {
        Some((name, value)) => (name.trim(), value),
        None => (text.trim(), ""),
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let (name, rest) = split_command(line);
        let arg = rest.trim();

        match name {
            "" => Ok(Self::Empty),
            "GET" => match arg {
                "" => Err(ParseError::WrongSyntax),
                "*" => Ok(Self::Get(Target::All)),
                name => Ok(Self::Get(Target::Name(name.to_string()))),
            },
            "SET" => {
                let (name, value) = split_assignment(rest);
                if name.is_empty() || value.trim().is_empty() {
                    return Err(ParseError::WrongSyntax);
                }
                Ok(Self::Set {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
            "DEFINE" => {
                let mut tokens = arg.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(name), Some(kind), None) => {
                        let kind = kind
                            .parse::<PrimitiveKind>()
                            .map_err(|_| ParseError::UnknownKind(kind.to_string()))?;
                        Ok(Self::Define {
                            name: name.to_string(),
                            kind,
                        })
                    }
                    _ => Err(ParseError::WrongSyntax),
                }
            }
            "DELETE" => match arg {
                "" => Err(ParseError::WrongSyntax),
                name => Ok(Self::Delete(name.to_string())),
            },
            "COUNT" => Ok(Self::Count),
            "HELP" => Ok(Self::Help),
            "EXIT" => Ok(Self::Exit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}
