//! Line commands typed into the interactive client.

use thiserror::Error;

use crate::algos::Mode;
use crate::error::Error;
use crate::protocol::{ClientMessage, IntOrText};

pub const USAGE: &str = "\
commands:
  caesar <encrypt|decrypt> <shift> <text...>
  vigenere <encrypt|decrypt> <key> <text...>
  random <min> <max> [count] [unique|repeat]
  secret";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error(transparent)]
    Mode(#[from] Error),
}

/// Splits off the first whitespace-separated token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

fn parse_int(token: &str) -> Result<i64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::NotAnInteger(token.to_string()))
}

/// Parses `caesar`/`vigenere` arguments: mode, one parameter, then free text.
fn cipher_args<'a>(
    rest: &'a str,
    usage: &'static str,
) -> Result<(Mode, &'a str, String), CommandError> {
    let (mode, rest) = next_token(rest).ok_or(CommandError::Usage(usage))?;
    let (param, rest) = next_token(rest).ok_or(CommandError::Usage(usage))?;
    let text = rest.trim_start();
    if text.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    Ok((mode.parse()?, param, text.to_string()))
}

pub fn parse_command(line: &str) -> Result<ClientMessage, CommandError> {
    let (name, rest) = next_token(line).ok_or(CommandError::Empty)?;

    match name {
        "caesar" => {
            let usage = "caesar <encrypt|decrypt> <shift> <text...>";
            let (mode, shift, text) = cipher_args(rest, usage)?;
            Ok(ClientMessage::CaesarCipher {
                text,
                shift: Some(IntOrText::Int(parse_int(shift)?)),
                mode: Some(mode.to_string()),
            })
        }
        "vigenere" => {
            let usage = "vigenere <encrypt|decrypt> <key> <text...>";
            let (mode, key, text) = cipher_args(rest, usage)?;
            Ok(ClientMessage::VigenereCipher {
                text,
                key: Some(key.to_string()),
                mode: Some(mode.to_string()),
            })
        }
        "random" => {
            let usage = "random <min> <max> [count] [unique|repeat]";
            let args: Vec<&str> = rest.split_whitespace().collect();
            if !(2..=4).contains(&args.len()) {
                return Err(CommandError::Usage(usage));
            }
            let count = args.get(2).map(|c| parse_int(c)).transpose()?;
            let unique = match args.get(3) {
                None => None,
                Some(&"unique") => Some(true),
                Some(&"repeat") => Some(false),
                Some(_) => return Err(CommandError::Usage(usage)),
            };
            Ok(ClientMessage::SecureRandomNumbers {
                min_value: Some(IntOrText::Int(parse_int(args[0])?)),
                max_value: Some(IntOrText::Int(parse_int(args[1])?)),
                count: count.map(IntOrText::Int),
                unique,
            })
        }
        "secret" => Ok(ClientMessage::GenerateSecretKey),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
