//! Turns decoded requests into responses.
//!
//! This is the caller layer in front of the pure utilities: it fills in
//! defaults, enforces the configured limits and maps every failure to a
//! stable, user-facing message.

use thiserror::Error;

use crate::algos::caesar::caesar_cipher;
use crate::algos::vigenere::vigenere_cipher;
use crate::algos::Mode;
use crate::config::Limits;
use crate::constants::{DEFAULT_SAMPLE_COUNT, DEFAULT_SHIFT, DEFAULT_UNIQUE};
use crate::error::Error;
use crate::protocol::{ClientMessage, IntOrText, ServerMessage};
use crate::random::{generate_random_numbers, SampleRequest};
use crate::secret_key::generate_secret_key;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Text is too large.")]
    TextTooLarge,

    #[error("Wrong shift type! {0}")]
    WrongShiftType(String),

    #[error("Key is required.")]
    MissingKey,

    #[error("min_value and max_value are required.")]
    MissingBounds,

    #[error("min_value and max_value must be integers.")]
    InvalidBounds,

    #[error("count must be an integer.")]
    InvalidCount,

    #[error("count cannot be less or equal 0")]
    CountTooSmall,

    #[error("count cannot be more than {0}")]
    CountTooLarge(usize),

    #[error(transparent)]
    Core(#[from] Error),
}

/// Decodes one JSON frame and answers it.
pub fn handle_text(limits: &Limits, raw: &str) -> ServerMessage {
    match serde_json::from_str::<ClientMessage>(raw) {
        Ok(message) => handle_message(limits, message),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected malformed request");
            ServerMessage::error(RequestError::Malformed(e.to_string()).to_string())
        }
    }
}

pub fn handle_message(limits: &Limits, message: ClientMessage) -> ServerMessage {
    let kind = message.kind();
    match dispatch(limits, message) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(request = kind, error = %e, "Request failed");
            ServerMessage::error(e.to_string())
        }
    }
}

fn dispatch(limits: &Limits, message: ClientMessage) -> Result<ServerMessage, RequestError> {
    match message {
        ClientMessage::CaesarCipher { text, shift, mode } => {
            check_text_size(limits, &text)?;
            let shift = match shift {
                Some(value) => value.to_i64().map_err(RequestError::WrongShiftType)?,
                None => DEFAULT_SHIFT,
            };
            let mode = parse_mode(mode.as_deref())?;

            Ok(ServerMessage::Result {
                result: caesar_cipher(&text, shift, mode),
            })
        }
        ClientMessage::VigenereCipher { text, key, mode } => {
            check_text_size(limits, &text)?;
            let key = key
                .filter(|k| !k.is_empty())
                .ok_or(RequestError::MissingKey)?;
            let mode = parse_mode(mode.as_deref())?;

            Ok(ServerMessage::Result {
                result: vigenere_cipher(&text, &key, mode)?,
            })
        }
        ClientMessage::SecureRandomNumbers {
            min_value,
            max_value,
            count,
            unique,
        } => {
            let request = sample_request(limits, min_value, max_value, count, unique)?;
            Ok(ServerMessage::RandomNumbers {
                random_numbers: generate_random_numbers(&request)?,
            })
        }
        ClientMessage::GenerateSecretKey => Ok(ServerMessage::SecretKey {
            key: generate_secret_key(),
        }),
    }
}

fn check_text_size(limits: &Limits, text: &str) -> Result<(), RequestError> {
    if text.len() > limits.max_text_bytes {
        return Err(RequestError::TextTooLarge);
    }
    Ok(())
}

fn parse_mode(mode: Option<&str>) -> Result<Mode, RequestError> {
    Ok(mode.map(str::parse::<Mode>).transpose()?.unwrap_or_default())
}

fn sample_request(
    limits: &Limits,
    min_value: Option<IntOrText>,
    max_value: Option<IntOrText>,
    count: Option<IntOrText>,
    unique: Option<bool>,
) -> Result<SampleRequest, RequestError> {
    let (Some(min_value), Some(max_value)) = (min_value, max_value) else {
        return Err(RequestError::MissingBounds);
    };
    let min_value = min_value.to_i64().map_err(|_| RequestError::InvalidBounds)?;
    let max_value = max_value.to_i64().map_err(|_| RequestError::InvalidBounds)?;

    let count = match count {
        Some(value) => value.to_i64().map_err(|_| RequestError::InvalidCount)?,
        None => DEFAULT_SAMPLE_COUNT,
    };
    if count <= 0 {
        return Err(RequestError::CountTooSmall);
    }
    let count = usize::try_from(count)
        .map_err(|_| RequestError::CountTooLarge(limits.max_sample_count))?;
    if count > limits.max_sample_count {
        return Err(RequestError::CountTooLarge(limits.max_sample_count));
    }

    Ok(SampleRequest::new(min_value, max_value)
        .count(count)
        .unique(unique.unwrap_or(DEFAULT_UNIQUE)))
}
