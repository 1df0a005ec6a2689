//! JSON messages exchanged over the WebSocket.
//!
//! Every frame is one object tagged by `"type"`. Request fields that the
//! server can default are optional here; validation happens in
//! [`crate::handler`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer field that also accepts its decimal string form, e.g. `3` or `"3"`.
///
/// Any other JSON value lands in `Other` so the handler can report the
/// offending field instead of failing the whole frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl IntOrText {
    pub fn to_i64(&self) -> Result<i64, String> {
        match self {
            IntOrText::Int(value) => Ok(*value),
            IntOrText::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid integer literal '{}': {}", raw, e)),
            IntOrText::Other(value) => Err(format!("expected an integer, got {}", value)),
        }
    }
}

impl From<i64> for IntOrText {
    fn from(value: i64) -> Self {
        IntOrText::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    CaesarCipher {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shift: Option<IntOrText>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
    },
    VigenereCipher {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
    },
    SecureRandomNumbers {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<IntOrText>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<IntOrText>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<IntOrText>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unique: Option<bool>,
    },
    GenerateSecretKey,
}

impl ClientMessage {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::CaesarCipher { .. } => "caesar_cipher",
            ClientMessage::VigenereCipher { .. } => "vigenere_cipher",
            ClientMessage::SecureRandomNumbers { .. } => "secure_random_numbers",
            ClientMessage::GenerateSecretKey => "generate_secret_key",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Result { result: String },
    RandomNumbers { random_numbers: Vec<i64> },
    SecretKey { key: String },
    Error { error: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ServerMessage::Error { .. })
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::Result { result } => f.write_str(result),
            ServerMessage::RandomNumbers { random_numbers } => {
                let joined = random_numbers
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", joined)
            }
            ServerMessage::SecretKey { key } => f.write_str(key),
            ServerMessage::Error { error } => write!(f, "error: {}", error),
        }
    }
}
