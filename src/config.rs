use std::path::Path;
use std::str::FromStr;

use crate::constants::{DEFAULT_BIND_ADDR, MAX_SAMPLE_COUNT, MAX_TEXT_BYTES};

pub const BIND_ADDR_VAR: &str = "TOOLBOX_BIND_ADDR";
pub const MAX_TEXT_BYTES_VAR: &str = "TOOLBOX_MAX_TEXT_BYTES";
pub const MAX_SAMPLE_COUNT_VAR: &str = "TOOLBOX_MAX_SAMPLE_COUNT";

/// Caller-side input limits applied before any utility runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_text_bytes: usize,
    pub max_sample_count: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_text_bytes: MAX_TEXT_BYTES,
            max_sample_count: MAX_SAMPLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub limits: Limits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            limits: Limits::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: std::env::var(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr),
            limits: Limits {
                max_text_bytes: env_or(MAX_TEXT_BYTES_VAR, defaults.limits.max_text_bytes),
                max_sample_count: env_or(MAX_SAMPLE_COUNT_VAR, defaults.limits.max_sample_count),
            },
        }
    }
}

/// Loads `.env.local` then `.env` from the working directory, if present.
///
/// Variables already set in the environment win over both files.
pub fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let path = Path::new(filename);
        if path.exists() {
            load_env_file(path);
        }
    }
}

/// Returns whether the file was applied; a broken file is logged and skipped.
fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "Failed to load env file");
            false
        }
    }
}

fn env_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(variable = name, value = %raw, "Unparsable setting, using default");
                default
            }
        },
        Err(_) => default,
    }
}
