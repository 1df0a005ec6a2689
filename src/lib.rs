//! Classical ciphers and secure random utilities, served over WebSocket.

pub mod algos;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod logging;
pub mod protocol;
pub mod random;
pub mod secret_key;
pub mod service;
pub mod traits;
pub mod utils;

pub use algos::caesar::{caesar_cipher, Caesar};
pub use algos::vigenere::{vigenere_cipher, Vigenere};
pub use algos::Mode;
pub use error::{Error, Result};
pub use random::{generate_random_numbers, generate_random_numbers_with, SampleRequest};
pub use secret_key::generate_secret_key;
