use thiserror::Error;

/// Failures raised by the cipher and sampling primitives.
///
/// All of them describe invalid input. None are transient, so callers
/// should report them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Mode string was neither `encrypt` nor `decrypt`.
    #[error("Invalid mode '{0}', expected 'encrypt' or 'decrypt'")]
    InvalidMode(String),

    /// Vigenère key was empty or contained something other than ASCII letters.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Sampling bounds or count cannot be satisfied.
    #[error("{0}")]
    Range(String),
}

pub type Result<T> = std::result::Result<T, Error>;
