use crate::algos::Mode;
use crate::error::{Error, Result};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{invert_shift, letter_index, rotate_letter};

/// Polyalphabetic cipher keyed by a word of ASCII letters.
///
/// The key is cycled by character position. Every text character consumes a
/// key position, including spaces and punctuation, even though only letters
/// are shifted. So `"Hello, World!"` under `"key"` becomes `"Rijvs, Ambpb!"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Fails with [`Error::InvalidKey`] for an empty key or one containing
    /// anything but `A-Z` / `a-z`. Key case does not matter.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key must not be empty".to_string()));
        }

        let shifts = key
            .chars()
            .map(|c| {
                letter_index(c)
                    .ok_or_else(|| Error::InvalidKey(format!("'{}' is not an ASCII letter", c)))
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Vigenere { shifts })
    }

    fn transform(&self, text: &str, mode: Mode) -> String {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let shift = self.shifts[i % self.shifts.len()];
                let shift = match mode {
                    Mode::Encrypt => shift,
                    Mode::Decrypt => invert_shift(shift),
                };
                rotate_letter(c, shift)
            })
            .collect()
    }
}

impl Encryptor for Vigenere {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(self.transform(message, Mode::Encrypt))
    }
}

impl Decryptor for Vigenere {
    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(self.transform(message, Mode::Decrypt))
    }
}

pub fn vigenere_cipher(text: &str, key: &str, mode: Mode) -> Result<String> {
    Ok(Vigenere::new(key)?.transform(text, mode))
}
