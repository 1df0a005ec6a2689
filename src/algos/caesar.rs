use crate::algos::Mode;
use crate::error::Result;
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{invert_shift, normalize_shift, rotate_letter};

/// Shifts every ASCII letter by `shift` places, keeping its case.
///
/// Shifts of any size or sign are reduced modulo 26. Decrypting applies the
/// opposite shift. Non-letters are copied through as they are.
pub fn caesar_cipher(text: &str, shift: i64, mode: Mode) -> String {
    let shift = normalize_shift(shift);
    let shift = match mode {
        Mode::Encrypt => shift,
        Mode::Decrypt => invert_shift(shift),
    };

    text.chars().map(|c| rotate_letter(c, shift)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    pub shift: i64,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> Result<String> {
        Ok(caesar_cipher(message, self.shift, Mode::Encrypt))
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> Result<String> {
        Ok(caesar_cipher(message, self.shift, Mode::Decrypt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Cipher;

    const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. 0123456789 !?@[]{}~";

    #[test]
    fn encrypts_uppercase() {
        assert_eq!(caesar_cipher("HELLO", 3, Mode::Encrypt), "KHOOR");
    }

    #[test]
    fn encrypts_lowercase() {
        assert_eq!(caesar_cipher("hello", 3, Mode::Encrypt), "khoor");
    }

    #[test]
    fn decrypts_uppercase() {
        assert_eq!(caesar_cipher("KHOOR", 3, Mode::Decrypt), "HELLO");
    }

    #[test]
    fn decrypts_lowercase() {
        assert_eq!(caesar_cipher("khoor", 3, Mode::Decrypt), "hello");
    }

    #[test]
    fn keeps_punctuation_in_place() {
        assert_eq!(
            caesar_cipher("Hello, World!", 3, Mode::Encrypt),
            "Khoor, Zruog!"
        );
        assert_eq!(
            caesar_cipher("Khoor, Zruog!", 3, Mode::Decrypt),
            "Hello, World!"
        );
    }

    #[test]
    fn large_shift_wraps() {
        assert_eq!(caesar_cipher("HELLO", 30, Mode::Encrypt), "LIPPS");
        assert_eq!(caesar_cipher("LIPPS", 30, Mode::Decrypt), "HELLO");
    }

    #[test]
    fn negative_shift() {
        assert_eq!(caesar_cipher("HELLO", -3, Mode::Encrypt), "EBIIL");
        assert_eq!(caesar_cipher("EBIIL", -3, Mode::Decrypt), "HELLO");
    }

    #[test]
    fn empty_text() {
        assert_eq!(caesar_cipher("", 3, Mode::Encrypt), "");
        assert_eq!(caesar_cipher("", 3, Mode::Decrypt), "");
    }

    #[test]
    fn zero_shift_is_identity() {
        assert_eq!(caesar_cipher("HELLO", 0, Mode::Encrypt), "HELLO");
        assert_eq!(caesar_cipher("HELLO", 0, Mode::Decrypt), "HELLO");
    }

    #[test]
    fn round_trip_for_many_shifts() {
        for shift in [-1000, -53, -26, -25, -1, 0, 1, 13, 25, 26, 27, 999, i64::MIN, i64::MAX] {
            let encrypted = caesar_cipher(SAMPLE, shift, Mode::Encrypt);
            assert_eq!(caesar_cipher(&encrypted, shift, Mode::Decrypt), SAMPLE);
        }
    }

    #[test]
    fn shifts_differing_by_26_agree() {
        for shift in -30..30 {
            let expected = caesar_cipher(SAMPLE, shift, Mode::Encrypt);
            assert_eq!(caesar_cipher(SAMPLE, shift + 26, Mode::Encrypt), expected);
            assert_eq!(caesar_cipher(SAMPLE, shift - 26, Mode::Encrypt), expected);
        }
    }

    #[test]
    fn preserves_structure() {
        let text = "Grüße, 世界! abc-XYZ";
        let out = caesar_cipher(text, 11, Mode::Encrypt);

        assert_eq!(out.chars().count(), text.chars().count());
        for (before, after) in text.chars().zip(out.chars()) {
            if !before.is_ascii_alphabetic() {
                assert_eq!(before, after);
            } else {
                assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn trait_dispatch_matches_function() {
        let cipher = Caesar::new(3);
        assert_eq!(cipher.apply("HELLO", Mode::Encrypt).unwrap(), "KHOOR");
        assert_eq!(cipher.apply("KHOOR", Mode::Decrypt).unwrap(), "HELLO");
    }
}
