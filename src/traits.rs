use crate::algos::Mode;
use crate::error::Result;

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &str) -> Result<String>;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &str) -> Result<String>;
}

/// Anything that can both encrypt and decrypt, driven by a [`Mode`].
pub trait Cipher: Encryptor + Decryptor {
    fn apply(&self, message: &str, mode: Mode) -> Result<String> {
        match mode {
            Mode::Encrypt => self.encrypt(message),
            Mode::Decrypt => self.decrypt(message),
        }
    }
}

impl<T: Encryptor + Decryptor> Cipher for T {}
