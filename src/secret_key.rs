use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::constants::{SECRET_KEY_CHARS, SECRET_KEY_LEN};

/// Fresh 50-character secret key suitable for signing web sessions.
pub fn generate_secret_key() -> String {
    generate_secret_key_with(&mut OsRng)
}

pub fn generate_secret_key_with<R>(rng: &mut R) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    (0..SECRET_KEY_LEN)
        .map(|_| SECRET_KEY_CHARS[rng.gen_range(0..SECRET_KEY_CHARS.len())] as char)
        .collect()
}
