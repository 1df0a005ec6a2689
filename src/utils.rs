use crate::constants::ALPHABET_LEN;

/// Reduces any shift, however large or negative, to `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid keeps the result non-negative and never overflows on i64::MIN.
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// The shift that undoes `shift`.
pub fn invert_shift(shift: u8) -> u8 {
    (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

/// Rotates an ASCII letter `shift` places within its own case.
///
/// `shift` is expected in `0..26`. Anything other than `A-Z` / `a-z` comes
/// back unchanged.
pub fn rotate_letter(c: char, shift: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    (((c as u8 - base + shift % ALPHABET_LEN) % ALPHABET_LEN) + base) as char
}

/// Alphabet position of an ASCII letter, ignoring case.
pub fn letter_index(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_uppercase() as u8 - b'A')
}
