pub const ALPHABET_LEN: u8 = 26;

pub const DEFAULT_SHIFT: i64 = 3;
pub const DEFAULT_SAMPLE_COUNT: i64 = 1;
pub const DEFAULT_UNIQUE: bool = true;

pub const MAX_TEXT_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_SAMPLE_COUNT: usize = 1000;

pub const SECRET_KEY_LEN: usize = 50;
pub const SECRET_KEY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*(-_=+)";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8080";
