//! Small shared utilities

use chrono::{SecondsFormat, Utc};
use rand::Rng;

/// Alphabet for order tokens (uppercase alphanumeric)
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the human-facing order token
const TOKEN_LEN: usize = 5;

/// Generate a short order reference token, e.g. `"K7Q2M"`.
///
/// Not unique by construction, only collision-unlikely: the backend treats
/// it as a human-facing reference, not a primary key. A fresh token is
/// generated per checkout attempt.
pub fn order_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Current UTC time as an ISO-8601 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
