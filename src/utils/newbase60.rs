//! NewBase60 codec
//!
//! A radix-60 numeral system using digits, letters and underscore while
//! leaving out characters that are easily confused (`I`, `O` and `l`).
//! Used to render epoch day counts as short strings such as `3eA`.

use crate::error::CodecError;

/// Digit alphabet, indexed by digit value
pub const ALPHABET: &[u8; 60] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZ_abcdefghijkmnopqrstuvwxyz";

const RADIX: u64 = 60;

/// Encode a non-negative integer.
#[must_use]
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % RADIX) as usize]);
        n /= RADIX;
    }
    digits.reverse();

    // The alphabet is plain ASCII
    digits.into_iter().map(char::from).collect()
}

/// Decode a NewBase60 string.
///
/// The typos `I`/`l` (for `1`) and `O` (for `0`) are corrected; any other
/// character outside the alphabet is rejected.
pub fn decode(s: &str) -> Result<u64, CodecError> {
    if s.is_empty() {
        return Err(CodecError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |acc, (position, c)| {
        let digit = digit_value(c).ok_or(CodecError::InvalidDigit { digit: c, position })?;
        acc.checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or(CodecError::Overflow)
    })
}

/// Value of a single digit, with typo correction
fn digit_value(c: char) -> Option<u64> {
    let v = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'A'..='H' => c as u64 - 'A' as u64 + 10,
        'I' | 'l' => 1,
        'J'..='N' => c as u64 - 'J' as u64 + 18,
        'O' => 0,
        'P'..='Z' => c as u64 - 'P' as u64 + 23,
        '_' => 34,
        'a'..='k' => c as u64 - 'a' as u64 + 35,
        'm'..='z' => c as u64 - 'm' as u64 + 46,
        _ => return None,
    };
    Some(v)
}
