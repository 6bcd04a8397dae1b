//! Base-62 short-link codec.
//!
//! Provides a reversible, stateless mapping between a recipe's numeric id
//! and a compact token embedded in share links. No lookup table is involved:
//! the token is re-derived on every request.

use thiserror::Error;

/// The 62-symbol alphabet: digits, then lowercase, then uppercase.
///
/// Symbol order defines digit values 0–61, so changing it would invalidate
/// every link in the wild.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric base of the token alphabet.
const BASE: i64 = ALPHABET.len() as i64;

/// Token rejected by [`decode_code`].
///
/// Callers treat any variant as "link not found"; a rejected token is never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTokenError {
    /// A character of the token is outside the 62-symbol alphabet.
    #[error("token contains character {0:?} outside the base-62 alphabet")]
    BadCharacter(char),
    /// The token's value does not fit into a 64-bit identifier.
    #[error("token value exceeds the 64-bit identifier range")]
    Overflow,
}

/// Encodes a recipe id as a base-62 token.
///
/// Repeated divide-by-62, most significant symbol first, no padding — the
/// shortest possible representation.
///
/// Non-positive ids return the reserved sentinel token `"0"`. Recipe ids
/// start at 1, so `"0"` never resolves to a real recipe and the sentinel
/// does not round-trip.
///
/// # Examples
///
/// ```
/// use recipebook::utils::shortlink::encode_id;
///
/// assert_eq!(encode_id(1), "1");
/// assert_eq!(encode_id(61), "Z");
/// assert_eq!(encode_id(62), "10");
/// ```
pub fn encode_id(id: i64) -> String {
    if id <= 0 {
        return "0".to_string();
    }

    let mut num = id;
    let mut buf = Vec::new();
    while num > 0 {
        buf.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }
    buf.reverse();

    // buf holds alphabet bytes only, always valid UTF-8
    String::from_utf8(buf).expect("base-62 alphabet is ASCII")
}

/// Decodes a base-62 token back into a recipe id.
///
/// Positional evaluation left to right: `acc = acc * 62 + digit`.
///
/// # Errors
///
/// Returns [`InvalidTokenError::BadCharacter`] when any character is not in
/// the alphabet (comparison is case-sensitive: `a` and `A` are distinct
/// digits) and [`InvalidTokenError::Overflow`] when the value does not fit
/// into an `i64` — such a token cannot name a stored recipe.
pub fn decode_code(code: &str) -> Result<i64, InvalidTokenError> {
    let mut num: i64 = 0;
    for ch in code.chars() {
        let digit = digit_value(ch)?;
        num = num
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(digit))
            .ok_or(InvalidTokenError::Overflow)?;
    }
    Ok(num)
}

/// Maps an alphabet symbol to its numeric value 0–61.
fn digit_value(ch: char) -> Result<i64, InvalidTokenError> {
    match ch {
        '0'..='9' => Ok(ch as i64 - '0' as i64),
        'a'..='z' => Ok(ch as i64 - 'a' as i64 + 10),
        'A'..='Z' => Ok(ch as i64 - 'A' as i64 + 36),
        _ => Err(InvalidTokenError::BadCharacter(ch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(encode_id(1), "1");
        assert_eq!(encode_id(9), "9");
        assert_eq!(encode_id(10), "a");
        assert_eq!(encode_id(35), "z");
        assert_eq!(encode_id(36), "A");
        assert_eq!(encode_id(61), "Z");
        assert_eq!(encode_id(62), "10");
        assert_eq!(encode_id(3843), "ZZ");
        assert_eq!(encode_id(3844), "100");
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode_code("1"), Ok(1));
        assert_eq!(decode_code("Z"), Ok(61));
        assert_eq!(decode_code("10"), Ok(62));
        assert_eq!(decode_code("100"), Ok(3844));
    }

    #[test]
    fn test_round_trip_small_range() {
        for id in 1..=100_000 {
            let token = encode_id(id);
            assert_eq!(decode_code(&token), Ok(id), "id {id} did not round-trip");
        }
    }

    #[test]
    fn test_round_trip_large_values() {
        for id in [
            1_000_000,
            10_000_000,
            4_000_000_000,
            i64::MAX / 62,
            i64::MAX - 1,
            i64::MAX,
        ] {
            let token = encode_id(id);
            assert_eq!(decode_code(&token), Ok(id));
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode_id(123_456), encode_id(123_456));
    }

    #[test]
    fn test_alphabet_closure() {
        for id in [1, 61, 62, 4095, 999_999_999] {
            let token = encode_id(id);
            assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_case_sensitivity() {
        assert_ne!(decode_code("a").unwrap(), decode_code("A").unwrap());
        assert_eq!(decode_code("a"), Ok(10));
        assert_eq!(decode_code("A"), Ok(36));
    }

    #[test]
    fn test_decode_rejects_bad_characters() {
        assert_eq!(
            decode_code("foo!bar"),
            Err(InvalidTokenError::BadCharacter('!'))
        );
        assert!(decode_code("abc-def").is_err());
        assert!(decode_code("with space").is_err());
        assert!(decode_code("кириллица").is_err());
    }

    #[test]
    fn test_decode_rejects_overflowing_token() {
        // 12 'Z's exceed i64::MAX
        assert_eq!(
            decode_code("ZZZZZZZZZZZZ"),
            Err(InvalidTokenError::Overflow)
        );
    }

    #[test]
    fn test_sentinel_for_non_positive_ids() {
        assert_eq!(encode_id(0), "0");
        assert_eq!(encode_id(-5), "0");
        // The sentinel decodes to 0, which no recipe ever has.
        assert_eq!(decode_code("0"), Ok(0));
    }

    #[test]
    fn test_empty_token_decodes_to_zero() {
        // Routing never yields an empty path segment; decoding one is the
        // empty positional sum, which resolves to no recipe.
        assert_eq!(decode_code(""), Ok(0));
    }
}
