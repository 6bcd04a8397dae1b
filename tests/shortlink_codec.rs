//! Round-trip and rejection properties of the base-62 short-link codec.

use recipebook::utils::shortlink::{InvalidTokenError, decode_code, encode_id};

#[test]
fn round_trip_dense_range() {
    for id in 1..=1_000_000_i64 {
        let token = encode_id(id);
        assert_eq!(decode_code(&token), Ok(id), "id {id} did not round-trip");
    }
}

#[test]
fn round_trip_sampled_up_to_ten_million() {
    let mut id = 1_000_000_i64;
    while id <= 10_000_000 {
        let token = encode_id(id);
        assert_eq!(decode_code(&token), Ok(id), "id {id} did not round-trip");
        id += 97;
    }
}

#[test]
fn encode_is_deterministic() {
    for id in [1_i64, 42, 61, 62, 4096, 10_000_000] {
        assert_eq!(encode_id(id), encode_id(id));
    }
}

#[test]
fn tokens_stay_inside_the_alphabet() {
    let alphabet: Vec<char> = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();

    for id in (1..=100_000_i64).step_by(331) {
        let token = encode_id(id);
        assert!(
            token.chars().all(|c| alphabet.contains(&c)),
            "token {token:?} for id {id} left the alphabet"
        );
    }
}

#[test]
fn known_values() {
    assert_eq!(encode_id(1), "1");
    assert_eq!(encode_id(61), "Z");
    assert_eq!(encode_id(62), "10");
    assert_eq!(decode_code("10"), Ok(62));
}

#[test]
fn invalid_token_is_rejected() {
    assert_eq!(
        decode_code("foo!bar"),
        Err(InvalidTokenError::BadCharacter('!'))
    );
}

#[test]
fn token_length_grows_logarithmically() {
    assert_eq!(encode_id(61).len(), 1);
    assert_eq!(encode_id(62).len(), 2);
    assert_eq!(encode_id(62 * 62 - 1).len(), 2);
    assert_eq!(encode_id(62 * 62).len(), 3);
}
