//! Validation against the bs58 crate.
//!
//! bs58 is an independent implementation with its own digit loop, so
//! byte-identical agreement over fixed and seeded corpora is strong
//! evidence both are right.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn encode_matches_bs58_crate() {
    let test_cases: &[&[u8]] = &[
        b"",
        b"a",
        b"abc",
        b"Hello World!",
        &[0],
        &[0, 0, 0],
        &[0, 0, 0, 1, 2, 3],
        &[0xff; 32],
        &[0x00, 0xff, 0x00, 0xff],
    ];

    for data in test_cases {
        let our_result = fast58::encode(data);
        let ref_result = bs58::encode(data).into_string();
        assert_eq!(our_result, ref_result, "mismatch for data {:?}", data);
    }
}

#[test]
fn decode_matches_bs58_crate() {
    let test_cases = ["", "1", "11", "2g", "a3gV", "JxF12TrwUP45BMd", "3SEo3LWLoPntC"];

    for text in test_cases {
        let our_result = fast58::decode(text).unwrap();
        let ref_result = bs58::decode(text).into_vec().unwrap();
        assert_eq!(our_result, ref_result, "mismatch for text {text:?}");
    }
}

#[test]
fn seeded_corpus_agrees_both_ways() {
    let mut rng = ChaCha20Rng::seed_from_u64(58);
    for len in 0..=80usize {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let ours = fast58::encode(&data);
        let reference = bs58::encode(&data).into_string();
        assert_eq!(ours, reference, "encode mismatch for {len} bytes");
        assert_eq!(
            fast58::decode(&ours).unwrap(),
            bs58::decode(&ours).into_vec().unwrap(),
            "decode mismatch for {len} bytes"
        );
    }
}

#[test]
fn invalid_character_position_matches_bs58() {
    for text in ["0", "2O", "2I", "22l", "111O", "x{", "a b", "ab\n"] {
        let ours = fast58::decode(text).unwrap_err();
        match bs58::decode(text).into_vec() {
            Err(bs58::decode::Error::InvalidCharacter { index, .. }) => {
                assert_eq!(
                    ours,
                    fast58::DecodeError::InvalidChar(index),
                    "position mismatch for text {text:?}"
                );
            }
            other => panic!("bs58 did not flag {text:?}: {other:?}"),
        }
    }
}
