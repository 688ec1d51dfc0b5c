// Copyright (c) 2018-2022 The Botho Foundation

//! Positional encoding between byte strings and recovery phrases.
//!
//! A phrase is read as a little-endian number in bijective base 1626 (one
//! digit per word), and that number is written out as a little-endian byte
//! string in bijective base 256. Bijective numerals have no zero digit, so
//! every byte string has exactly one phrase and every phrase exactly one byte
//! string.

use crate::dictionary::{self, DICTIONARY_SIZE};
use displaydoc::Display;
use primitive_types::U512;
use thiserror::Error;
use zeroize::Zeroizing;

const BYTE_BASE: u64 = 256;

/// Errors from the positional codec.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum PhraseError {
    /// Input is empty
    EmptyInput,

    /// Word {0:?} does not match any dictionary prefix
    UnknownWord(String),

    /// Input encodes a value too large to convert
    Overflow,
}

/// Decode a whitespace separated phrase into its byte string.
pub fn phrase_to_bytes(phrase: &str) -> Result<Zeroizing<Vec<u8>>, PhraseError> {
    let digits = Zeroizing::new(
        phrase
            .split_whitespace()
            .map(|word| {
                dictionary::prefix_index(word)
                    .map(|index| index as u64 + 1)
                    .ok_or_else(|| PhraseError::UnknownWord(word.to_string()))
            })
            .collect::<Result<Vec<u64>, _>>()?,
    );
    if digits.is_empty() {
        return Err(PhraseError::EmptyInput);
    }

    let value = from_bijective(&digits, DICTIONARY_SIZE as u64)?;
    let bytes = to_bijective(value, BYTE_BASE)
        .into_iter()
        .map(|digit| (digit - 1) as u8)
        .collect();
    Ok(Zeroizing::new(bytes))
}

/// Encode a byte string as a phrase of dictionary words separated by single
/// spaces.
pub fn bytes_to_phrase(bytes: &[u8]) -> Result<Zeroizing<String>, PhraseError> {
    if bytes.is_empty() {
        return Err(PhraseError::EmptyInput);
    }

    let digits: Zeroizing<Vec<u64>> =
        Zeroizing::new(bytes.iter().map(|byte| *byte as u64 + 1).collect());
    let value = from_bijective(&digits, BYTE_BASE)?;

    let mut phrase = Zeroizing::new(String::new());
    for digit in to_bijective(value, DICTIONARY_SIZE as u64) {
        // Digits are in 1..=DICTIONARY_SIZE.
        let word = dictionary::ENGLISH[(digit - 1) as usize];
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    Ok(phrase)
}

/// Evaluate little-endian bijective digits (each in `1..=base`).
fn from_bijective(digits: &[u64], base: u64) -> Result<U512, PhraseError> {
    let base = U512::from(base);
    digits.iter().rev().try_fold(U512::zero(), |acc, digit| {
        acc.checked_mul(base)
            .and_then(|shifted| shifted.checked_add(U512::from(*digit)))
            .ok_or(PhraseError::Overflow)
    })
}

/// Little-endian bijective digits of `value`, each in `1..=base`.
fn to_bijective(mut value: U512, base: u64) -> Vec<u64> {
    let divisor = U512::from(base);
    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_mod(divisor);
        if remainder.is_zero() {
            digits.push(base);
            value = quotient - U512::one();
        } else {
            digits.push(remainder.low_u64());
            value = quotient;
        }
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    #[test]
    fn test_single_words() {
        assert_eq!(*phrase_to_bytes("abbey").unwrap(), vec![0]);
        assert_eq!(*phrase_to_bytes("ability").unwrap(), vec![2]);
        assert_eq!(*bytes_to_phrase(&[0]).unwrap(), "abbey");
        assert_eq!(*bytes_to_phrase(&[255]).unwrap(), dictionary::ENGLISH[255]);
    }

    #[test]
    fn test_carry_between_positions() {
        // 1 + 1 * 1626 = 1627 = (90 + 1) + (5 + 1) * 256
        assert_eq!(*phrase_to_bytes("abbey abbey").unwrap(), vec![90, 5]);
        assert_eq!(*bytes_to_phrase(&[90, 5]).unwrap(), "abbey abbey");

        // 257 needs two bytes but fits in a single word.
        let phrase = bytes_to_phrase(&[0, 0]).unwrap();
        assert_eq!(*phrase, dictionary::ENGLISH[256]);
    }

    #[test]
    fn test_words_resolve_by_prefix() {
        assert_eq!(
            phrase_to_bytes("abbey zoom").unwrap(),
            phrase_to_bytes("abbots zoology").unwrap()
        );
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(
            phrase_to_bytes("  abbey \t zoom\n").unwrap(),
            phrase_to_bytes("abbey zoom").unwrap()
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(phrase_to_bytes("").unwrap_err(), PhraseError::EmptyInput);
        assert_eq!(phrase_to_bytes("   ").unwrap_err(), PhraseError::EmptyInput);
        assert_eq!(bytes_to_phrase(&[]).unwrap_err(), PhraseError::EmptyInput);
        assert_eq!(
            phrase_to_bytes("abbey qqqq").unwrap_err(),
            PhraseError::UnknownWord("qqqq".to_string())
        );
        assert_eq!(bytes_to_phrase(&[0xff; 64]).unwrap_err(), PhraseError::Overflow);
    }

    #[test]
    fn test_seed_sized_inputs_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let mut bytes = [0u8; 38];
            rng.fill_bytes(&mut bytes);
            let phrase = bytes_to_phrase(&bytes).unwrap();
            let words = phrase.split(' ').count();
            assert!(words == 28 || words == 29, "{words} words");
            assert_eq!(*phrase_to_bytes(&phrase).unwrap(), bytes.to_vec());
        }
    }
}
