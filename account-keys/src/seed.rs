// Copyright (c) 2018-2022 The Botho Foundation

//! Wallet seeds and the recovery phrases that encode them.
//!
//! A recovery phrase is 28 or 29 dictionary words. Decoded, it yields 38
//! bytes: 32 bytes of entropy followed by the first 6 bytes of the entropy's
//! BLAKE2b-256 hash.

use crate::{
    dictionary,
    hash::hash_all,
    phrase::{bytes_to_phrase, phrase_to_bytes, PhraseError},
};
use core::fmt;
use displaydoc::Display;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Bytes of entropy in a seed.
pub const ENTROPY_SIZE: usize = 32;

/// Bytes of checksum appended to the entropy inside a phrase.
pub const CHECKSUM_SIZE: usize = 6;

/// Fewest words a recovery phrase may have.
pub const MIN_PHRASE_WORDS: usize = 28;

/// Most words a recovery phrase may have.
pub const MAX_PHRASE_WORDS: usize = 29;

/// Reasons a recovery phrase is rejected.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// seed is not valid: all words must be lowercase
    Uppercase,

    /// seed is not valid: illegal character {0:?}
    IllegalCharacter(char),

    /// seed is not valid: must be 28 or 29 words, found {0}
    WordCount(usize),

    /// unrecognized word {0:?} in seed phrase
    UnknownWord(String),

    /// unable to decode mnemonic: {0}
    Mnemonic(#[from] PhraseError),

    /// seed is not valid: decoded to {0} bytes, expected 38
    ByteLength(usize),

    /// unable to validate seed: incorrect checksum, usually a flipped or missing word
    ChecksumMismatch,
}

/// 32 bytes of wallet entropy. Every address of the wallet is derived from it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; ENTROPY_SIZE],
}

impl Seed {
    /// Validate a recovery phrase and extract its seed.
    ///
    /// Checks run in a fixed order and the first failure is returned, so a
    /// given input always produces the same error.
    pub fn decode(phrase: &str) -> Result<Self, ValidationError> {
        for c in phrase.chars() {
            if c.is_uppercase() {
                return Err(ValidationError::Uppercase);
            }
            if !c.is_alphabetic() && !c.is_whitespace() {
                return Err(ValidationError::IllegalCharacter(c));
            }
        }

        let words: Vec<&str> = phrase.split_whitespace().collect();
        if !(MIN_PHRASE_WORDS..=MAX_PHRASE_WORDS).contains(&words.len()) {
            return Err(ValidationError::WordCount(words.len()));
        }
        if let Some(word) = words.iter().find(|word| !dictionary::contains(word)) {
            return Err(ValidationError::UnknownWord(word.to_string()));
        }

        let bytes = phrase_to_bytes(phrase)?;
        if bytes.len() != ENTROPY_SIZE + CHECKSUM_SIZE {
            return Err(ValidationError::ByteLength(bytes.len()));
        }

        let (entropy, checksum) = bytes.split_at(ENTROPY_SIZE);
        let mut seed = Seed {
            bytes: [0u8; ENTROPY_SIZE],
        };
        seed.bytes.copy_from_slice(entropy);
        if seed.checksum()[..] != *checksum {
            return Err(ValidationError::ChecksumMismatch);
        }
        Ok(seed)
    }

    /// Encode this seed as a recovery phrase.
    pub fn to_phrase(&self) -> Result<Zeroizing<String>, PhraseError> {
        let mut bytes = Zeroizing::new([0u8; ENTROPY_SIZE + CHECKSUM_SIZE]);
        bytes[..ENTROPY_SIZE].copy_from_slice(&self.bytes);
        bytes[ENTROPY_SIZE..].copy_from_slice(&self.checksum());
        bytes_to_phrase(&bytes[..])
    }

    /// Generate a fresh seed.
    pub fn from_random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = Seed {
            bytes: [0u8; ENTROPY_SIZE],
        };
        rng.fill_bytes(&mut seed.bytes);
        seed
    }

    fn checksum(&self) -> [u8; CHECKSUM_SIZE] {
        let hash = hash_all(&[&self.bytes]);
        let mut checksum = [0u8; CHECKSUM_SIZE];
        checksum.copy_from_slice(&hash[..CHECKSUM_SIZE]);
        checksum
    }
}

impl From<[u8; ENTROPY_SIZE]> for Seed {
    fn from(bytes: [u8; ENTROPY_SIZE]) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..]
    }
}

// Never print key material.
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn test_seed() -> Seed {
        Seed::from_random(&mut StdRng::seed_from_u64(42))
    }

    fn valid_phrase() -> String {
        test_seed().to_phrase().unwrap().to_string()
    }

    #[test]
    fn test_phrase_round_trip() {
        let seed = test_seed();
        let phrase = seed.to_phrase().unwrap();
        assert_eq!(Seed::decode(&phrase).unwrap(), seed);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let phrase = valid_phrase();
        assert_eq!(Seed::decode(&phrase).unwrap(), Seed::decode(&phrase).unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let phrase = valid_phrase();
        let padded = format!("  {}\n", phrase.replace(' ', "   "));
        assert_eq!(Seed::decode(&padded).unwrap(), Seed::decode(&phrase).unwrap());
    }

    #[test]
    fn test_uppercase_rejected() {
        let phrase = valid_phrase();
        let mut chars: Vec<char> = phrase.chars().collect();
        chars[0] = chars[0].to_ascii_uppercase();
        let shouted: String = chars.into_iter().collect();
        assert_eq!(Seed::decode(&shouted), Err(ValidationError::Uppercase));
    }

    #[test]
    fn test_illegal_character_rejected() {
        let phrase = format!("{},", valid_phrase());
        assert_eq!(
            Seed::decode(&phrase),
            Err(ValidationError::IllegalCharacter(','))
        );
        assert_eq!(
            Seed::decode("abbey 1"),
            Err(ValidationError::IllegalCharacter('1'))
        );
    }

    #[test]
    fn test_character_checks_run_in_order() {
        // The digit comes first, so it wins over the later uppercase letter.
        assert_eq!(
            Seed::decode("a1B"),
            Err(ValidationError::IllegalCharacter('1'))
        );
        assert_eq!(Seed::decode("aB1"), Err(ValidationError::Uppercase));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let phrase = valid_phrase();
        let mut words: Vec<&str> = phrase.split(' ').collect();
        words[3] = "blockchain";
        assert_eq!(
            Seed::decode(&words.join(" ")),
            Err(ValidationError::UnknownWord("blockchain".to_string()))
        );
    }

    #[test]
    fn test_swapped_words_fail_checksum() {
        let phrase = valid_phrase();
        let mut words: Vec<&str> = phrase.split(' ').collect();
        let replacement = if words[0] == "zoom" { "abbey" } else { "zoom" };
        words[0] = replacement;
        assert_eq!(
            Seed::decode(&words.join(" ")),
            Err(ValidationError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_debug_hides_entropy() {
        assert_eq!(format!("{:?}", test_seed()), "Seed(..)");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::WordCount(27).to_string(),
            "seed is not valid: must be 28 or 29 words, found 27"
        );
        assert_eq!(
            ValidationError::ChecksumMismatch.to_string(),
            "unable to validate seed: incorrect checksum, usually a flipped or missing word"
        );
    }
}
