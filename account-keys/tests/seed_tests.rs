//! Integration tests for sia-account-keys
//!
//! These tests exercise the public API the scanner relies on:
//! - Recovery phrase validation
//! - Seed and phrase round trips
//! - Address derivation

use rand::{rngs::StdRng, SeedableRng};
use sia_account_keys::{
    derive_address, dictionary, Address, Seed, ValidationError, MAX_PHRASE_WORDS,
    MIN_PHRASE_WORDS,
};

fn seeds() -> impl Iterator<Item = Seed> {
    let mut rng = StdRng::seed_from_u64(1626);
    std::iter::repeat_with(move || Seed::from_random(&mut rng))
}

fn phrase_of(seed: &Seed) -> String {
    seed.to_phrase().unwrap().to_string()
}

// ============================================================================
// Word Count Tests
// ============================================================================

mod word_count {
    use super::*;

    #[test]
    fn test_both_phrase_lengths_are_accepted() {
        let mut seen_short = false;
        let mut seen_long = false;

        for seed in seeds().take(2_000) {
            let phrase = phrase_of(&seed);
            match phrase.split(' ').count() {
                MIN_PHRASE_WORDS => seen_short = true,
                MAX_PHRASE_WORDS => seen_long = true,
                other => panic!("unexpected phrase length {other}"),
            }
            assert_eq!(Seed::decode(&phrase).unwrap(), seed);
            if seen_short && seen_long {
                return;
            }
        }
        panic!("did not see both phrase lengths");
    }

    #[test]
    fn test_too_few_words_rejected() {
        let phrase = phrase_of(&seeds().next().unwrap());
        let words: Vec<&str> = phrase.split(' ').collect();
        let short = words[..27].join(" ");
        assert_eq!(Seed::decode(&short), Err(ValidationError::WordCount(27)));
    }

    #[test]
    fn test_too_many_words_rejected() {
        let phrase = phrase_of(&seeds().next().unwrap());
        let mut words: Vec<&str> = phrase.split(' ').collect();
        while words.len() < 30 {
            words.push("abbey");
        }
        assert_eq!(
            Seed::decode(&words.join(" ")),
            Err(ValidationError::WordCount(30))
        );
    }

    #[test]
    fn test_empty_phrase_rejected() {
        assert_eq!(Seed::decode(""), Err(ValidationError::WordCount(0)));
        assert_eq!(Seed::decode(" \n"), Err(ValidationError::WordCount(0)));
    }

    #[test]
    fn test_structurally_valid_but_oversized_phrase() {
        // 29 copies of the last word encode more than 38 bytes.
        let phrase = vec![dictionary::ENGLISH[dictionary::DICTIONARY_SIZE - 1]; 29].join(" ");
        assert_eq!(Seed::decode(&phrase), Err(ValidationError::ByteLength(39)));
    }
}

// ============================================================================
// Mutation Tests
// ============================================================================

mod mutation {
    use super::*;

    #[test]
    fn test_every_single_letter_change_is_rejected() {
        let seed = seeds().next().unwrap();
        let phrase = phrase_of(&seed);
        let original: Vec<char> = phrase.chars().collect();

        for (position, current) in original.iter().enumerate() {
            if *current == ' ' {
                continue;
            }
            for replacement in 'a'..='z' {
                if replacement == *current {
                    continue;
                }
                let mut mutated = original.clone();
                mutated[position] = replacement;
                let mutated: String = mutated.into_iter().collect();

                match Seed::decode(&mutated) {
                    Ok(_) => panic!("accepted mutated phrase {mutated:?}"),
                    // Landing on another dictionary word is caught by the
                    // checksum instead.
                    Err(ValidationError::UnknownWord(_))
                    | Err(ValidationError::ChecksumMismatch)
                    | Err(ValidationError::ByteLength(_)) => {}
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
        }
    }

    #[test]
    fn test_missing_word_is_rejected() {
        for seed in seeds().take(20) {
            let phrase = phrase_of(&seed);
            let mut words: Vec<&str> = phrase.split(' ').collect();
            if words.len() != MAX_PHRASE_WORDS {
                continue;
            }
            words.remove(10);
            let result = Seed::decode(&words.join(" "));
            assert!(
                matches!(
                    result,
                    Err(ValidationError::ChecksumMismatch) | Err(ValidationError::ByteLength(_))
                ),
                "{result:?}"
            );
        }
    }
}

// ============================================================================
// Derivation Tests
// ============================================================================

mod derivation {
    use super::*;

    #[test]
    fn test_phrase_and_seed_derive_same_addresses() {
        let seed = seeds().next().unwrap();
        let restored = Seed::decode(&phrase_of(&seed)).unwrap();
        for index in [0, 1, 250, u64::MAX] {
            assert_eq!(derive_address(&seed, index), derive_address(&restored, index));
        }
    }

    #[test]
    fn test_address_strings_parse_back() {
        let seed = seeds().next().unwrap();
        for index in 0..50 {
            let address = derive_address(&seed, index);
            assert_eq!(address.to_string().parse::<Address>().unwrap(), address);
        }
    }
}
