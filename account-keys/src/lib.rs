// Copyright (c) 2018-2022 The Botho Foundation

#![deny(missing_docs)]
#![deny(unsafe_code)]

//! Seeds, recovery phrases, and address derivation for Sia wallets.
//!
//! A wallet is a 32 byte [`Seed`], written down as a 28 or 29 word recovery
//! phrase. Every address of the wallet is derived deterministically from the
//! seed and a `u64` index:
//!
//! ```text
//! key seed  = blake2b256(seed || index as u64 LE)
//! key pair  = ed25519(key seed)
//! address   = merkle root(timelock, public key, signatures required)
//! ```

pub mod dictionary;
pub mod hash;
pub mod phrase;

mod address;
mod domain_separators;
mod seed;

pub use crate::{
    address::{
        derive_address, derive_address_batch, derive_signing_key, Address, AddressParseError,
        UnlockConditions, ADDRESS_CHECKSUM_SIZE, ADDRESS_STRING_LEN,
    },
    phrase::PhraseError,
    seed::{
        Seed, ValidationError, CHECKSUM_SIZE, ENTROPY_SIZE, MAX_PHRASE_WORDS, MIN_PHRASE_WORDS,
    },
};
