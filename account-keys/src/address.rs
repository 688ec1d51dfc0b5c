// Copyright (c) 2018-2022 The Botho Foundation

//! Addresses (unlock hashes) and their derivation from a seed.
//!
//! An address commits to a set of unlock conditions: a timelock, the public
//! keys allowed to sign, and how many signatures are required. Wallet
//! addresses use the standard single-key policy with no timelock.

use crate::{
    domain_separators::ED25519_SPECIFIER,
    hash::{hash_all, merkle_root, HASH_SIZE},
    seed::Seed,
};
use core::{fmt, str::FromStr};
use displaydoc::Display;
use ed25519_dalek::SigningKey;
use thiserror::Error;
use zeroize::Zeroizing;

/// Bytes of the address checksum in its string form.
pub const ADDRESS_CHECKSUM_SIZE: usize = 6;

/// Length of the canonical string form of an address.
pub const ADDRESS_STRING_LEN: usize = 2 * (HASH_SIZE + ADDRESS_CHECKSUM_SIZE);

/// Errors parsing an address string.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum AddressParseError {
    /// Address has {0} characters, expected 76
    Length(usize),

    /// Address is not valid hex
    InvalidHex,

    /// Address checksum does not match
    Checksum,
}

/// A 32 byte unlock hash identifying where funds can be received.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; HASH_SIZE]);

impl Address {
    /// Wrap raw unlock hash bytes.
    pub fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// The raw unlock hash.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    fn checksum(&self) -> [u8; ADDRESS_CHECKSUM_SIZE] {
        let hash = hash_all(&[&self.0]);
        let mut checksum = [0u8; ADDRESS_CHECKSUM_SIZE];
        checksum.copy_from_slice(&hash[..ADDRESS_CHECKSUM_SIZE]);
        checksum
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", hex::encode(self.0), hex::encode(self.checksum()))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.len() != ADDRESS_STRING_LEN {
            return Err(AddressParseError::Length(src.len()));
        }
        let bytes = hex::decode(src).map_err(|_| AddressParseError::InvalidHex)?;
        let (hash, checksum) = bytes.split_at(HASH_SIZE);

        let mut address = Address([0u8; HASH_SIZE]);
        address.0.copy_from_slice(hash);
        if address.checksum()[..] != *checksum {
            return Err(AddressParseError::Checksum);
        }
        Ok(address)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let src = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        src.parse().map_err(serde::de::Error::custom)
    }
}

/// The spending policy an address commits to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockConditions {
    /// Height before which the outputs cannot be spent.
    pub timelock: u64,
    /// ed25519 public keys allowed to sign.
    pub public_keys: Vec<[u8; 32]>,
    /// Number of signatures needed to spend.
    pub signatures_required: u64,
}

impl UnlockConditions {
    /// One key, one signature, no timelock.
    pub fn standard(public_key: [u8; 32]) -> Self {
        Self {
            timelock: 0,
            public_keys: vec![public_key],
            signatures_required: 1,
        }
    }

    /// Merkle root over the encoded timelock, each key, and the signature
    /// count.
    pub fn unlock_hash(&self) -> Address {
        let mut leaves = Vec::with_capacity(self.public_keys.len() + 2);
        leaves.push(self.timelock.to_le_bytes().to_vec());
        for key in &self.public_keys {
            let mut leaf = Vec::with_capacity(ED25519_SPECIFIER.len() + 8 + key.len());
            leaf.extend_from_slice(&ED25519_SPECIFIER);
            leaf.extend_from_slice(&(key.len() as u64).to_le_bytes());
            leaf.extend_from_slice(key);
            leaves.push(leaf);
        }
        leaves.push(self.signatures_required.to_le_bytes().to_vec());
        Address(merkle_root(&leaves))
    }
}

/// Derive the ed25519 signing key at `index`.
pub fn derive_signing_key(seed: &Seed, index: u64) -> SigningKey {
    let key_seed = Zeroizing::new(hash_all(&[seed.as_ref(), &index.to_le_bytes()]));
    SigningKey::from_bytes(&key_seed)
}

/// Derive the address at `index`.
pub fn derive_address(seed: &Seed, index: u64) -> Address {
    let public_key = derive_signing_key(seed, index).verifying_key().to_bytes();
    UnlockConditions::standard(public_key).unlock_hash()
}

/// Derive `count` consecutive addresses starting at `start`.
pub fn derive_address_batch(seed: &Seed, start: u64, count: u64) -> Vec<(u64, Address)> {
    (start..start.saturating_add(count))
        .map(|index| (index, derive_address(seed, index)))
        .collect()
}
