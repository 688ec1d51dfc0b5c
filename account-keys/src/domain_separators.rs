// Copyright (c) 2018-2022 The Botho Foundation

//! Constants that separate hashing domains in address derivation.

/// Prepended to a Merkle leaf before hashing.
pub const LEAF_HASH_PREFIX: u8 = 0x00;

/// Prepended to a pair of child hashes before hashing.
pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Algorithm specifier for ed25519 public keys, zero padded to 16 bytes.
pub const ED25519_SPECIFIER: [u8; 16] = *b"ed25519\0\0\0\0\0\0\0\0\0";
