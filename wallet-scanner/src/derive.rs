//! Address derivation utilities.
//!
//! Helpers for showing derived addresses to an operator, for example to
//! check a seed against a known receive address before starting a scan.

use serde::Serialize;
use sia_account_keys::{derive_signing_key, Address, Seed, UnlockConditions};

/// A derived address together with its public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedAddress {
    /// Derivation index
    pub index: u64,
    /// The address
    pub address: Address,
    /// Ed25519 public key (hex)
    pub public_key_hex: String,
}

impl DerivedAddress {
    /// Derive the address at `index`.
    pub fn derive(seed: &Seed, index: u64) -> Self {
        let public_key = derive_signing_key(seed, index).verifying_key().to_bytes();
        Self {
            index,
            address: UnlockConditions::standard(public_key).unlock_hash(),
            public_key_hex: hex::encode(public_key),
        }
    }
}

/// Derive `count` consecutive addresses starting at `start`.
///
/// Stops early instead of wrapping when the index range would overflow.
pub fn derive_range(seed: &Seed, start: u64, count: u64) -> Vec<DerivedAddress> {
    (start..start.saturating_add(count))
        .map(|index| DerivedAddress::derive(seed, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sia_account_keys::derive_address;

    fn test_seed() -> Seed {
        Seed::from([9u8; 32])
    }

    #[test]
    fn test_matches_derive_address() {
        let seed = test_seed();
        let derived = DerivedAddress::derive(&seed, 17);

        assert_eq!(derived.index, 17);
        assert_eq!(derived.address, derive_address(&seed, 17));
        assert_eq!(derived.public_key_hex.len(), 64);
        assert_eq!(derived.address.to_string().len(), 76);
    }

    #[test]
    fn test_derive_range() {
        let seed = test_seed();
        let range = derive_range(&seed, 10, 5);

        assert_eq!(range.len(), 5);
        assert_eq!(range[0].index, 10);
        assert_eq!(range[4].index, 14);
        assert_ne!(range[0].address, range[1].address);
    }

    #[test]
    fn test_derive_range_near_max() {
        let range = derive_range(&test_seed(), u64::MAX - 2, 10);
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn test_serializes_address_as_string() {
        let derived = DerivedAddress::derive(&test_seed(), 0);
        let json = serde_json::to_value(&derived).unwrap();
        assert_eq!(json["address"], derived.address.to_string());
        assert_eq!(json["index"], 0);
    }
}
