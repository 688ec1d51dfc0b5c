// Copyright (c) 2018-2022 The Botho Foundation

//! BLAKE2b-256 helpers shared by seed checksums and address derivation.

use crate::domain_separators::{LEAF_HASH_PREFIX, NODE_HASH_PREFIX};
use blake2::{digest::consts::U32, Blake2b, Digest};

/// BLAKE2b with a 32 byte output.
pub type Blake2b256 = Blake2b<U32>;

/// Size of every hash produced by this module.
pub const HASH_SIZE: usize = 32;

/// Hash the concatenation of `parts`.
pub fn hash_all(parts: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Hash a single Merkle leaf.
pub fn leaf_hash(data: &[u8]) -> [u8; HASH_SIZE] {
    hash_all(&[&[LEAF_HASH_PREFIX], data])
}

/// Hash two Merkle children into their parent.
pub fn node_hash(left: &[u8; HASH_SIZE], right: &[u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
    hash_all(&[&[NODE_HASH_PREFIX], left, right])
}

/// Merkle root over `leaves`.
///
/// Leaves are folded into perfect subtrees left to right; the remaining
/// subtrees are then joined from the smallest (rightmost) upward. An empty
/// list yields the zero hash.
pub fn merkle_root<L: AsRef<[u8]>>(leaves: &[L]) -> [u8; HASH_SIZE] {
    let mut stack: Vec<(u32, [u8; HASH_SIZE])> = Vec::with_capacity(leaves.len());

    for leaf in leaves {
        let (mut height, mut hash) = (0, leaf_hash(leaf.as_ref()));
        while let Some(&(top_height, top_hash)) = stack.last() {
            if top_height != height {
                break;
            }
            stack.pop();
            hash = node_hash(&top_hash, &hash);
            height += 1;
        }
        stack.push((height, hash));
    }

    stack
        .into_iter()
        .rev()
        .map(|(_, hash)| hash)
        .reduce(|right, left| node_hash(&left, &right))
        .unwrap_or([0u8; HASH_SIZE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_blake2b256_empty_input() {
        assert_eq!(
            hash_all(&[]),
            hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
        );
    }

    #[test]
    fn test_hash_all_concatenates() {
        assert_eq!(hash_all(&[b"ab", b"cd"]), hash_all(&[b"abcd"]));
        assert_ne!(hash_all(&[b"abcd"]), hash_all(&[b"abdc"]));
    }

    #[test]
    fn test_leaf_and_node_are_domain_separated() {
        let leaf = leaf_hash(&[]);
        assert_ne!(leaf, hash_all(&[]));
        assert_ne!(node_hash(&leaf, &leaf), leaf_hash(&[leaf, leaf].concat()));
    }

    #[test]
    fn test_merkle_root_small_trees() {
        let leaves: [&[u8]; 3] = [b"one", b"two", b"three"];
        let l: Vec<_> = leaves.iter().map(|leaf| leaf_hash(leaf)).collect();

        assert_eq!(merkle_root::<&[u8]>(&[]), [0u8; HASH_SIZE]);
        assert_eq!(merkle_root(&leaves[..1]), l[0]);
        assert_eq!(merkle_root(&leaves[..2]), node_hash(&l[0], &l[1]));
        assert_eq!(
            merkle_root(&leaves),
            node_hash(&node_hash(&l[0], &l[1]), &l[2])
        );
    }

    #[test]
    fn test_merkle_root_five_leaves() {
        let leaves: Vec<Vec<u8>> = (0u8..5).map(|i| vec![i]).collect();
        let l: Vec<_> = leaves.iter().map(|leaf| leaf_hash(leaf)).collect();
        let left = node_hash(&node_hash(&l[0], &l[1]), &node_hash(&l[2], &l[3]));
        assert_eq!(merkle_root(&leaves), node_hash(&left, &l[4]));
    }
}
