use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::hash_leaf;

/// One (claimant, entitlement) pair of the committed set
#[derive(Debug, Clone)]
struct TreeEntry {
    claimant: Pubkey,
    entitlement: u64,
}

/// Reference merkle tree used to exercise the on-chain verifier
///
/// Mirrors the off-chain tree construction: leaves are
/// hash(claimant || entitlement_le), intermediate nodes hash their children
/// smaller-first, an odd tail node is paired with itself.
struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    fn build(entries: &[TreeEntry]) -> Self {
        let leaves: Vec<[u8; 32]> = entries
            .iter()
            .map(|e| hash_leaf(&e.claimant, e.entitlement))
            .collect();

        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let mut next = Vec::with_capacity((prev.len() + 1) / 2);
            for pair in prev.chunks(2) {
                let right = pair.get(1).unwrap_or(&pair[0]);
                next.push(Self::hash_pair(&pair[0], right));
            }
            levels.push(next);
        }

        MerkleTree { levels }
    }

    fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        // Same canonical ordering as the verify function
        if a <= b {
            hashv(&[a, b]).to_bytes()
        } else {
            hashv(&[b, a]).to_bytes()
        }
    }

    fn root(&self) -> [u8; 32] {
        self.levels.last().unwrap()[0]
    }

    fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.levels[0].len(), "leaf index out of bounds");

        let mut proof = Vec::new();
        let mut idx = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if idx % 2 == 0 {
                // Right sibling, or the node itself on an odd tail
                *level.get(idx + 1).unwrap_or(&level[idx])
            } else {
                level[idx - 1]
            };
            proof.push(sibling);
            idx /= 2;
        }
        proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;

    fn sample_entries(count: usize) -> Vec<TreeEntry> {
        (0..count)
            .map(|i| TreeEntry {
                claimant: Pubkey::new_unique(),
                entitlement: 1_000 * (i as u64 + 1),
            })
            .collect()
    }

    #[test]
    fn every_committed_leaf_verifies() {
        let entries = sample_entries(4);
        let tree = MerkleTree::build(&entries);
        let root = tree.root();

        for (index, entry) in entries.iter().enumerate() {
            let leaf = hash_leaf(&entry.claimant, entry.entitlement);
            let proof = tree.proof(index);
            assert!(
                verify(proof, root, leaf),
                "proof for leaf {} did not verify",
                index
            );
        }
    }

    #[test]
    fn odd_leaf_count_verifies() {
        let entries = sample_entries(5);
        let tree = MerkleTree::build(&entries);
        let root = tree.root();

        for (index, entry) in entries.iter().enumerate() {
            let leaf = hash_leaf(&entry.claimant, entry.entitlement);
            assert!(verify(tree.proof(index), root, leaf));
        }
    }

    #[test]
    fn wrong_entitlement_fails() {
        let entries = sample_entries(4);
        let tree = MerkleTree::build(&entries);
        let proof = tree.proof(0);

        // Same claimant, inflated entitlement: different leaf hash
        let forged_leaf = hash_leaf(&entries[0].claimant, entries[0].entitlement + 1);
        assert!(!verify(proof, tree.root(), forged_leaf));
    }

    #[test]
    fn foreign_claimant_fails() {
        let entries = sample_entries(4);
        let tree = MerkleTree::build(&entries);
        let proof = tree.proof(0);

        let outsider = hash_leaf(&Pubkey::new_unique(), entries[0].entitlement);
        assert!(!verify(proof, tree.root(), outsider));
    }

    #[test]
    fn any_tampered_proof_byte_fails() {
        let entries = sample_entries(4);
        let tree = MerkleTree::build(&entries);
        let root = tree.root();
        let leaf = hash_leaf(&entries[0].claimant, entries[0].entitlement);
        let proof = tree.proof(0);

        assert!(verify(proof.clone(), root, leaf));

        // Flipping any single byte anywhere in the path must flip the result
        for element in 0..proof.len() {
            for byte in 0..32 {
                let mut tampered = proof.clone();
                tampered[element][byte] ^= 0x01;
                assert!(
                    !verify(tampered, root, leaf),
                    "tampered byte {} of element {} still verified",
                    byte,
                    element
                );
            }
        }
    }

    #[test]
    fn empty_proof_only_matches_single_leaf_tree() {
        // Single-leaf tree: the root is the leaf hash, the proof is empty
        let single = sample_entries(1);
        let tree = MerkleTree::build(&single);
        let leaf = hash_leaf(&single[0].claimant, single[0].entitlement);

        assert_eq!(tree.proof(0).len(), 0);
        assert!(verify(Vec::new(), tree.root(), leaf));

        // Against a multi-leaf root an empty proof must fail
        let entries = sample_entries(4);
        let big_tree = MerkleTree::build(&entries);
        let committed = hash_leaf(&entries[0].claimant, entries[0].entitlement);
        assert!(!verify(Vec::new(), big_tree.root(), committed));
    }

    #[test]
    fn proof_for_sibling_leaf_fails() {
        // A valid proof presented with a different committed leaf must fail
        let entries = sample_entries(4);
        let tree = MerkleTree::build(&entries);
        let other_leaf = hash_leaf(&entries[1].claimant, entries[1].entitlement);

        assert!(!verify(tree.proof(0), tree.root(), other_leaf));
    }
}
