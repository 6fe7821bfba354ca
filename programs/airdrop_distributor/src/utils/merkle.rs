use anchor_lang::solana_program::hash::hashv;

/**
 * Merkle proof verification
 *
 * Recomputes a candidate root by folding the leaf hash through the proof
 * path and compares it with the committed root. Each pair of nodes is
 * hashed in lexicographic order, so a proof carries no left/right position
 * data and cannot be reordered into a second preimage.
 *
 * Stateless and deterministic: the same (proof, root, leaf) always yields
 * the same answer, and no input can make it panic.
 */

/// Verifies a merkle proof against a committed root
///
/// An empty proof verifies only the single-leaf tree whose root is the leaf
/// hash itself; against any other root it simply fails the final comparison.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof.iter() {
        // Canonical pair ordering: smaller hash first
        computed_hash = if computed_hash <= *proof_element {
            hashv(&[&computed_hash, proof_element]).to_bytes()
        } else {
            hashv(&[proof_element, &computed_hash]).to_bytes()
        };
    }
    computed_hash == root
}

/// Computes the leaf hash for a (claimant, entitlement) pair
///
/// Must match the off-chain tree construction: hash(claimant || entitlement)
/// with the entitlement in little-endian bytes, no prefix.
pub fn hash_leaf(claimant: &anchor_lang::prelude::Pubkey, entitlement: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &entitlement.to_le_bytes()]).to_bytes()
}
