//! Claim accounting exercised off-chain
//!
//! These tests drive the same pure helpers handle_claim uses, so the
//! progressive-release arithmetic and the per-claimant state machine are
//! covered without a running cluster.

use crate::state::{AirdropDistributor, ClaimRecord};

fn distributor_at(release_bps: u16) -> AirdropDistributor {
    AirdropDistributor {
        release_bps,
        ..Default::default()
    }
}

/// Applies one claim round: returns the paid-out delta, or None when the
/// claimant has already received everything currently unlocked
fn claim_round(
    distributor: &AirdropDistributor,
    record: &mut ClaimRecord,
    entitlement: u64,
) -> Option<u64> {
    let unlocked = distributor.unlocked_amount(entitlement).unwrap();
    let pending = record.pending_amount(unlocked);
    if pending == 0 {
        return None;
    }
    record.claimed_amount = unlocked;
    Some(pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_amount_is_floored() {
        let distributor = distributor_at(5_000);
        // 99 * 5000 / 10000 = 49.5, floored: rounding never favors the claimant
        assert_eq!(distributor.unlocked_amount(99).unwrap(), 49);
        assert_eq!(distributor.unlocked_amount(1).unwrap(), 0);
    }

    #[test]
    fn unlocked_amount_bounds() {
        assert_eq!(distributor_at(0).unlocked_amount(100).unwrap(), 0);
        assert_eq!(distributor_at(10_000).unlocked_amount(100).unwrap(), 100);

        // The u128 intermediate keeps the product of a full entitlement and
        // the maximum percentage from overflowing
        assert_eq!(
            distributor_at(10_000).unlocked_amount(u64::MAX).unwrap(),
            u64::MAX
        );
        assert!(distributor_at(9_999).unlocked_amount(u64::MAX).unwrap() < u64::MAX);
    }

    #[test]
    fn pending_amount_never_underflows() {
        let record = ClaimRecord { claimed_amount: 60 };
        assert_eq!(record.pending_amount(100), 40);
        assert_eq!(record.pending_amount(60), 0);
        // Unlocked below the recorded total (e.g. after a root rotation to a
        // smaller entitlement): pending clamps to zero instead of wrapping
        assert_eq!(record.pending_amount(40), 0);
    }

    #[test]
    fn progressive_release_scenario() {
        // Entitlement 100, percentage raised 0 -> 60% -> 100%
        let entitlement = 100u64;
        let mut distributor = distributor_at(0);
        let mut record = ClaimRecord::default();

        // Nothing unlocked yet: first claim pays nothing
        assert_eq!(claim_round(&distributor, &mut record, entitlement), None);
        assert_eq!(record.claimed_amount, 0);

        // 60% released: claim pays exactly the unlocked 60
        distributor.release_bps = 6_000;
        assert_eq!(
            claim_round(&distributor, &mut record, entitlement),
            Some(60)
        );
        assert_eq!(record.claimed_amount, 60);

        // Re-claim at the same percentage pays nothing
        assert_eq!(claim_round(&distributor, &mut record, entitlement), None);
        assert_eq!(record.claimed_amount, 60);

        // Full release: only the remaining 40 is paid, not the full 100 again
        distributor.release_bps = 10_000;
        assert_eq!(
            claim_round(&distributor, &mut record, entitlement),
            Some(40)
        );
        assert_eq!(record.claimed_amount, entitlement);

        // Fully claimed is terminal
        assert_eq!(claim_round(&distributor, &mut record, entitlement), None);
        assert_eq!(record.claimed_amount, entitlement);
    }

    #[test]
    fn claimed_amount_never_exceeds_entitlement() {
        let entitlement = 12_345u64;
        let mut distributor = distributor_at(0);
        let mut record = ClaimRecord::default();

        // Walk the percentage up in uneven steps, claiming at every level
        for bps in [1, 9, 2_500, 2_500, 7_777, 9_999, 10_000, 10_000] {
            distributor.release_bps = bps;
            claim_round(&distributor, &mut record, entitlement);
            assert!(record.claimed_amount <= entitlement);
        }
        assert_eq!(record.claimed_amount, entitlement);
    }

    #[test]
    fn paid_deltas_sum_to_the_entitlement() {
        let entitlement = 1_000_003u64;
        let mut distributor = distributor_at(0);
        let mut record = ClaimRecord::default();

        let mut total_paid = 0u64;
        for bps in [1_000, 4_000, 6_500, 10_000] {
            distributor.release_bps = bps;
            if let Some(delta) = claim_round(&distributor, &mut record, entitlement) {
                total_paid += delta;
            }
            assert_eq!(total_paid, record.claimed_amount);
        }
        assert_eq!(total_paid, entitlement);
    }
}
