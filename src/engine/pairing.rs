//! Priority-ordered pairing generator.
//!
//! ## Passes
//!
//! Pairings are produced by four sequential draining passes over the limited
//! groups, in the order fixed by [`PAIRING_PASSES`]:
//!
//! 1. TopA × TopB
//! 2. BottomA × BottomB
//! 3. TopA × BottomB
//! 4. BottomA × TopB
//!
//! Each pass takes `min(len(first), len(second))` pairs from the front of
//! both queues. Table numbers run 1..N in creation order.
//!
//! ## Trade-off
//!
//! This is a greedy matcher, not a maximum-cardinality solver. Same-tier
//! pairs are always exhausted before cross-tier pairs, even where a different
//! order would seat more people. Outcomes stay predictable and explainable.

use std::collections::VecDeque;

use tracing::debug;

use crate::engine::CategoryGroups;
use crate::types::{Pairing, Participant, PAIRING_PASSES};

/// Generate pairings from capacity-limited groups.
pub fn generate_optimal_pairings(limited: CategoryGroups) -> Vec<Pairing> {
    let mut available: [VecDeque<Participant>; 4] =
        limited.into_inner().map(VecDeque::from);

    let capacity = available.iter().map(VecDeque::len).sum::<usize>() / 2;
    let mut pairings = Vec::with_capacity(capacity);

    for pass in PAIRING_PASSES {
        let first_index = pass.first.index();
        let second_index = pass.second.index();
        let pairs_count = available[first_index]
            .len()
            .min(available[second_index].len());

        for _ in 0..pairs_count {
            let (Some(first), Some(second)) = (
                available[first_index].pop_front(),
                available[second_index].pop_front(),
            ) else {
                break;
            };
            let table_number = pairings.len() as u64 + 1;
            pairings.push(Pairing::new(table_number, &first, &second));
        }

        debug!(
            first = %pass.first,
            second = %pass.second,
            kind = ?pass.kind,
            pairs = pairs_count,
            "pairing pass drained"
        );
    }

    pairings
}

// ============================================================================
// Unit Tests
// ============================================================================
