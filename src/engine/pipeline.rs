//! Round pipeline: categorize, balance, limit, pair.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::engine::{
    apply_capacity_limits, calculate_capacity_limits, generate_optimal_pairings,
    group_by_category, CapacityPlan,
};
use crate::types::{Category, Pairing, Participant, ParticipantId};

/// Compute the pairings for one round.
///
/// `participants` must already be filtered to the eligible population. The
/// result is table-numbered, possibly empty, and never seats a participant
/// twice. Identical input yields identical output.
pub fn compute_round_pairings(participants: &[Participant]) -> Vec<Pairing> {
    run_round(participants).pairings
}

/// Full result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Pairings in table order
    pub pairings: Vec<Pairing>,

    /// Capacity plan the pairings were drawn under
    pub plan: CapacityPlan,

    /// Eligible participants per category, in [`Category::ALL`] order
    pub counts: [usize; 4],

    /// Participants that did not get a table, in input order
    pub unpaired: Vec<ParticipantId>,
}

impl RoundOutcome {
    pub fn participants_considered(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }
}

/// Run the full pipeline and keep the intermediate plan.
pub fn run_round(participants: &[Participant]) -> RoundOutcome {
    let grouped = group_by_category(participants);
    let counts = grouped.counts();
    debug!(?counts, "participants grouped by category");

    let plan = calculate_capacity_limits(&grouped);
    debug!(
        global_limit = plan.global_limit(),
        limits = ?plan.limits(),
        "capacity limits computed"
    );

    let limited = apply_capacity_limits(grouped, &plan);
    let pairings = generate_optimal_pairings(limited);

    let seated: HashSet<ParticipantId> = pairings
        .iter()
        .flat_map(|p| [p.first_id, p.second_id])
        .collect();
    let unpaired: Vec<ParticipantId> = participants
        .iter()
        .map(|p| p.id)
        .filter(|id| !seated.contains(id))
        .collect();

    info!(
        participants = participants.len(),
        pairings = pairings.len(),
        unpaired = unpaired.len(),
        global_limit = plan.global_limit(),
        "round pairings computed"
    );

    RoundOutcome {
        pairings,
        plan,
        counts,
        unpaired,
    }
}

// ============================================================================
// Matching summary
// ============================================================================

/// Event-level planning summary.
///
/// Compares the theoretical ceiling from the capacity plan with the number of
/// matches the caller actually created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingSummary {
    pub total_participants: usize,
    pub counts: [usize; 4],
    pub plan: CapacityPlan,
    /// Smallest per-category limit
    pub max_possible_matches: usize,
    pub matches_created: u64,
    pub mutual_matches: u64,
    /// `matches_created / max_possible_matches * 100`, 2 dp; zero when nothing is possible
    pub matching_efficiency: Decimal,
}

impl MatchingSummary {
    pub fn build(participants: &[Participant], matches_created: u64, mutual_matches: u64) -> Self {
        let grouped = group_by_category(participants);
        let plan = calculate_capacity_limits(&grouped);
        let max_possible_matches = plan.max_possible_matches();

        let matching_efficiency =
            crate::stats::percentage(matches_created, max_possible_matches as u64);

        Self {
            total_participants: participants.len(),
            counts: grouped.counts(),
            plan,
            max_possible_matches,
            matches_created,
            mutual_matches,
            matching_efficiency,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
