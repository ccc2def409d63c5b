//! Per-round orchestration state.
//!
//! The engine itself is stateless. [`RoundLedger`] is the caller-side record
//! of which rounds exist, where each one is in its lifecycle, and whether its
//! pairings have already been materialized. Holding the ledger behind `&mut`
//! gives a single writer per round id.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending --start--> Active --break--> Break --end--> Completed
//!                      \------------end------------/
//! any status --cancel--> Cancelled
//! ```
//!
//! The break window starts when the scheduled round length has elapsed, not
//! when [`RoundLedger::start_break`] is called.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::engine::{run_round, RoundOutcome};
use crate::types::{Participant, ReceiptError, RoundReceipt};

/// Shortest accepted round length
pub const MIN_DURATION_MINUTES: u32 = 1;

/// Longest accepted round length
pub const MAX_DURATION_MINUTES: u32 = 60;

/// Longest accepted break after a round
pub const MAX_BREAK_MINUTES: u32 = 30;

/// Lifecycle status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Pending,
    Active,
    Break,
    Completed,
    Cancelled,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Completed | RoundStatus::Cancelled)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoundStatus::Pending => "pending",
            RoundStatus::Active => "active",
            RoundStatus::Break => "break",
            RoundStatus::Completed => "completed",
            RoundStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Errors raised by the round ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("round {round_id} not found")]
    UnknownRound { round_id: u64 },

    #[error("round {round_id} is already scheduled")]
    DuplicateRound { round_id: u64 },

    #[error("round {round_id} already has pairings")]
    AlreadyMaterialized { round_id: u64 },

    #[error("cannot move round from {from} to {to}")]
    InvalidTransition { from: RoundStatus, to: RoundStatus },

    #[error("duration {minutes} min outside 1..=60")]
    InvalidDuration { minutes: u32 },

    #[error("break {minutes} min outside 0..=30")]
    InvalidBreak { minutes: u32 },

    #[error("not enough participants to start round: {available} pairings, {required} required")]
    NotEnoughPairings { required: usize, available: usize },

    #[error("receipt error: {0}")]
    Receipt(#[from] ReceiptError),
}

/// State of one scheduled round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub round_id: u64,
    pub round_number: u32,
    pub duration_minutes: u32,
    pub break_minutes: u32,
    pub status: RoundStatus,
    /// Start time in milliseconds, set when the round goes active
    pub started_at: Option<u64>,
    /// Set once pairings have been materialized
    pub receipt: Option<RoundReceipt>,
}

impl RoundState {
    /// Seconds left in the current period, zero once it has elapsed.
    ///
    /// While active this counts down the round; during a break it counts down
    /// the break that follows the scheduled end of the round.
    pub fn remaining_seconds(&self, now_ms: u64) -> Option<u64> {
        let started_at = self.started_at?;
        let elapsed = now_ms.saturating_sub(started_at) / 1_000;
        let round_secs = u64::from(self.duration_minutes) * 60;
        match self.status {
            RoundStatus::Active => Some(round_secs.saturating_sub(elapsed)),
            RoundStatus::Break => {
                let break_elapsed = elapsed.saturating_sub(round_secs);
                Some((u64::from(self.break_minutes) * 60).saturating_sub(break_elapsed))
            }
            _ => None,
        }
    }
}

/// Pairings and receipt produced when a round starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStart {
    pub outcome: RoundOutcome,
    pub receipt: RoundReceipt,
}

/// Round states keyed by round id.
#[derive(Debug, Clone, Default)]
pub struct RoundLedger {
    rounds: BTreeMap<u64, RoundState>,
    min_pairings: usize,
}

impl RoundLedger {
    /// Create a ledger that refuses to start rounds with fewer than `min_pairings` pairings
    pub fn new(min_pairings: usize) -> Self {
        Self {
            rounds: BTreeMap::new(),
            min_pairings,
        }
    }

    pub fn get(&self, round_id: u64) -> Option<&RoundState> {
        self.rounds.get(&round_id)
    }

    pub fn status(&self, round_id: u64) -> Option<RoundStatus> {
        self.get(round_id).map(|state| state.status)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Register a pending round.
    pub fn schedule(
        &mut self,
        round_id: u64,
        round_number: u32,
        duration_minutes: u32,
        break_minutes: u32,
    ) -> Result<(), RoundError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(RoundError::InvalidDuration {
                minutes: duration_minutes,
            });
        }
        if break_minutes > MAX_BREAK_MINUTES {
            return Err(RoundError::InvalidBreak {
                minutes: break_minutes,
            });
        }
        if self.rounds.contains_key(&round_id) {
            return Err(RoundError::DuplicateRound { round_id });
        }

        self.rounds.insert(
            round_id,
            RoundState {
                round_id,
                round_number,
                duration_minutes,
                break_minutes,
                status: RoundStatus::Pending,
                started_at: None,
                receipt: None,
            },
        );
        Ok(())
    }

    /// Materialize pairings for a pending round and make it active.
    ///
    /// On [`RoundError::NotEnoughPairings`] the round stays pending and may be
    /// retried with a larger snapshot.
    pub fn start_round(
        &mut self,
        round_id: u64,
        participants: &[Participant],
        now_ms: u64,
    ) -> Result<RoundStart, RoundError> {
        let min_pairings = self.min_pairings;
        let state = self.state_mut(round_id)?;

        if state.receipt.is_some() {
            warn!(round_id, "round already materialized");
            return Err(RoundError::AlreadyMaterialized { round_id });
        }
        if state.status != RoundStatus::Pending {
            return Err(RoundError::InvalidTransition {
                from: state.status,
                to: RoundStatus::Active,
            });
        }

        let outcome = run_round(participants);
        if outcome.pairings.len() < min_pairings {
            warn!(
                round_id,
                available = outcome.pairings.len(),
                required = min_pairings,
                "not enough pairings to start round"
            );
            return Err(RoundError::NotEnoughPairings {
                required: min_pairings,
                available: outcome.pairings.len(),
            });
        }

        let receipt = RoundReceipt::from_pairings(
            round_id,
            participants.len() as u64,
            &outcome.pairings,
        )?;

        state.status = RoundStatus::Active;
        state.started_at = Some(now_ms);
        state.receipt = Some(receipt.clone());

        info!(
            round_id,
            round_number = state.round_number,
            pairings = receipt.pairings_created,
            root = %receipt.pairings_root_hex(),
            "round started"
        );

        Ok(RoundStart { outcome, receipt })
    }

    /// Active -> Break
    pub fn start_break(&mut self, round_id: u64) -> Result<(), RoundError> {
        self.transition(round_id, &[RoundStatus::Active], RoundStatus::Break)
    }

    /// Active | Break -> Completed
    pub fn end_round(&mut self, round_id: u64) -> Result<(), RoundError> {
        self.transition(
            round_id,
            &[RoundStatus::Active, RoundStatus::Break],
            RoundStatus::Completed,
        )
    }

    /// Any status -> Cancelled, including completed rounds
    pub fn cancel_round(&mut self, round_id: u64) -> Result<(), RoundError> {
        let state = self.state_mut(round_id)?;
        info!(round_id, from = %state.status, "round cancelled");
        state.status = RoundStatus::Cancelled;
        Ok(())
    }

    pub fn remaining_seconds(&self, round_id: u64, now_ms: u64) -> Option<u64> {
        self.get(round_id)?.remaining_seconds(now_ms)
    }

    fn state_mut(&mut self, round_id: u64) -> Result<&mut RoundState, RoundError> {
        self.rounds
            .get_mut(&round_id)
            .ok_or(RoundError::UnknownRound { round_id })
    }

    fn transition(
        &mut self,
        round_id: u64,
        allowed_from: &[RoundStatus],
        to: RoundStatus,
    ) -> Result<(), RoundError> {
        let state = self.state_mut(round_id)?;
        if !allowed_from.contains(&state.status) {
            return Err(RoundError::InvalidTransition {
                from: state.status,
                to,
            });
        }
        info!(round_id, from = %state.status, %to, "round transition");
        state.status = to;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
