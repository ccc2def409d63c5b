//! # Reciprocal Matcher
//!
//! Category-aware reciprocal matching for timed speed-dating rounds.
//!
//! ## Architecture
//!
//! - **Types**: Category tables, Participant, Pairing, PairingRecord, RoundReceipt
//! - **Engine**: Categorize, balance capacity, limit, pair
//! - **Stats**: Read-only aggregations over persisted pairing records
//! - **Round**: Per-round lifecycle and at-most-once materialization
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical snapshots produce byte-identical pairings
//! 2. **Closed categories**: Four variants and static partner tables, no string matching
//! 3. **No Floating Point**: Rates use `rust_decimal`
//! 4. **Synchronous Execution**: The engine performs no I/O
//!
//! ## Example
//!
//! ```
//! use reciprocal_matcher::{compute_round_pairings, Category, Participant};
//!
//! let participants: Vec<Participant> = (0..8)
//!     .map(|i| Participant::new(i, Category::ALL[(i % 4) as usize], i))
//!     .collect();
//!
//! let pairings = compute_round_pairings(&participants);
//! assert_eq!(pairings.len(), 4);
//! assert!(pairings.iter().all(|p| p.is_valid_combination()));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Category, Participant, Pairing, RoundReceipt
pub mod types;

/// Matching engine: the four-stage pairing pipeline
pub mod engine;

/// Round and event statistics
pub mod stats;

/// Round lifecycle ledger
pub mod round;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Category, Pairing, PairingRecord, Participant, Response, RoundReceipt};
pub use engine::{compute_round_pairings, run_round, CapacityPlan, RoundOutcome};
pub use stats::{EventStatistics, RoundStatistics};
pub use round::{RoundError, RoundLedger, RoundStatus};
