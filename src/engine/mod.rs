//! Matching engine module.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Totality**: Every well-typed input yields a result, never an error
//! 3. **Synchronous Execution**: No I/O, no shared state between calls
//! 4. **Registration Priority**: Earliest registrations keep their seats
//!
//! ## Pipeline
//!
//! ```text
//! group_by_category -> calculate_capacity_limits -> apply_capacity_limits -> generate_optimal_pairings
//! ```
//!
//! ## Example
//!
//! ```
//! use reciprocal_matcher::engine::compute_round_pairings;
//! use reciprocal_matcher::types::{Category, Participant};
//!
//! let participants = vec![
//!     Participant::new(1, Category::TopA, 0),
//!     Participant::new(2, Category::TopB, 1),
//!     Participant::new(3, Category::BottomA, 2),
//!     Participant::new(4, Category::BottomB, 3),
//! ];
//!
//! let pairings = compute_round_pairings(&participants);
//! assert_eq!(pairings.len(), 2);
//! assert_eq!(pairings[0].table_number, 1);
//! ```

pub mod categorizer;
pub mod capacity;
pub mod pairing;
pub mod pipeline;

pub use categorizer::{group_by_category, CategoryGroups};
pub use capacity::{apply_capacity_limits, calculate_capacity_limits, CapacityPlan};
pub use pairing::generate_optimal_pairings;
pub use pipeline::{compute_round_pairings, run_round, MatchingSummary, RoundOutcome};
