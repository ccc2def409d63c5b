//! Core data types for the reciprocal matcher
//!
//! Types that leave the engine (pairings, receipts) implement SSZ
//! serialization for deterministic encoding.
//!
//! ## Types
//!
//! - [`Category`]: One of four preference categories
//! - [`Participant`]: Eligible attendee snapshot
//! - [`Pairing`]: Two participants at one table
//! - [`PairingRecord`]: Persisted pairing with both sides' responses
//! - [`RoundReceipt`]: Round summary with a deterministic root

mod category;
mod participant;
mod pairing;
mod response;
mod receipt;

pub use category::{
    Category, CategoryPair, CategorySide, PairingPass, PassKind, Tier, PAIRING_PASSES,
    RECIPROCAL_PARTNERS,
};
pub use participant::{Participant, ParticipantId};
pub use pairing::Pairing;
pub use response::{PairingRecord, Response, ResponseError, SideResponse, MAX_RATING, MIN_RATING};
pub use receipt::{ReceiptError, RoundReceipt};
