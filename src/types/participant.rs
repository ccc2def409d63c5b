//! Participant snapshot handed to the engine for one round.

use crate::types::Category;

/// Opaque participant identifier
pub type ParticipantId = u64;

/// A checked-in, confirmed attendee eligible for the current round.
///
/// Read-only input to the engine. The caller builds these from its own
/// registration and check-in records and is responsible for filtering.
///
/// ## Example
///
/// ```
/// use reciprocal_matcher::types::{Category, Participant};
///
/// let p = Participant::new(
///     7,                      // id
///     Category::TopA,         // category
///     1703577600000,          // registered_at (ms)
/// );
/// assert!(p.can_pair_with(&Participant::new(8, Category::TopB, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Participant {
    /// Unique participant identifier
    pub id: ParticipantId,

    /// Preference category set at registration
    pub category: Category,

    /// Registration time in milliseconds.
    /// Earlier registration wins when a category must be truncated.
    pub registered_at: u64,
}

impl Participant {
    pub fn new(id: ParticipantId, category: Category, registered_at: u64) -> Self {
        Self {
            id,
            category,
            registered_at,
        }
    }

    /// Both participants are interested in each other's category
    pub fn can_pair_with(&self, other: &Participant) -> bool {
        self.id != other.id && self.category.can_pair_with(other.category)
    }
}
