//! Pairing type representing one table assignment within a round.
//!
//! ## SSZ Serialization
//!
//! Pairings are serialized using SSZ for deterministic encoding, so two runs
//! over the same participant snapshot produce byte-identical output.

use ssz_rs::prelude::*;

use crate::types::{Category, CategoryPair, Participant, ParticipantId};

/// Two participants seated at the same table for one round.
///
/// The pair is unordered in meaning; `first` is the participant drawn from
/// the first category of the pass that produced it.
///
/// ## SSZ Layout
///
/// Fixed-size container: 8 + 8 + 8 + 1 + 1 = 26 bytes.
///
/// ## Example
///
/// ```
/// use reciprocal_matcher::types::{Category, Pairing, Participant};
///
/// let a = Participant::new(1, Category::TopA, 0);
/// let b = Participant::new(2, Category::TopB, 0);
/// let pairing = Pairing::new(1, &a, &b);
///
/// assert_eq!(pairing.partner_of(1), Some(2));
/// assert!(pairing.is_valid_combination());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Pairing {
    /// 1-based table number, in creation order within the round
    pub table_number: u64,

    /// First participant ID
    pub first_id: u64,

    /// Second participant ID
    pub second_id: u64,

    /// First participant's category as u8
    pub first_category_raw: u8,

    /// Second participant's category as u8
    pub second_category_raw: u8,
}

impl Pairing {
    /// Create a pairing between two participants at the given table
    pub fn new(table_number: u64, first: &Participant, second: &Participant) -> Self {
        Self {
            table_number,
            first_id: first.id,
            second_id: second.id,
            first_category_raw: first.category.to_u8(),
            second_category_raw: second.category.to_u8(),
        }
    }

    pub fn first_category(&self) -> Option<Category> {
        Category::from_u8(self.first_category_raw)
    }

    pub fn second_category(&self) -> Option<Category> {
        Category::from_u8(self.second_category_raw)
    }

    /// Normalized category combination, if both raw categories decode
    pub fn category_pair(&self) -> Option<CategoryPair> {
        Some(CategoryPair::new(
            self.first_category()?,
            self.second_category()?,
        ))
    }

    /// Whether the two categories form a sanctioned combination
    pub fn is_valid_combination(&self) -> bool {
        self.first_id != self.second_id
            && self
                .category_pair()
                .map(|pair| pair.is_valid())
                .unwrap_or(false)
    }

    pub fn involves(&self, participant_id: ParticipantId) -> bool {
        self.first_id == participant_id || self.second_id == participant_id
    }

    /// The other participant at this table
    pub fn partner_of(&self, participant_id: ParticipantId) -> Option<ParticipantId> {
        if participant_id == self.first_id {
            Some(self.second_id)
        } else if participant_id == self.second_id {
            Some(self.first_id)
        } else {
            None
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
