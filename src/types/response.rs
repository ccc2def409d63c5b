//! Persisted pairing records and the per-side responses written after a round.
//!
//! The engine never manages response state. These types describe what the
//! caller stores once a [`Pairing`] has been persisted, and are the input to
//! the statistics module.

use thiserror::Error;

use crate::types::{Category, CategoryPair, Pairing, ParticipantId};

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// A participant's answer about their partner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Response {
    #[default]
    NoResponse,
    Yes,
    No,
}

impl Response {
    pub fn is_answered(self) -> bool {
        self != Response::NoResponse
    }
}

/// Errors raised when recording a response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("participant {participant_id} is not seated at table {table_number}")]
    ParticipantNotInPairing {
        participant_id: ParticipantId,
        table_number: u64,
    },

    #[error("rating {rating} outside 1..=5")]
    InvalidRating { rating: u8 },
}

/// One participant's side of a pairing record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SideResponse {
    pub response: Response,
    /// Rating in `MIN_RATING..=MAX_RATING`
    pub rating: Option<u8>,
    pub notes: Option<String>,
    /// Time the response was recorded, in milliseconds
    pub responded_at: Option<u64>,
}

/// A persisted pairing together with both sides' responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingRecord {
    /// Round the pairing belongs to
    pub round_id: u64,
    pub pairing: Pairing,
    /// Time the pairing was persisted, in milliseconds
    pub created_at: u64,
    pub first: SideResponse,
    pub second: SideResponse,
}

impl PairingRecord {
    /// Wrap a freshly created pairing; both sides start unanswered
    pub fn new(round_id: u64, pairing: Pairing, created_at: u64) -> Self {
        Self {
            round_id,
            pairing,
            created_at,
            first: SideResponse::default(),
            second: SideResponse::default(),
        }
    }

    /// Record one participant's response.
    ///
    /// Notes and rating only overwrite the stored values when provided.
    ///
    /// # Errors
    ///
    /// - [`ResponseError::InvalidRating`] if `rating` is outside 1..=5
    /// - [`ResponseError::ParticipantNotInPairing`] if the participant is not at this table
    pub fn set_response(
        &mut self,
        participant_id: ParticipantId,
        response: Response,
        rating: Option<u8>,
        notes: Option<String>,
        responded_at: u64,
    ) -> Result<(), ResponseError> {
        if let Some(rating) = rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(ResponseError::InvalidRating { rating });
            }
        }

        let side = self.side_mut(participant_id)?;
        side.response = response;
        side.responded_at = Some(responded_at);
        if rating.is_some() {
            side.rating = rating;
        }
        if notes.as_deref().is_some_and(|n| !n.is_empty()) {
            side.notes = notes;
        }
        Ok(())
    }

    fn side_mut(&mut self, participant_id: ParticipantId) -> Result<&mut SideResponse, ResponseError> {
        if participant_id == self.pairing.first_id {
            Ok(&mut self.first)
        } else if participant_id == self.pairing.second_id {
            Ok(&mut self.second)
        } else {
            Err(ResponseError::ParticipantNotInPairing {
                participant_id,
                table_number: self.pairing.table_number,
            })
        }
    }

    /// The side written by `participant_id`
    pub fn side_of(&self, participant_id: ParticipantId) -> Option<&SideResponse> {
        if participant_id == self.pairing.first_id {
            Some(&self.first)
        } else if participant_id == self.pairing.second_id {
            Some(&self.second)
        } else {
            None
        }
    }

    /// The side written by `participant_id`'s partner
    pub fn partner_side_of(&self, participant_id: ParticipantId) -> Option<&SideResponse> {
        self.pairing
            .partner_of(participant_id)
            .and_then(|partner| self.side_of(partner))
    }

    pub fn response_for(&self, participant_id: ParticipantId) -> Option<Response> {
        self.side_of(participant_id).map(|side| side.response)
    }

    pub fn partner_of(&self, participant_id: ParticipantId) -> Option<ParticipantId> {
        self.pairing.partner_of(participant_id)
    }

    /// Both participants said yes
    pub fn is_mutual(&self) -> bool {
        self.first.response == Response::Yes && self.second.response == Response::Yes
    }

    pub fn both_responded(&self) -> bool {
        self.first.response.is_answered() && self.second.response.is_answered()
    }

    pub fn either_said_no(&self) -> bool {
        self.first.response == Response::No || self.second.response == Response::No
    }

    /// Number of sides that have answered (0, 1 or 2)
    pub fn answered_sides(&self) -> u64 {
        [self.first.response, self.second.response]
            .iter()
            .filter(|r| r.is_answered())
            .count() as u64
    }

    /// Milliseconds between creation and each recorded response
    pub fn response_times(&self) -> impl Iterator<Item = u64> + '_ {
        [self.first.responded_at, self.second.responded_at]
            .into_iter()
            .flatten()
            .map(|at| at.saturating_sub(self.created_at))
    }

    pub fn category_pair(&self) -> Option<CategoryPair> {
        self.pairing.category_pair()
    }

    pub fn category_of(&self, participant_id: ParticipantId) -> Option<Category> {
        if participant_id == self.pairing.first_id {
            self.pairing.first_category()
        } else if participant_id == self.pairing.second_id {
            self.pairing.second_category()
        } else {
            None
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
