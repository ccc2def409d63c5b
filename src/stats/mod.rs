//! Read-only statistics over persisted pairing records.
//!
//! Nothing here takes part in allocation. Every figure is a single pass over
//! the records the caller hands in.
//!
//! ## Percentages
//!
//! Rates are `rust_decimal::Decimal` rounded to 2 decimal places with
//! banker's rounding, and are zero when the denominator is zero.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::types::{Category, CategoryPair, PairingRecord, ParticipantId, Response};

/// `numerator / denominator * 100`, rounded to 2 dp; zero for an empty denominator.
pub fn percentage(numerator: u64, denominator: u64) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(numerator) * Decimal::ONE_HUNDRED / Decimal::from(denominator)).round_dp(2)
}

fn average(sum: u64, count: u64) -> Option<Decimal> {
    if count == 0 {
        None
    } else {
        Some((Decimal::from(sum) / Decimal::from(count)).round_dp(2))
    }
}

// ============================================================================
// Round statistics
// ============================================================================

/// Summary of one round's pairings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundStatistics {
    pub total_matches: u64,
    /// Pairings where both sides answered
    pub completed_responses: u64,
    /// Pairings where both sides said yes
    pub mutual_matches: u64,
    pub category_distribution: BTreeMap<CategoryPair, u64>,
    /// `completed_responses / total_matches * 100`
    pub response_rate: Decimal,
    /// `mutual_matches / total_matches * 100`
    pub mutual_match_rate: Decimal,
}

impl RoundStatistics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PairingRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.add(record);
        }
        stats.response_rate = percentage(stats.completed_responses, stats.total_matches);
        stats.mutual_match_rate = percentage(stats.mutual_matches, stats.total_matches);
        stats
    }

    fn add(&mut self, record: &PairingRecord) {
        self.total_matches += 1;
        if record.both_responded() {
            self.completed_responses += 1;
        }
        if record.is_mutual() {
            self.mutual_matches += 1;
        }
        if let Some(pair) = record.category_pair() {
            *self.category_distribution.entry(pair).or_insert(0) += 1;
        }
    }
}

// ============================================================================
// Category pair statistics
// ============================================================================

/// Outcomes for one category combination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryStatistics {
    pub total_matches: u64,
    pub mutual_matches: u64,
    pub both_responded: u64,
    pub mutual_match_rate: Decimal,
    /// Pairings where both sides answered, over all pairings of this combination
    pub response_rate: Decimal,
}

impl CategoryStatistics {
    /// Breakdown keyed by category combination; records with unknown categories are skipped
    pub fn by_pair<'a, I>(records: I) -> BTreeMap<CategoryPair, Self>
    where
        I: IntoIterator<Item = &'a PairingRecord>,
    {
        let mut pairs: BTreeMap<CategoryPair, Self> = BTreeMap::new();
        for record in records {
            let Some(pair) = record.category_pair() else {
                continue;
            };
            let stats = pairs.entry(pair).or_default();
            stats.total_matches += 1;
            if record.is_mutual() {
                stats.mutual_matches += 1;
            }
            if record.both_responded() {
                stats.both_responded += 1;
            }
        }
        for stats in pairs.values_mut() {
            stats.mutual_match_rate = percentage(stats.mutual_matches, stats.total_matches);
            stats.response_rate = percentage(stats.both_responded, stats.total_matches);
        }
        pairs
    }
}

// ============================================================================
// Ratings and timing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingStatistics {
    pub total_ratings: u64,
    pub average_rating: Option<Decimal>,
    /// Count per rating value
    pub distribution: BTreeMap<u8, u64>,
}

impl RatingStatistics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PairingRecord>,
    {
        let mut stats = Self::default();
        let mut sum = 0u64;
        for record in records {
            for rating in [record.first.rating, record.second.rating].into_iter().flatten() {
                sum += u64::from(rating);
                stats.total_ratings += 1;
                *stats.distribution.entry(rating).or_insert(0) += 1;
            }
        }
        stats.average_rating = average(sum, stats.total_ratings);
        stats
    }
}

/// How long participants took to answer after a pairing was created.
///
/// All durations are in milliseconds. A response stamped before its record
/// was created counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimingStatistics {
    pub total_responses: u64,
    pub average_response_ms: Option<Decimal>,
    pub fastest_response_ms: Option<u64>,
    pub slowest_response_ms: Option<u64>,
}

impl TimingStatistics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PairingRecord>,
    {
        let mut stats = Self::default();
        let mut sum = 0u64;
        for elapsed in records.into_iter().flat_map(|record| record.response_times()) {
            stats.total_responses += 1;
            sum += elapsed;
            stats.fastest_response_ms = Some(stats.fastest_response_ms.map_or(elapsed, |f| f.min(elapsed)));
            stats.slowest_response_ms = Some(stats.slowest_response_ms.map_or(elapsed, |s| s.max(elapsed)));
        }
        stats.average_response_ms = average(sum, stats.total_responses);
        stats
    }
}

// ============================================================================
// Attendee response rates
// ============================================================================

/// Answering behaviour of one participant, as listed in event statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeResponseRate {
    pub participant_id: ParticipantId,
    pub category: Option<Category>,
    pub total_matches: u64,
    pub responses_given: u64,
    pub yes_given: u64,
    /// Responses given over pairings
    pub response_rate: Decimal,
    /// Yes answers over responses given
    pub yes_rate: Decimal,
}

impl AttendeeResponseRate {
    /// One entry per participant seen in `records`, highest response rate
    /// first. Ties keep ascending id order.
    pub fn from_records(records: &[PairingRecord]) -> Vec<Self> {
        let mut by_id: BTreeMap<ParticipantId, Self> = BTreeMap::new();
        for record in records {
            for (id, side) in [
                (record.pairing.first_id, &record.first),
                (record.pairing.second_id, &record.second),
            ] {
                let entry = by_id.entry(id).or_insert_with(|| Self {
                    participant_id: id,
                    category: record.category_of(id),
                    total_matches: 0,
                    responses_given: 0,
                    yes_given: 0,
                    response_rate: Decimal::ZERO,
                    yes_rate: Decimal::ZERO,
                });
                entry.total_matches += 1;
                if side.response.is_answered() {
                    entry.responses_given += 1;
                }
                if side.response == Response::Yes {
                    entry.yes_given += 1;
                }
            }
        }

        let mut rates: Vec<Self> = by_id
            .into_values()
            .map(|mut entry| {
                entry.response_rate = percentage(entry.responses_given, entry.total_matches);
                entry.yes_rate = percentage(entry.yes_given, entry.responses_given);
                entry
            })
            .collect();
        rates.sort_by(|a, b| b.response_rate.cmp(&a.response_rate));
        rates
    }
}

// ============================================================================
// Event statistics
// ============================================================================

/// Summary across every round of an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventStatistics {
    pub total_matches: u64,
    pub mutual_matches: u64,
    pub matches_with_both_responses: u64,
    /// Answered sides over all possible sides (two per pairing)
    pub response_rate: Decimal,
    /// Mutual matches over all pairings
    pub mutual_match_rate: Decimal,
    /// Mutual matches over pairings where both sides answered
    pub success_rate: Decimal,
    /// Mean of all ratings given, if any
    pub average_rating: Option<Decimal>,
    pub category_distribution: BTreeMap<CategoryPair, u64>,
    pub categories: BTreeMap<CategoryPair, CategoryStatistics>,
    pub ratings: RatingStatistics,
    pub timing: TimingStatistics,
    pub attendees: Vec<AttendeeResponseRate>,
    /// Per-round breakdown keyed by round id
    pub rounds: BTreeMap<u64, RoundStatistics>,
}

impl EventStatistics {
    pub fn from_records(records: &[PairingRecord]) -> Self {
        let mut by_round: BTreeMap<u64, Vec<&PairingRecord>> = BTreeMap::new();
        let mut answered_sides = 0u64;

        for record in records {
            by_round.entry(record.round_id).or_default().push(record);
            answered_sides += record.answered_sides();
        }

        let overall = RoundStatistics::from_records(records);
        let ratings = RatingStatistics::from_records(records);
        let rounds = by_round
            .into_iter()
            .map(|(round_id, records)| (round_id, RoundStatistics::from_records(records)))
            .collect();

        Self {
            total_matches: overall.total_matches,
            mutual_matches: overall.mutual_matches,
            matches_with_both_responses: overall.completed_responses,
            response_rate: percentage(answered_sides, overall.total_matches * 2),
            mutual_match_rate: overall.mutual_match_rate,
            success_rate: percentage(overall.mutual_matches, overall.completed_responses),
            average_rating: ratings.average_rating,
            category_distribution: overall.category_distribution,
            categories: CategoryStatistics::by_pair(records),
            ratings,
            timing: TimingStatistics::from_records(records),
            attendees: AttendeeResponseRate::from_records(records),
            rounds,
        }
    }
}

// ============================================================================
// Participant summary
// ============================================================================

/// One participant's results across the records given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSummary {
    pub participant_id: ParticipantId,
    pub total_matches: u64,
    pub responses_given: u64,
    pub yes_given: u64,
    pub no_given: u64,
    pub mutual_matches: u64,
    /// Responses given over pairings
    pub response_rate: Decimal,
    /// Mutual matches over responses given
    pub success_rate: Decimal,
    pub average_rating_given: Option<Decimal>,
    pub average_rating_received: Option<Decimal>,
    pub ratings_given_count: u64,
    pub ratings_received_count: u64,
}

impl ParticipantSummary {
    /// Summarize `participant_id`; records they are not part of are ignored.
    pub fn from_records(participant_id: ParticipantId, records: &[PairingRecord]) -> Self {
        let mut total_matches = 0u64;
        let mut responses_given = 0u64;
        let mut yes_given = 0u64;
        let mut no_given = 0u64;
        let mut mutual_matches = 0u64;
        let (mut given_sum, mut given_count) = (0u64, 0u64);
        let (mut received_sum, mut received_count) = (0u64, 0u64);

        for record in records {
            let (Some(mine), Some(theirs)) = (
                record.side_of(participant_id),
                record.partner_side_of(participant_id),
            ) else {
                continue;
            };

            total_matches += 1;
            match mine.response {
                Response::Yes => {
                    responses_given += 1;
                    yes_given += 1;
                }
                Response::No => {
                    responses_given += 1;
                    no_given += 1;
                }
                Response::NoResponse => {}
            }
            if record.is_mutual() {
                mutual_matches += 1;
            }
            if let Some(rating) = mine.rating {
                given_sum += u64::from(rating);
                given_count += 1;
            }
            if let Some(rating) = theirs.rating {
                received_sum += u64::from(rating);
                received_count += 1;
            }
        }

        Self {
            participant_id,
            total_matches,
            responses_given,
            yes_given,
            no_given,
            mutual_matches,
            response_rate: percentage(responses_given, total_matches),
            success_rate: percentage(mutual_matches, responses_given),
            average_rating_given: average(given_sum, given_count),
            average_rating_received: average(received_sum, received_count),
            ratings_given_count: given_count,
            ratings_received_count: received_count,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
