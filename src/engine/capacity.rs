//! Capacity balancing and limiting.
//!
//! ## Balancing
//!
//! For each category `C`:
//!
//! ```text
//! reciprocal_capacity(C) = min(count(C), Σ count(P) for P in partners(C))
//! global_limit           = min over C of reciprocal_capacity(C)
//! limit(C)               = min(count(C), global_limit)
//! ```
//!
//! The single most constrained category sets a uniform ceiling for all four.
//! An empty category drives the ceiling to zero, which is a valid outcome.
//!
//! ## Limiting
//!
//! Groups over their limit are sorted by registration time and truncated,
//! so the earliest registrations keep their seats.

use crate::engine::CategoryGroups;
use crate::types::Category;

/// Per-category capacity computed for one planning pass.
///
/// Invariant: `limit(C) <= count(C)` and `limit(C) <= global_limit` for every C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityPlan {
    limits: [usize; 4],
    reciprocal: [usize; 4],
    global_limit: usize,
}

impl CapacityPlan {
    /// Maximum participants of `category` that may be paired
    pub fn limit(&self, category: Category) -> usize {
        self.limits[category.index()]
    }

    /// `min(count(C), partner supply)` before the uniform ceiling is applied
    pub fn reciprocal_capacity(&self, category: Category) -> usize {
        self.reciprocal[category.index()]
    }

    /// Uniform ceiling shared by all categories
    pub fn global_limit(&self) -> usize {
        self.global_limit
    }

    /// Limits in [`Category::ALL`] order
    pub fn limits(&self) -> [usize; 4] {
        self.limits
    }

    /// Sum of all category limits
    pub fn total(&self) -> usize {
        self.limits.iter().sum()
    }

    /// Smallest per-category limit; an upper bound on the pairings of any single category
    pub fn max_possible_matches(&self) -> usize {
        self.limits.iter().copied().min().unwrap_or(0)
    }
}

/// Compute per-category capacity limits from reciprocal interest.
pub fn calculate_capacity_limits(grouped: &CategoryGroups) -> CapacityPlan {
    let counts = grouped.counts();

    let reciprocal = Category::ALL.map(|category| {
        let partner_supply: usize = category
            .reciprocal_partners()
            .iter()
            .map(|partner| counts[partner.index()])
            .sum();
        counts[category.index()].min(partner_supply)
    });

    let global_limit = reciprocal.iter().copied().min().unwrap_or(0);
    let limits = counts.map(|count| count.min(global_limit));

    CapacityPlan {
        limits,
        reciprocal,
        global_limit,
    }
}

/// Truncate each group to its limit, keeping the earliest registrations.
///
/// Groups at or under their limit pass through unchanged. The sort is stable,
/// so equal timestamps keep their input order.
pub fn apply_capacity_limits(grouped: CategoryGroups, plan: &CapacityPlan) -> CategoryGroups {
    let mut limited = CategoryGroups::new();

    for (index, mut group) in grouped.into_inner().into_iter().enumerate() {
        let category = Category::ALL[index];
        let limit = plan.limit(category);

        if group.len() > limit {
            group.sort_by_key(|participant| participant.registered_at);
            group.truncate(limit);
        }
        limited.set(category, group);
    }

    limited
}

// ============================================================================
// Unit Tests
// ============================================================================
