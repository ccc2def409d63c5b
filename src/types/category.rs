//! Participant categories and the reciprocal-interest tables.
//!
//! ## Axes
//!
//! A [`Category`] is the product of two binary axes:
//!
//! | Category  | Tier   | Side |
//! |-----------|--------|------|
//! | `TopA`    | Top    | A    |
//! | `TopB`    | Top    | B    |
//! | `BottomA` | Bottom | A    |
//! | `BottomB` | Bottom | B    |
//!
//! A category is interested in the *other side, both tiers*. Interest is
//! always reciprocal in the tables below, so `a` can pair with `b` exactly
//! when `b` appears in `a`'s partner list.
//!
//! ## Pairing Passes
//!
//! [`PAIRING_PASSES`] fixes the order in which the pairing generator drains
//! category combinations. Same-tier pairs come first, cross-tier pairs last.

/// Tier axis of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Top,
    Bottom,
}

/// Side axis of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategorySide {
    A,
    B,
}

impl CategorySide {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            CategorySide::A => CategorySide::B,
            CategorySide::B => CategorySide::A,
        }
    }
}

// ============================================================================
// Category enum
// ============================================================================

/// One of the four preference categories a participant registers under.
///
/// Represented as u8 for SSZ compatibility:
/// - TopA = 0
/// - TopB = 1
/// - BottomA = 2
/// - BottomB = 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    #[default]
    TopA,
    TopB,
    BottomA,
    BottomB,
}

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 4] = [
        Category::TopA,
        Category::TopB,
        Category::BottomA,
        Category::BottomB,
    ];

    /// Build a category from its two axes
    pub fn from_axes(tier: Tier, side: CategorySide) -> Self {
        match (tier, side) {
            (Tier::Top, CategorySide::A) => Category::TopA,
            (Tier::Top, CategorySide::B) => Category::TopB,
            (Tier::Bottom, CategorySide::A) => Category::BottomA,
            (Tier::Bottom, CategorySide::B) => Category::BottomB,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Category::TopA | Category::TopB => Tier::Top,
            Category::BottomA | Category::BottomB => Tier::Bottom,
        }
    }

    pub fn side(self) -> CategorySide {
        match self {
            Category::TopA | Category::BottomA => CategorySide::A,
            Category::TopB | Category::BottomB => CategorySide::B,
        }
    }

    /// Position of this category in [`Category::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self.to_u8() as usize
    }

    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Category::TopA => 0,
            Category::TopB => 1,
            Category::BottomA => 2,
            Category::BottomB => 3,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Category::TopA),
            1 => Some(Category::TopB),
            2 => Some(Category::BottomA),
            3 => Some(Category::BottomB),
            _ => None,
        }
    }

    /// Stable lowercase label, used in logs and reports
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TopA => "top_a",
            Category::TopB => "top_b",
            Category::BottomA => "bottom_a",
            Category::BottomB => "bottom_b",
        }
    }

    /// Categories this category is willing to be paired with, in preference order.
    ///
    /// Same-tier partner first, then the cross-tier partner.
    pub fn reciprocal_partners(self) -> [Category; 2] {
        RECIPROCAL_PARTNERS[self.index()]
    }

    /// Whether a member of `self` is interested in meeting a member of `other`
    pub fn is_interested_in(self, other: Category) -> bool {
        self.reciprocal_partners().contains(&other)
    }

    /// Whether the two categories form one of the sanctioned combinations
    pub fn can_pair_with(self, other: Category) -> bool {
        self.is_interested_in(other) && other.is_interested_in(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reciprocal partner table, indexed by [`Category::index`].
pub const RECIPROCAL_PARTNERS: [[Category; 2]; 4] = [
    // TopA
    [Category::TopB, Category::BottomB],
    // TopB
    [Category::TopA, Category::BottomA],
    // BottomA
    [Category::BottomB, Category::TopB],
    // BottomB
    [Category::BottomA, Category::TopA],
];

// ============================================================================
// Pairing passes
// ============================================================================

/// Strength of a pairing combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PassKind {
    /// Both participants share a tier
    SameTier,
    /// Participants come from different tiers
    CrossTier,
}

/// One draining pass of the pairing generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingPass {
    pub first: Category,
    pub second: Category,
    pub kind: PassKind,
}

/// Pass order used by the pairing generator.
///
/// 1. TopA × TopB
/// 2. BottomA × BottomB
/// 3. TopA × BottomB
/// 4. BottomA × TopB
pub const PAIRING_PASSES: [PairingPass; 4] = [
    PairingPass {
        first: Category::TopA,
        second: Category::TopB,
        kind: PassKind::SameTier,
    },
    PairingPass {
        first: Category::BottomA,
        second: Category::BottomB,
        kind: PassKind::SameTier,
    },
    PairingPass {
        first: Category::TopA,
        second: Category::BottomB,
        kind: PassKind::CrossTier,
    },
    PairingPass {
        first: Category::BottomA,
        second: Category::TopB,
        kind: PassKind::CrossTier,
    },
];

// ============================================================================
// CategoryPair
// ============================================================================

/// Unordered combination of two categories, normalized so `low <= high`.
///
/// Used as the key of category-distribution reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryPair {
    pub low: Category,
    pub high: Category,
}

impl CategoryPair {
    pub fn new(a: Category, b: Category) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Whether this combination is one of the four sanctioned ones
    pub fn is_valid(&self) -> bool {
        self.low.can_pair_with(self.high)
    }
}

impl std::fmt::Display for CategoryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.low, self.high)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_conversion() {
        for category in Category::ALL {
            assert_eq!(Category::from_u8(category.to_u8()), Some(category));
        }
        assert_eq!(Category::from_u8(4), None);
    }

    #[test]
    fn test_category_axes() {
        for category in Category::ALL {
            assert_eq!(Category::from_axes(category.tier(), category.side()), category);
        }
        assert_eq!(CategorySide::A.opposite(), CategorySide::B);
    }

    #[test]
    fn test_partners_are_other_side_both_tiers() {
        for category in Category::ALL {
            let partners = category.reciprocal_partners();
            assert!(partners.iter().all(|p| p.side() == category.side().opposite()));
            assert_ne!(partners[0].tier(), partners[1].tier());
            // Same-tier partner is listed first
            assert_eq!(partners[0].tier(), category.tier());
        }
    }

    #[test]
    fn test_interest_is_reciprocal() {
        for a in Category::ALL {
            for b in Category::ALL {
                assert_eq!(a.is_interested_in(b), b.is_interested_in(a));
            }
        }
    }

    #[test]
    fn test_same_category_never_pairs() {
        for category in Category::ALL {
            assert!(!category.can_pair_with(category));
        }
        assert!(!Category::TopA.can_pair_with(Category::BottomA));
        assert!(!Category::TopB.can_pair_with(Category::BottomB));
    }

    #[test]
    fn test_passes_cover_exactly_valid_combinations() {
        let mut valid: Vec<CategoryPair> = Vec::new();
        for a in Category::ALL {
            for b in Category::ALL {
                let pair = CategoryPair::new(a, b);
                if pair.is_valid() && !valid.contains(&pair) {
                    valid.push(pair);
                }
            }
        }
        assert_eq!(valid.len(), 4);

        for pass in PAIRING_PASSES {
            let pair = CategoryPair::new(pass.first, pass.second);
            assert!(valid.contains(&pair));
            let same_tier = pass.first.tier() == pass.second.tier();
            assert_eq!(same_tier, pass.kind == PassKind::SameTier);
        }
    }

    #[test]
    fn test_category_pair_normalized() {
        let a = CategoryPair::new(Category::BottomB, Category::TopA);
        let b = CategoryPair::new(Category::TopA, Category::BottomB);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "top_a + bottom_b");
    }
}
