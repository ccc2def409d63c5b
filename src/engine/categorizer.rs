//! Partition of the participant pool into the four category groups.

use std::ops::{Index, IndexMut};

use crate::types::{Category, Participant};

/// Participants grouped by category.
///
/// Every category is always present, possibly with an empty group, so callers
/// never special-case a missing key. Input order is preserved within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: [Vec<Participant>; 4],
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &[Participant] {
        &self.groups[category.index()]
    }

    /// Number of participants in a category
    pub fn count(&self, category: Category) -> usize {
        self.groups[category.index()].len()
    }

    /// Counts for every category, in [`Category::ALL`] order
    pub fn counts(&self) -> [usize; 4] {
        Category::ALL.map(|category| self.count(category))
    }

    /// Total participants across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(category, group)` in [`Category::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Participant])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Replace one category's group
    pub fn set(&mut self, category: Category, group: Vec<Participant>) {
        self.groups[category.index()] = group;
    }

    /// Take the groups out, indexed by [`Category::index`]
    pub fn into_inner(self) -> [Vec<Participant>; 4] {
        self.groups
    }
}

impl Index<Category> for CategoryGroups {
    type Output = Vec<Participant>;

    fn index(&self, category: Category) -> &Self::Output {
        &self.groups[category.index()]
    }
}

impl IndexMut<Category> for CategoryGroups {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.groups[category.index()]
    }
}

/// Partition participants by their own category.
///
/// Pure partition: no participant is dropped, duplicated or reclassified.
pub fn group_by_category<'a, I>(participants: I) -> CategoryGroups
where
    I: IntoIterator<Item = &'a Participant>,
{
    participants
        .into_iter()
        .fold(CategoryGroups::new(), |mut groups, participant| {
            groups[participant.category].push(*participant);
            groups
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_all_keys() {
        let groups = group_by_category(&Vec::<Participant>::new());
        for category in Category::ALL {
            assert!(groups.get(category).is_empty());
        }
        assert!(groups.is_empty());
        assert_eq!(groups.iter().count(), 4);
    }

    #[test]
    fn test_partition_preserves_order() {
        let participants = vec![
            Participant::new(1, Category::TopA, 5),
            Participant::new(2, Category::BottomB, 1),
            Participant::new(3, Category::TopA, 0),
            Participant::new(4, Category::TopB, 2),
        ];
        let groups = group_by_category(&participants);

        let top_a: Vec<u64> = groups[Category::TopA].iter().map(|p| p.id).collect();
        assert_eq!(top_a, vec![1, 3]);
        assert_eq!(groups.counts(), [2, 1, 0, 1]);
        assert_eq!(groups.total(), participants.len());
    }

    #[test]
    fn test_each_participant_under_own_category() {
        let participants: Vec<Participant> = (0..40)
            .map(|i| Participant::new(i, Category::ALL[(i % 4) as usize], i))
            .collect();
        let groups = group_by_category(&participants);
        for (category, group) in groups.iter() {
            assert_eq!(group.len(), 10);
            assert!(group.iter().all(|p| p.category == category));
        }
    }
}
