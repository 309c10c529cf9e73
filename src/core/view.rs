// Blueprint - core/view.rs
//
// Visibility flags for collapsible regions: side panel sections and
// per-card detail expansion. Each flag controls exactly one region.

use crate::core::model::Section;
use std::collections::{BTreeSet, HashMap};

/// Expanded/collapsed state of every side panel section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedSections {
    flags: HashMap<Section, bool>,
}

impl Default for ExpandedSections {
    fn default() -> Self {
        Self {
            flags: Section::all()
                .iter()
                .map(|&s| (s, s.expanded_by_default()))
                .collect(),
        }
    }
}

impl ExpandedSections {
    pub fn is_expanded(&self, section: Section) -> bool {
        self.flags
            .get(&section)
            .copied()
            .unwrap_or_else(|| section.expanded_by_default())
    }

    /// Flip one section. Returns the new state.
    pub fn toggle(&mut self, section: Section) -> bool {
        let next = !self.is_expanded(section);
        self.flags.insert(section, next);
        next
    }
}

/// Card indices whose secondary details are showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCards {
    indices: BTreeSet<usize>,
}

impl ExpandedCards {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Flip one card. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Expanded indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults() {
        let sections = ExpandedSections::default();
        assert!(sections.is_expanded(Section::SortBy));
        assert!(sections.is_expanded(Section::FilterBy));
        assert!(!sections.is_expanded(Section::Industry));
        assert!(!sections.is_expanded(Section::Founded));
    }

    #[test]
    fn test_section_toggle_is_independent() {
        let mut sections = ExpandedSections::default();
        assert!(sections.toggle(Section::Location));
        assert!(!sections.toggle(Section::SortBy));

        assert!(sections.is_expanded(Section::Location));
        assert!(!sections.is_expanded(Section::SortBy));
        assert!(sections.is_expanded(Section::FilterBy));
        assert!(!sections.is_expanded(Section::Size));
    }

    #[test]
    fn test_card_toggle_affects_only_that_index() {
        let mut cards = ExpandedCards::default();
        assert!(cards.toggle(2));
        assert!(cards.is_expanded(2));
        assert!(!cards.is_expanded(1));
        assert!(!cards.is_expanded(3));
        assert!(!cards.toggle(2));
        assert_eq!(cards.iter().count(), 0);
    }

    #[test]
    fn test_card_iter_is_ascending() {
        let mut cards = ExpandedCards::default();
        cards.toggle(6);
        cards.toggle(1);
        assert_eq!(cards.iter().collect::<Vec<_>>(), vec![1, 6]);
    }
}
