// Blueprint - core/filter.rs
//
// Filter selection and search text for the directory side panel.
// Selections are recorded and displayed as chips; they do not narrow the
// record list.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::FilterCategory;
use std::collections::BTreeMap;

/// Selected values per category.
///
/// Each category keeps its values in selection order so chips appear in the
/// order the user picked them. Categories iterate in `FilterCategory` order.
///
/// Equality compares each category as a set: selection order only affects
/// chip layout.
#[derive(Debug, Clone, Default, Eq)]
pub struct FilterSelection {
    selected: BTreeMap<FilterCategory, Vec<String>>,
}

impl PartialEq for FilterSelection {
    fn eq(&self, other: &Self) -> bool {
        // Values are unique within a category and empty categories are
        // removed, so equal lengths plus containment means equal sets.
        self.selected.len() == other.selected.len()
            && self.selected.iter().all(|(&category, values)| {
                let theirs = other.values(category);
                values.len() == theirs.len() && values.iter().all(|v| theirs.contains(v))
            })
    }
}

impl FilterSelection {
    /// Add `value` if absent, remove it if present.
    ///
    /// Returns `true` when the value is selected after the call.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        let values = self.selected.entry(category).or_default();
        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
            if values.is_empty() {
                self.selected.remove(&category);
            }
            false
        } else {
            values.push(value.to_string());
            true
        }
    }

    pub fn contains(&self, category: FilterCategory, value: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Values selected in one category, in selection order.
    pub fn values(&self, category: FilterCategory) -> &[String] {
        self.selected
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of selected values across all categories.
    pub fn count(&self) -> usize {
        self.selected.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// One chip per selected value, categories in display order.
    pub fn chips(&self) -> Vec<FilterChip> {
        FilterCategory::all()
            .iter()
            .flat_map(|&category| {
                self.values(category)
                    .iter()
                    .enumerate()
                    .map(move |(index, value)| FilterChip {
                        category,
                        value: value.clone(),
                        index,
                    })
            })
            .collect()
    }
}

/// A removable chip in the active-filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub category: FilterCategory,
    pub value: String,
    /// Position within its category; drives the alternating chip style.
    pub index: usize,
}

impl FilterChip {
    /// Chip text, e.g. "Industry: Software".
    pub fn label(&self) -> String {
        format!("{}: {}", self.category.chip_label(), self.value)
    }

    /// Even-indexed chips use the accent style, odd ones the neutral style.
    pub fn is_accent(&self) -> bool {
        self.index % 2 == 0
    }
}

/// Complete filter state: category selections plus the search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selection: FilterSelection,

    /// Free-text search. Shown as a chip, not matched against records.
    pub search: String,
}

impl FilterState {
    /// Reset every category and the search text in one step.
    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.search.clear();
    }

    /// Number of selected category values (the "Filter By" badge).
    pub fn active_count(&self) -> usize {
        self.selection.count()
    }

    /// Whether the active-filter bar should be shown.
    pub fn is_active(&self) -> bool {
        !self.selection.is_empty() || !self.search.is_empty()
    }

    /// Caption shown when both category filters and a search are active.
    pub fn summary_caption(&self) -> Option<String> {
        let count = self.active_count();
        if count > 0 && !self.search.is_empty() {
            Some(format!(
                "Filtering companies by {count} criteria and search term"
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterCategory::Size, "Medium (51-500)");
        let before = sel.clone();

        assert!(sel.toggle(FilterCategory::Industry, "Gaming"));
        assert!(!sel.toggle(FilterCategory::Industry, "Gaming"));

        assert_eq!(sel, before);
    }

    #[test]
    fn test_toggle_selected_value_twice_restores_selection() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterCategory::Industry, "Software");
        sel.toggle(FilterCategory::Industry, "Fintech");
        let before = sel.clone();

        assert!(!sel.toggle(FilterCategory::Industry, "Software"));
        assert!(sel.toggle(FilterCategory::Industry, "Software"));

        assert_eq!(sel, before);
        // Re-selected value moves to the end of the chip row.
        assert_eq!(sel.values(FilterCategory::Industry), ["Fintech", "Software"]);
    }

    #[test]
    fn test_equality_ignores_order_but_not_contents() {
        let mut a = FilterSelection::default();
        a.toggle(FilterCategory::Location, "Austin");
        a.toggle(FilterCategory::Location, "Remote");

        let mut b = FilterSelection::default();
        b.toggle(FilterCategory::Location, "Remote");
        b.toggle(FilterCategory::Location, "Austin");
        assert_eq!(a, b);

        b.toggle(FilterCategory::Location, "Austin");
        b.toggle(FilterCategory::Location, "Boston");
        assert_ne!(a, b);

        let mut c = FilterSelection::default();
        c.toggle(FilterCategory::Industry, "Austin");
        c.toggle(FilterCategory::Industry, "Remote");
        assert_ne!(a, c);
    }

    #[test]
    fn test_count_sums_all_categories() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterCategory::Industry, "Software");
        sel.toggle(FilterCategory::Industry, "Fintech");
        sel.toggle(FilterCategory::Location, "Remote");
        sel.toggle(FilterCategory::Founded, "2010s");
        assert_eq!(sel.count(), 4);
        assert_eq!(sel.values(FilterCategory::Industry), ["Software", "Fintech"]);
        assert!(sel.values(FilterCategory::Size).is_empty());
    }

    #[test]
    fn test_chips_follow_category_then_selection_order() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterCategory::Location, "Remote");
        sel.toggle(FilterCategory::Industry, "Software");
        sel.toggle(FilterCategory::Location, "Austin");

        let labels: Vec<_> = sel.chips().iter().map(FilterChip::label).collect();
        assert_eq!(
            labels,
            vec!["Industry: Software", "Location: Remote", "Location: Austin"]
        );

        let chips = sel.chips();
        assert!(chips[1].is_accent());
        assert!(!chips[2].is_accent());
    }

    #[test]
    fn test_clear_all_resets_selection_and_search() {
        let mut state = FilterState::default();
        state.selection.toggle(FilterCategory::Industry, "AI/ML");
        state.search = "cloud".to_string();
        assert!(state.is_active());

        state.clear_all();
        assert_eq!(state.active_count(), 0);
        assert!(state.search.is_empty());
        assert!(!state.is_active());
    }

    #[test]
    fn test_search_alone_activates_bar_without_count() {
        let state = FilterState {
            search: "robo".to_string(),
            ..Default::default()
        };
        assert!(state.is_active());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.summary_caption(), None);
    }

    #[test]
    fn test_summary_caption_needs_both() {
        let mut state = FilterState::default();
        state.selection.toggle(FilterCategory::Size, "Startup (1-50)");
        assert_eq!(state.summary_caption(), None);
        state.search = "game".to_string();
        assert_eq!(
            state.summary_caption().as_deref(),
            Some("Filtering companies by 1 criteria and search term")
        );
    }
}
