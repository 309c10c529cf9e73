// Blueprint - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Company record (static directory fixture)
// =============================================================================

/// A single company shown in the directory.
///
/// Employee and funding figures are kept as display strings ("2,500",
/// "$1.2B") because they are only ever rendered, never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,

    /// Industry label; matches one of the industry filter options.
    pub industry: String,

    /// Size class label, e.g. "Large (501-5000)".
    pub size: String,

    pub location: String,

    /// Founding year as displayed ("2010").
    pub founded: String,

    /// Employee headcount as displayed ("2,500").
    pub employees: String,

    /// Total funding as displayed ("$150M").
    pub funding: String,

    /// Remote image URL for the card banner. Optional in catalog files.
    #[serde(default)]
    pub image: Option<String>,
}

// =============================================================================
// Filter categories
// =============================================================================

/// The four filterable facets of a company record.
///
/// Variant order is the display order of both the side panel sections and
/// the active-filter chips.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Industry,
    Size,
    Location,
    Founded,
}

impl FilterCategory {
    /// Returns all variants in display order.
    pub fn all() -> &'static [FilterCategory] {
        &[
            FilterCategory::Industry,
            FilterCategory::Size,
            FilterCategory::Location,
            FilterCategory::Founded,
        ]
    }

    /// Lower-case key, as used in config files and chip labels before
    /// capitalisation.
    pub fn key(&self) -> &'static str {
        match self {
            FilterCategory::Industry => "industry",
            FilterCategory::Size => "size",
            FilterCategory::Location => "location",
            FilterCategory::Founded => "founded",
        }
    }

    /// Title of the collapsible section in the side panel.
    pub fn section_title(&self) -> &'static str {
        match self {
            FilterCategory::Industry => "Industry",
            FilterCategory::Size => "Company Size",
            FilterCategory::Location => "Location",
            FilterCategory::Founded => "Founded",
        }
    }

    /// Chip prefix: the key with its first letter capitalised.
    pub fn chip_label(&self) -> &'static str {
        match self {
            FilterCategory::Industry => "Industry",
            FilterCategory::Size => "Size",
            FilterCategory::Location => "Location",
            FilterCategory::Founded => "Founded",
        }
    }

    /// Static option table for this category.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterCategory::Industry => &[
                "Software",
                "Hardware",
                "AI/ML",
                "E-commerce",
                "Fintech",
                "Healthcare",
                "Gaming",
                "Social Media",
            ],
            FilterCategory::Size => &[
                "Startup (1-50)",
                "Medium (51-500)",
                "Large (501-5000)",
                "Enterprise (5000+)",
            ],
            FilterCategory::Location => &[
                "San Francisco",
                "New York",
                "Seattle",
                "Austin",
                "Boston",
                "Los Angeles",
                "Chicago",
                "Remote",
            ],
            FilterCategory::Founded => &["2020s", "2010s", "2000s", "1990s", "Before 1990"],
        }
    }

    /// The collapsible section that holds this category's checkboxes.
    pub fn section(&self) -> Section {
        match self {
            FilterCategory::Industry => Section::Industry,
            FilterCategory::Size => Section::Size,
            FilterCategory::Location => Section::Location,
            FilterCategory::Founded => Section::Founded,
        }
    }
}

impl std::fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Sort key
// =============================================================================

/// Sort criterion selected in the side panel. Exactly one is active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Founded,
    Size,
    Valuation,
    Funding,
}

impl SortKey {
    /// Returns all variants in radio-list order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::Founded,
            SortKey::Size,
            SortKey::Valuation,
            SortKey::Funding,
        ]
    }

    /// Stable identifier for the key.
    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Founded => "founded",
            SortKey::Size => "size",
            SortKey::Valuation => "valuation",
            SortKey::Funding => "funding",
        }
    }

    /// Human-readable label for the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Company Name",
            SortKey::Founded => "Founded Date",
            SortKey::Size => "Company Size",
            SortKey::Valuation => "Valuation",
            SortKey::Funding => "Total Funding",
        }
    }
}

// =============================================================================
// View mode
// =============================================================================

/// Layout used for the company records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    /// Parse "grid" / "list" (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    /// Tooltip for the button that switches away from this mode.
    pub fn switch_hint(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Switch to List View",
            ViewMode::List => "Switch to Grid View",
        }
    }
}

// =============================================================================
// Collapsible sections
// =============================================================================

/// Every collapsible section header in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SortBy,
    FilterBy,
    Industry,
    Size,
    Location,
    Founded,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::SortBy,
            Section::FilterBy,
            Section::Industry,
            Section::Size,
            Section::Location,
            Section::Founded,
        ]
    }

    /// Whether the section starts expanded.
    pub fn expanded_by_default(&self) -> bool {
        matches!(self, Section::SortBy | Section::FilterBy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_are_unique() {
        for category in FilterCategory::all() {
            let options = category.options();
            let mut seen = std::collections::HashSet::new();
            for opt in options {
                assert!(seen.insert(*opt), "duplicate option {opt} in {category}");
            }
        }
    }

    #[test]
    fn test_category_section_mapping() {
        assert_eq!(FilterCategory::Size.section(), Section::Size);
        assert_eq!(FilterCategory::Size.section_title(), "Company Size");
        assert_eq!(FilterCategory::Location.chip_label(), "Location");
    }

    #[test]
    fn test_default_sort_is_name() {
        assert_eq!(SortKey::default(), SortKey::Name);
        assert_eq!(SortKey::all().len(), 5);
        assert_eq!(SortKey::Funding.label(), "Total Funding");
    }

    #[test]
    fn test_view_mode_toggle_and_parse() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::parse(" LIST "), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("table"), None);
    }

    #[test]
    fn test_default_expanded_sections() {
        let expanded: Vec<_> = Section::all()
            .iter()
            .filter(|s| s.expanded_by_default())
            .collect();
        assert_eq!(expanded, vec![&Section::SortBy, &Section::FilterBy]);
    }

    #[test]
    fn test_record_image_is_optional_in_json() {
        let json = r#"{"name":"Acme","industry":"Hardware","size":"Startup (1-50)",
            "location":"Austin","founded":"2022","employees":"12","funding":"$1M"}"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.image, None);
        assert_eq!(record.name, "Acme");
    }
}
