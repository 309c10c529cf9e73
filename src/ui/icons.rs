// Blueprint - ui/icons.rs
//
// Glyphs used as icons. All are covered by egui's bundled fonts.

pub const CHEVRON_DOWN: &str = "\u{23f7}";
pub const CHEVRON_RIGHT: &str = "\u{23f5}";
pub const CHEVRON_UP: &str = "\u{23f6}";
pub const FILTER: &str = "\u{2261}";
pub const SEARCH: &str = "\u{1f50d}";
pub const BUILDING: &str = "\u{1f3e2}";
pub const USERS: &str = "\u{1f465}";
pub const MAP_PIN: &str = "\u{1f4cd}";
pub const CALENDAR: &str = "\u{1f4c5}";
pub const CLOSE: &str = "\u{2715}";
pub const HASH: &str = "#";
pub const SUN: &str = "\u{2600}";
pub const MOON: &str = "\u{1f319}";
pub const GRID: &str = "\u{25a6}";
pub const LIST: &str = "\u{2630}";
pub const DOLLAR: &str = "$";

/// Icon for a filter category's section header.
pub fn category(category: crate::core::model::FilterCategory) -> &'static str {
    use crate::core::model::FilterCategory;
    match category {
        FilterCategory::Industry => BUILDING,
        FilterCategory::Size => USERS,
        FilterCategory::Location => MAP_PIN,
        FilterCategory::Founded => CALENDAR,
    }
}
