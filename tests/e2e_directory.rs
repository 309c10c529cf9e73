// Blueprint - tests/e2e_directory.rs
//
// End-to-end tests for the directory workflow: catalog loading from disk,
// config loading, then the side panel, filter chip and card interactions
// driven through AppState exactly as the GUI drives them.

use blueprint::app::catalog_mgr;
use blueprint::app::navigation::Route;
use blueprint::app::state::AppState;
use blueprint::core::model::{FilterCategory, Section, SortKey, ViewMode};
use blueprint::platform::config::load_config;
use blueprint::util::error::CatalogError;
use std::io::Write;

// =============================================================================
// Helpers
// =============================================================================

fn sample_state() -> AppState {
    let (companies, err) = catalog_mgr::load_companies(None);
    assert!(err.is_none());
    AppState::new(companies, false)
}

fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// =============================================================================
// Catalog + config E2E
// =============================================================================

#[test]
fn e2e_catalog_file_replaces_samples() {
    let file = write_temp(
        r#"[
            {"name": "Acme", "industry": "Hardware", "size": "Startup (1-50)",
             "location": "Remote", "founded": "2022", "employees": "12",
             "funding": "$1M"}
        ]"#,
        ".json",
    );

    let (companies, err) = catalog_mgr::load_companies(Some(file.path()));
    assert!(err.is_none(), "unexpected error: {err:?}");
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Acme");
    assert!(companies[0].image.is_none());
}

#[test]
fn e2e_broken_catalog_falls_back_to_samples() {
    let file = write_temp("{ not json", ".json");

    let (companies, err) = catalog_mgr::load_companies(Some(file.path()));
    assert_eq!(companies.len(), 8);
    assert!(matches!(err, Some(CatalogError::JsonParse { .. })));
}

#[test]
fn e2e_config_file_sets_initial_preferences() {
    let file = write_temp(
        "[ui]\ntheme = \"dark\"\nview_mode = \"list\"\nmenu_open = true\n",
        ".toml",
    );

    let (config, warnings) = load_config(file.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert!(config.dark_mode);
    assert_eq!(config.view_mode, ViewMode::List);
    assert!(config.menu_open);
}

// =============================================================================
// Side panel + filters E2E
// =============================================================================

#[test]
fn e2e_two_filters_give_count_and_chips() {
    let mut state = sample_state();
    state.open_menu();

    state.toggle_filter(FilterCategory::Industry, "Software");
    state.toggle_filter(FilterCategory::Location, "Remote");

    assert_eq!(state.active_filter_count(), 2);
    assert_eq!(state.filter_by_title(), "Filter By (2)");

    let labels: Vec<String> = state.active_chips().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Industry: Software", "Location: Remote"]);

    // Decorative filters: every record is still shown.
    assert_eq!(state.companies.len(), 8);
}

#[test]
fn e2e_toggle_twice_restores_selection() {
    let mut state = sample_state();
    state.toggle_filter(FilterCategory::Size, "Medium (51-500)");
    let before = state.filters.clone();

    state.toggle_filter(FilterCategory::Founded, "2020s");
    state.toggle_filter(FilterCategory::Founded, "2020s");

    assert_eq!(state.filters, before);
}

#[test]
fn e2e_toggle_selected_value_twice_restores_selection() {
    let mut state = sample_state();
    state.toggle_filter(FilterCategory::Industry, "Software");
    state.toggle_filter(FilterCategory::Industry, "Fintech");
    let before = state.filters.clone();

    state.toggle_filter(FilterCategory::Industry, "Software");
    assert!(!state.is_filter_selected(FilterCategory::Industry, "Software"));
    state.toggle_filter(FilterCategory::Industry, "Software");

    assert_eq!(state.filters, before);
    assert_eq!(state.active_filter_count(), 2);
}

#[test]
fn e2e_clear_all_resets_filters_and_search() {
    let mut state = sample_state();
    state.toggle_filter(FilterCategory::Industry, "Gaming");
    state.toggle_filter(FilterCategory::Industry, "Fintech");
    state.filters.search = "cloud".to_string();
    assert!(state.filters.is_active());

    state.clear_filters();

    assert_eq!(state.active_filter_count(), 0);
    assert!(state.active_chips().is_empty());
    assert!(state.filters.search.is_empty());
    assert_eq!(state.filter_by_title(), "Filter By");
}

#[test]
fn e2e_sections_toggle_independently() {
    let mut state = sample_state();
    assert!(state.is_section_expanded(Section::SortBy));
    assert!(!state.is_section_expanded(Section::Industry));

    state.toggle_section(Section::Industry);
    state.toggle_section(Section::SortBy);

    assert!(state.is_section_expanded(Section::Industry));
    assert!(!state.is_section_expanded(Section::SortBy));
    assert!(state.is_section_expanded(Section::FilterBy));
    assert!(!state.is_section_expanded(Section::Location));
}

// =============================================================================
// Directory view E2E
// =============================================================================

#[test]
fn e2e_view_switch_keeps_everything_else() {
    let mut state = sample_state();
    state.set_sort(SortKey::Founded);
    state.toggle_filter(FilterCategory::Industry, "AI/ML");
    state.toggle_card(3);

    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::List);
    assert_eq!(state.sort_key, SortKey::Founded);
    assert_eq!(state.active_filter_count(), 1);
    assert!(state.is_card_expanded(3));

    state.toggle_view_mode();
    assert_eq!(state.view_mode, ViewMode::Grid);
}

#[test]
fn e2e_card_expansion_is_per_card() {
    let mut state = sample_state();
    state.toggle_card(0);
    state.toggle_card(5);

    assert_eq!(
        state.card_details(0),
        Some([
            "Large (501-5000)".to_string(),
            "San Francisco".to_string(),
            "Founded 2010".to_string(),
        ])
    );
    assert!(state.card_details(1).is_none());
    assert!(state.is_card_expanded(5));

    state.toggle_card(0);
    assert!(!state.is_card_expanded(0));
    assert!(state.is_card_expanded(5));
}

#[test]
fn e2e_leaving_directory_closes_menu() {
    let mut state = sample_state();
    state.open_menu();

    state.navigate(Route::Dashboard);
    assert_eq!(state.route, Route::Dashboard);
    assert!(!state.menu_open);

    state.navigate(Route::Directory);
    assert_eq!(state.route, Route::Directory);
}
