// Blueprint - app/state.rs
//
// Application state management. Holds the company records, side panel
// state, filter selection, and visibility flags.
// Owned by the eframe::App implementation; every UI event mutates it
// directly and the next frame renders from it.

use crate::app::navigation::Route;
use crate::core::filter::{FilterChip, FilterState};
use crate::core::model::{CompanyRecord, FilterCategory, Section, SortKey, ViewMode};
use crate::core::view::{ExpandedCards, ExpandedSections};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Records shown in the directory (fixed for the session).
    pub companies: Vec<CompanyRecord>,

    /// Page currently mounted.
    pub route: Route,

    /// Whether the filter side panel is open.
    pub menu_open: bool,

    /// Expanded/collapsed side panel sections.
    pub sections: ExpandedSections,

    /// Active sort key. Tracked only; records keep their fixture order.
    pub sort_key: SortKey,

    /// Category selections and search text.
    pub filters: FilterState,

    /// Grid or list layout.
    pub view_mode: ViewMode,

    /// Cards whose details are revealed.
    pub expanded_cards: ExpandedCards,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for the given records.
    pub fn new(companies: Vec<CompanyRecord>, debug_mode: bool) -> Self {
        let status_message = format!("{} companies loaded.", companies.len());
        Self {
            companies,
            route: Route::default(),
            menu_open: false,
            sections: ExpandedSections::default(),
            sort_key: SortKey::default(),
            filters: FilterState::default(),
            view_mode: ViewMode::default(),
            expanded_cards: ExpandedCards::default(),
            dark_mode: false,
            status_message,
            debug_mode,
        }
    }

    // -------------------------------------------------------------------------
    // Side panel
    // -------------------------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "Side panel toggled");
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            tracing::debug!("Side panel closed");
        }
    }

    pub fn toggle_section(&mut self, section: Section) {
        let expanded = self.sections.toggle(section);
        tracing::debug!(?section, expanded, "Section toggled");
    }

    pub fn is_section_expanded(&self, section: Section) -> bool {
        self.sections.is_expanded(section)
    }

    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key != key {
            tracing::debug!(sort = key.value(), "Sort key changed");
            self.sort_key = key;
        }
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Add or remove one filter value.
    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str) {
        let selected = self.filters.selection.toggle(category, value);
        tracing::debug!(%category, value, selected, "Filter toggled");
    }

    pub fn is_filter_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.filters.selection.contains(category, value)
    }

    /// Clear every category and the search text.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        tracing::debug!("All filters cleared");
    }

    pub fn clear_search(&mut self) {
        self.filters.search.clear();
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn active_chips(&self) -> Vec<FilterChip> {
        self.filters.selection.chips()
    }

    /// "Filter By", or "Filter By (N)" when any value is selected.
    pub fn filter_by_title(&self) -> String {
        match self.active_filter_count() {
            0 => "Filter By".to_string(),
            n => format!("Filter By ({n})"),
        }
    }

    // -------------------------------------------------------------------------
    // Directory view
    // -------------------------------------------------------------------------

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
        tracing::debug!(view = ?self.view_mode, "View mode switched");
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark = self.dark_mode, "Theme toggled");
    }

    /// Tooltip for the theme button.
    pub fn theme_hint(&self) -> &'static str {
        if self.dark_mode {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    }

    pub fn toggle_card(&mut self, index: usize) {
        if index >= self.companies.len() {
            return;
        }
        let expanded = self.expanded_cards.toggle(index);
        tracing::debug!(index, expanded, "Card details toggled");
    }

    pub fn is_card_expanded(&self, index: usize) -> bool {
        self.expanded_cards.is_expanded(index)
    }

    /// Secondary fields revealed by expanding a card: size, location and
    /// founding year. `None` for collapsed or out-of-range cards.
    pub fn card_details(&self, index: usize) -> Option<[String; 3]> {
        if !self.is_card_expanded(index) {
            return None;
        }
        self.companies.get(index).map(|c| {
            [
                c.size.clone(),
                c.location.clone(),
                format!("Founded {}", c.founded),
            ]
        })
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Apply the startup page and the configured panel flag.
    ///
    /// The panel is opened before navigating so it stays closed when the
    /// startup page is not the directory.
    pub fn apply_startup(&mut self, route: Route, menu_open: bool) {
        if menu_open {
            self.open_menu();
        }
        self.navigate(route);
    }

    /// Switch pages. Navigating to the current page is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        tracing::info!(from = ?self.route, to = ?route, "Navigating");
        self.route = route;
        if route != Route::Directory {
            self.menu_open = false;
        }
    }
}
