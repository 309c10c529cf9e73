// Blueprint - ui/panels/side_menu.rs
//
// Collapsible "Filters & Sort" side panel: search box, sort radios,
// per-category filter checkboxes and the Clear All footer.
//
// Also owns outside-click dismissal. The pointer check is armed only while
// the panel is open and disarmed as soon as it closes.

use crate::app::state::AppState;
use crate::core::model::{FilterCategory, Section, SortKey};
use crate::ui::{icons, theme};
use crate::util::constants;
use egui::{Pos2, Rect};

/// Render the panel contents into the side panel's `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Header: leave room for the floating toggle button on the left.
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(theme::TOGGLE_BUTTON_SIZE + 12.0);
        ui.heading("Filters & Sort");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(icons::CLOSE).frame(false))
                .on_hover_text("Close")
                .clicked()
            {
                state.close_menu();
            }
        });
    });
    ui.add_space(8.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.filters.search)
            .hint_text(format!("{}  {}", icons::SEARCH, constants::SEARCH_PLACEHOLDER))
            .desired_width(f32::INFINITY),
    );

    ui.add_space(6.0);
    ui.separator();

    let footer_height = if state.active_filter_count() > 0 {
        48.0
    } else {
        0.0
    };

    egui::ScrollArea::vertical()
        .id_salt("side_menu_scroll")
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - footer_height).max(0.0))
        .show(ui, |ui| {
            render_sort_section(ui, state);
            ui.add_space(8.0);
            render_filter_section(ui, state);
        });

    if state.active_filter_count() > 0 {
        ui.separator();
        ui.add_space(4.0);
        let clear = egui::Button::new("Clear All Filters")
            .min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add(clear).clicked() {
            state.clear_filters();
        }
    }
}

/// A full-width section header with icon, title and expand chevron.
///
/// Returns true when clicked.
fn section_header(ui: &mut egui::Ui, icon: &str, title: &str, expanded: bool) -> bool {
    let chevron = if expanded {
        icons::CHEVRON_DOWN
    } else {
        icons::CHEVRON_RIGHT
    };
    let button = egui::Button::new(egui::RichText::new(format!("{icon}  {title}")).strong())
        .frame(false)
        .shortcut_text(chevron)
        .min_size(egui::vec2(ui.available_width(), 24.0));
    ui.add(button).clicked()
}

fn render_sort_section(ui: &mut egui::Ui, state: &mut AppState) {
    let expanded = state.is_section_expanded(Section::SortBy);
    if section_header(ui, icons::BUILDING, "Sort By", expanded) {
        state.toggle_section(Section::SortBy);
    }
    if !state.is_section_expanded(Section::SortBy) {
        return;
    }

    ui.indent("sort_options", |ui| {
        for &key in SortKey::all() {
            if ui.radio(state.sort_key == key, key.label()).clicked() {
                state.set_sort(key);
            }
        }
    });
}

fn render_filter_section(ui: &mut egui::Ui, state: &mut AppState) {
    let title = state.filter_by_title();
    let expanded = state.is_section_expanded(Section::FilterBy);
    if section_header(ui, icons::FILTER, &title, expanded) {
        state.toggle_section(Section::FilterBy);
    }
    if !state.is_section_expanded(Section::FilterBy) {
        return;
    }

    ui.indent("filter_categories", |ui| {
        for &category in FilterCategory::all() {
            render_category(ui, state, category);
            ui.add_space(4.0);
        }
    });
}

fn render_category(ui: &mut egui::Ui, state: &mut AppState, category: FilterCategory) {
    let section = category.section();
    let expanded = state.is_section_expanded(section);
    if section_header(ui, icons::category(category), category.section_title(), expanded) {
        state.toggle_section(section);
    }
    if !state.is_section_expanded(section) {
        return;
    }

    let options = category.options();
    ui.indent(("filter_options", category), |ui| {
        // Long option lists scroll inside a bounded box.
        let scroll_height = if options.len() > 5 { 160.0 } else { f32::INFINITY };
        egui::ScrollArea::vertical()
            .id_salt(("filter_scroll", category))
            .max_height(scroll_height)
            .show(ui, |ui| {
                for &option in options {
                    let mut checked = state.is_filter_selected(category, option);
                    if ui.checkbox(&mut checked, option).changed() {
                        state.toggle_filter(category, option);
                    }
                }
            });
    });
}

// =============================================================================
// Outside-click dismissal
// =============================================================================

/// True when a press at `pos` lands in neither the panel nor its toggle.
pub fn is_outside_press(panel: Rect, toggle: Rect, pos: Pos2) -> bool {
    !panel.contains(pos) && !toggle.contains(pos)
}

/// Pointer-press watcher that closes the side panel.
#[derive(Debug, Default)]
pub struct OutsideClickDismiss {
    armed: bool,
}

impl OutsideClickDismiss {
    /// Arm while the panel is open, disarm when it is closed.
    pub fn sync(&mut self, menu_open: bool) {
        if self.armed != menu_open {
            self.armed = menu_open;
            tracing::trace!(armed = self.armed, "Outside-click watcher updated");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Decide whether a primary press at `press` should close the panel.
    pub fn should_dismiss(&self, panel: Rect, toggle: Rect, press: Option<Pos2>) -> bool {
        self.armed && press.is_some_and(|pos| is_outside_press(panel, toggle, pos))
    }

    /// Check this frame's input and close the panel when appropriate.
    pub fn process(
        &mut self,
        ctx: &egui::Context,
        state: &mut AppState,
        panel: Rect,
        toggle: Rect,
    ) {
        self.sync(state.menu_open);
        let press = ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if self.should_dismiss(panel, toggle, press) {
            tracing::debug!("Press outside side panel; closing");
            state.close_menu();
            self.sync(false);
        }
    }
}
