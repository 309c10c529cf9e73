// Blueprint - ui/panels/active_filters.rs
//
// "Active Filters" bar above the company records: one removable chip per
// selected value, a search chip, and a Clear All action.
// Hidden entirely when no filter or search is active.

use crate::app::state::AppState;
use crate::core::filter::FilterChip;
use crate::ui::{icons, theme};

/// Deferred chip action, applied after the chip row is drawn.
enum ChipAction {
    ClearSearch,
    Remove(FilterChip),
    ClearAll,
}

/// Render the bar (if any filter or search text is active).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.filters.is_active() {
        return;
    }

    let dark = state.dark_mode;
    let count = state.active_filter_count();
    let chips = state.active_chips();
    let mut action: Option<ChipAction> = None;

    egui::Frame::new()
        .fill(theme::surface_bg(dark))
        .stroke(egui::Stroke::new(1.0, theme::border(dark)))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                let heading = if count > 0 {
                    format!("{}  Active Filters ({count})", icons::FILTER)
                } else {
                    format!("{}  Active Filters", icons::FILTER)
                };
                ui.label(egui::RichText::new(heading).strong());

                if !state.filters.search.is_empty() {
                    let (bg, fg) = theme::badge_colours(dark);
                    let text = format!("{} \"{}\"", icons::SEARCH, state.filters.search);
                    if chip(ui, &text, bg, fg) {
                        action = Some(ChipAction::ClearSearch);
                    }
                }

                for c in &chips {
                    let bg = theme::chip_bg(c.is_accent(), dark);
                    let fg = ui.visuals().text_color();
                    let text = format!("{} {}", icons::HASH, c.label());
                    if chip(ui, &text, bg, fg) {
                        action = Some(ChipAction::Remove(c.clone()));
                    }
                }

                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("Clear All")
                                .small()
                                .color(theme::lerp(theme::INDIGO, theme::ROSE, 0.2)),
                        )
                        .frame(false),
                    )
                    .clicked()
                {
                    action = Some(ChipAction::ClearAll);
                }
            });

            if let Some(caption) = state.filters.summary_caption() {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(caption)
                        .small()
                        .color(theme::muted_text(dark)),
                );
            }
        });

    match action {
        Some(ChipAction::ClearSearch) => state.clear_search(),
        Some(ChipAction::Remove(c)) => state.toggle_filter(c.category, &c.value),
        Some(ChipAction::ClearAll) => state.clear_filters(),
        None => {}
    }
}

/// Draw one chip with a trailing remove button. Returns true when removed.
fn chip(ui: &mut egui::Ui, text: &str, bg: egui::Color32, fg: egui::Color32) -> bool {
    let mut removed = false;
    egui::Frame::new()
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(fg));
                removed = ui
                    .add(
                        egui::Button::new(egui::RichText::new(icons::CLOSE).small().color(fg))
                            .frame(false),
                    )
                    .on_hover_text("Remove")
                    .clicked();
            });
        });
    removed
}
