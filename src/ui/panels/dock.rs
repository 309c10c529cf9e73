// Blueprint - ui/panels/dock.rs
//
// Navigation dock: a centred row of icon buttons along the top edge.
// Items without a target are drawn but do nothing when clicked.

use crate::app::navigation::DOCK_ITEMS;
use crate::app::state::AppState;

/// Render the dock into a top panel's `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_centered(|ui| {
        // Rough centring: the dock is narrow and the panel spans the window.
        let approx_width = DOCK_ITEMS.len() as f32 * 56.0;
        ui.add_space(((ui.available_width() - approx_width) / 2.0).max(0.0));

        for item in DOCK_ITEMS {
            let active = item.target == Some(state.route);
            let button = egui::Button::new(egui::RichText::new(item.icon).size(22.0))
                .selected(active)
                .min_size(egui::vec2(44.0, 44.0));
            let response = ui.add(button).on_hover_text(item.label);
            if response.clicked() {
                match item.target {
                    Some(route) => state.navigate(route),
                    None => tracing::debug!(item = item.label, "Dock item has no target"),
                }
            }
        }
    });
}
