// Blueprint - ui/panels/dashboard.rs
//
// Dashboard page shell. Heading only.

use crate::app::navigation::Route;

/// Render the dashboard page (central area).
pub fn render(ui: &mut egui::Ui) {
    ui.add_space(56.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new(Route::Dashboard.title()).heading().strong());
    });
}
