// Blueprint - ui/theme.rs
//
// Colour scheme, light/dark visuals, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent gradient endpoints (toggle button, accent chips).
pub const INDIGO: Color32 = Color32::from_rgb(99, 102, 241); // Indigo 500
pub const ROSE: Color32 = Color32::from_rgb(244, 63, 94); // Rose 500

/// Overlay pill on card images (employees / funding).
pub const IMAGE_OVERLAY_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 178);

/// Apply the light or dark visuals and the body font size to every theme.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.all_styles_mut(|style| {
        use egui::{FontId, TextStyle};
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::proportional(font_size * 0.8));
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(font_size * 1.6));
    });
}

/// Page background.
pub fn page_bg(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::BLACK
    } else {
        Color32::from_rgb(249, 250, 251) // Gray 50
    }
}

/// Card and side panel surface.
pub fn surface_bg(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(31, 41, 55) // Gray 800
    } else {
        Color32::WHITE
    }
}

/// Card border.
pub fn border(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(55, 65, 81) // Gray 700
    } else {
        Color32::from_rgb(229, 231, 235) // Gray 200
    }
}

/// Secondary text (captions, detail rows).
pub fn muted_text(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(156, 163, 175) // Gray 400
    } else {
        Color32::from_rgb(75, 85, 99) // Gray 600
    }
}

/// Industry badge and search chip: (background, text).
pub fn badge_colours(dark_mode: bool) -> (Color32, Color32) {
    if dark_mode {
        (
            Color32::from_rgb(30, 58, 138),  // Blue 900
            Color32::from_rgb(191, 219, 254), // Blue 200
        )
    } else {
        (
            Color32::from_rgb(219, 234, 254), // Blue 100
            Color32::from_rgb(30, 64, 175),   // Blue 800
        )
    }
}

/// Filter chip background; accent chips alternate with neutral ones.
pub fn chip_bg(accent: bool, dark_mode: bool) -> Color32 {
    match (accent, dark_mode) {
        (true, false) => Color32::from_rgb(238, 230, 250), // Indigo 100 / Rose 100 blend
        (true, true) => Color32::from_rgb(55, 40, 80),
        (false, false) => Color32::from_rgb(229, 231, 235), // Gray 200
        (false, true) => Color32::from_rgb(55, 65, 81),     // Gray 700
    }
}

/// Linear blend between two colours, `t` in 0..=1.
pub fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Layout constants.
pub const SIDE_MENU_WIDTH: f32 = 256.0;
pub const CONTENT_MAX_WIDTH: f32 = 896.0;
pub const CARD_IMAGE_HEIGHT: f32 = 140.0;
pub const LIST_THUMB_SIZE: f32 = 80.0;
pub const CARD_ROUNDING: f32 = 8.0;
pub const TOGGLE_BUTTON_SIZE: f32 = 36.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(INDIGO, ROSE, 0.0), INDIGO);
        assert_eq!(lerp(INDIGO, ROSE, 1.0), ROSE);
        assert_eq!(lerp(INDIGO, ROSE, 7.0), ROSE);
    }

    #[test]
    fn test_chip_styles_differ() {
        assert_ne!(chip_bg(true, false), chip_bg(false, false));
        assert_ne!(chip_bg(true, true), chip_bg(false, true));
    }
}
