// Blueprint - ui/icon.rs
//
// Window icon, rendered at startup: a rounded square with the indigo-to-rose
// accent gradient and a white filter glyph (three bars of shrinking width).

use crate::ui::theme;
use image::{Rgba, RgbaImage};

/// Render the icon bitmap at `size` x `size` pixels.
pub fn render(size: u32) -> RgbaImage {
    let s = size as f32;
    let radius = s * 0.22;
    let bars = [(0.30, 0.20, 0.80), (0.47, 0.30, 0.70), (0.64, 0.40, 0.60)];
    let bar_half_height = s * 0.045;

    RgbaImage::from_fn(size, size, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        if !inside_rounded_square(px, py, s, radius) {
            return Rgba([0, 0, 0, 0]);
        }

        let on_bar = bars.iter().any(|&(cy, x0, x1)| {
            (py - cy * s).abs() <= bar_half_height && px >= x0 * s && px <= x1 * s
        });
        if on_bar {
            return Rgba([255, 255, 255, 255]);
        }

        // Diagonal gradient, top-left to bottom-right.
        let t = (px + py) / (2.0 * s);
        let c = theme::lerp(theme::INDIGO, theme::ROSE, t);
        Rgba([c.r(), c.g(), c.b(), 255])
    })
}

fn inside_rounded_square(px: f32, py: f32, s: f32, r: f32) -> bool {
    let cx = px.clamp(r, s - r);
    let cy = py.clamp(r, s - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

/// The icon as `eframe` window icon data.
pub fn icon_data(size: u32) -> egui::IconData {
    let img = render(size);
    let (width, height) = img.dimensions();
    egui::IconData {
        rgba: img.into_raw(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_transparent_centre_opaque() {
        let img = render(64);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(63, 63)[3], 0);
        assert_eq!(img.get_pixel(32, 32)[3], 255);
    }

    #[test]
    fn test_icon_data_len_matches_dimensions() {
        let data = icon_data(32);
        assert_eq!(data.width, 32);
        assert_eq!(data.rgba.len(), 32 * 32 * 4);
    }
}
