// Blueprint - ui/panels/directory.rs
//
// Directory page body: title bar with view/theme toggles, the active
// filter bar, and the company records as a card grid or row list.
//
// Records always appear in catalog order; the sort key and filters are
// displayed state only.

use crate::app::state::AppState;
use crate::core::model::{CompanyRecord, ViewMode};
use crate::ui::panels::active_filters;
use crate::ui::{icons, theme};

/// Render the directory page (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_salt("directory_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Centre a fixed-width content column.
            let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
            let side = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    ui.add_space(48.0);
                    render_title_bar(ui, state);
                    ui.add_space(16.0);
                    active_filters::render(ui, state);
                    if state.filters.is_active() {
                        ui.add_space(16.0);
                    }
                    match state.view_mode {
                        ViewMode::Grid => render_grid(ui, state),
                        ViewMode::List => render_list(ui, state),
                    }
                    ui.add_space(24.0);
                });
            });
        });
}

fn render_title_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Blueprint Directory").heading().strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_icon = if state.dark_mode {
                icons::SUN
            } else {
                icons::MOON
            };
            if ui
                .add(egui::Button::new(egui::RichText::new(theme_icon).size(18.0)))
                .on_hover_text(state.theme_hint())
                .clicked()
            {
                state.toggle_dark_mode();
            }

            let view_icon = match state.view_mode {
                ViewMode::Grid => icons::LIST,
                ViewMode::List => icons::GRID,
            };
            if ui
                .add(egui::Button::new(egui::RichText::new(view_icon).size(18.0)))
                .on_hover_text(state.view_mode.switch_hint())
                .clicked()
            {
                state.toggle_view_mode();
            }
        });
    });
}

/// Number of grid columns for the given content width.
pub fn grid_columns(width: f32) -> usize {
    if width < 560.0 {
        1
    } else if width < 840.0 {
        2
    } else {
        3
    }
}

fn card_frame(dark: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::surface_bg(dark))
        .stroke(egui::Stroke::new(1.0, theme::border(dark)))
        .corner_radius(egui::CornerRadius::same(theme::CARD_ROUNDING as u8))
        .inner_margin(egui::Margin::same(16))
}

fn render_grid(ui: &mut egui::Ui, state: &mut AppState) {
    let columns = grid_columns(ui.available_width());
    let indices: Vec<usize> = (0..state.companies.len()).collect();
    let mut toggled: Option<usize> = None;

    for row in indices.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, &index) in cols.iter_mut().zip(row) {
                if let Some(company) = state.companies.get(index) {
                    let expanded = state.is_card_expanded(index);
                    if grid_card(col, company, expanded, state.dark_mode) {
                        toggled = Some(index);
                    }
                }
            }
        });
        ui.add_space(12.0);
    }

    if let Some(index) = toggled {
        state.toggle_card(index);
    }
}

/// Draw one grid card. Returns true when its details toggle was clicked.
fn grid_card(ui: &mut egui::Ui, company: &CompanyRecord, expanded: bool, dark: bool) -> bool {
    let mut clicked = false;
    card_frame(dark).show(ui, |ui| {
        let size = egui::vec2(ui.available_width(), theme::CARD_IMAGE_HEIGHT);
        let image_rect = company_image(ui, company, size);

        overlay_pill(
            ui,
            image_rect,
            egui::Align2::LEFT_BOTTOM,
            &format!("{} {}", icons::USERS, company.employees),
        );
        overlay_pill(
            ui,
            image_rect,
            egui::Align2::RIGHT_BOTTOM,
            &format!("{} {}", icons::DOLLAR, company.funding),
        );

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&company.name).size(17.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                industry_badge(ui, &company.industry, dark);
            });
        });
        ui.add_space(8.0);

        let (label, chevron) = if expanded {
            ("Hide Details", icons::CHEVRON_UP)
        } else {
            ("View Details", icons::CHEVRON_DOWN)
        };
        let toggle = egui::Button::new(
            egui::RichText::new(label).color(theme::muted_text(dark)),
        )
        .frame(false)
        .shortcut_text(chevron)
        .min_size(egui::vec2(ui.available_width(), 24.0));
        if ui.add(toggle).clicked() {
            clicked = true;
        }

        if expanded {
            ui.separator();
            detail_row(ui, icons::USERS, &company.size, dark);
            detail_row(ui, icons::MAP_PIN, &company.location, dark);
            detail_row(
                ui,
                icons::CALENDAR,
                &format!("Founded {}", company.founded),
                dark,
            );
        }
    });
    clicked
}

fn render_list(ui: &mut egui::Ui, state: &AppState) {
    let dark = state.dark_mode;
    for company in &state.companies {
        card_frame(dark).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let thumb = egui::vec2(theme::LIST_THUMB_SIZE, theme::LIST_THUMB_SIZE);
                company_image(ui, company, thumb);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&company.name).size(17.0).strong());
                        industry_badge(ui, &company.industry, dark);
                    });
                    ui.label(
                        egui::RichText::new(&company.industry).color(theme::muted_text(dark)),
                    );
                    ui.horizontal_wrapped(|ui| {
                        let muted = theme::muted_text(dark);
                        ui.label(
                            egui::RichText::new(format!("{} {}", icons::USERS, company.employees))
                                .color(muted),
                        );
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(format!("{} {}", icons::MAP_PIN, company.location))
                                .color(muted),
                        );
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(format!(
                                "{} Est. {}",
                                icons::CALENDAR,
                                company.founded
                            ))
                            .color(muted),
                        );
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&company.funding).strong());
                        ui.label(
                            egui::RichText::new("Total Funding")
                                .small()
                                .color(theme::muted_text(dark)),
                        );
                    });
                });
            });
        });
        ui.add_space(12.0);
    }
}

/// Draw the company image (or a placeholder) at `size`; returns its rect.
///
/// Remote images load in the background; failures show the loader's own
/// placeholder and are not reported.
fn company_image(ui: &mut egui::Ui, company: &CompanyRecord, size: egui::Vec2) -> egui::Rect {
    match company.image.as_deref() {
        Some(url) => {
            ui.add(
                egui::Image::new(url)
                    .fit_to_exact_size(size)
                    .maintain_aspect_ratio(false)
                    .corner_radius(egui::CornerRadius::same(theme::CARD_ROUNDING as u8)),
            )
            .rect
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let fill = theme::lerp(theme::INDIGO, theme::ROSE, 0.5);
            ui.painter().rect_filled(
                rect,
                egui::CornerRadius::same(theme::CARD_ROUNDING as u8),
                fill,
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials(&company.name),
                egui::FontId::proportional(size.y * 0.3),
                egui::Color32::WHITE,
            );
            rect
        }
    }
}

/// Up to two upper-case initials from a company name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Small dark pill anchored to a bottom corner of `rect`.
fn overlay_pill(ui: &egui::Ui, rect: egui::Rect, anchor: egui::Align2, text: &str) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );
    let pad = egui::vec2(8.0, 4.0);
    let pill_size = galley.size() + pad * 2.0;
    let inset = rect.shrink(8.0);
    let pill = anchor.align_size_within_rect(pill_size, inset);
    painter.rect_filled(pill, egui::CornerRadius::same(10), theme::IMAGE_OVERLAY_BG);
    painter.galley(pill.min + pad, galley, egui::Color32::WHITE);
}

fn industry_badge(ui: &mut egui::Ui, industry: &str, dark: bool) {
    let (bg, fg) = theme::badge_colours(dark);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(industry).small().color(fg));
        });
}

fn detail_row(ui: &mut egui::Ui, icon: &str, text: &str, dark: bool) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).color(theme::muted_text(dark)));
        ui.label(egui::RichText::new(text).color(theme::muted_text(dark)));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(400.0), 1);
        assert_eq!(grid_columns(700.0), 2);
        assert_eq!(grid_columns(896.0), 3);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("TechCorp Inc."), "TI");
        assert_eq!(initials("socialconnect"), "S");
        assert_eq!(initials(""), "");
    }
}
