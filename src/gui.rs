// Blueprint - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the dock, side panel, page bodies and status bar, and
// applies theme changes.

use crate::app::navigation::Route;
use crate::app::state::AppState;
use crate::ui;
use crate::ui::panels::side_menu::OutsideClickDismiss;

/// The Blueprint Directory application.
pub struct DirectoryApp {
    pub state: AppState,
    dismiss: OutsideClickDismiss,
    font_size: f32,
    /// Dark-mode flag the visuals were last built for.
    applied_dark: Option<bool>,
}

impl DirectoryApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, font_size: f32) -> Self {
        Self {
            state,
            dismiss: OutsideClickDismiss::default(),
            font_size,
            applied_dark: None,
        }
    }

    /// Floating filter button in the top-left corner. Returns its rect.
    fn render_menu_toggle(&mut self, ctx: &egui::Context) -> egui::Rect {
        let fill = ui::theme::lerp(ui::theme::INDIGO, ui::theme::ROSE, 0.5);
        let hint = if self.state.menu_open {
            "Hide filters"
        } else {
            "Show filters"
        };
        let inner = egui::Area::new(egui::Id::new("menu_toggle"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(16.0, 16.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new(ui::icons::FILTER)
                        .size(20.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(8))
                .min_size(egui::vec2(
                    ui::theme::TOGGLE_BUTTON_SIZE,
                    ui::theme::TOGGLE_BUTTON_SIZE,
                ));
                ui.add(button).on_hover_text(hint).clicked()
            });
        if inner.inner {
            self.state.toggle_menu();
        }
        inner.response.rect
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_dark != Some(self.state.dark_mode) {
            ui::theme::apply(ctx, self.state.dark_mode, self.font_size);
            self.applied_dark = Some(self.state.dark_mode);
        }
        let page_bg = ui::theme::page_bg(self.state.dark_mode);
        let route = self.state.route;

        // Side panel first so it spans the full window height.
        let panel_rect = if route == Route::Directory {
            let menu_open = self.state.menu_open;
            egui::SidePanel::left("side_menu")
                .exact_width(ui::theme::SIDE_MENU_WIDTH)
                .resizable(false)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .fill(ui::theme::surface_bg(self.state.dark_mode)),
                )
                .show_animated(ctx, menu_open, |ui| {
                    ui::panels::side_menu::render(ui, &mut self.state);
                })
                .map(|inner| inner.response.rect)
        } else {
            None
        };

        // Navigation dock
        egui::TopBottomPanel::top("dock")
            .frame(egui::Frame::new().fill(page_bg).inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| {
                ui::panels::dock::render(ui, &mut self.state);
            });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&self.state.status_message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.state.debug_mode {
                            let cards: Vec<String> = self
                                .state
                                .expanded_cards
                                .iter()
                                .map(|i| i.to_string())
                                .collect();
                            ui.label(
                                egui::RichText::new(format!(
                                    "sort={} filters={} cards=[{}]",
                                    self.state.sort_key.value(),
                                    self.state.active_filter_count(),
                                    cards.join(",")
                                ))
                                .small()
                                .weak(),
                            );
                        }
                    });
                });
            });

        // Page body
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(page_bg))
            .show(ctx, |ui| match route {
                Route::Directory => ui::panels::directory::render(ui, &mut self.state),
                Route::Dashboard => ui::panels::dashboard::render(ui),
            });

        if route == Route::Directory {
            let toggle_rect = self.render_menu_toggle(ctx);
            self.dismiss.process(
                ctx,
                &mut self.state,
                panel_rect.unwrap_or(egui::Rect::NOTHING),
                toggle_rect,
            );
        } else {
            self.dismiss.sync(false);
        }
    }
}
