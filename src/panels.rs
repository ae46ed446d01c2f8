use eframe::egui;

use crate::visibility::{temperature_scale, visible_fields, Field, Panel};

const PANEL_ROUNDING: f32 = 24.0;
const BASE_TEMPERATURE_SIZE: f32 = 50.0;

/// Placeholder content for both halves of the demo split. Rows come and go
/// with the panel height according to `visible_fields`.
pub struct DemoPanels {
    pub detail_threshold: f32,
}

impl DemoPanels {
    pub fn new(detail_threshold: f32) -> Self {
        Self { detail_threshold }
    }

    pub fn render_top(&self, ui: &mut egui::Ui) {
        let height = ui.max_rect().height();
        let fields = visible_fields(Panel::Top, height, self.detail_threshold);
        Self::paint_background(ui, egui::Color32::from_rgb(255, 170, 60));

        egui::Frame::none()
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                if fields.contains(&Field::Title) {
                    ui.heading("Top Panel");
                }

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        if fields.contains(&Field::Location) {
                            ui.strong("Primary");
                        }
                        if fields.contains(&Field::Condition) {
                            ui.small("Expanded");
                        }
                    });

                    if fields.contains(&Field::Temperature) {
                        let size = BASE_TEMPERATURE_SIZE
                            * temperature_scale(height, self.detail_threshold);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(format!("{:.0}", height)).size(size).strong());
                            if fields.contains(&Field::Icon) {
                                ui.label(egui::RichText::new("●").size(size));
                            }
                        });
                    }
                });

                if fields.contains(&Field::Details) {
                    ui.add_space(8.0);
                    for row in ["Detail row 1", "Detail row 2", "Detail row 3", "Detail row 4"] {
                        ui.small(row);
                    }
                }
            });
    }

    pub fn render_bottom(&self, ui: &mut egui::Ui) {
        let height = ui.max_rect().height();
        let fields = visible_fields(Panel::Bottom, height, self.detail_threshold);
        Self::paint_background(ui, egui::Color32::from_rgb(40, 120, 220));

        egui::Frame::none()
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                if fields.contains(&Field::Title) {
                    ui.heading("Bottom Panel");
                }

                if fields.contains(&Field::Forecast) {
                    for idx in 0..5 {
                        ui.horizontal(|ui| {
                            ui.label(format!("Item {}", idx + 1));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(format!("{}", 70 + idx + (idx % 2) * 4));
                            });
                        });
                    }
                }

                if fields.contains(&Field::Attribution) {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Drag the handle to resize, release near an edge to snap.")
                            .small()
                            .color(egui::Color32::from_white_alpha(128)),
                    );
                }
            });
    }

    fn paint_background(ui: &egui::Ui, color: egui::Color32) {
        let rect = ui.max_rect();
        if rect.height() > 0.0 {
            ui.painter()
                .rect_filled(rect, egui::Rounding::same(PANEL_ROUNDING), color);
        }
    }
}
