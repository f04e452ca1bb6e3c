//! Native window that shows a scatter scene
//!
//! The figure is static: the scene is laid out once and every repaint only
//! refits it to the current window size.

use crate::config::PlotConfig;
use crate::scene::{LabelKind, LineKind, ScatterScene};
use eframe::egui;
use egui::{Align2, Color32, FontId, Sense, Shape, Stroke};
use pointplot_core::{Error, Result};
use tracing::info;

const BACKGROUND: Color32 = Color32::WHITE;
const TEXT: Color32 = Color32::BLACK;
const GRID: Color32 = Color32::from_rgb(200, 200, 200);
const AXIS: Color32 = Color32::from_rgb(40, 40, 40);

/// Padding around the plot area in pixels
const PADDING: f32 = 24.0;

/// A window displaying one scatter figure
pub struct PlotWindow {
    scene: ScatterScene,
    config: PlotConfig,
}

impl PlotWindow {
    pub fn new(scene: ScatterScene, config: PlotConfig) -> Self {
        Self { scene, config }
    }

    /// Open the window and block until it is closed
    pub fn run(self) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.config.window_title.clone())
                .with_inner_size(self.config.window_size()),
            ..Default::default()
        };

        info!(
            markers = self.scene.markers.len(),
            title = %self.config.window_title,
            "opening plot window"
        );

        let title = self.config.window_title.clone();
        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(self))))
            .map_err(|e| Error::Visualization(format!("Failed to run plot window: {}", e)))
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let config = &self.config;
        let title_font = FontId::proportional(config.points_to_pixels(config.title_font_points));
        let label_font = FontId::proportional(config.points_to_pixels(config.label_font_points));
        let tick_font = FontId::proportional(config.points_to_pixels(config.tick_font_points));

        let title_height = title_font.size * 1.5;
        let to_screen = self.scene.fit(rect, title_height, PADDING);

        for pane in &self.scene.panes {
            let corners = pane.corners.iter().map(|p| to_screen.apply(*p)).collect();
            painter.add(Shape::convex_polygon(corners, pane.fill, Stroke::new(1.0, pane.edge)));
        }

        for segment in &self.scene.segments {
            let stroke = match segment.kind {
                LineKind::Grid => Stroke::new(0.8, GRID),
                LineKind::Axis => Stroke::new(1.0, AXIS),
                LineKind::Tick => Stroke::new(1.0, AXIS),
            };
            painter.line_segment([to_screen.apply(segment.from), to_screen.apply(segment.to)], stroke);
        }

        for label in &self.scene.labels {
            let font = match label.kind {
                LabelKind::Tick => tick_font.clone(),
                LabelKind::Axis => label_font.clone(),
            };
            painter.text(to_screen.apply(label.anchor), Align2::CENTER_CENTER, &label.text, font, TEXT);
        }

        for marker in &self.scene.markers {
            painter.circle_filled(to_screen.apply(marker.position), self.scene.marker_radius, marker.color);
        }

        let title_anchor = rect.center_top() + egui::vec2(0.0, PADDING + title_height * 0.5);
        painter.text(title_anchor, Align2::CENTER_CENTER, &self.scene.title, title_font, TEXT);
    }
}

impl eframe::App for PlotWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                self.paint(&painter, response.rect);
            });
    }
}
