//! Morph canvas widget
//!
//! Renders a shape outline as a single stroked polyline, the way the
//! morph pipeline expects: move to the first point, line to each
//! subsequent point, and close the path when the outline says so.
//!
//! ## Coordinate System
//!
//! Outline points are already in canvas pixels with the origin at the
//! top-left corner and y growing downward, which matches egui's screen
//! space. Mapping to the screen is just an offset by the widget rect.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};
use nalgebra::Point2;

/// Display settings for the morph canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Stroke color
    pub color: Color32,

    /// Background fill
    pub background: Color32,

    /// Stroke thickness in pixels
    pub stroke_width: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(0, 0, 255),
            background: Color32::WHITE,
            stroke_width: 20.0,
        }
    }
}

/// Widget drawing the per-frame morph outline
pub struct MorphCanvas {
    /// Display settings
    pub settings: CanvasSettings,
}

impl Default for MorphCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphCanvas {
    /// Create a new canvas with default settings
    pub fn new() -> Self {
        Self {
            settings: CanvasSettings::default(),
        }
    }

    /// Convert an outline point to screen coordinates
    fn point_to_screen(point: &Point2<f32>, rect: Rect) -> Pos2 {
        Pos2::new(rect.left() + point.x, rect.top() + point.y)
    }

    /// Draw the outline into all remaining space
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `points` - Outline to draw, in canvas pixels
    /// * `close_path` - Whether to join the last point back to the first
    ///
    /// # Returns
    /// The response for the allocated region
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        points: &[Point2<f32>],
        close_path: bool,
    ) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, self.settings.background);

        if points.len() < 2 {
            return response;
        }

        let screen: Vec<Pos2> = points
            .iter()
            .map(|p| Self::point_to_screen(p, rect))
            .collect();

        let stroke = Stroke::new(self.settings.stroke_width, self.settings.color);
        let outline = if close_path {
            egui::Shape::closed_line(screen, stroke)
        } else {
            egui::Shape::line(screen, stroke)
        };
        painter.add(outline);

        response
    }
}
