//! Plot settings
//!
//! Every field has a fixed default; the plotting binary never changes them.

use crate::colormap::Colormap;
use serde::{Deserialize, Serialize};

/// Appearance of a 3D scatter figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Title of the native window
    pub window_title: String,
    /// Figure size in inches (width, height)
    pub figure_size: [f32; 2],
    /// Pixels per inch; also converts point sizes to pixels
    pub dpi: f32,
    pub title: String,
    /// Axis labels for x, y and z
    pub axis_labels: [String; 3],
    pub colormap: Colormap,
    /// Marker area in points squared
    pub marker_size: f32,
    /// Relative displayed length of the x, y and z box edges
    pub box_aspect: [f64; 3],
    /// View elevation above the xy plane, in degrees
    pub elevation: f64,
    /// View azimuth around the z axis, in degrees
    pub azimuth: f64,
    /// Fraction of the data range added on each side of every axis
    pub axis_margin: f64,
    /// Upper bound on the number of tick intervals per axis
    pub max_tick_bins: usize,
    /// Fade markers with distance from the viewer
    pub depth_shade: bool,
    pub tick_font_points: f32,
    pub label_font_points: f32,
    pub title_font_points: f32,
}

impl PlotConfig {
    /// Window size in pixels
    pub fn window_size(&self) -> [f32; 2] {
        [self.figure_size[0] * self.dpi, self.figure_size[1] * self.dpi]
    }

    /// Convert a length in typographic points to pixels
    pub fn points_to_pixels(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }

    /// Marker radius in pixels; `marker_size` is an area so its side is the square root
    pub fn marker_radius(&self) -> f32 {
        0.5 * self.points_to_pixels(self.marker_size.max(0.0).sqrt())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window_title: "Figure 1".to_string(),
            figure_size: [10.0, 8.0],
            dpi: 100.0,
            title: "3D Point Distribution".to_string(),
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            colormap: Colormap::Viridis,
            marker_size: 3.0,
            box_aspect: [1.0, 1.0, 1.0],
            elevation: 30.0,
            azimuth: -60.0,
            axis_margin: 0.05,
            max_tick_bins: 5,
            depth_shade: true,
            tick_font_points: 10.0,
            label_font_points: 10.0,
            title_font_points: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_figure() {
        let config = PlotConfig::default();
        assert_eq!(config.window_size(), [1000.0, 800.0]);
        assert_eq!(config.title, "3D Point Distribution");
        assert_eq!(config.axis_labels, ["X", "Y", "Z"].map(String::from));
        assert_eq!(config.colormap, Colormap::Viridis);
        assert_eq!(config.box_aspect, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_marker_radius() {
        let config = PlotConfig::default();
        // sqrt(3) points across at 100 dpi
        assert_relative_eq!(config.marker_radius(), 0.5 * 3.0_f32.sqrt() * 100.0 / 72.0, epsilon = 1e-6);
    }
}
