//! Integration tests for pointplot-visualization
//!
//! Each test loads a point file from disk and lays out the scatter figure
//! without opening a window.

use approx::assert_relative_eq;
use egui::Color32;
use pointplot_core::Error;
use pointplot_io::XyzReader;
use pointplot_visualization::{LabelKind, PlotConfig, ScatterScene};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn scene_from(content: &str, config: &PlotConfig) -> pointplot_core::Result<ScatterScene> {
    let file = write_temp(content);
    let cloud = XyzReader::read_columns(file.path())?.to_point_cloud();
    ScatterScene::build(&cloud, config)
}

#[test]
fn test_unit_axis_points() {
    let content = "1 0 0\n-1 0 0\n0 1 0\n0 -1 0\n0 0 1\n0 0 -1\n";
    let scene = scene_from(content, &PlotConfig::default()).unwrap();

    assert_eq!(scene.markers.len(), 6);
    assert_eq!(scene.skipped, 0);
    for (lo, hi) in scene.limits {
        assert_relative_eq!(lo, -1.1, epsilon = 1e-12);
        assert_relative_eq!(hi, 1.1, epsilon = 1e-12);
    }
    for ticks in &scene.ticks {
        assert_eq!(ticks.values.len(), 5);
    }
    assert_eq!(scene.title, "3D Point Distribution");

    let axis_labels: Vec<&str> = scene
        .labels
        .iter()
        .filter(|l| l.kind == LabelKind::Axis)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(axis_labels, vec!["X", "Y", "Z"]);
}

#[test]
fn test_colors_follow_z() {
    let config = PlotConfig {
        depth_shade: false,
        ..PlotConfig::default()
    };
    let scene = scene_from("0 0 -2\n0 0 2\n", &config).unwrap();

    let colors: Vec<Color32> = scene.markers.iter().map(|m| m.color).collect();
    assert!(colors.contains(&Color32::from_rgb(0x44, 0x01, 0x54)));
    assert!(colors.contains(&Color32::from_rgb(0xfd, 0xe7, 0x25)));
}

#[test]
fn test_extra_columns_are_ignored() {
    let scene = scene_from("0 0 0 9 9\n1 1 1 9 9\n", &PlotConfig::default()).unwrap();
    assert_eq!(scene.markers.len(), 2);
    assert_relative_eq!(scene.limits[0].1, 1.05, epsilon = 1e-12);
}

#[test]
fn test_single_point_plots() {
    let scene = scene_from("2 2 2\n", &PlotConfig::default()).unwrap();
    assert_eq!(scene.markers.len(), 1);
    let (lo, hi) = scene.limits[2];
    assert_relative_eq!(lo, 1.9, epsilon = 1e-12);
    assert_relative_eq!(hi, 2.1, epsilon = 1e-12);
}

#[test]
fn test_extreme_magnitudes_plot() {
    let scene = scene_from("-1e308 0 0\n1e308 1 1\n", &PlotConfig::default()).unwrap();
    assert_eq!(scene.markers.len(), 2);
    assert!(scene
        .markers
        .iter()
        .all(|m| m.position.x.is_finite() && m.position.y.is_finite()));
}

#[test]
fn test_near_flat_axis_has_distinct_tick_labels() {
    let scene = scene_from("0 0 0\n1 1 1e-14\n", &PlotConfig::default()).unwrap();
    let mut z_labels: Vec<&str> = scene
        .labels
        .iter()
        .filter(|l| l.kind == LabelKind::Tick && l.axis == 2)
        .map(|l| l.text.as_str())
        .collect();
    let count = z_labels.len();
    assert!(count > 1);
    z_labels.sort_unstable();
    z_labels.dedup();
    assert_eq!(z_labels.len(), count);
}

#[test]
fn test_non_finite_points_are_skipped() {
    let scene = scene_from("0 0 0\nnan 1 1\n1 1 inf\n1 1 1\n", &PlotConfig::default()).unwrap();
    assert_eq!(scene.markers.len(), 2);
    assert_eq!(scene.skipped, 2);
}

#[test]
fn test_only_non_finite_points_is_empty() {
    let result = scene_from("nan nan nan\n", &PlotConfig::default());
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_too_few_columns_fails_before_plotting() {
    let result = scene_from("1 2\n3 4\n", &PlotConfig::default());
    assert!(matches!(result, Err(Error::InsufficientColumns { found: 2 })));
}
