//! Projected 3D scatter scene
//!
//! A [`ScatterScene`] holds everything needed to paint one figure: the back
//! panes of the plot box with their grid lines, the three axes with ticks and
//! labels, and one colored marker per finite point. All geometry is projected
//! once into scene space (normalized device coordinates with y pointing down)
//! and only scaled into the window when painted, see [`ScatterScene::fit`].

use crate::camera::Camera;
use crate::colormap::Normalize;
use crate::config::PlotConfig;
use crate::ticks::{axis_limits, format_tick, nice_ticks, Ticks};
use egui::{Color32, Pos2, Rect, Vec2};
use nalgebra::{Point3, Vector3};
use pointplot_core::{is_finite_point, Drawable, Error, Point3d, PointCloud, Result};
use tracing::{debug, warn};

const PANE_FILL: Color32 = Color32::from_rgb(242, 242, 242);
const PANE_EDGE: Color32 = Color32::from_rgb(220, 220, 220);

/// Lengths in plot box units, where the longest box edge is 1
const TICK_LENGTH: f64 = 0.03;
const TICK_LABEL_OFFSET: f64 = 0.10;
const AXIS_LABEL_OFFSET: f64 = 0.24;

/// Opacity of the farthest marker when depth shading
const DEPTH_SHADE_FLOOR: f64 = 0.3;

/// A filled back face of the plot box
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub corners: Vec<Pos2>,
    pub fill: Color32,
    pub edge: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Grid,
    Axis,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Tick,
    Axis,
}

/// Text centered on `anchor`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Pos2,
    pub kind: LabelKind,
    /// 0 for x, 1 for y, 2 for z
    pub axis: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Pos2,
    pub color: Color32,
    /// View depth; larger is farther from the viewer
    pub depth: f64,
}

/// Maps scene space into a window rectangle with a uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub scale: f32,
    pub scene_center: Pos2,
    pub screen_center: Pos2,
}

impl ScreenTransform {
    pub fn apply(&self, point: Pos2) -> Pos2 {
        self.screen_center + (point - self.scene_center) * self.scale
    }
}

/// A fully laid out scatter figure
#[derive(Debug, Clone)]
pub struct ScatterScene {
    pub title: String,
    pub panes: Vec<Pane>,
    pub segments: Vec<Segment>,
    pub labels: Vec<Label>,
    /// Markers in painting order, farthest first
    pub markers: Vec<Marker>,
    /// Axis limits for x, y and z in data units
    pub limits: [(f64, f64); 3],
    pub ticks: [Ticks; 3],
    /// Marker radius in pixels
    pub marker_radius: f32,
    /// Bounds of all projected geometry in scene space
    pub extent: Rect,
    /// Points left out because a coordinate was NaN or infinite
    pub skipped: usize,
}

/// Data-to-box mapping for the three axes
struct PlotBox {
    limits: [(f64, f64); 3],
    half: [f64; 3],
}

impl PlotBox {
    fn new(limits: [(f64, f64); 3], aspect: [f64; 3]) -> Self {
        let longest = aspect.iter().copied().fold(f64::MIN_POSITIVE, f64::max);
        let half = aspect.map(|a| 0.5 * a.max(0.0) / longest);
        Self { limits, half }
    }

    fn coord(&self, axis: usize, value: f64) -> f64 {
        let (lo, hi) = self.limits[axis];
        let h = self.half[axis];
        // Halved so limits spanning more than f64::MAX stay finite
        (value / 2.0 - lo / 2.0) / (hi / 2.0 - lo / 2.0) * 2.0 * h - h
    }

    fn point(&self, p: &Point3d) -> Point3<f64> {
        Point3::new(self.coord(0, p.x), self.coord(1, p.y), self.coord(2, p.z))
    }
}

/// Projects box-space points into scene space
struct Projector {
    camera: Camera,
}

impl Projector {
    fn to_scene(&self, p: &Point3<f64>) -> (Pos2, f64) {
        let projected = self.camera.project(p);
        (
            Pos2::new(projected.ndc.x as f32, -projected.ndc.y as f32),
            projected.depth,
        )
    }

    fn pos(&self, coords: [f64; 3]) -> Pos2 {
        self.to_scene(&Point3::from(coords)).0
    }
}

impl ScatterScene {
    /// Lay out a scatter plot of `cloud` colored by z.
    ///
    /// Fails with [`Error::EmptyInput`] when the cloud has no finite point.
    pub fn build(cloud: &PointCloud<Point3d>, config: &PlotConfig) -> Result<Self> {
        let bounds = cloud.bounding_box().ok_or(Error::EmptyInput)?;
        let finite: Vec<&Point3d> = cloud.iter().filter(|p| is_finite_point(p)).collect();
        let skipped = cloud.len() - finite.len();
        if skipped > 0 {
            warn!(skipped, "points with non-finite coordinates are not drawn");
        }

        let limits = [0, 1, 2].map(|axis| {
            let (min, max) = bounds.extent(axis);
            axis_limits(min, max, config.axis_margin)
        });
        if let Some(axis) = limits.iter().position(|(lo, hi)| !(lo.is_finite() && hi.is_finite() && lo < hi)) {
            return Err(Error::InvalidData(format!(
                "cannot scale axis {} to limits {:?}",
                config.axis_labels[axis], limits[axis]
            )));
        }
        let ticks = limits.map(|(lo, hi)| nice_ticks(lo, hi, config.max_tick_bins));
        let plot_box = PlotBox::new(limits, config.box_aspect);

        let eye = Camera::view_direction(config.elevation, config.azimuth);
        let projector = Projector {
            camera: Camera::orbit(config.elevation, config.azimuth),
        };

        // The panes drawn are the three faces turned away from the viewer.
        let back = [0, 1, 2].map(|i| if eye[i] > 0.0 { -plot_box.half[i] } else { plot_box.half[i] });
        let front = back.map(|c| -c);

        let panes = Self::panes(&plot_box, &projector, &back);
        let mut segments = Self::grid(&plot_box, &projector, &back, &ticks);
        let mut labels = Vec::new();

        for axis in 0..3 {
            let (anchor, outward) = Self::axis_edge(axis, &projector, &back, &front);
            Self::axis_decorations(
                axis,
                anchor,
                &outward,
                &plot_box,
                &projector,
                &ticks[axis],
                &config.axis_labels[axis],
                &mut segments,
                &mut labels,
            );
        }

        let markers = Self::markers(&finite, &plot_box, &projector, config);

        let mut points: Vec<Pos2> = panes.iter().flat_map(|p| p.corners.iter().copied()).collect();
        points.extend(segments.iter().flat_map(|s| [s.from, s.to]));
        points.extend(labels.iter().map(|l| l.anchor));
        points.extend(markers.iter().map(|m| m.position));
        let extent = Rect::from_points(&points);

        debug!(
            markers = markers.len(),
            segments = segments.len(),
            labels = labels.len(),
            "built scatter scene"
        );

        Ok(Self {
            title: config.title.clone(),
            panes,
            segments,
            labels,
            markers,
            limits,
            ticks,
            marker_radius: config.marker_radius(),
            extent,
            skipped,
        })
    }

    /// Transform that centers the scene in `rect` below a title band of
    /// `title_height` pixels, keeping `padding` pixels clear on every side
    pub fn fit(&self, rect: Rect, title_height: f32, padding: f32) -> ScreenTransform {
        let plot = Rect::from_min_max(
            rect.min + Vec2::new(padding, padding + title_height),
            rect.max - Vec2::new(padding, padding),
        );
        let width = self.extent.width().max(f32::EPSILON);
        let height = self.extent.height().max(f32::EPSILON);
        let scale = (plot.width() / width).min(plot.height() / height).max(0.0);

        ScreenTransform {
            scale,
            scene_center: self.extent.center(),
            screen_center: plot.center(),
        }
    }

    fn panes(plot_box: &PlotBox, projector: &Projector, back: &[f64; 3]) -> Vec<Pane> {
        (0..3)
            .map(|axis| {
                let (j, k) = ((axis + 1) % 3, (axis + 2) % 3);
                let (hj, hk) = (plot_box.half[j], plot_box.half[k]);
                let corners = [(-hj, -hk), (hj, -hk), (hj, hk), (-hj, hk)]
                    .into_iter()
                    .map(|(cj, ck)| {
                        let mut coords = [0.0; 3];
                        coords[axis] = back[axis];
                        coords[j] = cj;
                        coords[k] = ck;
                        projector.pos(coords)
                    })
                    .collect();
                Pane {
                    corners,
                    fill: PANE_FILL,
                    edge: PANE_EDGE,
                }
            })
            .collect()
    }

    /// One line per tick across each of the two back panes parallel to its axis
    fn grid(plot_box: &PlotBox, projector: &Projector, back: &[f64; 3], ticks: &[Ticks; 3]) -> Vec<Segment> {
        let mut segments = Vec::new();
        for axis in 0..3 {
            for &value in &ticks[axis].values {
                let b = plot_box.coord(axis, value);
                for pane in (0..3).filter(|&p| p != axis) {
                    let across = 3 - axis - pane;
                    let h = plot_box.half[across];
                    let mut from = [0.0; 3];
                    from[axis] = b;
                    from[pane] = back[pane];
                    let mut to = from;
                    from[across] = -h;
                    to[across] = h;
                    segments.push(Segment {
                        from: projector.pos(from),
                        to: projector.pos(to),
                        kind: LineKind::Grid,
                    });
                }
            }
        }
        segments
    }

    /// The box edge carrying an axis and the outward direction for its ticks.
    ///
    /// The edge is returned as its box-space coordinates with the axis' own
    /// coordinate left at zero.
    fn axis_edge(
        axis: usize,
        projector: &Projector,
        back: &[f64; 3],
        front: &[f64; 3],
    ) -> ([f64; 3], Vector3<f64>) {
        let mut anchor = [0.0; 3];
        let mut outward = Vector3::zeros();

        if axis < 2 {
            // x and y run along the bottom of the box on the viewer's side
            let other = 1 - axis;
            anchor[other] = front[other];
            anchor[2] = back[2];
            outward[other] = front[other].signum();
        } else {
            // z stands on whichever side corner lies further left on screen
            let candidates = [[back[0], front[1]], [front[0], back[1]]];
            let screen_x = |c: &[f64; 2]| projector.pos([c[0], c[1], 0.0]).x;
            let corner = if screen_x(&candidates[0]) <= screen_x(&candidates[1]) {
                candidates[0]
            } else {
                candidates[1]
            };
            anchor[0] = corner[0];
            anchor[1] = corner[1];
            outward = Vector3::new(corner[0], corner[1], 0.0);
        }

        let outward = outward.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
        (anchor, outward)
    }

    #[allow(clippy::too_many_arguments)]
    fn axis_decorations(
        axis: usize,
        anchor: [f64; 3],
        outward: &Vector3<f64>,
        plot_box: &PlotBox,
        projector: &Projector,
        ticks: &Ticks,
        label: &str,
        segments: &mut Vec<Segment>,
        labels: &mut Vec<Label>,
    ) {
        let at = |t: f64, offset: f64| {
            let mut coords = anchor;
            coords[axis] = t;
            let p = Point3::from(coords) + outward * offset;
            projector.to_scene(&p).0
        };

        let h = plot_box.half[axis];
        segments.push(Segment {
            from: at(-h, 0.0),
            to: at(h, 0.0),
            kind: LineKind::Axis,
        });

        for &value in &ticks.values {
            let b = plot_box.coord(axis, value);
            segments.push(Segment {
                from: at(b, 0.0),
                to: at(b, TICK_LENGTH),
                kind: LineKind::Tick,
            });
            labels.push(Label {
                text: format_tick(value, ticks.step),
                anchor: at(b, TICK_LABEL_OFFSET),
                kind: LabelKind::Tick,
                axis,
            });
        }

        labels.push(Label {
            text: label.to_string(),
            anchor: at(0.0, AXIS_LABEL_OFFSET),
            kind: LabelKind::Axis,
            axis,
        });
    }

    fn markers(points: &[&Point3d], plot_box: &PlotBox, projector: &Projector, config: &PlotConfig) -> Vec<Marker> {
        let norm = Normalize::from_values(points.iter().map(|p| p.z));

        let mut markers: Vec<Marker> = points
            .iter()
            .map(|p| {
                let (position, depth) = projector.to_scene(&plot_box.point(p));
                let t = norm.map(|n| n.apply(p.z)).unwrap_or(0.0);
                let [r, g, b] = config.colormap.sample(t).unwrap_or([0, 0, 0]);
                Marker {
                    position,
                    color: Color32::from_rgb(r, g, b),
                    depth,
                }
            })
            .collect();

        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        if config.depth_shade {
            let depths = Normalize::from_values(markers.iter().map(|m| m.depth));
            if let Some(depths) = depths {
                for marker in &mut markers {
                    let alpha = 1.0 - (1.0 - DEPTH_SHADE_FLOOR) * depths.apply(marker.depth);
                    let [r, g, b, _] = marker.color.to_array();
                    marker.color = Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8);
                }
            }
        }

        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;

    fn sample_cloud() -> PointCloud<Point3d> {
        PointCloud::from_points(vec![
            Point3d::new(0.0, 0.0, 1.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
            Point3d::new(-1.0, 0.0, 0.0),
            Point3d::new(0.0, -1.0, 0.0),
            Point3d::new(0.0, 0.0, -1.0),
        ])
    }

    fn flat(config: PlotConfig) -> PlotConfig {
        PlotConfig {
            depth_shade: false,
            ..config
        }
    }

    #[test]
    fn test_one_marker_per_point() {
        let scene = ScatterScene::build(&sample_cloud(), &PlotConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 6);
        assert_eq!(scene.skipped, 0);
        assert_eq!(scene.panes.len(), 3);
        assert_eq!(scene.title, "3D Point Distribution");
    }

    #[test]
    fn test_markers_painted_far_to_near() {
        let scene = ScatterScene::build(&sample_cloud(), &PlotConfig::default()).unwrap();
        for pair in scene.markers.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_colors_follow_z() {
        let scene = ScatterScene::build(&sample_cloud(), &flat(PlotConfig::default())).unwrap();
        let top = Colormap::Viridis.sample(1.0).unwrap();
        let bottom = Colormap::Viridis.sample(0.0).unwrap();
        let middle = Colormap::Viridis.sample(0.5).unwrap();

        let count = |rgb: [u8; 3]| {
            scene
                .markers
                .iter()
                .filter(|m| m.color == Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
                .count()
        };
        assert_eq!(count(top), 1);
        assert_eq!(count(bottom), 1);
        assert_eq!(count(middle), 4);
    }

    #[test]
    fn test_depth_shading_fades_far_markers() {
        let scene = ScatterScene::build(&sample_cloud(), &PlotConfig::default()).unwrap();
        let farthest = scene.markers.first().unwrap();
        let nearest = scene.markers.last().unwrap();
        assert_eq!(nearest.color.a(), 255);
        assert_eq!(farthest.color.a(), (DEPTH_SHADE_FLOOR * 255.0).round() as u8);
    }

    #[test]
    fn test_limits_ticks_and_labels() {
        let scene = ScatterScene::build(&sample_cloud(), &PlotConfig::default()).unwrap();
        for axis in 0..3 {
            let (lo, hi) = scene.limits[axis];
            assert!((lo + 1.1).abs() < 1e-9 && (hi - 1.1).abs() < 1e-9);
            assert_eq!(scene.ticks[axis].values.len(), 5);
        }

        let axis_labels: Vec<&str> = scene
            .labels
            .iter()
            .filter(|l| l.kind == LabelKind::Axis)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(axis_labels, vec!["X", "Y", "Z"]);

        let x_ticks: Vec<&str> = scene
            .labels
            .iter()
            .filter(|l| l.kind == LabelKind::Tick && l.axis == 0)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(x_ticks, vec!["-1.0", "-0.5", "0.0", "0.5", "1.0"]);

        let grid = scene.segments.iter().filter(|s| s.kind == LineKind::Grid).count();
        assert_eq!(grid, 3 * 5 * 2);
        let axes = scene.segments.iter().filter(|s| s.kind == LineKind::Axis).count();
        assert_eq!(axes, 3);
    }

    #[test]
    fn test_non_finite_points_skipped() {
        let mut cloud = sample_cloud();
        cloud.push(Point3d::new(f64::NAN, 0.0, 0.0));
        cloud.push(Point3d::new(0.0, 0.0, f64::INFINITY));
        let scene = ScatterScene::build(&cloud, &PlotConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 6);
        assert_eq!(scene.skipped, 2);
    }

    #[test]
    fn test_empty_cloud_rejected() {
        let empty: PointCloud<Point3d> = PointCloud::new();
        assert!(matches!(
            ScatterScene::build(&empty, &PlotConfig::default()),
            Err(Error::EmptyInput)
        ));

        let all_nan = PointCloud::from_points(vec![Point3d::new(f64::NAN, f64::NAN, f64::NAN)]);
        assert!(matches!(
            ScatterScene::build(&all_nan, &PlotConfig::default()),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_single_point_scene() {
        let cloud = PointCloud::from_points(vec![Point3d::new(2.0, 2.0, 2.0)]);
        let scene = ScatterScene::build(&cloud, &PlotConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].color.a(), 255);
        let (lo, hi) = scene.limits[2];
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let cloud = PointCloud::from_points(vec![
            Point3d::new(-1e308, 0.0, 0.0),
            Point3d::new(1e308, 1.0, 1.0),
        ]);
        let scene = ScatterScene::build(&cloud, &PlotConfig::default()).unwrap();

        assert_eq!(scene.markers.len(), 2);
        for marker in &scene.markers {
            assert!(marker.position.x.is_finite() && marker.position.y.is_finite());
        }
        assert!(scene.extent.width() > 0.0 && scene.extent.height() > 0.0);
        assert!(scene.limits[0].0.is_finite() && scene.limits[0].1.is_finite());
        assert_eq!(scene.ticks[0].values.len(), 5);
        assert!(scene
            .segments
            .iter()
            .all(|s| s.from.x.is_finite() && s.from.y.is_finite() && s.to.x.is_finite() && s.to.y.is_finite()));

        // The two markers sit at opposite x ends of the box, so they cannot coincide
        assert_ne!(scene.markers[0].position, scene.markers[1].position);
    }

    #[test]
    fn test_box_aspect_is_cubic_for_skewed_data() {
        // x spans 100 units, z spans 1; the box still has equal edges
        let cloud = PointCloud::from_points(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(100.0, 1.0, 1.0),
        ]);
        let scene = ScatterScene::build(&cloud, &PlotConfig::default()).unwrap();
        let x_axis = scene.segments.iter().find(|s| s.kind == LineKind::Axis).unwrap();
        let z_axis = scene.segments.iter().filter(|s| s.kind == LineKind::Axis).nth(2).unwrap();
        let x_len = (x_axis.to - x_axis.from).length();
        let z_len = (z_axis.to - z_axis.from).length();
        assert!(x_len > 0.0 && z_len > 0.0);
        assert!(x_len / z_len < 3.0 && z_len / x_len < 3.0);
    }

    #[test]
    fn test_fit_keeps_scene_inside_rect() {
        let scene = ScatterScene::build(&sample_cloud(), &PlotConfig::default()).unwrap();
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let transform = scene.fit(rect, 30.0, 40.0);
        assert!(transform.scale > 0.0);

        let inner = Rect::from_min_max(Pos2::new(39.0, 69.0), Pos2::new(961.0, 761.0));
        for marker in &scene.markers {
            assert!(inner.contains(transform.apply(marker.position)));
        }
        for pane in &scene.panes {
            for corner in &pane.corners {
                assert!(inner.contains(transform.apply(*corner)));
            }
        }
    }
}
