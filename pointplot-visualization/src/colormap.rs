//! Colormaps and value normalization

use serde::{Deserialize, Serialize};

/// Viridis at eleven evenly spaced stops
const VIRIDIS: [[u8; 3]; 11] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x24, 0x75],
    [0x41, 0x44, 0x87],
    [0x35, 0x5f, 0x8d],
    [0x2a, 0x78, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x22, 0xa8, 0x84],
    [0x44, 0xbf, 0x70],
    [0x7a, 0xd1, 0x51],
    [0xbd, 0xdf, 0x26],
    [0xfd, 0xe7, 0x25],
];

/// Built-in colormaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
}

impl Colormap {
    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
        }
    }

    /// Color at position `t` along the map.
    ///
    /// `t` is clamped to `[0, 1]`; NaN has no color.
    pub fn sample(&self, t: f64) -> Option<[u8; 3]> {
        if t.is_nan() {
            return None;
        }

        let stops = self.stops();
        let last = stops.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * last as f64;
        let index = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - index as f64;

        let (a, b) = (stops[index], stops[index + 1]);
        let lerp = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8;
        Some([lerp(0), lerp(1), lerp(2)])
    }
}

/// Linear map from `[vmin, vmax]` onto `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// Fit the range to the finite values of an iterator
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |range: Option<Self>, v| match range {
                None => Some(Self::new(v, v)),
                Some(r) => Some(Self::new(r.vmin.min(v), r.vmax.max(v))),
            })
    }

    /// Position of `value` in the range; an empty range maps everything to 0
    pub fn apply(&self, value: f64) -> f64 {
        // Halved so ranges wider than f64::MAX stay finite
        let half_span = self.vmax / 2.0 - self.vmin / 2.0;
        if half_span == 0.0 {
            return 0.0;
        }
        (value / 2.0 - self.vmin / 2.0) / half_span
    }
}
