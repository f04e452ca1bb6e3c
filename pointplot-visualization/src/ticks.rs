//! Axis limits and tick placement

/// Step multipliers tried for each power of ten, smallest first
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Relative slack when comparing tick positions against limits
const EPSILON: f64 = 1e-9;

/// Most decimals a fixed-point tick label uses before switching to scientific notation
const MAX_FIXED_DECIMALS: usize = 12;

/// Steps at or above this are labelled in scientific notation
const MAX_FIXED_STEP: f64 = 1e6;

/// Longest mantissa printed for a scientific tick label
const MAX_SCIENTIFIC_DECIMALS: usize = 17;

/// Tick positions along one axis
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

/// Pad a data range by `margin` of its span on each side.
///
/// A range with no span is widened to `v ± 5%` of the value, or `±0.05`
/// around zero, so the axis is never degenerate. Finite input always gives
/// finite limits: the padded range is clamped to `±f64::MAX`.
pub fn axis_limits(min: f64, max: f64, margin: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (min, max);
    }
    let clamp = |v: f64| v.clamp(-f64::MAX, f64::MAX);

    // Halved so ranges wider than f64::MAX do not overflow
    let half_span = max / 2.0 - min / 2.0;
    if half_span <= 0.0 {
        let delta = if min == 0.0 { 0.05 } else { 0.05 * min.abs() };
        return (clamp(min - delta), clamp(max + delta));
    }
    let pad = margin * half_span * 2.0;
    (clamp(min - pad), clamp(max + pad))
}

/// Evenly spaced "round" ticks inside `[lo, hi]` using at most `max_bins` intervals.
///
/// The step is the smallest of `{1, 2, 2.5, 5, 10} × 10^k` that keeps the
/// number of intervals within `max_bins`.
pub fn nice_ticks(lo: f64, hi: f64, max_bins: usize) -> Ticks {
    let half_span = hi / 2.0 - lo / 2.0;
    if !(half_span > 0.0) || !half_span.is_finite() {
        return Ticks { values: vec![lo], step: 0.0 };
    }

    let raw = half_span / max_bins.max(1) as f64 * 2.0;
    if !raw.is_finite() {
        return Ticks { values: vec![lo, hi], step: f64::MAX };
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let multiplier = NICE_STEPS
        .iter()
        .copied()
        .find(|s| *s >= normalized * (1.0 - EPSILON))
        .unwrap_or(10.0);
    let step = multiplier * magnitude;

    let first = (lo / step - EPSILON).ceil() as i64;
    let last = (hi / step + EPSILON).floor() as i64;
    let values = (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // Avoid printing "-0.0" for the zero tick
            if v == 0.0 { 0.0 } else { v }
        })
        .filter(|v| v.is_finite())
        .collect();

    Ticks { values, step }
}

/// Format a tick value with just enough digits to distinguish steps of `step`.
///
/// Very small and very large steps are written in scientific notation.
pub fn format_tick(value: f64, step: f64) -> String {
    let value = if value.abs() < step.abs() * EPSILON { 0.0 } else { value };
    match decimals_for_step(step) {
        Some(decimals) if step < MAX_FIXED_STEP => format!("{:.*}", decimals, value),
        _ => format_scientific(value, step),
    }
}

fn format_scientific(value: f64, step: f64) -> String {
    let step_exponent = step.abs().log10().floor() as i32;
    let mantissa = step.abs() / 10f64.powi(step_exponent);
    let mantissa_decimals = decimals_for_step(mantissa).unwrap_or(MAX_FIXED_DECIMALS);
    if value == 0.0 {
        return format!("{:.*e}", mantissa_decimals, value);
    }

    let value_exponent = value.abs().log10().floor() as i32;
    let precision = ((value_exponent - step_exponent).max(0) as usize + mantissa_decimals)
        .min(MAX_SCIENTIFIC_DECIMALS);
    format!("{:.*e}", precision, value)
}

/// Decimals needed to write multiples of `step`, or `None` past the fixed-point cap
fn decimals_for_step(step: f64) -> Option<usize> {
    if !(step > 0.0) || !step.is_finite() {
        return Some(1);
    }
    (0..=MAX_FIXED_DECIMALS).find(|&d| {
        let scaled = step * 10f64.powi(d as i32);
        (scaled - scaled.round()).abs() <= scaled * EPSILON
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_ticks(ticks: &Ticks, expected: &[f64]) {
        assert_eq!(ticks.values.len(), expected.len(), "ticks: {:?}", ticks.values);
        for (a, b) in ticks.values.iter().zip(expected) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_axis_limits() {
        let (lo, hi) = axis_limits(-1.0, 1.0, 0.05);
        assert_relative_eq!(lo, -1.1);
        assert_relative_eq!(hi, 1.1);

        assert_eq!(axis_limits(0.0, 0.0, 0.05), (-0.05, 0.05));
        let (lo, hi) = axis_limits(-4.0, -4.0, 0.05);
        assert_relative_eq!(lo, -4.2);
        assert_relative_eq!(hi, -3.8);
    }

    #[test]
    fn test_unit_sphere_ticks() {
        let ticks = nice_ticks(-1.1, 1.1, 5);
        assert_relative_eq!(ticks.step, 0.5);
        assert_ticks(&ticks, &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_ticks_include_limits_on_step() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert_relative_eq!(ticks.step, 2.0);
        assert_ticks(&ticks, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let ticks = nice_ticks(0.0, 1.0, 5);
        assert_relative_eq!(ticks.step, 0.2, epsilon = 1e-12);
        assert_ticks(&ticks, &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_two_and_a_half_step() {
        let ticks = nice_ticks(0.0, 100.0, 4);
        assert_relative_eq!(ticks.step, 25.0);
        assert_ticks(&ticks, &[0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_degenerate_range() {
        let ticks = nice_ticks(3.0, 3.0, 5);
        assert_eq!(ticks.values, vec![3.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(-1.0, 0.5), "-1.0");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-0.0, 0.5), "0.0");
        assert_eq!(format_tick(4.0, 2.0), "4");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(0.6000000000000001, 0.2), "0.6");
        assert_eq!(format_tick(1e-17, 0.2), "0.0");
    }

    #[test]
    fn test_limits_wider_than_f64_max() {
        let (lo, hi) = axis_limits(-1e308, 1e308, 0.05);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < -1e308 && hi > 1e308);

        let (lo, hi) = axis_limits(-f64::MAX, f64::MAX, 0.05);
        assert_eq!((lo, hi), (-f64::MAX, f64::MAX));

        let (lo, hi) = axis_limits(f64::MAX, f64::MAX, 0.05);
        assert!(lo < f64::MAX);
        assert_eq!(hi, f64::MAX);

        let (lo, _) = axis_limits(f64::NEG_INFINITY, 0.0, 0.05);
        assert!(!lo.is_finite());
    }

    #[test]
    fn test_ticks_over_huge_range() {
        let (lo, hi) = axis_limits(-1e308, 1e308, 0.05);
        let ticks = nice_ticks(lo, hi, 5);
        assert_relative_eq!(ticks.step, 5e307, max_relative = 1e-12);
        assert_eq!(ticks.values.len(), 5);
        assert!(ticks.values.iter().all(|v| v.is_finite() && *v >= lo && *v <= hi));
    }

    #[test]
    fn test_tiny_step_labels_differ() {
        let (lo, hi) = axis_limits(0.0, 1e-14, 0.05);
        let ticks = nice_ticks(lo, hi, 5);
        assert_relative_eq!(ticks.step, 2.5e-15, max_relative = 1e-12);

        let labels: Vec<String> = ticks.values.iter().map(|v| format_tick(*v, ticks.step)).collect();
        assert_eq!(labels.len(), 5);
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b, "labels: {:?}", labels);
            }
        }
        assert_eq!(format_tick(7.5e-15, 2.5e-15), "7.5e-15");
        assert_eq!(format_tick(0.0, 1e-15), "0e0");
    }

    #[test]
    fn test_large_step_is_scientific() {
        assert_eq!(format_tick(4e6, 2e6), "4e6");
        assert_eq!(format_tick(1.2e7, 2e6), "1.2e7");
        assert_eq!(format_tick(-1e308, 5e307), "-1.0e308");
    }
}
