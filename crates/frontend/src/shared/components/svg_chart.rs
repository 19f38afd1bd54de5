//! Geometry for the inline SVG charts of the analytics dashboard.
//!
//! Everything here is plain math producing SVG attribute strings; the views
//! only place the results.

use std::f64::consts::PI;

/// Series colors, cycled by index.
pub const SERIES_COLORS: [&str; 8] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
];

pub fn color_at(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Rounds `value` up to 1, 2 or 5 times a power of ten. Non-positive input
/// gives 1 so an all-zero series still has an axis.
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let exp = value.log10().floor();
    let base = 10f64.powi(exp as i32);
    let fraction = value / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Maps `0..=domain_max` onto `range_start..=range_end`. For a y axis pass the
/// bottom edge as `range_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            domain_max: if domain_max > 0.0 { domain_max } else { 1.0 },
            range_start,
            range_end,
        }
    }

    pub fn scale(&self, value: f64) -> f64 {
        self.range_start + (value / self.domain_max) * (self.range_end - self.range_start)
    }

    /// `count + 1` evenly spaced values from 0 to the domain max.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.domain_max * i as f64 / count as f64)
            .collect()
    }
}

/// SVG attribute value for a coordinate.
pub fn coord(value: f64) -> String {
    format!("{:.2}", value)
}

/// Evenly spaced x positions; a single point sits in the middle.
pub fn x_positions(count: usize, left: f64, right: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(left + right) / 2.0],
        n => {
            let step = (right - left) / (n - 1) as f64;
            (0..n).map(|i| left + step * i as f64).collect()
        }
    }
}

/// `points` attribute of a `<polyline>`.
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the area between the line and `baseline_y`.
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = format!("M{:.2},{:.2}", first.0, baseline_y);
    for (x, y) in points {
        d.push_str(&format!(" L{:.2},{:.2}", x, y));
    }
    d.push_str(&format!(" L{:.2},{:.2} Z", last.0, baseline_y));
    d
}

/// `value / max` as a percentage clamped to 0..=100.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn polar(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    // fraction 0 is twelve o'clock, growing clockwise
    let angle = fraction * 2.0 * PI - PI / 2.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring segment between two cumulative fractions (0..=1) of the circle.
pub fn donut_segment_path(
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    // a closed arc would collapse start and end onto the same point
    let end = end.min(start + 0.9999);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    let (osx, osy) = polar(cx, cy, outer, start);
    let (oex, oey) = polar(cx, cy, outer, end);
    let (iex, iey) = polar(cx, cy, inner, end);
    let (isx, isy) = polar(cx, cy, inner, start);
    format!(
        "M{:.2},{:.2} A{},{} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{},{} 0 {} 0 {:.2},{:.2} Z",
        osx, osy, outer, outer, large_arc, oex, oey, iex, iey, inner, inner, large_arc, isx, isy
    )
}

/// Point in the middle of a segment, used to anchor its percentage label.
pub fn segment_label_point(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> (f64, f64) {
    polar(cx, cy, radius, (start + end) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-5.0), 1.0);
        assert_eq!(nice_max(1.0), 1.0);
        assert_eq!(nice_max(87.0), 100.0);
        assert_eq!(nice_max(120.0), 200.0);
        assert_eq!(nice_max(430.0), 500.0);
    }

    #[test]
    fn test_linear_scale_inverted_axis() {
        let y = LinearScale::new(100.0, 200.0, 0.0);
        assert_eq!(y.scale(0.0), 200.0);
        assert_eq!(y.scale(50.0), 100.0);
        assert_eq!(y.scale(100.0), 0.0);
        assert_eq!(y.ticks(4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_zero_domain_does_not_divide_by_zero() {
        let y = LinearScale::new(0.0, 100.0, 0.0);
        assert_eq!(y.scale(0.0), 100.0);
    }

    #[test]
    fn test_x_positions() {
        assert_eq!(x_positions(3, 0.0, 100.0), vec![0.0, 50.0, 100.0]);
        assert_eq!(x_positions(1, 0.0, 100.0), vec![50.0]);
        assert!(x_positions(0, 0.0, 100.0).is_empty());
    }

    #[test]
    fn test_polyline_and_area() {
        let pts = [(0.0, 10.0), (50.0, 5.5)];
        assert_eq!(polyline_points(&pts), "0.00,10.00 50.00,5.50");
        assert_eq!(
            area_path(&pts, 100.0),
            "M0.00,100.00 L0.00,10.00 L50.00,5.50 L50.00,100.00 Z"
        );
        assert_eq!(area_path(&[], 100.0), "");
    }

    #[test]
    fn test_donut_quarter_segment() {
        assert_eq!(
            donut_segment_path(100.0, 100.0, 80.0, 50.0, 0.0, 0.25),
            "M100.00,20.00 A80,80 0 0 1 180.00,100.00 L150.00,100.00 A50,50 0 0 0 100.00,50.00 Z"
        );
    }

    #[test]
    fn test_coord() {
        assert_eq!(coord(12.0), "12.00");
        assert_eq!(coord(3.14159), "3.14");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(25.0, 50.0), 50.0);
        assert_eq!(percent_of(5.0, 0.0), 0.0);
    }
}
