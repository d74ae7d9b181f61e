//! SVG geometry for the skill and roadmap charts.
//!
//! Angles follow the polar convention used by the page's charts: degrees,
//! counter-clockwise from the positive x axis, with SVG's y axis pointing down.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing area inside an SVG `viewBox` of `width x height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Viewport {
    pub fn left(&self) -> f64 {
        self.padding.left
    }

    pub fn right(&self) -> f64 {
        self.width - self.padding.right
    }

    pub fn top(&self) -> f64 {
        self.padding.top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding.bottom
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Vertical position of `value` on a `0..=max` y axis.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        linear_scale(
            value.clamp(0.0, max),
            (0.0, max),
            (self.bottom(), self.top()),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 280.0,
            padding: Padding {
                top: 12.0,
                right: 16.0,
                bottom: 28.0,
                left: 40.0,
            },
        }
    }
}

/// Maps `value` from `domain` onto `range`. A zero-width domain maps to the
/// start of the range.
pub fn linear_scale(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let span = domain.1 - domain.0;
    if span == 0.0 || !span.is_finite() {
        return range.0;
    }
    range.0 + (value - domain.0) / span * (range.1 - range.0)
}

/// `0, step, 2*step, ...` up to and including `max`.
pub fn ticks(max: u32, step: u32) -> Vec<u32> {
    if step == 0 {
        return vec![0];
    }
    (0..=max).step_by(step as usize).collect()
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = -angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Angle of spoke `i` out of `n`; the first spoke points straight up and the
/// rest follow clockwise.
pub fn radar_angle(i: usize, n: usize) -> f64 {
    if n == 0 {
        return 90.0;
    }
    90.0 - 360.0 * i as f64 / n as f64
}

/// One vertex per value, each clamped to `0..=max` before scaling to `radius`.
pub fn radar_points(values: &[f64], max: f64, center: Point, radius: f64) -> Vec<Point> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let r = linear_scale(v.clamp(0.0, max), (0.0, max), (0.0, radius));
            polar_to_cartesian(center, r, radar_angle(i, n))
        })
        .collect()
}

/// Polygon ring for a polar grid line at `radius`.
pub fn radar_ring(n: usize, center: Point, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| polar_to_cartesian(center, radius, radar_angle(i, n)))
        .collect()
}

/// Text anchor that keeps a spoke label outside the chart.
pub fn label_anchor(angle_deg: f64) -> &'static str {
    let x = angle_deg.to_radians().cos();
    if x.abs() < 1e-6 {
        "middle"
    } else if x > 0.0 {
        "start"
    } else {
        "end"
    }
}

/// SVG `points` attribute for `<polygon>` / `<polyline>`.
pub fn polygon_points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Share of each category band left empty around its bar.
pub const BAR_CATEGORY_GAP: f64 = 0.1;

/// Equal-width category bands, bars growing up from the bottom edge.
pub fn bar_layout(values: &[f64], max: f64, vp: &Viewport) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let band = vp.inner_width() / values.len() as f64;
    let gap = band * BAR_CATEGORY_GAP;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = vp.y_for(*v, max);
            BarRect {
                x: vp.left() + band * i as f64 + gap,
                y,
                width: band - 2.0 * gap,
                height: vp.bottom() - y,
            }
        })
        .collect()
}

/// Evenly spaced points across the viewport; a single point sits centered.
pub fn line_points(values: &[f64], max: f64, vp: &Viewport) -> Vec<Point> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n == 1 {
                vp.left() + vp.inner_width() / 2.0
            } else {
                vp.left() + vp.inner_width() * i as f64 / (n - 1) as f64
            };
            Point::new(x, vp.y_for(*v, max))
        })
        .collect()
}

/// Straight segments through every point.
pub fn straight_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{cmd}{:.2},{:.2}", p.x, p.y);
    }
    out
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Interior tangent at `p1` (Steffen / Fritsch-Carlson style limiter).
fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = if h0 != 0.0 { (p1.y - p0.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.y - p1.y) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 {
        (s0 * h1 + s1 * h0) / (h0 + h1)
    } else {
        0.0
    };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// One-sided tangent at an end point, given the neighbour's tangent.
fn end_slope(a: Point, b: Point, t: f64) -> f64 {
    let h = b.x - a.x;
    if h != 0.0 {
        (3.0 * (b.y - a.y) / h - t) / 2.0
    } else {
        t
    }
}

/// Monotone-in-x cubic curve: never overshoots between consecutive points,
/// so a rising series never dips and a peak stays the peak.
pub fn monotone_path(points: &[Point]) -> String {
    let n = points.len();
    if n < 3 {
        return straight_path(points);
    }
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 1], points[n - 2], tangents[n - 2]);

    let mut out = String::new();
    let _ = write!(out, "M{:.2},{:.2}", points[0].x, points[0].y);
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        let _ = write!(
            out,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            a.x + dx,
            a.y + dx * tangents[i],
            b.x - dx,
            b.y - dx * tangents[i + 1],
            b.x,
            b.y
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn vp() -> Viewport {
        Viewport {
            width: 200.0,
            height: 120.0,
            padding: Padding {
                top: 10.0,
                right: 10.0,
                bottom: 10.0,
                left: 10.0,
            },
        }
    }

    #[test]
    fn linear_scale_maps_and_inverts() {
        assert!(close(linear_scale(50.0, (0.0, 100.0), (0.0, 200.0)), 100.0));
        assert!(close(linear_scale(25.0, (0.0, 100.0), (100.0, 0.0)), 75.0));
        assert!(close(linear_scale(7.0, (3.0, 3.0), (10.0, 20.0)), 10.0));
    }

    #[test]
    fn ticks_include_max() {
        assert_eq!(ticks(100, 25), vec![0, 25, 50, 75, 100]);
        assert_eq!(ticks(90, 25), vec![0, 25, 50, 75]);
        assert_eq!(ticks(10, 0), vec![0]);
    }

    #[test]
    fn first_radar_spoke_points_up() {
        let c = Point::new(100.0, 100.0);
        let pts = radar_points(&[100.0, 100.0, 100.0, 100.0], 100.0, c, 50.0);
        assert!(close(pts[0].x, 100.0) && close(pts[0].y, 50.0));
        // clockwise: second spoke points right
        assert!(close(pts[1].x, 150.0) && close(pts[1].y, 100.0));
        assert!(close(pts[2].y, 150.0));
        assert!(close(pts[3].x, 50.0));
    }

    #[test]
    fn radar_values_are_clamped() {
        let c = Point::new(0.0, 0.0);
        let pts = radar_points(&[150.0, -20.0], 100.0, c, 10.0);
        assert!(close(pts[0].y, -10.0));
        assert!(close(pts[1].x, 0.0) && close(pts[1].y, 0.0));
    }

    #[test]
    fn radius_axis_at_thirty_degrees_goes_up_right() {
        let p = polar_to_cartesian(Point::new(0.0, 0.0), 10.0, 30.0);
        assert!(p.x > 0.0 && p.y < 0.0);
        assert!(close(p.y, -5.0));
    }

    #[test]
    fn label_anchors_follow_side() {
        assert_eq!(label_anchor(90.0), "middle");
        assert_eq!(label_anchor(0.0), "start");
        assert_eq!(label_anchor(180.0), "end");
    }

    #[test]
    fn polygon_points_format() {
        let s = polygon_points(&[Point::new(1.0, 2.0), Point::new(3.5, 4.25)]);
        assert_eq!(s, "1.00,2.00 3.50,4.25");
    }

    #[test]
    fn bars_share_the_inner_width() {
        let v = vp();
        let bars = bar_layout(&[100.0, 50.0, 0.0], 100.0, &v);
        assert_eq!(bars.len(), 3);
        // band is 60 wide, 6 of gap on each side
        assert!(close(bars[0].x, 16.0));
        assert!(close(bars[0].width, 48.0));
        assert!(close(bars[0].y, v.top()));
        assert!(close(bars[0].height, v.inner_height()));
        assert!(close(bars[1].height, v.inner_height() / 2.0));
        assert!(close(bars[2].height, 0.0));
        assert!(bars.windows(2).all(|w| w[0].x + w[0].width < w[1].x));
        assert!(bar_layout(&[], 100.0, &v).is_empty());
    }

    #[test]
    fn line_points_span_viewport() {
        let v = vp();
        let pts = line_points(&[30.0, 60.0, 10.0], 100.0, &v);
        assert!(close(pts[0].x, v.left()));
        assert!(close(pts[2].x, v.right()));
        assert!(close(pts[1].x, 100.0));
        assert!(pts[1].y < pts[0].y && pts[0].y < pts[2].y);

        let single = line_points(&[50.0], 100.0, &v);
        assert!(close(single[0].x, 100.0));
    }

    #[test]
    fn short_series_fall_back_to_straight_lines() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
        assert_eq!(monotone_path(&pts), "M0.00,0.00L10.00,5.00");
        assert_eq!(monotone_path(&[]), "");
    }

    #[test]
    fn monotone_path_has_one_segment_per_gap() {
        let pts = [
            Point::new(0.0, 80.0),
            Point::new(50.0, 40.0),
            Point::new(100.0, 90.0),
        ];
        let path = monotone_path(&pts);
        assert!(path.starts_with("M0.00,80.00"));
        assert_eq!(path.matches('C').count(), 2);
        assert!(path.ends_with("100.00,90.00"));
    }

    #[test]
    fn monotone_data_gives_monotone_controls() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 10.0),
            Point::new(3.0, 11.0),
        ];
        let n = pts.len();
        let mut t = vec![0.0; n];
        for i in 1..n - 1 {
            t[i] = interior_slope(pts[i - 1], pts[i], pts[i + 1]);
        }
        t[0] = end_slope(pts[0], pts[1], t[1]);
        t[n - 1] = end_slope(pts[n - 1], pts[n - 2], t[n - 2]);
        for i in 0..n - 1 {
            let dx = (pts[i + 1].x - pts[i].x) / 3.0;
            let c1 = pts[i].y + dx * t[i];
            let c2 = pts[i + 1].y - dx * t[i + 1];
            assert!(c1 >= pts[i].y - EPS && c1 <= pts[i + 1].y + EPS);
            assert!(c2 >= pts[i].y - EPS && c2 <= pts[i + 1].y + EPS);
        }
    }

    #[test]
    fn local_extremum_has_flat_tangent() {
        let t = interior_slope(
            Point::new(0.0, 0.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 0.0),
        );
        assert!(close(t, 0.0));
    }
}
