use std::ops::{Add, Mul, Sub};

/// Number of polyline segments used for a fully revealed curve
pub const FULL_SAMPLES: f64 = 100.0;

/// A position in canvas pixel coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// Linear interpolation between two points, exact at both ends
pub fn lerp_point(p0: Point, p1: Point, t: f64) -> Point {
    p0 * (1.0 - t) + p1 * t
}

/// Quadratic Bézier: (1-t)²p0 + 2(1-t)t·p1 + t²p2
pub fn quadratic_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Cubic Bézier: (1-t)³p0 + 3(1-t)²t·p1 + 3(1-t)t²p2 + t³p3
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Number of sample segments for a visible fraction `t` of a curve.
///
/// A full curve always gets `FULL_SAMPLES` segments; a partial reveal gets
/// proportionally fewer so the cost never exceeds the full-curve case.
pub fn sample_count(t: f64) -> usize {
    (t.clamp(0.0, 1.0) * FULL_SAMPLES).ceil() as usize
}

/// Sample a parametric curve from 0 to `t`, inclusive of both ends.
///
/// `t == 0` yields the start point alone.
pub fn sample(t: f64, eval: impl Fn(f64) -> Point) -> Vec<Point> {
    let t = t.clamp(0.0, 1.0);
    let steps = sample_count(t);
    if steps == 0 {
        return vec![eval(0.0)];
    }
    (0..=steps)
        .map(|i| eval(t * i as f64 / steps as f64))
        .collect()
}

/// Total length of a polyline
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const P: [Point; 4] = [
        Point::new(10.0, 20.0),
        Point::new(150.0, -40.0),
        Point::new(300.0, 400.0),
        Point::new(520.5, 33.25),
    ];

    #[test]
    fn quadratic_hits_endpoints() {
        assert_eq!(quadratic_point(P[0], P[1], P[2], 0.0), P[0]);
        assert_eq!(quadratic_point(P[0], P[1], P[2], 1.0), P[2]);
    }

    #[test]
    fn cubic_hits_endpoints() {
        assert_eq!(cubic_point(P[0], P[1], P[2], P[3], 0.0), P[0]);
        assert_eq!(cubic_point(P[0], P[1], P[2], P[3], 1.0), P[3]);
    }

    #[test]
    fn quadratic_midpoint() {
        let p = quadratic_point(
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
            0.5,
        );
        assert_abs_diff_eq!(p.x, 50.0);
        assert_abs_diff_eq!(p.y, 50.0);
    }

    #[test]
    fn cubic_on_collinear_points_stays_on_line() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 30.0);
        let c = Point::new(60.0, 60.0);
        let d = Point::new(90.0, 90.0);
        for i in 0..=10 {
            let p = cubic_point(a, b, c, d, i as f64 / 10.0);
            assert_abs_diff_eq!(p.x, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn sample_counts_scale_with_reveal() {
        assert_eq!(sample_count(0.0), 0);
        assert_eq!(sample_count(0.005), 1);
        assert_eq!(sample_count(0.5), 50);
        assert_eq!(sample_count(1.0), 100);
        assert_eq!(sample_count(3.0), 100);
    }

    #[test]
    fn sample_includes_both_ends() {
        let pts = sample(1.0, |t| lerp_point(P[0], P[1], t));
        assert_eq!(pts.len(), 101);
        assert_eq!(pts[0], P[0]);
        assert_eq!(pts[100], P[1]);

        let start = sample(0.0, |t| lerp_point(P[0], P[1], t));
        assert_eq!(start, vec![P[0]]);
    }

    #[test]
    fn length_of_right_angle() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
        assert_abs_diff_eq!(polyline_length(&pts), 7.0);
        assert_abs_diff_eq!(polyline_length(&pts[..1]), 0.0);
    }
}
