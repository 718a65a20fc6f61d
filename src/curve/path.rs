use std::fmt;

use super::geometry::{cubic_point, lerp_point, quadratic_point, sample, Point};

/// Shape of one piece of a chained curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Line,
    Quadratic,
    Cubic,
}

/// One piece of the chain, starting at control point `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub kind: SegmentKind,
}

impl Segment {
    /// Control points spanned by this segment, including both ends
    pub fn span(&self) -> usize {
        match self.kind {
            SegmentKind::Line => 2,
            SegmentKind::Quadratic => 3,
            SegmentKind::Cubic => 4,
        }
    }

    /// Sample this segment from its start up to local parameter `t`
    fn sample(&self, points: &[Point], t: f64) -> Vec<Point> {
        let p = &points[self.start..self.start + self.span()];
        match self.kind {
            // Lines need no subdivision: the endpoint is enough
            SegmentKind::Line => vec![p[0], lerp_point(p[0], p[1], t.clamp(0.0, 1.0))],
            SegmentKind::Quadratic => sample(t, |s| quadratic_point(p[0], p[1], p[2], s)),
            SegmentKind::Cubic => sample(t, |s| cubic_point(p[0], p[1], p[2], p[3], s)),
        }
    }
}

/// Partition control points into chained segments.
///
/// Segment `i` starts at point `3i` and shares its first point with the
/// previous segment's last. Runs of four points are cubic; the final run
/// degrades to quadratic or linear when fewer points remain.
pub fn segments(points: &[Point]) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    (0..points.len() - 1)
        .step_by(3)
        .map(|start| {
            let kind = match points.len() - 1 - start {
                1 => SegmentKind::Line,
                2 => SegmentKind::Quadratic,
                _ => SegmentKind::Cubic,
            };
            Segment { start, kind }
        })
        .collect()
}

/// How much of a chain of `count` segments is visible at `progress`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// Segments drawn in full
    pub complete: usize,
    /// Local parameter of the segment straddling the boundary, if any
    pub partial: Option<f64>,
}

/// Spread `progress` evenly over `count` segments.
///
/// Segment `i` is complete once `progress * count >= i + 1`; the next one is
/// drawn up to the fractional remainder.
pub fn reveal(count: usize, progress: f64) -> Reveal {
    let scaled = progress.clamp(0.0, 1.0) * count as f64;
    let complete = (scaled.floor() as usize).min(count);
    let remainder = scaled - complete as f64;
    let partial = (complete < count && remainder > 0.0).then_some(remainder);
    Reveal { complete, partial }
}

/// Build the polyline of the visible portion of the curve.
///
/// Two points give a line, three a quadratic, four a cubic, and more a chain
/// of segments as described by [`segments`]. Fewer than two points give an
/// empty path. The result always starts at the first control point.
pub fn build_path(points: &[Point], progress: f64) -> Vec<Point> {
    let segs = segments(points);
    if segs.is_empty() {
        return Vec::new();
    }

    let Reveal { complete, partial } = reveal(segs.len(), progress);
    let mut path = vec![points[0]];

    let visible = segs[..complete]
        .iter()
        .map(|seg| (seg, 1.0))
        .chain(partial.map(|t| (&segs[complete], t)));

    for (seg, t) in visible {
        // Every segment starts where the previous one ended
        path.extend(seg.sample(points, t).into_iter().skip(1));
    }

    path
}

/// The helper polyline through all control points in order
pub fn guide_polyline(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return Vec::new();
    }
    points.to_vec()
}

/// Coarse classification of the curve a point set produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Empty,
    Line,
    Quadratic,
    Cubic,
    Chain(usize),
}

impl CurveKind {
    pub fn of(points: &[Point]) -> Self {
        match points.len() {
            0 | 1 => CurveKind::Empty,
            2 => CurveKind::Line,
            3 => CurveKind::Quadratic,
            4 => CurveKind::Cubic,
            _ => CurveKind::Chain(segments(points).len()),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no curve"),
            Self::Line => write!(f, "line"),
            Self::Quadratic => write!(f, "quadratic"),
            Self::Cubic => write!(f, "cubic"),
            Self::Chain(n) => write!(f, "{n} segments"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::geometry::polyline_length;
    use approx::assert_abs_diff_eq;

    fn pts(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let dy = if i % 2 == 0 { -120.0 } else { 140.0 };
                Point::new(60.0 + 70.0 * i as f64, 300.0 + dy)
            })
            .collect()
    }

    fn progress_steps() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn too_few_points_draw_nothing() {
        assert!(build_path(&[], 1.0).is_empty());
        assert!(build_path(&pts(1), 1.0).is_empty());
        assert!(guide_polyline(&pts(1)).is_empty());
    }

    #[test]
    fn line_grows_from_start() {
        let p = [Point::new(12.5, 40.0), Point::new(310.3, 99.9)];

        let start = build_path(&p, 0.0);
        assert_eq!(start.first(), Some(&p[0]));
        assert_abs_diff_eq!(polyline_length(&start), 0.0);

        let half = build_path(&p, 0.5);
        assert_abs_diff_eq!(polyline_length(&half), p[0].distance(p[1]) / 2.0, epsilon = 1e-9);

        let full = build_path(&p, 1.0);
        assert_eq!(full.last(), Some(&p[1]));
    }

    #[test]
    fn single_curves_end_on_last_point() {
        for n in [3, 4] {
            let p = pts(n);
            let full = build_path(&p, 1.0);
            assert_eq!(full.len(), 101);
            assert_eq!(full[0], p[0]);
            assert_eq!(full[100], p[n - 1]);

            let partial = build_path(&p, 0.25);
            assert_eq!(partial.len(), 26);
            assert_eq!(build_path(&p, 0.0), vec![p[0]]);
        }
    }

    #[test]
    fn partitions_by_remaining_points() {
        let kinds = |n: usize| -> Vec<SegmentKind> {
            segments(&pts(n)).iter().map(|s| s.kind).collect()
        };
        use SegmentKind::*;
        assert_eq!(kinds(2), [Line]);
        assert_eq!(kinds(4), [Cubic]);
        assert_eq!(kinds(5), [Cubic, Line]);
        assert_eq!(kinds(6), [Cubic, Quadratic]);
        assert_eq!(kinds(7), [Cubic, Cubic]);
        assert_eq!(kinds(8), [Cubic, Cubic, Line]);
        assert_eq!(
            segments(&pts(7)).iter().map(|s| s.start).collect::<Vec<_>>(),
            [0, 3]
        );
    }

    #[test]
    fn reveal_distributes_progress() {
        assert_eq!(reveal(2, 0.0), Reveal { complete: 0, partial: None });
        assert_eq!(reveal(2, 0.5), Reveal { complete: 1, partial: None });
        assert_eq!(reveal(2, 1.0), Reveal { complete: 2, partial: None });
        assert_eq!(reveal(4, 0.375), Reveal { complete: 1, partial: Some(0.5) });
        assert_eq!(reveal(3, 7.0), Reveal { complete: 3, partial: None });
    }

    #[test]
    fn seven_points_pass_through_junctions() {
        let p = pts(7);
        let full = build_path(&p, 1.0);
        assert_eq!(full.len(), 201);
        assert_eq!(full[0], p[0]);
        assert_eq!(full[100], p[3]);
        assert_eq!(full[200], p[6]);
    }

    #[test]
    fn seven_points_at_half_complete_one_segment() {
        let p = pts(7);
        let half = build_path(&p, 0.5);
        assert_eq!(half.len(), 101);
        assert_eq!(half.last(), Some(&p[3]));
    }

    #[test]
    fn path_length_never_shrinks() {
        for n in 2..=11 {
            let p = pts(n);
            let mut last = 0.0;
            for progress in progress_steps() {
                let len = polyline_length(&build_path(&p, progress));
                assert!(
                    len + 1e-9 >= last,
                    "{n} points: length dropped from {last} to {len} at {progress}"
                );
                last = len;
            }
        }
    }

    #[test]
    fn trailing_line_in_chain() {
        let p = pts(5);
        let full = build_path(&p, 1.0);
        assert_eq!(full.len(), 102);
        assert_eq!(full[100], p[3]);
        assert_eq!(full[101], p[4]);
    }

    #[test]
    fn guide_is_independent_of_progress() {
        let p = pts(6);
        assert_eq!(guide_polyline(&p), p);
    }

    #[test]
    fn curve_kind_labels() {
        assert_eq!(CurveKind::of(&pts(1)), CurveKind::Empty);
        assert_eq!(CurveKind::of(&pts(3)), CurveKind::Quadratic);
        assert_eq!(CurveKind::of(&pts(10)), CurveKind::Chain(3));
        assert_eq!(CurveKind::Chain(3).to_string(), "3 segments");
    }
}
