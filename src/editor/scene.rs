use crate::curve::{Point, Rgb};

/// Default curve stroke color
pub const DEFAULT_STROKE: Rgb = Rgb::new(0x00, 0x66, 0xff);
/// Default control point fill color
pub const DEFAULT_POINT: Rgb = Rgb::new(0xff, 0x66, 0x00);

/// Everything the renderer needs to redraw the editor.
///
/// Control points have no identity beyond their index.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub points: Vec<Point>,
    /// Always a valid index into `points` when set
    pub selected: Option<usize>,
    /// A pointer-down on a point is being held
    pub dragging: bool,
    pub animating: bool,
    /// Fraction of the curve revealed by the current or last animation
    pub progress: f64,
    pub stroke_color: Rgb,
    pub point_color: Rgb,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            selected: None,
            dragging: false,
            animating: false,
            progress: 0.0,
            stroke_color: DEFAULT_STROKE,
            point_color: DEFAULT_POINT,
        }
    }
}

impl SceneState {
    /// Append a point and return its index
    pub fn push_point(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Index of the first point within `radius` of `at`
    pub fn hit_test(&self, at: Point, radius: f64) -> Option<usize> {
        self.points.iter().position(|p| p.distance(at) <= radius)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.points.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_point_mut(&mut self) -> Option<&mut Point> {
        self.selected.and_then(|i| self.points.get_mut(i))
    }

    /// Progress at which the curve should be drawn: partial only mid-animation
    pub fn visible_progress(&self) -> f64 {
        if self.animating {
            self.progress
        } else {
            1.0
        }
    }

    /// Drop all points and any selection or drag
    pub fn clear(&mut self) {
        self.points.clear();
        self.selected = None;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(points: &[(f64, f64)]) -> SceneState {
        let mut s = SceneState::default();
        for &(x, y) in points {
            s.push_point(Point::new(x, y));
        }
        s
    }

    #[test]
    fn hit_test_uses_radius_inclusively() {
        let s = scene(&[(100.0, 100.0)]);
        assert_eq!(s.hit_test(Point::new(108.0, 100.0), 8.0), Some(0));
        assert_eq!(s.hit_test(Point::new(108.1, 100.0), 8.0), None);
    }

    #[test]
    fn hit_test_prefers_lowest_index() {
        let s = scene(&[(100.0, 100.0), (104.0, 100.0), (102.0, 100.0)]);
        assert_eq!(s.hit_test(Point::new(102.0, 100.0), 8.0), Some(0));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut s = scene(&[(1.0, 1.0)]);
        s.select(3);
        assert_eq!(s.selected, None);
        s.select(0);
        assert_eq!(s.selected, Some(0));
    }

    #[test]
    fn clear_resets_points_and_selection() {
        let mut s = scene(&[(1.0, 1.0), (2.0, 2.0)]);
        s.select(1);
        s.dragging = true;
        s.clear();
        assert!(s.points.is_empty());
        assert_eq!(s.selected, None);
        assert!(!s.dragging);
    }

    #[test]
    fn idle_scene_shows_whole_curve() {
        let mut s = SceneState::default();
        s.progress = 0.3;
        assert_eq!(s.visible_progress(), 1.0);
        s.animating = true;
        assert_eq!(s.visible_progress(), 0.3);
    }
}
