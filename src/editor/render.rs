use crate::curve::path::{build_path, guide_polyline};
use crate::curve::{Point, Rgb, Rgba};

use super::scene::SceneState;
use super::surface::{Paint, Surface};

pub const CURVE_WIDTH: f64 = 3.0;
pub const GUIDE_WIDTH: f64 = 1.0;
pub const POINT_RADIUS: f64 = 6.0;
pub const HALO_RADIUS: f64 = 10.0;
/// Hue rotation of the gradient's far stop relative to the stroke color
pub const GRADIENT_HUE_SHIFT: f64 = 60.0;
/// Hue rotation of the selected point relative to the point color
pub const SELECTED_HUE_SHIFT: f64 = 180.0;
/// Offset of a point's `P<n>` label from its center
pub const LABEL_OFFSET: Point = Point::new(10.0, -10.0);

/// Colors for the parts of the scene that are not user-configurable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub guide: Rgb,
    pub outline: Rgb,
    pub label: Rgb,
    pub halo: Rgba,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            guide: Rgb::new(0xaa, 0xaa, 0xaa),
            outline: Rgb::new(0x33, 0x33, 0x33),
            label: Rgb::BLACK,
            halo: Rgb::WHITE.with_alpha(0.5),
        }
    }
}

/// Redraw the whole scene. Reads `scene` only, so repeated calls draw the same picture.
pub fn render_scene(scene: &SceneState, style: &SceneStyle, surface: &mut impl Surface) {
    surface.clear();
    draw_guide(scene, style, surface);
    draw_curve(scene, surface);
    draw_points(scene, style, surface);
}

fn draw_guide(scene: &SceneState, style: &SceneStyle, surface: &mut impl Surface) {
    let guide = guide_polyline(&scene.points);
    let Some((first, rest)) = guide.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.stroke(Paint::solid(style.guide), GUIDE_WIDTH);
}

fn draw_curve(scene: &SceneState, surface: &mut impl Surface) {
    let path = build_path(&scene.points, scene.visible_progress());
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.stroke(curve_paint(scene), CURVE_WIDTH);
}

/// Solid stroke color at rest; a hue-shifted gradient from the first to
/// the last control point while animating.
pub fn curve_paint(scene: &SceneState) -> Paint {
    match (scene.animating, scene.points.first(), scene.points.last()) {
        (true, Some(&from), Some(&to)) => Paint::LinearGradient {
            from,
            to,
            start: scene.stroke_color,
            end: scene.stroke_color.shift_hue(GRADIENT_HUE_SHIFT),
        },
        _ => Paint::solid(scene.stroke_color),
    }
}

fn draw_points(scene: &SceneState, style: &SceneStyle, surface: &mut impl Surface) {
    for (index, &point) in scene.points.iter().enumerate() {
        let selected = scene.selected == Some(index);
        if selected {
            surface.fill_circle(point, HALO_RADIUS, Paint::Solid(style.halo));
        }

        let fill = if selected {
            scene.point_color.shift_hue(SELECTED_HUE_SHIFT)
        } else {
            scene.point_color
        };
        surface.fill_circle(point, POINT_RADIUS, Paint::solid(fill));
        surface.stroke_circle(point, POINT_RADIUS, style.outline);
        surface.fill_text(&format!("P{index}"), point + LABEL_OFFSET, style.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::surface::{DrawCommand, Recorder};

    fn scene(n: usize) -> SceneState {
        let mut s = SceneState::default();
        for i in 0..n {
            s.push_point(Point::new(100.0 + 50.0 * i as f64, 200.0 + 30.0 * (i % 2) as f64));
        }
        s
    }

    fn draw(s: &SceneState) -> Recorder {
        let mut r = Recorder::new();
        render_scene(s, &SceneStyle::default(), &mut r);
        r
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let r = draw(&SceneState::default());
        assert_eq!(r.visible(), &[] as &[DrawCommand]);
        assert_eq!(r.commands, vec![DrawCommand::Clear]);
    }

    #[test]
    fn single_point_has_marker_but_no_curve() {
        let r = draw(&scene(1));
        assert_eq!(r.strokes().count(), 0);
        assert_eq!(r.labels().collect::<Vec<_>>(), ["P0"]);
    }

    #[test]
    fn guide_then_curve_then_markers() {
        let s = scene(4);
        let r = draw(&s);
        let strokes: Vec<_> = r.strokes().collect();
        assert_eq!(strokes.len(), 2);

        let (guide, guide_paint, guide_width) = strokes[0];
        assert_eq!(guide, s.points.as_slice());
        assert_eq!(*guide_paint, Paint::solid(SceneStyle::default().guide));
        assert_eq!(guide_width, GUIDE_WIDTH);

        let (curve, curve_paint, curve_width) = strokes[1];
        assert_eq!(curve.len(), 101);
        assert_eq!(*curve_paint, Paint::solid(s.stroke_color));
        assert_eq!(curve_width, CURVE_WIDTH);

        assert_eq!(r.labels().collect::<Vec<_>>(), ["P0", "P1", "P2", "P3"]);
    }

    #[test]
    fn selected_point_gets_halo_and_shifted_fill() {
        let mut s = scene(3);
        s.select(1);
        let r = draw(&s);

        let fills: Vec<_> = r
            .visible()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillCircle {
                    center,
                    radius,
                    paint,
                } => Some((*center, *radius, *paint)),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[1], (s.points[1], HALO_RADIUS, Paint::Solid(SceneStyle::default().halo)));
        assert_eq!(
            fills[2],
            (s.points[1], POINT_RADIUS, Paint::solid(s.point_color.shift_hue(180.0)))
        );
        assert_eq!(fills[0].2, Paint::solid(s.point_color));
    }

    #[test]
    fn animation_draws_partial_gradient() {
        let mut s = scene(3);
        s.animating = true;
        s.progress = 0.5;
        let r = draw(&s);

        let (curve, paint, _) = r.strokes().nth(1).unwrap();
        assert_eq!(curve.len(), 51);
        match paint {
            Paint::LinearGradient {
                from,
                to,
                start,
                end,
            } => {
                assert_eq!(*from, s.points[0]);
                assert_eq!(*to, s.points[2]);
                assert_eq!(*start, s.stroke_color);
                assert_eq!(*end, s.stroke_color.shift_hue(60.0));
            }
            other => panic!("expected gradient, got {other:?}"),
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut s = scene(6);
        s.select(4);
        let before = s.clone();
        let first = draw(&s);
        let second = draw(&s);
        assert_eq!(first.visible(), second.visible());
        assert_eq!(s.points, before.points);
        assert_eq!(s.selected, before.selected);
    }
}
