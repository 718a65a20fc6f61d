use crate::curve::{Point, Rgb, Rgba};

/// How a stroke or fill is colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Linear gradient along the axis `from` → `to`
    LinearGradient {
        from: Point,
        to: Point,
        start: Rgb,
        end: Rgb,
    },
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Paint::Solid(color.opaque())
    }

    /// Color of this paint at `at`, projected onto the gradient axis
    pub fn color_at(&self, at: Point) -> Rgba {
        match *self {
            Paint::Solid(c) => c,
            Paint::LinearGradient {
                from,
                to,
                start,
                end,
            } => {
                let axis = to - from;
                let len_sq = axis.x * axis.x + axis.y * axis.y;
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    let rel = at - from;
                    (rel.x * axis.x + rel.y * axis.y) / len_sq
                };
                start.mix(end, t).opaque()
            }
        }
    }
}

/// A 2D immediate-mode drawing surface.
///
/// Paths are built with `begin_path`/`move_to`/`line_to` and painted with
/// `stroke`; circles and text are drawn directly.
pub trait Surface {
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self, paint: Paint, width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, paint: Paint);
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb);
    fn fill_text(&mut self, text: &str, at: Point, color: Rgb);
}

/// One recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    /// A stroked polyline (one per subpath)
    Stroke {
        points: Vec<Point>,
        paint: Paint,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Text {
        text: String,
        at: Point,
        color: Rgb,
    },
}

/// A surface that records draw calls instead of rasterizing them
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
    subpaths: Vec<Vec<Point>>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last `clear`
    pub fn visible(&self) -> &[DrawCommand] {
        let from = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[from..]
    }

    /// Stroked polylines drawn since the last `clear`
    pub fn strokes(&self) -> impl Iterator<Item = (&[Point], &Paint, f64)> {
        self.visible().iter().filter_map(|c| match c {
            DrawCommand::Stroke {
                points,
                paint,
                width,
            } => Some((points.as_slice(), paint, *width)),
            _ => None,
        })
    }

    /// Text labels drawn since the last `clear`
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.visible().iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Surface for Recorder {
    fn clear(&mut self) {
        self.subpaths.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.subpaths.push(vec![p]);
    }

    fn line_to(&mut self, p: Point) {
        match self.subpaths.last_mut() {
            Some(path) => path.push(p),
            // A line with no current point starts a subpath there
            None => self.subpaths.push(vec![p]),
        }
    }

    fn stroke(&mut self, paint: Paint, width: f64) {
        for points in &self.subpaths {
            self.commands.push(DrawCommand::Stroke {
                points: points.clone(),
                paint,
                width,
            });
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_subpaths_per_stroke() {
        let mut r = Recorder::new();
        r.begin_path();
        r.move_to(Point::new(0.0, 0.0));
        r.line_to(Point::new(1.0, 0.0));
        r.move_to(Point::new(5.0, 5.0));
        r.line_to(Point::new(6.0, 6.0));
        r.stroke(Paint::solid(Rgb::BLACK), 2.0);

        let strokes: Vec<_> = r.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].0, &[Point::new(5.0, 5.0), Point::new(6.0, 6.0)]);
        assert_eq!(strokes[0].2, 2.0);
    }

    #[test]
    fn visible_starts_after_last_clear() {
        let mut r = Recorder::new();
        r.fill_text("old", Point::default(), Rgb::BLACK);
        r.clear();
        r.fill_text("new", Point::default(), Rgb::BLACK);
        assert_eq!(r.labels().collect::<Vec<_>>(), ["new"]);
    }

    #[test]
    fn gradient_follows_axis() {
        let paint = Paint::LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 0.0),
            start: Rgb::BLACK,
            end: Rgb::WHITE,
        };
        assert_eq!(paint.color_at(Point::new(0.0, 50.0)).rgb, Rgb::BLACK);
        assert_eq!(paint.color_at(Point::new(100.0, -9.0)).rgb, Rgb::WHITE);
        assert_eq!(paint.color_at(Point::new(250.0, 0.0)).rgb, Rgb::WHITE);
        assert_eq!(paint.color_at(Point::new(50.0, 0.0)).rgb, Rgb::new(128, 128, 128));
    }
}
