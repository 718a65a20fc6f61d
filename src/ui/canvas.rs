use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::Widget;

use crate::curve::{Point, Rgb};
use crate::editor::surface::{Paint, Surface};
use crate::editor::CanvasBounds;

/// Maps terminal cells onto the editor's logical pixel canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub bounds: CanvasBounds,
}

impl Viewport {
    pub fn new(area: Rect, bounds: CanvasBounds) -> Self {
        Self { area, bounds }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(ratatui::layout::Position::new(column, row))
    }

    /// Canvas-local coordinates of a cell's center, or `None` outside the canvas
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<Point> {
        if !self.contains(column, row) {
            return None;
        }
        let local_x = (column - self.area.x) as f64 + 0.5;
        let local_y = (row - self.area.y) as f64 + 0.5;
        Some(Point::new(
            local_x * self.bounds.width / self.area.width as f64,
            local_y * self.bounds.height / self.area.height as f64,
        ))
    }
}

/// One rasterizable primitive, already resolved to an opaque color
#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Segment { a: Point, b: Point, color: Rgb },
    Disc { center: Point, radius: f64, color: Rgb },
    Ring { center: Point, radius: f64, color: Rgb },
    Label { text: String, at: Point, color: Rgb },
}

/// [`Surface`] backed by a ratatui braille canvas.
///
/// Draw calls are collected into a display list; rendering the surface as a
/// widget replays them with y flipped, since the canvas y axis points up.
/// Translucent paints are blended over `backdrop`.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    bounds: CanvasBounds,
    backdrop: Rgb,
    shapes: Vec<Shape>,
    subpaths: Vec<Vec<Point>>,
}

impl TerminalSurface {
    pub fn new(bounds: CanvasBounds, backdrop: Rgb) -> Self {
        Self {
            bounds,
            backdrop,
            shapes: Vec::new(),
            subpaths: Vec::new(),
        }
    }

    fn flip(&self, p: Point) -> (f64, f64) {
        (p.x, self.bounds.height - p.y)
    }

    fn resolve(&self, paint: &Paint, at: Point) -> Rgb {
        paint.color_at(at).over(self.backdrop)
    }

    fn paint_shape(&self, ctx: &mut Context, shape: &Shape, dot: (f64, f64)) {
        match shape {
            Shape::Segment { a, b, color } => {
                let (x1, y1) = self.flip(*a);
                let (x2, y2) = self.flip(*b);
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, to_color(*color)));
            }
            Shape::Disc {
                center,
                radius,
                color,
            } => {
                let coords = disc_dots(self.flip(*center), *radius, dot);
                ctx.draw(&Points {
                    coords: &coords,
                    color: to_color(*color),
                });
            }
            Shape::Ring {
                center,
                radius,
                color,
            } => {
                let (x, y) = self.flip(*center);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: *radius,
                    color: to_color(*color),
                });
            }
            Shape::Label { text, at, color } => {
                let (x, y) = self.flip(*at);
                ctx.print(
                    x,
                    y,
                    Line::styled(text.clone(), Style::default().fg(to_color(*color))),
                );
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.shapes.clear();
        self.subpaths.clear();
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
            None => self.subpaths.push(vec![p]),
        }
    }

    fn stroke(&mut self, paint: Paint, _width: f64) {
        let mut segments = Vec::new();
        for path in &self.subpaths {
            for w in path.windows(2) {
                let mid = Point::new((w[0].x + w[1].x) / 2.0, (w[0].y + w[1].y) / 2.0);
                segments.push(Shape::Segment {
                    a: w[0],
                    b: w[1],
                    color: self.resolve(&paint, mid),
                });
            }
        }
        self.shapes.extend(segments);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: Paint) {
        let color = self.resolve(&paint, center);
        self.shapes.push(Shape::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.shapes.push(Shape::Ring {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Rgb) {
        self.shapes.push(Shape::Label {
            text: text.to_string(),
            at,
            color,
        });
    }
}

impl Widget for &TerminalSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Braille packs 2x4 dots into each cell
        let dot = (
            self.bounds.width / (area.width as f64 * 2.0),
            self.bounds.height / (area.height as f64 * 4.0),
        );

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(self.backdrop))
            .x_bounds([0.0, self.bounds.width])
            .y_bounds([0.0, self.bounds.height])
            .paint(|ctx| {
                for shape in &self.shapes {
                    self.paint_shape(ctx, shape, dot);
                    ctx.layer();
                }
            })
            .render(area, buf);
    }
}

/// Dot centers covering a filled disc at braille resolution
fn disc_dots(center: (f64, f64), radius: f64, dot: (f64, f64)) -> Vec<(f64, f64)> {
    let (cx, cy) = center;
    let (dx, dy) = dot;
    let mut dots = vec![center];
    if dx <= 0.0 || dy <= 0.0 {
        return dots;
    }
    let steps_x = (radius / dx).floor() as i64;
    let steps_y = (radius / dy).floor() as i64;
    for i in -steps_x..=steps_x {
        for j in -steps_y..=steps_y {
            let (ox, oy) = (i as f64 * dx, j as f64 * dy);
            if (i, j) != (0, 0) && ox.hypot(oy) <= radius {
                dots.push((cx + ox, cy + oy));
            }
        }
    }
    dots
}

pub fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Rgba;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(10, 5, 100, 30), CanvasBounds::default())
    }

    #[test]
    fn viewport_subtracts_origin_and_scales() {
        let v = viewport();
        let p = v.to_canvas(10, 5).unwrap();
        assert_eq!(p, Point::new(4.0, 10.0));

        let p = v.to_canvas(109, 34).unwrap();
        assert_eq!(p, Point::new(796.0, 590.0));
    }

    #[test]
    fn viewport_rejects_outside_cells() {
        let v = viewport();
        assert_eq!(v.to_canvas(9, 5), None);
        assert_eq!(v.to_canvas(110, 5), None);
        assert_eq!(v.to_canvas(50, 35), None);
    }

    #[test]
    fn gradient_strokes_vary_along_path() {
        let mut s = TerminalSurface::new(CanvasBounds::default(), Rgb::WHITE);
        s.begin_path();
        s.move_to(Point::new(0.0, 0.0));
        s.line_to(Point::new(10.0, 0.0));
        s.line_to(Point::new(90.0, 0.0));
        s.line_to(Point::new(100.0, 0.0));
        s.stroke(
            Paint::LinearGradient {
                from: Point::new(0.0, 0.0),
                to: Point::new(100.0, 0.0),
                start: Rgb::BLACK,
                end: Rgb::WHITE,
            },
            3.0,
        );
        let colors: Vec<_> = s
            .shapes
            .iter()
            .map(|shape| match shape {
                Shape::Segment { color, .. } => *color,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], Rgb::new(13, 13, 13));
        assert_eq!(colors[1], Rgb::new(128, 128, 128));
        assert_eq!(colors[2], Rgb::new(242, 242, 242));
    }

    #[test]
    fn translucent_fill_blends_over_backdrop() {
        let mut s = TerminalSurface::new(CanvasBounds::default(), Rgb::BLACK);
        s.fill_circle(Point::new(5.0, 5.0), 10.0, Paint::Solid(Rgba { rgb: Rgb::WHITE, alpha: 0.5 }));
        assert_eq!(
            s.shapes,
            vec![Shape::Disc {
                center: Point::new(5.0, 5.0),
                radius: 10.0,
                color: Rgb::new(128, 128, 128),
            }]
        );
    }

    #[test]
    fn clear_empties_display_list() {
        let mut s = TerminalSurface::new(CanvasBounds::default(), Rgb::WHITE);
        s.fill_text("P0", Point::new(1.0, 1.0), Rgb::BLACK);
        s.clear();
        assert!(s.shapes.is_empty());
    }

    #[test]
    fn disc_stays_within_radius() {
        let dots = disc_dots((100.0, 100.0), 6.0, (4.0, 5.0));
        assert!(dots.len() > 1);
        for (x, y) in dots {
            assert!((x - 100.0).hypot(y - 100.0) <= 6.0);
        }
    }

    #[test]
    fn renders_into_buffer() {
        let mut s = TerminalSurface::new(CanvasBounds::default(), Rgb::WHITE);
        s.fill_text("P0", Point::new(0.0, 600.0), Rgb::BLACK);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        (&s).render(area, &mut buf);
        assert_eq!(buf[(0, 9)].symbol(), "P");
        assert_eq!(buf[(1, 9)].symbol(), "0");
    }
}
