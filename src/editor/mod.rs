//! The Bézier editor core: scene state, pointer handling, animation and
//! rendering, independent of any terminal or windowing toolkit.

pub mod interaction;
pub mod render;
pub mod scene;
pub mod surface;

use tracing::debug;

use crate::animation::scheduler::{FrameClock, FrameHandle, FrameScheduler};
use crate::animation::AnimationDriver;
use crate::curve::{Point, Rgb};
use interaction::{InteractionController, PointerEvent};
use render::{render_scene, SceneStyle};
use scene::SceneState;
use surface::Surface;

/// Logical canvas size in pixels, plus the border kept clear by random placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
        }
    }
}

impl CanvasBounds {
    /// A uniformly random point inside the bounds, `margin` away from every edge
    pub fn random_point(&self, rng: &mut fastrand::Rng) -> Point {
        let span_x = (self.width - 2.0 * self.margin).max(0.0);
        let span_y = (self.height - 2.0 * self.margin).max(0.0);
        Point::new(
            rng.f64() * span_x + self.margin.min(self.width / 2.0),
            rng.f64() * span_y + self.margin.min(self.height / 2.0),
        )
    }
}

/// The editor's public face: every operation the shell can invoke.
///
/// Mutating operations request a redraw, which the shell collects with
/// [`Editor::take_redraw`] and answers by calling [`Editor::render`].
pub struct Editor<S: FrameScheduler = FrameClock> {
    scene: SceneState,
    style: SceneStyle,
    controller: InteractionController,
    driver: AnimationDriver,
    scheduler: S,
    bounds: CanvasBounds,
    rng: fastrand::Rng,
    redraw: bool,
}

impl<S: FrameScheduler> Editor<S> {
    pub fn new(scheduler: S, bounds: CanvasBounds) -> Self {
        Self {
            scene: SceneState::default(),
            style: SceneStyle::default(),
            controller: InteractionController::default(),
            driver: AnimationDriver::new(),
            scheduler,
            bounds,
            rng: fastrand::Rng::new(),
            redraw: true,
        }
    }

    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.controller = InteractionController::new(radius);
        self
    }

    pub fn with_colors(mut self, stroke: Rgb, point: Rgb) -> Self {
        self.scene.stroke_color = stroke;
        self.scene.point_color = point;
        self
    }

    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    #[cfg(test)]
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Frames advanced by the animation driver so far
    pub fn frame_count(&self) -> u64 {
        self.driver.tick_count
    }

    /// Append a point at a random position. Ignored mid-animation.
    pub fn add_control_point(&mut self) -> Option<usize> {
        if self.scene.animating {
            return None;
        }
        let point = self.bounds.random_point(&mut self.rng);
        let index = self.scene.push_point(point);
        debug!(index, x = point.x, y = point.y, "added control point");
        self.redraw = true;
        Some(index)
    }

    /// Remove every point and stop any animation
    pub fn clear(&mut self) {
        let was_animating = self.driver.is_running();
        self.driver.cancel(&mut self.scheduler);
        self.scene.clear();
        self.scene.animating = false;
        debug!(was_animating, "scene cleared");
        self.redraw = true;
    }

    /// Start revealing the curve from its first point. Returns false with fewer than two points.
    pub fn animate_curve(&mut self) -> bool {
        let started = self.driver.start(&mut self.scene, &mut self.scheduler);
        if started {
            self.redraw = true;
        }
        started
    }

    /// Deliver a frame requested through the scheduler
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        let advanced = self
            .driver
            .on_frame(handle, &mut self.scene, &mut self.scheduler);
        self.redraw |= advanced;
        advanced
    }

    /// Draw the full scene. Has no effect on editor state.
    pub fn render(&self, surface: &mut impl Surface) {
        render_scene(&self.scene, &self.style, surface);
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.pointer(PointerEvent::Down(at));
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.pointer(PointerEvent::Move(at));
    }

    pub fn pointer_up(&mut self) {
        self.pointer(PointerEvent::Up);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer(PointerEvent::Leave);
    }

    fn pointer(&mut self, event: PointerEvent) {
        let outcome = self.controller.handle(&mut self.scene, event);
        self.redraw |= outcome.changed();
    }

    pub fn set_stroke_color(&mut self, color: Rgb) {
        self.scene.stroke_color = color;
        self.redraw = true;
    }

    pub fn set_point_color(&mut self, color: Rgb) {
        self.scene.point_color = color;
        self.redraw = true;
    }

    /// Whether anything changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

impl Editor<FrameClock> {
    /// Host tick: fire the pending frame, if any, and advance the animation
    pub fn tick(&mut self) -> bool {
        match self.scheduler.fire() {
            Some(handle) => self.on_frame(handle),
            None => false,
        }
    }
}
