use tracing::debug;

use crate::curve::Point;

use super::scene::SceneState;

/// Default pick radius around a control point, in canvas pixels
pub const HIT_RADIUS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Dragging,
}

/// Pointer input in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// What a pointer event did to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// An existing point was picked up
    Selected(usize),
    /// A new point was placed and picked up
    Created(usize),
    Moved(usize),
    /// The drag ended; the selection stays
    Released,
}

impl Outcome {
    pub fn changed(self) -> bool {
        self != Outcome::Ignored
    }
}

/// Translates pointer events into select/drag/create edits.
///
/// The drag state lives in [`SceneState::dragging`]; the controller itself
/// only carries the pick radius.
#[derive(Debug, Clone, Copy)]
pub struct InteractionController {
    hit_radius: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(HIT_RADIUS)
    }
}

impl InteractionController {
    pub fn new(hit_radius: f64) -> Self {
        Self { hit_radius }
    }

    pub fn state(scene: &SceneState) -> PointerState {
        if scene.dragging {
            PointerState::Dragging
        } else {
            PointerState::Idle
        }
    }

    pub fn handle(&self, scene: &mut SceneState, event: PointerEvent) -> Outcome {
        if scene.animating {
            return Outcome::Ignored;
        }

        match event {
            PointerEvent::Down(at) => self.press(scene, at),
            PointerEvent::Move(at) => drag_to(scene, at),
            PointerEvent::Up | PointerEvent::Leave => release(scene),
        }
    }

    fn press(&self, scene: &mut SceneState, at: Point) -> Outcome {
        let (index, outcome) = match scene.hit_test(at, self.hit_radius) {
            Some(index) => {
                debug!(index, "picked control point");
                (index, Outcome::Selected(index))
            }
            None => {
                let index = scene.push_point(at);
                debug!(index, x = at.x, y = at.y, "placed control point");
                (index, Outcome::Created(index))
            }
        };

        scene.select(index);
        scene.dragging = true;
        outcome
    }
}

fn drag_to(scene: &mut SceneState, at: Point) -> Outcome {
    if !scene.dragging {
        return Outcome::Ignored;
    }
    let Some(index) = scene.selected else {
        return Outcome::Ignored;
    };
    match scene.selected_point_mut() {
        Some(point) => {
            *point = at;
            Outcome::Moved(index)
        }
        None => Outcome::Ignored,
    }
}

fn release(scene: &mut SceneState) -> Outcome {
    if !scene.dragging {
        return Outcome::Ignored;
    }
    scene.dragging = false;
    Outcome::Released
}
