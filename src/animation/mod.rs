pub mod scheduler;
pub mod spinner;

use tracing::{debug, trace};

use crate::editor::scene::SceneState;
use scheduler::{FrameHandle, FrameScheduler};

/// Progress added per frame; a full reveal takes about 100 frames
pub const PROGRESS_STEP: f64 = 0.01;

/// Drives the progressive reveal of the curve, one step per display frame.
///
/// Only one frame request is ever outstanding: starting again or cancelling
/// always withdraws the previous one first.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    pending: Option<FrameHandle>,
    /// Monotonically increasing frame counter, used for spinners
    pub tick_count: u64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh run from zero. Returns false when there is nothing to animate.
    pub fn start(&mut self, scene: &mut SceneState, scheduler: &mut impl FrameScheduler) -> bool {
        if scene.points.len() < 2 {
            return false;
        }

        self.cancel(scheduler);
        scene.selected = None;
        scene.dragging = false;
        scene.progress = 0.0;
        scene.animating = true;
        self.pending = Some(scheduler.request_frame());

        debug!(points = scene.points.len(), "animation started");
        true
    }

    /// Advance one step for a delivered frame.
    ///
    /// Frames that do not match the outstanding request are ignored. Returns
    /// true if the scene changed.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        scene: &mut SceneState,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.tick_count = self.tick_count.wrapping_add(1);

        scene.progress += PROGRESS_STEP;
        if scene.progress >= 1.0 {
            scene.progress = 1.0;
            scene.animating = false;
            debug!("animation finished");
        } else {
            trace!(progress = scene.progress, "animation frame");
            self.pending = Some(scheduler.request_frame());
        }
        true
    }

    /// Withdraw any outstanding frame so no further step can run
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }
}
