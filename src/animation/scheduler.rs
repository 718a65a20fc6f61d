/// Opaque token for one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Host timing port: request a callback on the next display frame, or cancel
/// one that has not fired yet.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Frame scheduler driven by the event loop's tick.
///
/// Holds at most one outstanding request. The host calls [`FrameClock::fire`]
/// once per tick and forwards the handle it gets back, if any.
#[derive(Debug, Default)]
pub struct FrameClock {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if there is one
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
