use crate::constants::MAX_FRAME_DT;
use crate::scene::Scene;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Clonable flag that ends a running frame loop.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Advances a [`Scene`] once per display refresh. The host calls
/// [`FrameDriver::advance`] from its animation callback and only requests the
/// next frame while it returns [`LoopControl::Continue`].
#[derive(Debug, Default)]
pub struct FrameDriver {
    stop: StopHandle,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// `dt` is clamped so a backgrounded tab does not replay a long stall.
    pub fn advance(&mut self, scene: &mut Scene, dt: Duration) -> LoopControl {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }
        scene.tick(dt.min(MAX_FRAME_DT));
        LoopControl::Continue
    }
}
