use crate::bounce::{Bounce, BounceStep};
use crate::config::{BoundsMode, BounceConfig};
use crate::geometry::{Layout, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging,
    Falling(Bounce),
}

/// Outcome of advancing a fall by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallStep {
    NotFalling,
    Moving { burst: bool },
    Landed,
}

/// The draggable logo. `pos` is its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Emblem {
    pub pos: Vec2,
    pub size: Vec2,
    phase: Phase,
}

impl Emblem {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging)
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.phase, Phase::Falling(_))
    }

    pub fn bounce(&self) -> Option<&Bounce> {
        match &self.phase {
            Phase::Falling(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Top-left position that puts the emblem's centre on `p`.
    #[inline]
    pub fn centered_on(&self, p: Vec2) -> Vec2 {
        p - self.size * 0.5
    }

    pub fn place_centered(&mut self, p: Vec2) {
        self.pos = self.centered_on(p);
    }

    /// Ignored while falling.
    pub fn begin_drag(&mut self) -> bool {
        match self.phase {
            Phase::Falling(_) => false,
            _ => {
                self.phase = Phase::Dragging;
                true
            }
        }
    }

    /// Stop dragging without falling.
    pub fn release(&mut self) {
        if self.is_dragging() {
            self.phase = Phase::Idle;
        }
    }

    /// Leave whatever phase we are in for a fall. Returns false when a fall is
    /// already running; the running one keeps its direction.
    pub fn start_fall(
        &mut self,
        pointer: Vec2,
        layout: &Layout,
        bounds: BoundsMode,
        cfg: &BounceConfig,
    ) -> bool {
        if self.is_falling() {
            return false;
        }
        self.size = layout.emblem_size;
        let bounce = Bounce::plan(self.pos, pointer, layout, bounds, cfg);
        log::debug!(
            "[emblem] fall {:?} from ({:.1},{:.1}) to ({:.1},{:.1})",
            bounce.kind(),
            self.pos.x,
            self.pos.y,
            bounce.target().x,
            bounce.target().y
        );
        self.phase = Phase::Falling(bounce);
        true
    }

    /// Exponential smoothing towards `target`. Returns the distance that was
    /// left before this frame's step.
    pub fn ease_toward(&mut self, target: Vec2, smoothing: f32) -> Vec2 {
        let delta = target - self.pos;
        self.pos += delta * smoothing;
        delta
    }

    pub fn step_fall(&mut self) -> FallStep {
        let Phase::Falling(bounce) = &mut self.phase else {
            return FallStep::NotFalling;
        };
        let step = bounce.step();
        self.pos = bounce.position();
        match step {
            BounceStep::Moving => FallStep::Moving {
                burst: bounce.take_burst(),
            },
            BounceStep::Settled => {
                self.pos = bounce.target();
                log::debug!("[emblem] landed at ({:.1},{:.1})", self.pos.x, self.pos.y);
                self.phase = Phase::Idle;
                FallStep::Landed
            }
        }
    }

    /// Keep the emblem on screen after the viewport shrank.
    pub fn clamp_into(&mut self, viewport: Viewport) {
        let max = Vec2::new(
            (viewport.width - self.size.x).max(0.0),
            (viewport.height - self.size.y).max(0.0),
        );
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}
