//! Damped fall/rebound used when the emblem is released.
//!
//! Each axis is a point under constant gravity heading for a resting target.
//! Crossing the target snaps onto it and reflects the velocity with damping.
//! Once a reflection leaves less than the rest speed, the axis gets one extra
//! kick away from the target; the next time it happens the axis settles.

use crate::config::{BoundsMode, BounceConfig};
use crate::geometry::Layout;
use glam::Vec2;

/// Direction of travel towards the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Approach {
    Increasing,
    Decreasing,
}

impl Approach {
    fn sign(self) -> f32 {
        match self {
            Approach::Increasing => 1.0,
            Approach::Decreasing => -1.0,
        }
    }
}

/// Which way the emblem was sent when the fall started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallKind {
    /// Released near the bottom edge: flung back up towards the top.
    Rebound,
    /// Released anywhere else: drops onto the bottom edge.
    Drop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisBounce {
    pub pos: f32,
    pub velocity: f32,
    pub target: f32,
    gravity: f32,
    approach: Approach,
    damping: f32,
    rest_speed: f32,
    kick: f32,
    kicked: bool,
    settled: bool,
}

impl AxisBounce {
    /// `gravity` and `kick` are magnitudes; their signs follow from `approach`.
    pub fn new(
        pos: f32,
        target: f32,
        velocity: f32,
        gravity: f32,
        kick: f32,
        approach: Approach,
        cfg: &BounceConfig,
    ) -> Self {
        let sign = approach.sign();
        Self {
            pos,
            velocity,
            target,
            gravity: gravity.abs() * sign,
            approach,
            damping: cfg.damping,
            rest_speed: cfg.rest_speed,
            kick: -kick.abs() * sign,
            kicked: false,
            settled: false,
        }
    }

    pub fn approach(&self) -> Approach {
        self.approach
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn has_kicked(&self) -> bool {
        self.kicked
    }

    /// Advance one frame. Returns true once the axis has come to rest.
    pub fn step(&mut self) -> bool {
        if self.settled {
            return true;
        }
        self.velocity += self.gravity;
        self.pos += self.velocity;
        if self.reached_target() {
            self.pos = self.target;
            self.velocity *= -self.damping;
            if self.velocity.abs() < self.rest_speed {
                if !self.kicked && self.kick != 0.0 {
                    self.velocity = self.kick;
                    self.kicked = true;
                } else {
                    self.settle();
                }
            }
        }
        self.settled
    }

    /// Snap onto the target and stop.
    pub fn settle(&mut self) {
        self.pos = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }

    fn reached_target(&self) -> bool {
        // NaN never compares, so a poisoned axis falls through to the frame cap.
        match self.approach {
            Approach::Increasing => self.pos >= self.target,
            Approach::Decreasing => self.pos <= self.target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BounceStep {
    Moving,
    Settled,
}

/// Both axes of one fall. The horizontal axis only exists for dual-axis
/// bounds when the pointer left the area sideways.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounce {
    kind: FallKind,
    y: AxisBounce,
    x: Option<AxisBounce>,
    origin_x: f32,
    burst_pending: bool,
    frames: u32,
    max_frames: u32,
}

impl Bounce {
    /// Plan a fall from `from` (emblem top-left). The direction is decided here,
    /// from the pointer position at the moment of release, and never revisited.
    pub fn plan(
        from: Vec2,
        pointer: Vec2,
        layout: &Layout,
        bounds: BoundsMode,
        cfg: &BounceConfig,
    ) -> Self {
        let area = layout.area;
        let size = layout.emblem_size;
        let near_bottom = pointer.y > area.bottom() - size.y;
        let (kind, y) = if near_bottom {
            (
                FallKind::Rebound,
                AxisBounce::new(
                    from.y,
                    area.top + cfg.rebound_clearance,
                    -cfg.rebound_velocity,
                    cfg.rebound_gravity,
                    cfg.rebound_kick,
                    Approach::Decreasing,
                    cfg,
                ),
            )
        } else {
            (
                FallKind::Drop,
                AxisBounce::new(
                    from.y,
                    area.bottom() - size.y - cfg.drop_clearance,
                    0.0,
                    cfg.drop_gravity,
                    cfg.drop_kick,
                    Approach::Increasing,
                    cfg,
                ),
            )
        };

        let x = match bounds {
            BoundsMode::Vertical => None,
            BoundsMode::Both if pointer.x > area.right() - size.x => Some(AxisBounce::new(
                from.x,
                area.left + cfg.rebound_clearance,
                -cfg.rebound_velocity,
                cfg.rebound_gravity,
                cfg.rebound_kick,
                Approach::Decreasing,
                cfg,
            )),
            BoundsMode::Both if pointer.x < area.left => Some(AxisBounce::new(
                from.x,
                area.right() - size.x - cfg.rebound_clearance,
                cfg.rebound_velocity,
                cfg.rebound_gravity,
                cfg.rebound_kick,
                Approach::Increasing,
                cfg,
            )),
            BoundsMode::Both => None,
        };

        Self {
            kind,
            y,
            x,
            origin_x: from.x,
            burst_pending: kind == FallKind::Rebound,
            frames: 0,
            max_frames: cfg.max_frames,
        }
    }

    pub fn kind(&self) -> FallKind {
        self.kind
    }

    pub fn vertical(&self) -> &AxisBounce {
        &self.y
    }

    pub fn horizontal(&self) -> Option<&AxisBounce> {
        self.x.as_ref()
    }

    pub fn position(&self) -> Vec2 {
        let x = self.x.as_ref().map_or(self.origin_x, |a| a.pos);
        Vec2::new(x, self.y.pos)
    }

    pub fn target(&self) -> Vec2 {
        let x = self.x.as_ref().map_or(self.origin_x, |a| a.target);
        Vec2::new(x, self.y.target)
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn step(&mut self) -> BounceStep {
        self.frames += 1;
        let y_done = self.y.step();
        let x_done = self.x.as_mut().map_or(true, AxisBounce::step);
        if y_done && x_done {
            return BounceStep::Settled;
        }
        if self.frames >= self.max_frames {
            log::debug!("[bounce] frame cap reached after {} frames; snapping", self.frames);
            self.y.settle();
            if let Some(x) = self.x.as_mut() {
                x.settle();
            }
            return BounceStep::Settled;
        }
        BounceStep::Moving
    }

    /// True exactly once, on the first call after a rebound started.
    pub fn take_burst(&mut self) -> bool {
        std::mem::take(&mut self.burst_pending)
    }
}
