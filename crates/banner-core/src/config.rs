//! Tunable parameters for every variant of the banner effect.
//!
//! Pages embedding the effect differ only in constants
//! (palette, particle counts, decay rates, single- vs dual-axis bounds). Those
//! differences are captured as [`Preset`]s over a single [`FxConfig`].

use crate::constants::*;
use smallvec::{smallvec, SmallVec};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("unknown preset `{0}` (expected vanilla, classic or herobanner)")]
    UnknownPreset(String),
    #[error("unknown bounds mode `{0}` (expected vertical or both)")]
    UnknownBoundsMode(String),
}

/// Named glow colors used for particles and glow blobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowColor {
    Fuchsia,
    Turquoise,
    Yellow,
    Pink,
    Violet,
}

impl GlowColor {
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            GlowColor::Fuchsia => [255, 0, 255],
            GlowColor::Turquoise => [64, 224, 208],
            GlowColor::Yellow => [255, 255, 0],
            GlowColor::Pink => [255, 192, 203],
            GlowColor::Violet => [238, 130, 238],
        }
    }

    /// CSS color keyword, used for canvas shadow colors.
    pub const fn css_name(self) -> &'static str {
        match self {
            GlowColor::Fuchsia => "fuchsia",
            GlowColor::Turquoise => "turquoise",
            GlowColor::Yellow => "yellow",
            GlowColor::Pink => "pink",
            GlowColor::Violet => "violet",
        }
    }
}

pub type Palette = SmallVec<[GlowColor; 4]>;

/// Which edges of the active area end a mouse drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundsMode {
    /// Only the top and bottom edges.
    #[default]
    Vertical,
    /// All four edges, with a horizontal bounce when leaving sideways.
    Both,
}

impl FromStr for BoundsMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "y" => Ok(BoundsMode::Vertical),
            "both" | "xy" => Ok(BoundsMode::Both),
            other => Err(ConfigError::UnknownBoundsMode(other.to_string())),
        }
    }
}

/// What a finger on the active area does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TouchMode {
    /// Touch-start grabs the emblem; a double tap on release sends it falling.
    #[default]
    Drag,
    /// No touch dragging; a double tap detected on touch-start drops the emblem.
    DoubleTapOnly,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig {
    pub smoothing: f32,
    pub bounds: BoundsMode,
    pub move_threshold_px: f32,
    pub idle_emit_chance: f32,
    pub idle_pointer_px: f32,
    pub double_tap_window_ms: f64,
    pub touch: TouchMode,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            smoothing: DRAG_SMOOTHING,
            bounds: BoundsMode::Vertical,
            move_threshold_px: DRAG_MOVE_THRESHOLD_PX,
            idle_emit_chance: IDLE_EMIT_CHANCE,
            idle_pointer_px: IDLE_POINTER_PX,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            touch: TouchMode::Drag,
        }
    }
}

/// Shape of one emission batch.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionConfig {
    pub count: usize,
    /// Diameter of the disc the batch is scattered over.
    pub area: f32,
    /// Full width of the per-axis velocity range, centred on zero.
    pub speed: f32,
    pub decay: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    /// Initial alpha is drawn from `alpha_min..=1.0`.
    pub alpha_min: f32,
}

impl EmissionConfig {
    pub fn trail() -> Self {
        Self {
            count: TRAIL_COUNT,
            area: TRAIL_AREA,
            speed: PARTICLE_SPEED,
            decay: TRAIL_DECAY,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            alpha_min: 1.0,
        }
    }

    pub fn idle() -> Self {
        Self {
            count: IDLE_COUNT,
            area: IDLE_AREA,
            speed: PARTICLE_SPEED * IDLE_SPEED_SCALE,
            decay: IDLE_DECAY,
            ..Self::trail()
        }
    }

    pub fn burst() -> Self {
        Self {
            count: BURST_COUNT,
            area: BURST_AREA,
            decay: BURST_DECAY,
            alpha_min: BURST_ALPHA_MIN,
            ..Self::trail()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BounceConfig {
    pub damping: f32,
    pub rest_speed: f32,
    pub rebound_velocity: f32,
    pub rebound_gravity: f32,
    pub rebound_clearance: f32,
    pub rebound_kick: f32,
    pub drop_gravity: f32,
    pub drop_clearance: f32,
    pub drop_kick: f32,
    pub max_frames: u32,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            damping: BOUNCE_DAMPING,
            rest_speed: BOUNCE_REST_SPEED,
            rebound_velocity: REBOUND_VELOCITY,
            rebound_gravity: REBOUND_GRAVITY,
            rebound_clearance: REBOUND_CLEARANCE,
            rebound_kick: REBOUND_KICK,
            drop_gravity: DROP_GRAVITY,
            drop_clearance: DROP_CLEARANCE,
            drop_kick: DROP_KICK,
            max_frames: BOUNCE_MAX_FRAMES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientConfig {
    pub glow_count: usize,
    pub star_count: usize,
    pub star_alpha_min: f32,
    pub star_alpha_max: f32,
    pub star_twinkle_max: f32,
    /// `None` disables shooting stars.
    pub shooting_star_interval: Option<Duration>,
    pub shooting_star_decay: f32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            glow_count: GLOW_COUNT,
            star_count: STAR_COUNT,
            star_alpha_min: STAR_ALPHA_MIN,
            star_alpha_max: STAR_ALPHA_MAX,
            star_twinkle_max: STAR_TWINKLE_MAX,
            shooting_star_interval: Some(SHOOTING_STAR_INTERVAL),
            shooting_star_decay: SHOOTING_STAR_DECAY,
        }
    }
}

impl AmbientConfig {
    pub fn disabled() -> Self {
        Self {
            glow_count: 0,
            star_count: 0,
            shooting_star_interval: None,
            ..Self::default()
        }
    }
}

/// Hint shown in the tooltip, picked by whether the device has touch input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipCopy {
    pub touch: &'static str,
    pub pointer: &'static str,
}

impl TooltipCopy {
    pub fn for_device(&self, touch: bool) -> &'static str {
        if touch {
            self.touch
        } else {
            self.pointer
        }
    }
}

impl Default for TooltipCopy {
    fn default() -> Self {
        Self {
            touch: TOOLTIP_TEXT_TOUCH,
            pointer: TOOLTIP_TEXT_POINTER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub palette: Palette,
    pub drag: DragConfig,
    pub trail: EmissionConfig,
    pub idle: EmissionConfig,
    pub burst: EmissionConfig,
    pub bounce: BounceConfig,
    pub ambient: AmbientConfig,
    /// `None` leaves the page's own tooltip text alone.
    pub tooltip: Option<TooltipCopy>,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            palette: smallvec![
                GlowColor::Fuchsia,
                GlowColor::Turquoise,
                GlowColor::Pink,
                GlowColor::Violet
            ],
            drag: DragConfig::default(),
            trail: EmissionConfig::trail(),
            idle: EmissionConfig::idle(),
            burst: EmissionConfig::burst(),
            bounce: BounceConfig::default(),
            ambient: AmbientConfig::default(),
            tooltip: Some(TooltipCopy::default()),
        }
    }
}

/// Known variants of the effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Vanilla,
    Classic,
    Herobanner,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vanilla" | "" => Ok(Preset::Vanilla),
            "classic" => Ok(Preset::Classic),
            "herobanner" => Ok(Preset::Herobanner),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl FxConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Vanilla => Self::default(),
            Preset::Classic => {
                // Dense short-lived trail straight from the emblem, no sky.
                let trail = EmissionConfig {
                    count: TRAIL_COUNT,
                    area: 0.0,
                    speed: 2.0,
                    decay: 0.02,
                    radius_min: 1.0,
                    radius_span: 4.0,
                    alpha_min: 1.0,
                };
                Self {
                    palette: smallvec![GlowColor::Fuchsia, GlowColor::Turquoise, GlowColor::Yellow],
                    drag: DragConfig {
                        idle_emit_chance: 1.0,
                        ..DragConfig::default()
                    },
                    idle: trail.clone(),
                    burst: EmissionConfig {
                        count: 10,
                        area: 20.0,
                        ..trail.clone()
                    },
                    trail,
                    bounce: BounceConfig {
                        rebound_kick: 0.0,
                        drop_kick: 0.0,
                        ..BounceConfig::default()
                    },
                    ambient: AmbientConfig::disabled(),
                    tooltip: None,
                }
            }
            Preset::Herobanner => {
                // Emits on every dragged frame; bursts share the trail decay.
                let trail = EmissionConfig {
                    count: TRAIL_COUNT,
                    area: HERO_TRAIL_AREA,
                    speed: HERO_PARTICLE_SPEED,
                    decay: HERO_DECAY,
                    radius_min: HERO_RADIUS_MIN,
                    radius_span: HERO_RADIUS_SPAN,
                    alpha_min: 1.0,
                };
                Self {
                    drag: DragConfig {
                        bounds: BoundsMode::Both,
                        idle_emit_chance: 1.0,
                        double_tap_window_ms: HERO_DOUBLE_TAP_WINDOW_MS,
                        touch: TouchMode::DoubleTapOnly,
                        ..DragConfig::default()
                    },
                    idle: trail.clone(),
                    burst: EmissionConfig {
                        count: BURST_COUNT,
                        area: BURST_AREA,
                        radius_span: HERO_BURST_RADIUS_SPAN,
                        alpha_min: BURST_ALPHA_MIN,
                        ..trail.clone()
                    },
                    trail,
                    ambient: AmbientConfig::disabled(),
                    tooltip: Some(TooltipCopy {
                        touch: HERO_TOOLTIP_TEXT_TOUCH,
                        pointer: HERO_TOOLTIP_TEXT_POINTER,
                    }),
                    ..Self::default()
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        check_range("drag.smoothing", self.drag.smoothing, f32::EPSILON, 1.0)?;
        check_range("drag.idle_emit_chance", self.drag.idle_emit_chance, 0.0, 1.0)?;
        check_range("bounce.damping", self.bounce.damping, 0.0, 0.99)?;
        check_range("bounce.rest_speed", self.bounce.rest_speed, f32::EPSILON, f32::MAX)?;
        check_range("bounce.rebound_gravity", self.bounce.rebound_gravity, f32::EPSILON, f32::MAX)?;
        check_range("bounce.drop_gravity", self.bounce.drop_gravity, f32::EPSILON, f32::MAX)?;
        self.trail.validate(TRAIL_FIELDS)?;
        self.idle.validate(IDLE_FIELDS)?;
        self.burst.validate(BURST_FIELDS)?;
        let a = &self.ambient;
        check_range("ambient.star_alpha_min", a.star_alpha_min, 0.0, a.star_alpha_max)?;
        check_range("ambient.star_alpha_max", a.star_alpha_max, a.star_alpha_min, 1.0)?;
        check_range("ambient.star_twinkle_max", a.star_twinkle_max, 0.0, 1.0)?;
        check_range("ambient.shooting_star_decay", a.shooting_star_decay, f32::EPSILON, 1.0)?;
        Ok(())
    }
}

// Field names reported for each emission batch, in `EmissionConfig::validate` order.
const TRAIL_FIELDS: [&str; 6] = [
    "trail.decay",
    "trail.alpha_min",
    "trail.speed",
    "trail.area",
    "trail.radius_min",
    "trail.radius_span",
];
const IDLE_FIELDS: [&str; 6] = [
    "idle.decay",
    "idle.alpha_min",
    "idle.speed",
    "idle.area",
    "idle.radius_min",
    "idle.radius_span",
];
const BURST_FIELDS: [&str; 6] = [
    "burst.decay",
    "burst.alpha_min",
    "burst.speed",
    "burst.area",
    "burst.radius_min",
    "burst.radius_span",
];

impl EmissionConfig {
    fn validate(&self, names: [&'static str; 6]) -> Result<(), ConfigError> {
        let [decay, alpha_min, speed, area, radius_min, radius_span] = names;
        check_range(decay, self.decay, f32::EPSILON, 1.0)?;
        check_range(alpha_min, self.alpha_min, 0.0, 1.0)?;
        check_range(speed, self.speed, 0.0, f32::MAX)?;
        check_range(area, self.area, 0.0, f32::MAX)?;
        check_range(radius_min, self.radius_min, 0.0, f32::MAX)?;
        check_range(radius_span, self.radius_span, 0.0, f32::MAX)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
