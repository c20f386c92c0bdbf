use std::time::Duration;

// Default tuning shared by every preset unless overridden in `config.rs`.
// Distances are CSS pixels, speeds are pixels per frame.

// Drag tracking
pub const DRAG_SMOOTHING: f32 = 0.15; // fraction of the remaining distance covered per frame
pub const DRAG_MOVE_THRESHOLD_PX: f32 = 1.0; // eased delta above which the emblem counts as moving
pub const IDLE_EMIT_CHANCE: f32 = 0.05; // per-frame emission probability while barely moving
pub const IDLE_POINTER_PX: f32 = 2.0; // pointer travel below which an emission is "idle"
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

// Tooltip copy
pub const TOOLTIP_TEXT_TOUCH: &str = "Hi! Drag me around. I'm a web-fragment";
pub const TOOLTIP_TEXT_POINTER: &str = "Hi! Hover me! I'm a web-fragment";

// Initial emblem placement below the active area's top edge
pub const EMBLEM_START_OFFSET_Y: f32 = 110.0;

// Bounce
pub const BOUNCE_DAMPING: f32 = 0.6;
pub const BOUNCE_REST_SPEED: f32 = 1.0; // below this the rebound counts as spent
pub const REBOUND_VELOCITY: f32 = 18.0; // launch speed when released near the bottom edge
pub const REBOUND_GRAVITY: f32 = 0.6;
pub const REBOUND_CLEARANCE: f32 = 90.0; // rest offset from the opposite edge
pub const REBOUND_KICK: f32 = 6.0;
pub const DROP_GRAVITY: f32 = 0.7;
pub const DROP_CLEARANCE: f32 = 10.0; // rest offset above the bottom edge
pub const DROP_KICK: f32 = 8.0;
pub const BOUNCE_MAX_FRAMES: u32 = 2000;

// Particles
pub const ALPHA_EPSILON: f32 = 1e-4; // alphas at or below this are treated as transparent
pub const PARTICLE_SPEED: f32 = 1.5;
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 3.0;

pub const TRAIL_COUNT: usize = 5;
pub const TRAIL_AREA: f32 = 80.0; // emission disc diameter
pub const TRAIL_DECAY: f32 = 0.012;

pub const IDLE_COUNT: usize = 3;
pub const IDLE_AREA: f32 = 100.0;
pub const IDLE_SPEED_SCALE: f32 = 0.7;
pub const IDLE_DECAY: f32 = 0.008;

pub const BURST_COUNT: usize = 15;
pub const BURST_AREA: f32 = 200.0;
pub const BURST_ALPHA_MIN: f32 = 0.2;
pub const BURST_DECAY: f32 = 0.008;

// Herobanner page: dense short-lived particles, taps instead of touch drags
pub const HERO_TRAIL_AREA: f32 = 50.0;
pub const HERO_PARTICLE_SPEED: f32 = 2.0;
pub const HERO_DECAY: f32 = 0.02;
pub const HERO_RADIUS_MIN: f32 = 1.0;
pub const HERO_RADIUS_SPAN: f32 = 4.0;
pub const HERO_BURST_RADIUS_SPAN: f32 = 10.0;
pub const HERO_DOUBLE_TAP_WINDOW_MS: f64 = 400.0;
pub const HERO_TOOLTIP_TEXT_TOUCH: &str = "Double tap anywhere";
pub const HERO_TOOLTIP_TEXT_POINTER: &str = "Hover me";

// Ambient sky
pub const GLOW_COUNT: usize = 20;
pub const GLOW_RADIUS_MIN: f32 = 5.0;
pub const GLOW_RADIUS_SPAN: f32 = 30.0;
pub const GLOW_ALPHA_MIN: f32 = 0.05;
pub const GLOW_ALPHA_SPAN: f32 = 0.1;
pub const GLOW_SPEED_MIN: f32 = 0.1;
pub const GLOW_SPEED_SPAN: f32 = 0.5;

pub const STAR_COUNT: usize = 100;
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_SPAN: f32 = 2.0;
pub const STAR_ALPHA_MIN: f32 = 0.1;
pub const STAR_ALPHA_MAX: f32 = 0.5;
pub const STAR_TWINKLE_MAX: f32 = 0.01;

pub const SHOOTING_STAR_INTERVAL: Duration = Duration::from_secs(6);
pub const SHOOTING_STAR_DECAY: f32 = 0.02;
pub const SHOOTING_STAR_SPEED_MIN: f32 = 2.0;
pub const SHOOTING_STAR_SPEED_SPAN: f32 = 5.0;
pub const SHOOTING_STAR_RADIUS_MIN: f32 = 2.0;
pub const SHOOTING_STAR_RADIUS_SPAN: f32 = 3.0;
pub const SHOOTING_STAR_TAIL: f32 = 20.0; // tail length in velocity steps

// Frame driver
pub const MAX_FRAME_DT: Duration = Duration::from_millis(250);
