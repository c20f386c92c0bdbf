/// DOM anchors, layering and drawing constants for the browser front-end.
///
/// Kept free of `web_sys` so host-side tests can include this file directly.
// Required elements
pub const EMBLEM_ID: &str = "logo";
pub const ACTIVE_AREA_ID: &str = "activeArea";
pub const TOOLTIP_ID: &str = "tooltip";

// Drawing surfaces; the trail canvas is reused when the page already has one
pub const TRAIL_CANVAS_ID: &str = "trail";
pub const STARS_CANVAS_ID: &str = "starsCanvas";
pub const SHOOTING_STAR_CANVAS_ID: &str = "shootingStarCanvas";

// Stacking order: sky behind, trail above it, emblem on top
pub const SKY_Z_INDEX: i32 = 0;
pub const TRAIL_Z_INDEX: i32 = 1;
pub const EMBLEM_Z_INDEX: i32 = 10;

// Glow
pub const PARTICLE_SHADOW_BLUR: f64 = 20.0;
pub const GLOW_SHADOW_BLUR: f64 = 50.0;

// Optional data attributes on the active area
pub const PRESET_ATTR: &str = "data-fx-preset";
pub const BOUNDS_ATTR: &str = "data-fx-bounds";
pub const SEED_ATTR: &str = "data-fx-seed";

// Tooltip
pub const TOOLTIP_SHOWN_TRANSFORM: &str = "translate(0, 50%)";
