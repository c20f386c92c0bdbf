//! Layout types shared with the web frontend.
//!
//! Everything here is in viewport (CSS pixel) coordinates with the origin at
//! the top-left corner and `y` growing downwards, matching what
//! `getBoundingClientRect` and pointer events report.

use glam::Vec2;

/// Axis-aligned rectangle, e.g. the active area's bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Inclusive on both edges.
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom()
    }

    /// Inclusive on both edges.
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left && x <= self.right()
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }
}

/// Size of the browser viewport; drawing surfaces are sized to match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis ratio that maps positions in `self` onto `to`.
    pub fn scale_to(&self, to: Viewport) -> Vec2 {
        let sx = if self.width > 0.0 { to.width / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { to.height / self.height } else { 1.0 };
        Vec2::new(sx, sy)
    }
}

/// Snapshot of the host layout, read while handling a single input event.
///
/// The scene never keeps a `Layout` beyond the call it was passed to; the
/// active area can move whenever the page reflows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub area: Rect,
    pub emblem_size: Vec2,
}
