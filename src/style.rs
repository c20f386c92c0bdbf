// CSS/canvas string helpers. No web_sys here; tests include this file.

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

/// `rgba(r,g,b,a)` with alpha clamped to the displayable range.
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    let a = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
    format!("rgba({},{},{},{})", rgb[0], rgb[1], rgb[2], a)
}

#[inline]
pub fn white(alpha: f32) -> String {
    rgba([255, 255, 255], alpha)
}

/// Inline style for a full-viewport drawing surface at the given layer.
pub fn layer_style(z_index: i32) -> String {
    format!(
        "position:fixed;left:0;top:0;pointer-events:none;z-index:{}",
        z_index
    )
}
