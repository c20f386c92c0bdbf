use crate::constants::TOOLTIP_SHOWN_TRANSFORM;
use crate::dom::set_style;
use banner_core::TooltipCopy;
use web_sys as web;

#[inline]
pub fn show(tooltip: &web::HtmlElement) {
    set_style(tooltip, "display", "block");
    set_style(tooltip, "opacity", "1");
    set_style(tooltip, "transform", TOOLTIP_SHOWN_TRANSFORM);
}

#[inline]
pub fn hide(tooltip: &web::HtmlElement) {
    set_style(tooltip, "display", "none");
}

pub fn set_visible(tooltip: &web::HtmlElement, visible: bool) {
    if visible {
        show(tooltip);
    } else {
        hide(tooltip);
    }
}

/// Replace the hint with the copy that matches how the visitor can interact.
pub fn set_text_for_device(tooltip: &web::HtmlElement, copy: &TooltipCopy, touch: bool) {
    tooltip.set_text_content(Some(copy.for_device(touch)));
}
