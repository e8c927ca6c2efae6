use crate::color::Palette;
use crate::constants::{TOKEN_PRIMARY, TOKEN_PRIMARY_DARK};
use crate::motion::SurfaceSize;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing buffer to its displayed size times the device
/// pixel ratio, pin the CSS size to the logical dimensions, and install the
/// pixel-ratio transform so all drawing happens in logical units. Returns the
/// logical size. Called at mount and on every window resize; degrades to
/// ratio 1 and raw element dimensions when introspection is unavailable.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> SurfaceSize {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let css_w = if rect.width() > 0.0 {
        rect.width()
    } else {
        canvas.width() as f64
    };
    let css_h = if rect.height() > 0.0 {
        rect.height()
    } else {
        canvas.height() as f64
    };

    canvas.set_width(((css_w * dpr).ceil() as u32).max(1));
    canvas.set_height(((css_h * dpr).ceil() as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    SurfaceSize {
        width: css_w as f32,
        height: css_h as f32,
    }
}

/// Environment signal, read once at mount. False when matchMedia is absent.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Computed-style custom property lookup. None on absence, emptiness, or any
/// lookup failure; token resolution must never break the widget.
pub fn css_color_token(el: &web::Element, name: &str) -> Option<String> {
    let style = web::window()?.get_computed_style(el).ok()??;
    let value = style.get_property_value(name).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Resolve the two theme tokens against the canvas element, falling back to
/// the hardcoded constants wherever resolution yields nothing.
pub fn resolve_palette(canvas: &web::HtmlCanvasElement) -> Palette {
    Palette::from_tokens(
        css_color_token(canvas, TOKEN_PRIMARY),
        css_color_token(canvas, TOKEN_PRIMARY_DARK),
    )
}
