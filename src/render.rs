use crate::color::{to_translucent, Palette};
use crate::constants::*;
use crate::motion::{ColorMode, MotionState, SurfaceSize};
use web_sys as web;

/// Paint the current motion state: two concentric radial gradients at the
/// blob position. The geometry is a plain circle; the soft "blob" look comes
/// entirely from the gradient shading.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    state: &MotionState,
    palette: &Palette,
    surface: SurfaceSize,
) {
    ctx.clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);

    let x = state.position.x as f64;
    let y = state.position.y as f64;
    let r = state.visual_radius() as f64;
    let inner = (r * GRADIENT_INNER_FRACTION).max(GRADIENT_INNER_MIN);
    let outer = r.max(GRADIENT_OUTER_MIN);

    // Outer fill: opaque core fading outward into the dark shade, or the
    // fixed lighter-blue triple in alternate mode.
    if let Ok(fill) = ctx.create_radial_gradient(x, y, inner, x, y, outer) {
        let (core, mid, edge) = match state.color_mode {
            ColorMode::Primary => (
                to_translucent(&palette.primary, FILL_CORE_ALPHA),
                to_translucent(&palette.primary_dark, FILL_MID_ALPHA),
                to_translucent(&palette.primary_dark, 0.0),
            ),
            ColorMode::Alternate => (
                to_translucent(ALT_CORE, FILL_CORE_ALPHA),
                to_translucent(ALT_MID, FILL_MID_ALPHA),
                to_translucent(ALT_EDGE, 0.0),
            ),
        };
        _ = fill.add_color_stop(0.0, &core);
        _ = fill.add_color_stop(FILL_MID_OFFSET as f32, &mid);
        _ = fill.add_color_stop(1.0, &edge);
        ctx.set_fill_style_canvas_gradient(&fill);
        fill_circle(ctx, x, y, outer);
    }

    // Glossy highlight: white fading to transparent, composited faintly over
    // the same circle.
    if let Ok(highlight) = ctx.create_radial_gradient(x, y, inner, x, y, outer) {
        _ = highlight.add_color_stop(
            0.0,
            &format!("rgba(255, 255, 255, {})", HIGHLIGHT_CORE_ALPHA),
        );
        _ = highlight.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        ctx.set_global_alpha(HIGHLIGHT_COMPOSITE_ALPHA);
        ctx.set_fill_style_canvas_gradient(&highlight);
        fill_circle(ctx, x, y, outer);
        ctx.set_global_alpha(1.0);
    }
}

#[inline]
fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.fill();
}
