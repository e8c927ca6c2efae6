use glam::Vec2;

/// Map a client-space event coordinate to surface-local logical units by
/// subtracting the surface's top-left offset.
#[inline]
pub fn local_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}

/// Keys that trigger a pulse while the surface holds focus.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, " " | "Enter")
}
