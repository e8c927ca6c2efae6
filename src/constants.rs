/// Interaction and rendering tuning constants.
///
/// These constants express intended behavior (easing rates, clamp limits,
/// gradient geometry) and keep magic numbers out of the code.
// Per-frame fraction of remaining distance-to-target closed each frame.
// Deliberately frame-rate-coupled; see DESIGN notes.
pub const EASE_POSITION: f32 = 0.12;
// Faster snap when the user prefers reduced motion (less visible drift).
pub const EASE_POSITION_REDUCED: f32 = 0.25;
// Radius follows its target more lazily than position does.
pub const EASE_RADIUS: f32 = 0.09;

// Resting radius as a fraction of the shorter surface dimension.
pub const BASE_RADIUS_FRACTION: f32 = 0.18;
// Cap on the pointer-stretch term added to the radius target (logical units).
pub const STRETCH_MAX: f32 = 80.0;

// Linear pulse decay rate; a pulse reaches zero 1/1.6 = 0.625s after start.
pub const PULSE_DECAY_PER_SEC: f64 = 1.6;
// Peak radius swell of a full-strength pulse (28%).
pub const PULSE_SWELL: f32 = 0.28;

// Radial gradient geometry: inner stop at 10% of the visual radius, with
// floors so degenerate radii still produce a valid gradient.
pub const GRADIENT_INNER_FRACTION: f64 = 0.1;
pub const GRADIENT_INNER_MIN: f64 = 1.0;
pub const GRADIENT_OUTER_MIN: f64 = 10.0;

// Glossy highlight: white core opacity and the overall composite alpha.
pub const HIGHLIGHT_CORE_ALPHA: f32 = 0.9;
pub const HIGHLIGHT_COMPOSITE_ALPHA: f64 = 0.12;

// Outer-fill stop opacities, shared by both color modes.
pub const FILL_CORE_ALPHA: f32 = 0.95;
pub const FILL_MID_ALPHA: f32 = 0.55;
pub const FILL_MID_OFFSET: f64 = 0.6;

// Host element and theme token names.
pub const CANVAS_ID: &str = "blob-canvas";
pub const TOKEN_PRIMARY: &str = "--blob-primary";
pub const TOKEN_PRIMARY_DARK: &str = "--blob-primary-dark";

// Theme token fallbacks, used whenever resolution fails or yields nothing.
pub const PRIMARY_FALLBACK: &str = "#3b82f6";
pub const PRIMARY_DARK_FALLBACK: &str = "#1e3a8a";

// Alternate color mode: a fixed lighter-blue triple, independent of theme.
pub const ALT_CORE: &str = "#93c5fd";
pub const ALT_MID: &str = "#60a5fa";
pub const ALT_EDGE: &str = "#3b82f6";
