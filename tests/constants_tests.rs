// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_valid_filter_coefficients() {
    // A first-order filter coefficient must sit in (0, 1] to converge.
    assert!(EASE_POSITION > 0.0 && EASE_POSITION <= 1.0);
    assert!(EASE_POSITION_REDUCED > 0.0 && EASE_POSITION_REDUCED <= 1.0);
    assert!(EASE_RADIUS > 0.0 && EASE_RADIUS <= 1.0);

    // Reduced motion snaps harder; the radius trails the position.
    assert!(EASE_POSITION_REDUCED > EASE_POSITION);
    assert!(EASE_RADIUS < EASE_POSITION);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_constants_are_within_bounds() {
    assert!(PULSE_DECAY_PER_SEC > 0.0);
    assert!(PULSE_SWELL > 0.0 && PULSE_SWELL < 1.0);

    // The decay rate implies a finite pulse lifetime.
    let lifetime = 1.0 / PULSE_DECAY_PER_SEC;
    assert!(lifetime > 0.0 && lifetime < 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_sane() {
    assert!(BASE_RADIUS_FRACTION > 0.0 && BASE_RADIUS_FRACTION < 0.5);
    assert!(STRETCH_MAX > 0.0);

    assert!(GRADIENT_INNER_FRACTION > 0.0 && GRADIENT_INNER_FRACTION < 1.0);
    assert!(GRADIENT_INNER_MIN > 0.0);
    assert!(GRADIENT_OUTER_MIN > GRADIENT_INNER_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_and_stops_are_in_range() {
    assert!(HIGHLIGHT_CORE_ALPHA > 0.0 && HIGHLIGHT_CORE_ALPHA <= 1.0);
    assert!(HIGHLIGHT_COMPOSITE_ALPHA > 0.0 && HIGHLIGHT_COMPOSITE_ALPHA <= 1.0);
    assert!(FILL_CORE_ALPHA > 0.0 && FILL_CORE_ALPHA <= 1.0);
    assert!(FILL_MID_ALPHA > 0.0 && FILL_MID_ALPHA <= 1.0);
    assert!(FILL_MID_OFFSET > 0.0 && FILL_MID_OFFSET < 1.0);

    // The core must be the most opaque stop.
    assert!(FILL_CORE_ALPHA > FILL_MID_ALPHA);
}

#[test]
fn token_and_element_names_are_nonempty() {
    assert!(!CANVAS_ID.is_empty());
    assert!(TOKEN_PRIMARY.starts_with("--"));
    assert!(TOKEN_PRIMARY_DARK.starts_with("--"));
    assert_ne!(TOKEN_PRIMARY, TOKEN_PRIMARY_DARK);
}
