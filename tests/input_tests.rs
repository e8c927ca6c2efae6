// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn local_point_subtracts_surface_offset() {
    assert_eq!(local_point(350.0, 50.0, 0.0, 0.0), Vec2::new(350.0, 50.0));
    assert_eq!(local_point(350.0, 50.0, 100.0, 20.0), Vec2::new(250.0, 30.0));
    // Pointers left/above the surface yield negative local coordinates;
    // the motion state tolerates out-of-rect targets.
    assert_eq!(local_point(10.0, 10.0, 40.0, 40.0), Vec2::new(-30.0, -30.0));
}

#[test]
fn local_point_handles_fractional_rects() {
    let p = local_point(120.5, 80.25, 0.5, 0.25);
    assert!((p.x - 120.0).abs() < 1e-6);
    assert!((p.y - 80.0).abs() < 1e-6);
}

#[test]
fn space_and_enter_are_the_only_activation_keys() {
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Enter"));

    for other in ["a", "Escape", "Tab", "Spacebar", "ArrowUp", ""] {
        assert!(!is_activation_key(other), "key: {other:?}");
    }
}
