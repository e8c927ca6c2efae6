// Host-side tests for the color resolver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod color {
    include!("../src/color.rs");
}

use color::*;

#[test]
fn six_digit_hex_round_trips_channels() {
    assert_eq!(parse_hex("#ff8800"), Some((255, 136, 0)));
    assert_eq!(parse_hex("#000000"), Some((0, 0, 0)));
    assert_eq!(parse_hex("#ffffff"), Some((255, 255, 255)));
    assert_eq!(parse_hex("#3b82f6"), Some((59, 130, 246)));
}

#[test]
fn three_digit_hex_expands_each_nibble() {
    // #fa0 is shorthand for #ffaa00
    assert_eq!(parse_hex("#fa0"), Some((255, 170, 0)));
    assert_eq!(parse_hex("#000"), Some((0, 0, 0)));
    assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
}

#[test]
fn leading_marker_is_optional() {
    assert_eq!(parse_hex("3b82f6"), parse_hex("#3b82f6"));
    assert_eq!(parse_hex("fa0"), parse_hex("#fa0"));
}

#[test]
fn to_translucent_applies_requested_alpha() {
    assert_eq!(to_translucent("#ff8800", 0.5), "rgba(255, 136, 0, 0.5)");
    assert_eq!(to_translucent("#ff8800", 1.0), "rgba(255, 136, 0, 1)");
    assert_eq!(to_translucent("#ff8800", 0.0), "rgba(255, 136, 0, 0)");
}

#[test]
fn malformed_colors_fall_back_without_panicking() {
    // All of these degrade to the default blue at the requested alpha.
    for bad in ["", "not-a-color", "#12", "#12345", "#1234567", "#gggggg", "#xyz"] {
        assert_eq!(to_translucent(bad, 0.3), "rgba(59, 130, 246, 0.3)", "input: {bad:?}");
    }
}

#[test]
fn palette_falls_back_per_token() {
    let p = Palette::from_tokens(None, None);
    assert_eq!(p.primary, constants::PRIMARY_FALLBACK);
    assert_eq!(p.primary_dark, constants::PRIMARY_DARK_FALLBACK);

    // Empty or whitespace-only values count as absent.
    let p = Palette::from_tokens(Some("".into()), Some("   ".into()));
    assert_eq!(p.primary, constants::PRIMARY_FALLBACK);
    assert_eq!(p.primary_dark, constants::PRIMARY_DARK_FALLBACK);

    // A resolved token survives, trimmed.
    let p = Palette::from_tokens(Some(" #112233 ".into()), None);
    assert_eq!(p.primary, "#112233");
    assert_eq!(p.primary_dark, constants::PRIMARY_DARK_FALLBACK);
}

#[test]
fn fallback_constants_are_themselves_parseable() {
    assert!(parse_hex(constants::PRIMARY_FALLBACK).is_some());
    assert!(parse_hex(constants::PRIMARY_DARK_FALLBACK).is_some());
    assert!(parse_hex(constants::ALT_CORE).is_some());
    assert!(parse_hex(constants::ALT_MID).is_some());
    assert!(parse_hex(constants::ALT_EDGE).is_some());
}
