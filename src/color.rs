use crate::constants::{PRIMARY_DARK_FALLBACK, PRIMARY_FALLBACK};

// Matches PRIMARY_FALLBACK; used when a color string cannot be parsed at all.
const FALLBACK_RGB: (u8, u8, u8) = (59, 130, 246);

/// Two theme colors resolved once at startup. Immutable afterwards.
#[derive(Clone, Debug)]
pub struct Palette {
    pub primary: String,
    pub primary_dark: String,
}

impl Palette {
    /// Build a palette from two resolved token values, substituting the
    /// hardcoded fallback for any token that was absent or empty.
    pub fn from_tokens(primary: Option<String>, primary_dark: Option<String>) -> Self {
        let pick = |v: Option<String>, fb: &str| match v {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => fb.to_string(),
        };
        Self {
            primary: pick(primary, PRIMARY_FALLBACK),
            primary_dark: pick(primary_dark, PRIMARY_DARK_FALLBACK),
        }
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
#[inline]
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let s = color.trim().trim_start_matches('#');
    match s.len() {
        3 => {
            let mut ch = s.chars();
            let (r, g, b) = (ch.next()?, ch.next()?, ch.next()?);
            let d = |c: char| c.to_digit(16).map(|v| (v * 17) as u8);
            Some((d(r)?, d(g)?, d(b)?))
        }
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Re-express a hex color with the given opacity as an `rgba(...)` string.
/// Unparseable input degrades to the default blue at the requested opacity;
/// this never fails.
pub fn to_translucent(color: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex(color).unwrap_or(FALLBACK_RGB);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}
