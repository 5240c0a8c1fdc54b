//! Hex color helpers shared by the palette extender and the theme projectors.
//!
//! These are lossy, best-effort normalizers: malformed input never panics and
//! instead degrades to an empty string, which callers treat as "no color".

use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement for pure black when lightening, since scaling zero is a no-op.
const NEAR_BLACK: &str = "0D0D0D";

/// Per-channel clamp applied by [`change_luminance_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBounds {
    pub min: u8,
    pub max: u8,
}

impl Default for ChannelBounds {
    fn default() -> Self {
        Self { min: 0, max: 255 }
    }
}

/// Strip every non-hex character and expand shorthand by doubling each digit.
pub fn validate_hex(input: &str) -> String {
    let sanitized: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if sanitized.len() < 6 {
        sanitized.chars().flat_map(|c| [c, c]).collect()
    } else {
        sanitized
    }
}

/// Scale each channel by `1 + modifier`, clamped to the full byte range.
pub fn change_luminance(hex: &str, modifier: f64) -> String {
    change_luminance_within(hex, modifier, ChannelBounds::default())
}

/// Scale each channel by `1 + modifier` and clamp it into `bounds`.
///
/// Returns an empty string when `hex` does not hold at least six hex digits
/// after [`validate_hex`].
pub fn change_luminance_within(hex: &str, modifier: f64, bounds: ChannelBounds) -> String {
    let mut validated = validate_hex(hex);
    if validated.len() < 6 {
        return String::new();
    }
    if modifier > 0.0 && validated[..6].eq_ignore_ascii_case("000000") {
        validated = NEAR_BLACK.to_string();
    }

    let min = f64::from(bounds.min);
    let max = f64::from(bounds.max);
    let mut out = String::with_capacity(7);
    out.push('#');
    for i in 0..3 {
        let Ok(channel) = u8::from_str_radix(&validated[i * 2..i * 2 + 2], 16) else {
            return String::new();
        };
        let channel = f64::from(channel);
        let adjusted = (channel + channel * modifier).max(min).min(max).round();
        out.push_str(&format!("{:02x}", adjusted as u8));
    }
    out
}

/// Convert `rgb(r, g, b)` / `rgba(r, g, b, a)` notation to hex.
///
/// Hex input and empty input pass through unchanged. Unparseable input
/// yields an empty string.
pub fn rgb_to_hex(input: &str) -> String {
    static RGB_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)^\s*rgba?\(\s*([^)]*)\)\s*$").expect("valid regex")
    });

    if input.is_empty() || input.starts_with('#') {
        return input.to_string();
    }
    let Some(captures) = RGB_RE.captures(input) else {
        return String::new();
    };

    let mut out = String::from("#");
    for part in captures[1].split(',') {
        match part.trim().parse::<f64>() {
            Ok(value) if (0.0..=255.0).contains(&value) => {
                out.push_str(&format!("{:02x}", value.trunc() as u8));
            }
            _ => return String::new(),
        }
    }
    out
}

/// Drop the leading `#`, if any.
pub fn strip_hash(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// True for `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and plain `rgb()`/`rgba()` values,
/// the only tokens we allow into generated CSS.
pub fn is_safe_color_token(value: &str) -> bool {
    static RGB_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^rgba?\(\s*[0-9.%]+\s*(,\s*[0-9.%]+\s*){2,3}\)$").expect("valid regex")
    });

    if let Some(digits) = value.strip_prefix('#') {
        return matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
    }
    RGB_TOKEN_RE.is_match(value)
}
