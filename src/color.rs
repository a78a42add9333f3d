//! Hex to CSS color conversion
//!
//! Turns palette hex colors into `rgb()`/`rgba()` strings for chart
//! datasets, e.g. a translucent fill derived from the primary color.

use thiserror::Error;

/// Errors from color conversion
#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Alpha must be between 0 and 1, got {0}")]
    InvalidAlpha(f64),
}

/// Parse `#RRGGBB` or `#RGB` into channel values
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        6 => Ok((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => Ok((
            channel(&digits[0..1])? * 17,
            channel(&digits[1..2])? * 17,
            channel(&digits[2..3])? * 17,
        )),
        _ => Err(invalid()),
    }
}

/// Format a hex color as `rgb(r, g, b)`, or `rgba(r, g, b, a)` with alpha
pub fn hex_to_rgb(hex: &str, alpha: Option<f64>) -> Result<String, ColorError> {
    let (r, g, b) = parse_hex(hex)?;

    match alpha {
        Some(a) if !(0.0..=1.0).contains(&a) => Err(ColorError::InvalidAlpha(a)),
        Some(a) => Ok(format!("rgba({}, {}, {}, {})", r, g, b, a)),
        None => Ok(format!("rgb({}, {}, {})", r, g, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_without_alpha() {
        assert_eq!(hex_to_rgb("#00a2ff", None).unwrap(), "rgb(0, 162, 255)");
        assert_eq!(hex_to_rgb("#FFF", None).unwrap(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_rgba_with_alpha() {
        assert_eq!(
            hex_to_rgb("#0066ff", Some(0.5)).unwrap(),
            "rgba(0, 102, 255, 0.5)"
        );
        assert_eq!(hex_to_rgb("#424242", Some(1.0)).unwrap(), "rgba(66, 66, 66, 1)");
        assert_eq!(hex_to_rgb("#000000", Some(0.0)).unwrap(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(hex_to_rgb("00a2ff", None), Err(ColorError::InvalidHex(_))));
        assert!(matches!(hex_to_rgb("#00a2f", None), Err(ColorError::InvalidHex(_))));
        assert!(matches!(hex_to_rgb("#zzzzzz", None), Err(ColorError::InvalidHex(_))));
        assert_eq!(
            hex_to_rgb("#00a2ff", Some(1.5)),
            Err(ColorError::InvalidAlpha(1.5))
        );
    }
}
