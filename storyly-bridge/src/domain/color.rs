use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color with every channel normalized to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            normalize(red),
            normalize(green),
            normalize(blue),
            normalize(alpha),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("expected 6 or 8 hex digits after the prefix, found {digits}")]
    InvalidLength { digits: usize },
    #[error("invalid hex digits in color {value:?}")]
    InvalidDigit { value: String },
}

/// Parses `#RRGGBB` or `#AARRGGBB`.
///
/// The first character is always dropped, whatever it is. The 8-digit form is
/// ordered alpha, red, green, blue; the 6-digit form is fully opaque.
pub fn parse_hex_color(value: &str) -> Result<Rgba, ColorParseError> {
    let mut chars = value.chars();
    if chars.next().is_none() {
        return Err(ColorParseError::Empty);
    }
    let digits = chars.as_str();
    let count = digits.chars().count();
    if count != 6 && count != 8 {
        return Err(ColorParseError::InvalidLength { digits: count });
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit {
            value: value.to_string(),
        });
    }

    let packed = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit {
        value: value.to_string(),
    })?;
    let [b0, b1, b2, b3] = packed.to_be_bytes();
    if count == 8 {
        Ok(Rgba::from_bytes(b1, b2, b3, b0))
    } else {
        Ok(Rgba::from_bytes(b1, b2, b3, u8::MAX))
    }
}

fn normalize(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}
