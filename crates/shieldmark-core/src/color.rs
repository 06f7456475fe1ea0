use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a hex color string cannot be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string must start with '#', got {0:?}")]
    MissingHash(String),

    #[error("unsupported hex color length {0}, expected 3, 6, or 8 digits")]
    BadLength(usize),

    #[error("invalid hex digit {0:?}")]
    BadDigit(char),
}

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        let digits: Vec<u8> = hex
            .chars()
            .map(hex_val)
            .collect::<Result<_, ColorParseError>>()?;

        match digits.len() {
            3 => Ok(Self::rgb(
                expand_nibble(digits[0]),
                expand_nibble(digits[1]),
                expand_nibble(digits[2]),
            )),
            6 => Ok(Self::rgb(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
            )),
            8 => Ok(Self::rgba(
                digits[0] << 4 | digits[1],
                digits[2] << 4 | digits[3],
                digits[4] << 4 | digits[5],
                digits[6] << 4 | digits[7],
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    /// Format as `#rrggbb` (alpha omitted when opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

fn hex_val(c: char) -> Result<u8, ColorParseError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ColorParseError::BadDigit(c))
}

fn expand_nibble(n: u8) -> u8 {
    n << 4 | n
}
