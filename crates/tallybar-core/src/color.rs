use std::fmt;
use std::str::FromStr;

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Colors can be constructed from floats, `u8` values, hex codes or CSS
/// hex strings:
///
/// ```
/// use tallybar_core::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let from_hex = Color::from_hex(0x3498DB);
/// let from_css: Color = "#3498DB".parse().unwrap();
/// assert_eq!(from_hex, from_css);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

static_assertions::assert_impl_all!(Color: Send, Sync, Copy);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from 8-bit RGB values with full opacity.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0x3498DB`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb_u8(r, g, b)
    }

    /// Create a color from a 32-bit RGBA hex value (e.g. `0x3498DB80`).
    pub fn from_hex_alpha(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as u8;
        let g = ((hex >> 16) & 0xFF) as u8;
        let b = ((hex >> 8) & 0xFF) as u8;
        let a = (hex & 0xFF) as u8;
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Format as a CSS hex string, `#rrggbb` or `#rrggbbaa` when translucent.
    pub fn to_css_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba_u8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Convert to 8-bit `[r, g, b, a]`.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Convert to an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error returned when a CSS hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string did not start with `#`.
    MissingHash(String),
    /// The number of hex digits was not 3, 4, 6 or 8.
    InvalidLength(usize),
    /// A character was not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash(s) => write!(f, "Color must start with '#': {}", s),
            ParseColorError::InvalidLength(len) => {
                write!(f, "Color must have 3, 4, 6 or 8 hex digits, got {}", len)
            }
            ParseColorError::InvalidDigit(c) => write!(f, "Invalid hex digit in color: {}", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        // Short forms repeat each digit: "#abc" == "#aabbcc".
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| ParseColorError::InvalidLength(expanded.len()))?;

        Ok(if expanded.len() == 8 {
            Self::from_hex_alpha(value)
        } else {
            Self::from_hex(value)
        })
    }
}
