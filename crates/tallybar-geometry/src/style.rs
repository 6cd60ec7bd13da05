//! Styling types shared by axes, notations and caller content.

use tallybar_core::Color;

/// Dash pattern for strokes.
///
/// Alternating on/off lengths in pixels; empty means a solid line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashPattern {
    pub segments: Vec<f64>,
}

impl DashPattern {
    /// Solid line (no dashes).
    pub const SOLID: DashPattern = DashPattern {
        segments: Vec::new(),
    };

    /// Equal dash and gap of `length` pixels.
    pub fn uniform(length: f64) -> Self {
        Self {
            segments: vec![length, length],
        }
    }

    /// Create a dashed line pattern.
    pub fn dashed(dash: f64, gap: f64) -> Self {
        Self {
            segments: vec![dash, gap],
        }
    }

    /// Whether this pattern draws a continuous line.
    pub fn is_solid(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Stroke used for lines and rectangle outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Thickness in pixels.
    pub width: f64,
    pub dash: DashPattern,
}

impl Stroke {
    /// A solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: DashPattern::SOLID,
        }
    }

    /// Replace the dash pattern.
    pub fn dashed(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }
}

/// Horizontal alignment of a caption relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Axis line styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    /// Color of axis lines and tick bars.
    pub color: Color,
    /// Axis line thickness in pixels.
    pub thickness: f64,
    /// Color of tick captions.
    pub caption_color: Color,
    /// Tick caption font size in pixels.
    pub caption_font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: 2.0,
            caption_color: Color::BLACK,
            caption_font_size_px: 12.0,
        }
    }
}
