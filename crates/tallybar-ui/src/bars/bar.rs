//! Bar records and the sources they are generated from.

use tallybar_core::Color;

/// A fully specified bar.
///
/// `key` identifies the bar for its whole lifetime; it is assigned when the
/// bar is created and never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub key: String,
    pub value: f64,
    pub color: Color,
    pub border_color: Color,
    /// Border thickness in pixels.
    pub border_thickness: f64,
}

/// Values used for any field a bar descriptor leaves out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarDefaults {
    pub value: f64,
    pub color: Color,
    pub border_color: Color,
    pub border_thickness: f64,
}

impl Default for BarDefaults {
    fn default() -> Self {
        Self {
            value: 0.0,
            color: Color::from_hex(0x3498DB),
            border_color: Color::BLACK,
            border_thickness: 1.0,
        }
    }
}

impl BarDefaults {
    /// A bar with every field defaulted.
    pub fn bar(&self, key: impl Into<String>) -> Bar {
        Bar {
            key: key.into(),
            value: self.value,
            color: self.color,
            border_color: self.border_color,
            border_thickness: self.border_thickness,
        }
    }
}

/// A bar descriptor supplied by the caller; missing fields get defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialBar {
    pub key: Option<String>,
    pub value: Option<f64>,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_thickness: Option<f64>,
}

impl PartialBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_thickness(mut self, thickness: f64) -> Self {
        self.border_thickness = Some(thickness);
        self
    }

    /// Merge over `defaults`; a missing key becomes the position `index`.
    pub fn resolve(&self, index: usize, defaults: &BarDefaults) -> Bar {
        Bar {
            key: self.key.clone().unwrap_or_else(|| index.to_string()),
            value: self.value.unwrap_or(defaults.value),
            color: self.color.unwrap_or(defaults.color),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            border_thickness: self.border_thickness.unwrap_or(defaults.border_thickness),
        }
    }
}

impl From<Bar> for PartialBar {
    fn from(bar: Bar) -> Self {
        Self {
            key: Some(bar.key),
            value: Some(bar.value),
            color: Some(bar.color),
            border_color: Some(bar.border_color),
            border_thickness: Some(bar.border_thickness),
        }
    }
}

/// Where the bars come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BarsSource {
    /// Uncontrolled: this many bars, values owned by the widget.
    Count(usize),
    /// Controlled: the caller's descriptors are authoritative, by position.
    List(Vec<PartialBar>),
}

impl BarsSource {
    /// Generate a fresh bar list, ignoring any previous state.
    pub fn generate(&self, defaults: &BarDefaults) -> Vec<Bar> {
        match self {
            Self::Count(count) => (0..*count).map(|i| defaults.bar(i.to_string())).collect(),
            Self::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| item.resolve(i, defaults))
                .collect(),
        }
    }

    /// The count, for uncontrolled sources.
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(*count),
            Self::List(_) => None,
        }
    }

    /// Number of bars this source describes.
    pub fn len(&self) -> usize {
        match self {
            Self::Count(count) => *count,
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BarsSource {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl From<usize> for BarsSource {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Vec<PartialBar>> for BarsSource {
    fn from(items: Vec<PartialBar>) -> Self {
        Self::List(items)
    }
}
