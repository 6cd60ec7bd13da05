//! Configuration of the bars widget.

use super::bar::{BarDefaults, BarsSource};
use super::collection::ValueListener;
use super::drag::DEFAULT_DRAG_STEP_RATIO;
use std::fmt;
use tallybar_core::Color;
use tallybar_geometry::AxisStyle;

/// Styling of the drag handle drawn on top of every bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Edge length of the square marker.
    pub size_px: f64,
    pub color: Color,
    pub border_color: Color,
    pub border_thickness: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size_px: 12.0,
            color: Color::WHITE,
            border_color: Color::BLACK,
            border_thickness: 1.0,
        }
    }
}

/// Styling of the dashed line shown at the dragged bar's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLevelLineStyle {
    pub hidden: bool,
    pub color: Color,
    pub caption_font_size_px: f64,
    pub caption_color: Color,
    /// Distance between the end of the line and its caption.
    pub caption_offset_px: f64,
}

impl Default for DragLevelLineStyle {
    fn default() -> Self {
        Self {
            hidden: false,
            color: Color::BLACK,
            caption_font_size_px: 12.0,
            caption_color: Color::BLACK,
            caption_offset_px: 6.0,
        }
    }
}

/// A value corrected while sanitizing a [`BarsWidgetConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAdjustment {
    /// Axis maximum below 1, raised to 1.
    MaxBelowOne { given: f64 },

    /// Step was negative or not finite.
    InvalidStep { given: f64, used: f64 },

    /// Gap percentage outside `[0, 1]`.
    GapOutOfRange { given: f64, used: f64 },

    /// Drag distance ratio was negative or not finite.
    InvalidDragRatio { given: f64 },

    /// Surface width or height below one pixel.
    SurfaceTooSmall { width_px: f64, height_px: f64 },
}

impl fmt::Display for ConfigAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAdjustment::MaxBelowOne { given } => {
                write!(f, "max {} is below 1, using 1", given)
            }
            ConfigAdjustment::InvalidStep { given, used } => {
                write!(f, "invalid step {}, using {}", given, used)
            }
            ConfigAdjustment::GapOutOfRange { given, used } => {
                write!(f, "bar gap percentage {} out of range, using {}", given, used)
            }
            ConfigAdjustment::InvalidDragRatio { given } => write!(
                f,
                "invalid drag distance ratio {}, using {}",
                given, DEFAULT_DRAG_STEP_RATIO
            ),
            ConfigAdjustment::SurfaceTooSmall {
                width_px,
                height_px,
            } => write!(
                f,
                "surface {}x{} is smaller than 1x1 pixel",
                width_px, height_px
            ),
        }
    }
}

impl std::error::Error for ConfigAdjustment {}

/// Everything a [`BarsWidget`](super::BarsWidget) is built from.
pub struct BarsWidgetConfig {
    /// A bar count (uncontrolled) or an explicit list (controlled).
    pub bars: BarsSource,
    pub defaults: BarDefaults,
    /// Fraction of each bar's share of the lane used as gap.
    pub bar_gap_percentage: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub read_only: bool,
    pub max: f64,
    pub step: f64,
    pub notable_step: f64,
    pub show_no_notable_captions: bool,
    pub level_line_color: Color,
    /// Space left of the plot reserved for the value notation.
    pub notation_offset_px: f64,
    pub notation_bar_width_px: f64,
    pub axis_style: AxisStyle,
    pub marker: MarkerStyle,
    pub drag_level_line: DragLevelLineStyle,
    /// Share of one step's pixel height a drag must cover to change a value.
    pub drag_distance_step_percentage: f64,
    pub on_bar_value_changed: Option<ValueListener>,
}

impl Default for BarsWidgetConfig {
    fn default() -> Self {
        Self {
            bars: BarsSource::default(),
            defaults: BarDefaults::default(),
            bar_gap_percentage: 0.2,
            width_px: 500.0,
            height_px: 500.0,
            read_only: false,
            max: 10.0,
            step: 1.0,
            notable_step: 1.0,
            show_no_notable_captions: false,
            level_line_color: Color::from_hex(0xCCCCCC),
            notation_offset_px: 32.0,
            notation_bar_width_px: 12.0,
            axis_style: AxisStyle::default(),
            marker: MarkerStyle::default(),
            drag_level_line: DragLevelLineStyle::default(),
            drag_distance_step_percentage: DEFAULT_DRAG_STEP_RATIO,
            on_bar_value_changed: None,
        }
    }
}

impl BarsWidgetConfig {
    pub fn new(bars: impl Into<BarsSource>) -> Self {
        Self {
            bars: bars.into(),
            ..Default::default()
        }
    }

    pub fn bars(mut self, bars: impl Into<BarsSource>) -> Self {
        self.bars = bars.into();
        self
    }

    pub fn defaults(mut self, defaults: BarDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.defaults.value = value;
        self
    }

    pub fn default_color(mut self, color: Color) -> Self {
        self.defaults.color = color;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn notable_step(mut self, notable_step: f64) -> Self {
        self.notable_step = notable_step;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn show_no_notable_captions(mut self, show: bool) -> Self {
        self.show_no_notable_captions = show;
        self
    }

    pub fn with_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.width_px = width_px;
        self.height_px = height_px;
        self
    }

    pub fn with_gap_percentage(mut self, gap: f64) -> Self {
        self.bar_gap_percentage = gap;
        self
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_drag_level_line(mut self, style: DragLevelLineStyle) -> Self {
        self.drag_level_line = style;
        self
    }

    pub fn with_drag_distance_ratio(mut self, ratio: f64) -> Self {
        self.drag_distance_step_percentage = ratio;
        self
    }

    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    pub fn on_bar_value_changed(mut self, listener: impl FnMut(&str, f64) + 'static) -> Self {
        self.on_bar_value_changed = Some(Box::new(listener));
        self
    }

    /// Correct out-of-range values, returning what was changed.
    ///
    /// Every correction is also logged as a warning.
    pub fn sanitize(mut self) -> (Self, Vec<ConfigAdjustment>) {
        let mut adjustments = Vec::new();

        if self.max.is_nan() || self.max < 1.0 {
            adjustments.push(ConfigAdjustment::MaxBelowOne { given: self.max });
            self.max = 1.0;
        }

        if !self.step.is_finite() || self.step < 0.0 {
            let used = if self.step.is_finite() { self.step.abs() } else { 1.0 };
            adjustments.push(ConfigAdjustment::InvalidStep {
                given: self.step,
                used,
            });
            self.step = used;
        }

        if !(0.0..=1.0).contains(&self.bar_gap_percentage) {
            let used = if self.bar_gap_percentage.is_nan() {
                0.0
            } else {
                self.bar_gap_percentage.clamp(0.0, 1.0)
            };
            adjustments.push(ConfigAdjustment::GapOutOfRange {
                given: self.bar_gap_percentage,
                used,
            });
            self.bar_gap_percentage = used;
        }

        let ratio = self.drag_distance_step_percentage;
        if !ratio.is_finite() || ratio < 0.0 {
            adjustments.push(ConfigAdjustment::InvalidDragRatio { given: ratio });
            self.drag_distance_step_percentage = DEFAULT_DRAG_STEP_RATIO;
        }

        let too_small = |px: f64| px.is_nan() || px < 1.0;
        if too_small(self.width_px) || too_small(self.height_px) {
            adjustments.push(ConfigAdjustment::SurfaceTooSmall {
                width_px: self.width_px,
                height_px: self.height_px,
            });
            if too_small(self.width_px) {
                self.width_px = 1.0;
            }
            if too_small(self.height_px) {
                self.height_px = 1.0;
            }
        }

        for adjustment in &adjustments {
            tracing::warn!("{}", adjustment);
        }

        (self, adjustments)
    }
}

impl fmt::Debug for BarsWidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarsWidgetConfig")
            .field("bars", &self.bars)
            .field("defaults", &self.defaults)
            .field("bar_gap_percentage", &self.bar_gap_percentage)
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .field("read_only", &self.read_only)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("notable_step", &self.notable_step)
            .field("show_no_notable_captions", &self.show_no_notable_captions)
            .field("marker", &self.marker)
            .field("drag_level_line", &self.drag_level_line)
            .field(
                "drag_distance_step_percentage",
                &self.drag_distance_step_percentage,
            )
            .field("on_bar_value_changed", &self.on_bar_value_changed.is_some())
            .finish_non_exhaustive()
    }
}
