//! Data space to pixel space transform.
//!
//! A [`Diagram`] describes an "L" shaped frame: the horizontal axis runs
//! along the bottom and the vertical axis along the left side. The space
//! reserved for each axis' notation pushes the frame inward, so both
//! transforms share a single [`FrameOrigin`].
//!
//! # Coordinate Systems
//!
//! - Data space: origin at the frame corner, `x` to the right, `y` upward.
//! - Pixel space: origin at the top-left of the drawing surface, `y` downward.
//!
//! Only magnitudes are placed: a data value is mapped by its absolute value,
//! and anything beyond an axis maximum saturates at that maximum.

use super::axis::{Axis, AxisRange};
use glam::DVec2;

/// Inputs from which a [`Diagram`] is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Width of the drawing surface.
    pub width_px: f64,
    /// Height of the drawing surface.
    pub height_px: f64,
    /// Horizontal axis range.
    pub x: AxisRange,
    /// Vertical axis range.
    pub y: AxisRange,
    /// Space reserved below the plot for the horizontal axis notation.
    pub x_offset_px: f64,
    /// Space reserved left of the plot for the vertical axis notation.
    pub y_offset_px: f64,
}

/// The pixel edges of the plotting frame.
///
/// `left`/`bottom` form the origin of data space. `top` and `right` are where
/// the axis maxima land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOrigin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl FrameOrigin {
    /// Derive the frame from the surface size and both notation offsets.
    pub fn from_offsets(width_px: f64, height_px: f64, x_offset_px: f64, y_offset_px: f64) -> Self {
        Self {
            left: y_offset_px,
            right: width_px - y_offset_px,
            top: x_offset_px,
            bottom: height_px - x_offset_px,
        }
    }

    /// Horizontal pixel extent of the frame.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical pixel extent of the frame.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The pixel position of data `(0, 0)`.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.bottom)
    }
}

/// Immutable mapping between data coordinates and pixel coordinates.
///
/// Rebuild it with [`Diagram::new`] whenever any input changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagram {
    config: DiagramConfig,
    frame: FrameOrigin,
    total_steps_x: usize,
    total_steps_y: usize,
}

static_assertions::assert_impl_all!(Diagram: Send, Sync, Copy);

impl Diagram {
    /// Derive a diagram from its configuration.
    pub fn new(config: DiagramConfig) -> Self {
        let frame = FrameOrigin::from_offsets(
            config.width_px,
            config.height_px,
            config.x_offset_px,
            config.y_offset_px,
        );

        Self {
            config,
            frame,
            total_steps_x: config.x.total_steps(),
            total_steps_y: config.y.total_steps(),
        }
    }

    /// Map a horizontal data value to a pixel column.
    ///
    /// `caption_adjust_px` moves the result left; it is meant for text
    /// placement and never for geometry.
    pub fn to_pixel_x(&self, data_x: f64, caption_adjust_px: f64) -> f64 {
        let step_px = self.frame.width() / self.total_steps_x as f64;
        self.frame.left + step_px * self.config.x.steps_to(data_x) - caption_adjust_px
    }

    /// Map a vertical data value to a pixel row.
    ///
    /// `caption_adjust_px` moves the result down; like on the horizontal
    /// axis it is for text baselines only.
    pub fn to_pixel_y(&self, data_y: f64, caption_adjust_px: f64) -> f64 {
        let step_px = self.frame.height() / self.total_steps_y as f64;
        self.frame.bottom - step_px * self.config.y.steps_to(data_y) + caption_adjust_px
    }

    /// Map a data point to pixel space.
    pub fn to_pixel_xy(&self, data: DVec2, caption_adjust_px: f64) -> DVec2 {
        DVec2::new(
            self.to_pixel_x(data.x, caption_adjust_px),
            self.to_pixel_y(data.y, caption_adjust_px),
        )
    }

    /// Map a pixel column back to a horizontal data value.
    ///
    /// Columns left of the frame give negative values; no clamping happens.
    pub fn to_data_x(&self, pixel_x: f64) -> f64 {
        let step_px = self.frame.width() / self.total_steps_x as f64;
        if step_px == 0.0 {
            return 0.0;
        }
        self.config.x.value_at((pixel_x - self.frame.left) / step_px)
    }

    /// Map a pixel row back to a vertical data value.
    pub fn to_data_y(&self, pixel_y: f64) -> f64 {
        let step_px = self.frame.height() / self.total_steps_y as f64;
        if step_px == 0.0 {
            return 0.0;
        }
        self.config.y.value_at((self.frame.bottom - pixel_y) / step_px)
    }

    /// Map a pixel point back to data space.
    pub fn to_data_xy(&self, pixel: DVec2) -> DVec2 {
        DVec2::new(self.to_data_x(pixel.x), self.to_data_y(pixel.y))
    }

    /// Pixel length of one step along an axis.
    pub fn step_px(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.frame.width() / self.total_steps_x as f64,
            Axis::Y => self.frame.height() / self.total_steps_y as f64,
        }
    }

    /// The range of an axis.
    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.config.x,
            Axis::Y => self.config.y,
        }
    }

    /// Number of steps along an axis.
    pub fn total_steps(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.total_steps_x,
            Axis::Y => self.total_steps_y,
        }
    }

    pub fn frame(&self) -> FrameOrigin {
        self.frame
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn width_px(&self) -> f64 {
        self.config.width_px
    }

    pub fn height_px(&self) -> f64 {
        self.config.height_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram() -> Diagram {
        Diagram::new(DiagramConfig {
            width_px: 500.0,
            height_px: 500.0,
            x: AxisRange::new(100.0, 1.0),
            y: AxisRange::new(10.0, 1.0),
            x_offset_px: 8.0,
            y_offset_px: 32.0,
        })
    }

    #[test]
    fn test_frame_from_offsets() {
        let frame = diagram().frame();
        assert_eq!(frame.left, 32.0);
        assert_eq!(frame.right, 468.0);
        assert_eq!(frame.top, 8.0);
        assert_eq!(frame.bottom, 492.0);
        assert_eq!(frame.origin(), DVec2::new(32.0, 492.0));
    }

    #[test]
    fn test_pixel_x_uses_left_edge() {
        let d = diagram();
        assert_eq!(d.to_pixel_x(0.0, 0.0), 32.0);
        assert_eq!(d.to_pixel_x(100.0, 0.0), 468.0);
        assert!((d.to_pixel_x(50.0, 0.0) - 250.0).abs() < 1e-9);
        assert_eq!(d.to_pixel_x(50.0, 4.0), d.to_pixel_x(50.0, 0.0) - 4.0);
    }

    #[test]
    fn test_pixel_y_grows_upward() {
        let d = diagram();
        assert_eq!(d.to_pixel_y(0.0, 0.0), 492.0);
        assert_eq!(d.to_pixel_y(10.0, 0.0), 8.0);
        assert!((d.to_pixel_y(5.0, 0.0) - 250.0).abs() < 1e-9);
        assert_eq!(d.to_pixel_y(5.0, 4.0), d.to_pixel_y(5.0, 0.0) + 4.0);
    }

    #[test]
    fn test_out_of_range_saturates() {
        let d = diagram();
        assert_eq!(d.to_pixel_x(250.0, 0.0), d.to_pixel_x(100.0, 0.0));
        assert_eq!(d.to_pixel_y(11.0, 0.0), 8.0);
        assert_eq!(d.to_pixel_y(1e9, 0.0), 8.0);
    }

    #[test]
    fn test_negative_values_mirror() {
        let d = diagram();
        assert_eq!(d.to_pixel_y(-3.0, 0.0), d.to_pixel_y(3.0, 0.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let d = diagram();
        let point = DVec2::new(37.5, 6.25);
        let back = d.to_data_xy(d.to_pixel_xy(point, 0.0));
        assert!((back - point).length() < 1e-9);
    }

    #[test]
    fn test_step_px() {
        let d = diagram();
        assert!((d.step_px(Axis::Y) - 48.4).abs() < 1e-9);
        assert!((d.step_px(Axis::X) - 4.36).abs() < 1e-9);
    }
}
