//! Axis ranges and step arithmetic.

/// Which axis of the frame a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis, drawn along the bottom of the frame.
    X,
    /// Vertical axis, drawn along the left of the frame.
    Y,
}

/// Extent of one axis in data units, divided into equal steps.
///
/// The axis always starts at zero; `max` is the far end and `step` the
/// distance between two ticks. A `step` of zero is tolerated and yields a
/// single step spanning the whole axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Far end of the axis in data units.
    pub max: f64,
    /// Distance between two ticks in data units.
    pub step: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            max: 10.0,
            step: 1.0,
        }
    }
}

impl AxisRange {
    /// Create a range from `0` to `max` in increments of `step`.
    pub fn new(max: f64, step: f64) -> Self {
        Self { max, step }
    }

    /// Number of steps that fit on the axis, never less than one.
    pub fn total_steps(&self) -> usize {
        if self.step == 0.0 {
            return 1;
        }

        let steps = (self.max / self.step).floor().abs();
        if steps.is_finite() && steps >= 1.0 {
            steps as usize
        } else {
            1
        }
    }

    /// Clamp a value's magnitude to the axis extent.
    ///
    /// Only the magnitude matters for placement; values beyond `max`
    /// saturate at `max`.
    pub fn saturate(&self, value: f64) -> f64 {
        value.abs().min(self.max.abs())
    }

    /// Position of a value along the axis, measured in steps from zero.
    ///
    /// The result lies in `[0, max / step]`.
    pub fn steps_to(&self, value: f64) -> f64 {
        let magnitude = self.saturate(value);

        if self.step == 0.0 {
            let limit = self.max.abs();
            return if limit == 0.0 { 0.0 } else { magnitude / limit };
        }

        (magnitude / self.step).abs()
    }

    /// Inverse of [`steps_to`](Self::steps_to) for in-range positions.
    pub fn value_at(&self, steps: f64) -> f64 {
        if self.step == 0.0 {
            steps * self.max.abs()
        } else {
            steps * self.step.abs()
        }
    }

    /// Direction of the axis: `-1.0` for a negative `max`, `1.0` otherwise.
    pub fn direction(&self) -> f64 {
        if self.max < 0.0 { -1.0 } else { 1.0 }
    }
}
