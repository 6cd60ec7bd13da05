//! Tick planning.

use super::axis::AxisRange;

/// Most ticks planned for one axis; longer axes are cut off at this many.
pub const MAX_PLANNED_TICKS: usize = 10_000;

/// A single tick on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Zero-based position of the tick, the first tick is one step from zero.
    pub index: usize,
    /// Signed data value the tick stands for.
    pub value: f64,
    /// Notable ticks get level lines and always show their caption.
    pub notable: bool,
}

/// Plan the ticks of an axis.
///
/// One tick per step, at `step * (index + 1)` in the direction of `max`.
/// A tick is notable when its value is an exact multiple of
/// `notable_step`, judged with the truncated remainder `%`. A
/// `notable_step` of zero makes no tick notable.
///
/// At most [`MAX_PLANNED_TICKS`] ticks are planned; an axis with more steps
/// logs a warning and keeps the ticks closest to zero.
pub fn plan_ticks(range: &AxisRange, notable_step: f64) -> Vec<Tick> {
    let direction = range.direction();

    let total_steps = range.total_steps();
    if total_steps > MAX_PLANNED_TICKS {
        tracing::warn!(
            max = range.max,
            step = range.step,
            total_steps,
            "axis has too many steps, planning only the first {}",
            MAX_PLANNED_TICKS
        );
    }

    (0..total_steps.min(MAX_PLANNED_TICKS))
        .map(|index| {
            let value = range.step * (index + 1) as f64 * direction;
            Tick {
                index,
                value,
                notable: is_notable(value, notable_step),
            }
        })
        .collect()
}

/// Whether `value` is an exact multiple of `notable_step`.
pub fn is_notable(value: f64, notable_step: f64) -> bool {
    value % notable_step == 0.0
}

/// Format a tick value for its caption.
///
/// Integral values print without a fractional part.
pub fn format_tick_value(value: f64) -> String {
    format!("{}", value)
}
