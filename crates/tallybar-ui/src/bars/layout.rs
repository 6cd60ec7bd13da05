//! Horizontal lane layout and pixel geometry of bars.
//!
//! Bars are laid out on a normalized lane of [`X_AXIS_MAX`] units, whatever
//! their values. Every bar gets an equal share of the lane; a fraction of
//! each share is given up for the gaps between bars.

use super::bar::Bar;
use glam::DVec2;
use tallybar_core::profiling::profile_scope;
use tallybar_geometry::{Diagram, Rect};

/// Extent of the horizontal lane in data units.
pub const X_AXIS_MAX: f64 = 100.0;

/// Slot arithmetic on the normalized lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLane {
    count: usize,
    gap: f64,
    bar_width: f64,
}

impl BarLane {
    /// Divide a lane of `x_max` units between `count` bars.
    ///
    /// `gap_percentage` is the fraction of each bar's nominal share used as
    /// gap. One extra gap is spread over all bars so the leading and
    /// trailing gaps match the inner ones.
    pub fn new(count: usize, x_max: f64, gap_percentage: f64) -> Self {
        if count == 0 {
            return Self {
                count,
                gap: 0.0,
                bar_width: 0.0,
            };
        }

        let n = count as f64;
        let nominal = x_max / n;
        let gap = nominal * gap_percentage;
        let bar_width = (nominal - gap - gap / n).max(0.0);

        Self {
            count,
            gap,
            bar_width,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Gap between neighbouring bars, in lane units.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Width of each bar, in lane units.
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Left edge of bar `index`, in lane units.
    pub fn left_edge(&self, index: usize) -> f64 {
        (index + 1) as f64 * self.gap + index as f64 * self.bar_width
    }
}

/// Pixel geometry of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub key: String,
    pub index: usize,
    /// The filled bar, growing up from the baseline.
    pub rect: Rect,
    /// Drag handle centred on the top edge of the bar.
    pub marker: Rect,
    /// Full-height column above the bar that tracks pointer moves.
    pub column: Rect,
}

/// Lay out `bars` inside `diagram`.
pub fn layout_bars(
    diagram: &Diagram,
    bars: &[Bar],
    gap_percentage: f64,
    marker_size_px: f64,
) -> Vec<BarGeometry> {
    profile_scope!("bars_layout");

    let lane = BarLane::new(bars.len(), X_AXIS_MAX, gap_percentage);
    let width = diagram.to_pixel_x(lane.bar_width(), 0.0) - diagram.to_pixel_x(0.0, 0.0);
    let baseline = diagram.to_pixel_y(0.0, 0.0);

    bars.iter()
        .enumerate()
        .map(|(index, bar)| {
            let x = diagram.to_pixel_x(lane.left_edge(index), 0.0);
            let y = diagram.to_pixel_y(bar.value, 0.0);

            let marker_origin = DVec2::new(
                x + width / 2.0 - marker_size_px / 2.0,
                y - marker_size_px / 2.0,
            );

            BarGeometry {
                key: bar.key.clone(),
                index,
                rect: Rect::new(x, y, width, baseline - y),
                marker: Rect::from_pos_size(marker_origin, DVec2::splat(marker_size_px)),
                column: Rect::new(x, 0.0, width, diagram.height_px()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bars::BarDefaults;
    use tallybar_geometry::{AxisRange, DiagramConfig};

    fn diagram() -> Diagram {
        // 400px wide frame over 100 lane units, 200px tall over 10 units.
        Diagram::new(DiagramConfig {
            width_px: 440.0,
            height_px: 220.0,
            x: AxisRange::new(X_AXIS_MAX, 1.0),
            y: AxisRange::new(10.0, 1.0),
            x_offset_px: 10.0,
            y_offset_px: 20.0,
        })
    }

    #[test]
    fn test_lane_slots() {
        let lane = BarLane::new(4, 100.0, 0.2);
        assert!((lane.gap() - 5.0).abs() < 1e-9);
        assert!((lane.bar_width() - 18.75).abs() < 1e-9);
        assert!((lane.left_edge(0) - 5.0).abs() < 1e-9);
        assert!((lane.left_edge(3) - 76.25).abs() < 1e-9);

        // Trailing gap equals the inner gap.
        let trailing = 100.0 - (lane.left_edge(3) + lane.bar_width());
        assert!((trailing - lane.gap()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_lane() {
        let lane = BarLane::new(0, 100.0, 0.2);
        assert_eq!(lane.bar_width(), 0.0);
        assert!(layout_bars(&diagram(), &[], 0.2, 12.0).is_empty());
    }

    #[test]
    fn test_oversized_gap_never_inverts() {
        let lane = BarLane::new(1, 100.0, 0.9);
        assert_eq!(lane.bar_width(), 0.0);
    }

    #[test]
    fn test_bar_pixels() {
        let defaults = BarDefaults::default();
        let mut bars = vec![defaults.bar("0"), defaults.bar("1")];
        bars[1].value = 5.0;

        let geometry = layout_bars(&diagram(), &bars, 0.0, 10.0);
        assert_eq!(geometry.len(), 2);

        let first = &geometry[0];
        assert_eq!(first.rect, Rect::new(20.0, 210.0, 200.0, 0.0));

        let second = &geometry[1];
        assert!((second.rect.x - 220.0).abs() < 1e-9);
        assert!((second.rect.y - 110.0).abs() < 1e-9);
        assert!((second.rect.height - 100.0).abs() < 1e-9);
        assert!((second.marker.x - 315.0).abs() < 1e-9);
        assert!((second.marker.y - 105.0).abs() < 1e-9);
        assert_eq!(second.marker.width, 10.0);
        assert_eq!(second.column.y, 0.0);
        assert_eq!(second.column.height, 220.0);
    }
}
