//! Notation geometry: tick bars, level lines and captions.

use super::axis::Axis;
use super::diagram::Diagram;
use super::style::TextAnchor;
use super::ticks::{Tick, format_tick_value, plan_ticks};
use bitflags::bitflags;
use glam::DVec2;
use tallybar_core::Color;

/// Gap between a vertical-axis tick bar and its caption.
const Y_CAPTION_GAP_PX: f64 = 4.0;

bitflags! {
    /// Parts of the notation that are switched off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NotationFlags: u8 {
        /// No horizontal axis notation at all.
        const HIDE_X_NOTATION = 1 << 0;
        /// No vertical axis notation at all.
        const HIDE_Y_NOTATION = 1 << 1;
        /// No level lines for notable horizontal ticks.
        const HIDE_X_LEVEL_LINE = 1 << 2;
        /// No level lines for notable vertical ticks.
        const HIDE_Y_LEVEL_LINE = 1 << 3;
        /// Only notable ticks get captions.
        const HIDE_NO_NOTABLE_CAPTIONS = 1 << 4;
    }
}

impl NotationFlags {
    /// Whether the notation of `axis` is drawn.
    pub fn shows_notation(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => !self.contains(Self::HIDE_X_NOTATION),
            Axis::Y => !self.contains(Self::HIDE_Y_NOTATION),
        }
    }

    /// Whether notable ticks of `axis` get level lines.
    pub fn shows_level_line(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => !self.contains(Self::HIDE_X_LEVEL_LINE),
            Axis::Y => !self.contains(Self::HIDE_Y_LEVEL_LINE),
        }
    }
}

/// Per-axis notation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotationStyle {
    /// Length of the perpendicular tick bar.
    pub bar_width_px: f64,
    /// Ticks whose value is a multiple of this are notable.
    pub notable_step: f64,
    /// Color of level lines across the plot.
    pub level_line_color: Color,
}

impl Default for NotationStyle {
    fn default() -> Self {
        Self {
            bar_width_px: 12.0,
            notable_step: 1.0,
            level_line_color: Color::from_hex(0xCCCCCC),
        }
    }
}

/// Placement of a tick caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub position: DVec2,
    pub anchor: TextAnchor,
    pub text: String,
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickNotation {
    pub tick: Tick,
    /// Short bar across the axis line.
    pub bar: [DVec2; 2],
    /// Level line across the plot, notable ticks only.
    pub level_line: Option<[DVec2; 2]>,
    pub caption: Option<Caption>,
}

/// Compute the notation for every tick of `axis`.
///
/// Tick bars are always present. Level lines appear for notable ticks
/// unless hidden, captions for notable ticks and, unless
/// [`NotationFlags::HIDE_NO_NOTABLE_CAPTIONS`] is set, for every other tick.
pub fn notations(
    diagram: &Diagram,
    axis: Axis,
    style: &NotationStyle,
    flags: NotationFlags,
    caption_font_size_px: f64,
) -> Vec<TickNotation> {
    let range = diagram.range(axis);
    let show_level_line = flags.shows_level_line(axis);
    let show_plain_captions = !flags.contains(NotationFlags::HIDE_NO_NOTABLE_CAPTIONS);

    plan_ticks(&range, style.notable_step)
        .into_iter()
        .map(|tick| {
            // Geometry is placed by magnitude; the caption keeps the sign.
            let coord = (tick.index + 1) as f64 * range.step;
            let geometry = match axis {
                Axis::X => x_geometry(diagram, coord, style.bar_width_px, caption_font_size_px),
                Axis::Y => y_geometry(diagram, coord, style.bar_width_px, caption_font_size_px),
            };

            TickNotation {
                tick,
                bar: geometry.bar,
                level_line: (tick.notable && show_level_line).then_some(geometry.level_line),
                caption: (tick.notable || show_plain_captions).then(|| Caption {
                    position: geometry.caption,
                    anchor: geometry.anchor,
                    text: format_tick_value(tick.value),
                }),
            }
        })
        .collect()
}

struct TickGeometry {
    bar: [DVec2; 2],
    level_line: [DVec2; 2],
    caption: DVec2,
    anchor: TextAnchor,
}

fn x_geometry(diagram: &Diagram, coord: f64, bar_width_px: f64, font_size_px: f64) -> TickGeometry {
    let x = diagram.to_pixel_x(coord, 0.0);
    let baseline = diagram.to_pixel_y(0.0, 0.0);
    let top = diagram.to_pixel_y(diagram.range(Axis::Y).max, 0.0);

    TickGeometry {
        bar: [DVec2::new(x, baseline), DVec2::new(x, baseline + bar_width_px)],
        level_line: [DVec2::new(x, top), DVec2::new(x, baseline)],
        caption: DVec2::new(x, baseline + bar_width_px + font_size_px),
        anchor: TextAnchor::Middle,
    }
}

fn y_geometry(diagram: &Diagram, coord: f64, bar_width_px: f64, font_size_px: f64) -> TickGeometry {
    let y = diagram.to_pixel_y(coord, 0.0);
    let left = diagram.to_pixel_x(0.0, 0.0);
    let right = diagram.to_pixel_x(diagram.range(Axis::X).max, 0.0);

    TickGeometry {
        bar: [DVec2::new(left - bar_width_px, y), DVec2::new(left, y)],
        level_line: [DVec2::new(left, y), DVec2::new(right, y)],
        caption: DVec2::new(
            left - bar_width_px - Y_CAPTION_GAP_PX,
            diagram.to_pixel_y(coord, font_size_px / 3.0),
        ),
        anchor: TextAnchor::End,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AxisRange, DiagramConfig};

    fn diagram() -> Diagram {
        Diagram::new(DiagramConfig {
            width_px: 300.0,
            height_px: 300.0,
            x: AxisRange::new(10.0, 1.0),
            y: AxisRange::new(10.0, 2.0),
            x_offset_px: 50.0,
            y_offset_px: 50.0,
        })
    }

    fn style(notable_step: f64) -> NotationStyle {
        NotationStyle {
            notable_step,
            ..Default::default()
        }
    }

    #[test]
    fn test_y_notation_geometry() {
        let d = diagram();
        let ticks = notations(&d, Axis::Y, &style(4.0), NotationFlags::empty(), 12.0);
        assert_eq!(ticks.len(), 5);

        let first = &ticks[0];
        assert_eq!(first.tick.value, 2.0);
        assert_eq!(first.bar, [DVec2::new(38.0, 210.0), DVec2::new(50.0, 210.0)]);
        assert!(first.level_line.is_none());

        let caption = first.caption.as_ref().unwrap();
        assert_eq!(caption.anchor, TextAnchor::End);
        assert_eq!(caption.position, DVec2::new(34.0, 214.0));
        assert_eq!(caption.text, "2");

        let notable = &ticks[1];
        assert_eq!(notable.level_line, Some([DVec2::new(50.0, 170.0), DVec2::new(250.0, 170.0)]));
    }

    #[test]
    fn test_x_notation_geometry() {
        let d = diagram();
        let ticks = notations(&d, Axis::X, &style(5.0), NotationFlags::empty(), 12.0);
        assert_eq!(ticks.len(), 10);

        let fifth = &ticks[4];
        assert!(fifth.tick.notable);
        assert_eq!(fifth.bar, [DVec2::new(150.0, 250.0), DVec2::new(150.0, 262.0)]);
        assert_eq!(fifth.level_line, Some([DVec2::new(150.0, 50.0), DVec2::new(150.0, 250.0)]));
        let caption = fifth.caption.as_ref().unwrap();
        assert_eq!(caption.position, DVec2::new(150.0, 274.0));
        assert_eq!(caption.anchor, TextAnchor::Middle);
    }

    #[test]
    fn test_hidden_parts() {
        let d = diagram();
        let flags = NotationFlags::HIDE_Y_LEVEL_LINE | NotationFlags::HIDE_NO_NOTABLE_CAPTIONS;
        let ticks = notations(&d, Axis::Y, &style(4.0), flags, 12.0);

        assert!(ticks.iter().all(|t| t.level_line.is_none()));
        let captioned: Vec<f64> = ticks
            .iter()
            .filter(|t| t.caption.is_some())
            .map(|t| t.tick.value)
            .collect();
        assert_eq!(captioned, vec![4.0, 8.0]);
    }

    #[test]
    fn test_flag_queries() {
        let flags = NotationFlags::HIDE_X_NOTATION;
        assert!(!flags.shows_notation(Axis::X));
        assert!(flags.shows_notation(Axis::Y));
        assert!(flags.shows_level_line(Axis::X));
    }
}
