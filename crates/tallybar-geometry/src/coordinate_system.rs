//! A fixed-size coordinate system with axes and notation.

use super::axis::{Axis, AxisRange};
use super::diagram::{Diagram, DiagramConfig};
use super::notation::{NotationFlags, NotationStyle, TickNotation, notations};
use super::scene::Scene;
use super::style::{AxisStyle, Stroke};
use super::ticks::{Tick, plan_ticks};
use glam::DVec2;
use tallybar_core::Color;
use tallybar_core::profiling::profile_scope;

/// Smallest space kept between the surface edge and an axis line.
pub const MIN_NOTATION_OFFSET_PX: f64 = 8.0;

/// Configuration of a [`CoordinateSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystemConfig {
    pub width_px: f64,
    pub height_px: f64,
    /// Horizontal axis range.
    pub x: AxisRange,
    /// Vertical axis range.
    pub y: AxisRange,
    /// Horizontal notation settings.
    pub x_notation: NotationStyle,
    /// Vertical notation settings.
    pub y_notation: NotationStyle,
    /// Space reserved below the plot for the horizontal notation.
    pub x_notation_offset_px: f64,
    /// Space reserved left of the plot for the vertical notation.
    pub y_notation_offset_px: f64,
    pub flags: NotationFlags,
    pub axis_style: AxisStyle,
}

impl CoordinateSystemConfig {
    /// Create a configuration for a surface of the given size.
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
            x: AxisRange::default(),
            y: AxisRange::default(),
            x_notation: NotationStyle::default(),
            y_notation: NotationStyle::default(),
            x_notation_offset_px: 36.0,
            y_notation_offset_px: 36.0,
            flags: NotationFlags::empty(),
            axis_style: AxisStyle::default(),
        }
    }

    pub fn with_x_range(mut self, range: AxisRange) -> Self {
        self.x = range;
        self
    }

    pub fn with_y_range(mut self, range: AxisRange) -> Self {
        self.y = range;
        self
    }

    pub fn with_x_notation(mut self, style: NotationStyle) -> Self {
        self.x_notation = style;
        self
    }

    pub fn with_y_notation(mut self, style: NotationStyle) -> Self {
        self.y_notation = style;
        self
    }

    /// Set both notation offsets.
    pub fn with_notation_offsets(mut self, x_offset_px: f64, y_offset_px: f64) -> Self {
        self.x_notation_offset_px = x_offset_px;
        self.y_notation_offset_px = y_offset_px;
        self
    }

    pub fn with_flags(mut self, flags: NotationFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    /// The offset actually reserved for an axis' notation.
    ///
    /// Hidden notations and offsets below [`MIN_NOTATION_OFFSET_PX`] fall
    /// back to the minimum.
    pub fn effective_offset(&self, axis: Axis) -> f64 {
        let requested = match axis {
            Axis::X => self.x_notation_offset_px,
            Axis::Y => self.y_notation_offset_px,
        };

        if requested < MIN_NOTATION_OFFSET_PX || !self.flags.shows_notation(axis) {
            MIN_NOTATION_OFFSET_PX
        } else {
            requested
        }
    }

    fn notation_style(&self, axis: Axis) -> &NotationStyle {
        match axis {
            Axis::X => &self.x_notation,
            Axis::Y => &self.y_notation,
        }
    }
}

/// Axes plus notation over a [`Diagram`].
#[derive(Debug, Clone)]
pub struct CoordinateSystem {
    config: CoordinateSystemConfig,
    diagram: Diagram,
}

impl CoordinateSystem {
    /// Build a coordinate system and derive its diagram.
    pub fn new(config: CoordinateSystemConfig) -> Self {
        let diagram = Diagram::new(DiagramConfig {
            width_px: config.width_px,
            height_px: config.height_px,
            x: config.x,
            y: config.y,
            x_offset_px: config.effective_offset(Axis::X),
            y_offset_px: config.effective_offset(Axis::Y),
        });

        tracing::trace!(
            width = config.width_px,
            height = config.height_px,
            "coordinate system built: {:?}",
            diagram.frame()
        );

        Self { config, diagram }
    }

    pub fn config(&self) -> &CoordinateSystemConfig {
        &self.config
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Ticks of `axis` with their notable flag.
    pub fn ticks(&self, axis: Axis) -> Vec<Tick> {
        plan_ticks(&self.diagram.range(axis), self.config.notation_style(axis).notable_step)
    }

    /// Notation geometry of `axis`, empty when that notation is hidden.
    pub fn notations(&self, axis: Axis) -> Vec<TickNotation> {
        if !self.config.flags.shows_notation(axis) {
            return Vec::new();
        }

        notations(
            &self.diagram,
            axis,
            self.config.notation_style(axis),
            self.config.flags,
            self.config.axis_style.caption_font_size_px,
        )
    }

    /// The two axis lines, horizontal first.
    ///
    /// The vertical line overshoots the bottom by one pixel so the corner
    /// joins cleanly with thick strokes.
    pub fn axis_lines(&self) -> [[DVec2; 2]; 2] {
        let frame = self.diagram.frame();
        [
            [
                DVec2::new(frame.left, frame.bottom),
                DVec2::new(frame.right, frame.bottom),
            ],
            [
                DVec2::new(frame.left, frame.top),
                DVec2::new(frame.left, frame.bottom + 1.0),
            ],
        ]
    }

    /// Draw axes and notation, then let `content` draw on top.
    pub fn render(&self, content: impl FnOnce(&Diagram, &mut Scene)) -> Scene {
        profile_scope!("coordinate_system_render");

        let mut scene = Scene::new(self.config.width_px, self.config.height_px);
        self.draw_into(&mut scene);
        content(&self.diagram, &mut scene);
        scene
    }

    /// Draw axes and notation into an existing scene.
    pub fn draw_into(&self, scene: &mut Scene) {
        let style = &self.config.axis_style;
        let axis_stroke = Stroke::solid(style.color, style.thickness);

        for [from, to] in self.axis_lines() {
            scene.line(from, to, axis_stroke.clone());
        }

        for axis in [Axis::X, Axis::Y] {
            let level_line_color = self.config.notation_style(axis).level_line_color;
            for notation in self.notations(axis) {
                self.draw_notation(scene, &notation, level_line_color);
            }
        }
    }

    fn draw_notation(&self, scene: &mut Scene, notation: &TickNotation, level_line_color: Color) {
        let style = &self.config.axis_style;

        let [from, to] = notation.bar;
        scene.line(from, to, Stroke::solid(style.color, 1.0));

        if let Some([from, to]) = notation.level_line {
            scene.line(from, to, Stroke::solid(level_line_color, 1.0));
        }

        if let Some(caption) = &notation.caption {
            scene.text(
                caption.position,
                caption.text.clone(),
                caption.anchor,
                style.caption_color,
                style.caption_font_size_px,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_minimum_and_hidden_notation() {
        let config = CoordinateSystemConfig::new(200.0, 200.0)
            .with_notation_offsets(4.0, 40.0)
            .with_flags(NotationFlags::HIDE_Y_NOTATION);

        assert_eq!(config.effective_offset(Axis::X), MIN_NOTATION_OFFSET_PX);
        assert_eq!(config.effective_offset(Axis::Y), MIN_NOTATION_OFFSET_PX);

        let config = config.with_flags(NotationFlags::empty());
        assert_eq!(config.effective_offset(Axis::Y), 40.0);
    }

    #[test]
    fn test_axis_lines_follow_frame() {
        let system = CoordinateSystem::new(
            CoordinateSystemConfig::new(200.0, 100.0).with_notation_offsets(20.0, 30.0),
        );
        let [horizontal, vertical] = system.axis_lines();
        assert_eq!(horizontal, [DVec2::new(30.0, 80.0), DVec2::new(170.0, 80.0)]);
        assert_eq!(vertical, [DVec2::new(30.0, 20.0), DVec2::new(30.0, 81.0)]);
    }

    #[test]
    fn test_render_draws_content_last() {
        let system = CoordinateSystem::new(
            CoordinateSystemConfig::new(200.0, 200.0)
                .with_x_range(AxisRange::new(2.0, 1.0))
                .with_y_range(AxisRange::new(3.0, 1.0)),
        );

        let scene = system.render(|diagram, scene| {
            scene.rect(
                crate::Rect::new(diagram.to_pixel_x(0.0, 0.0), 0.0, 10.0, 10.0),
                Color::WHITE,
                None,
            );
        });

        // 2 axes, 2 + 3 tick bars, 5 level lines, 5 captions, 1 rect.
        assert_eq!(scene.lines().count(), 12);
        assert_eq!(scene.texts().count(), 5);
        assert!(matches!(scene.primitives().last(), Some(crate::Primitive::Rect(_))));
    }
}
