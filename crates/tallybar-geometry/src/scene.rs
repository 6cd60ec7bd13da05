//! Retained display list handed to a presentation layer.
//!
//! A [`Scene`] is plain data: lines, rectangles and captions in pixel
//! coordinates, in paint order. Turning it into SVG, canvas calls or GPU
//! quads is up to the host.

use super::rect::Rect;
use super::style::{Stroke, TextAnchor};
use glam::DVec2;
use tallybar_core::Color;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: Stroke,
}

/// A filled, optionally outlined rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    /// Anchor point; `y` is the baseline.
    pub position: DVec2,
    pub content: String,
    pub anchor: TextAnchor,
    pub color: Color,
    pub font_size_px: f64,
}

/// One entry of a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

/// Ordered display list for a fixed-size drawing surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    size: DVec2,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene of the given surface size.
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            size: DVec2::new(width_px, height_px),
            primitives: Vec::new(),
        }
    }

    /// Surface size in pixels.
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Append a primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Append a line segment.
    pub fn line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.push(Primitive::Line(LinePrimitive { from, to, stroke }));
    }

    /// Append a rectangle.
    pub fn rect(&mut self, rect: Rect, fill: Color, stroke: Option<Stroke>) {
        self.push(Primitive::Rect(RectPrimitive { rect, fill, stroke }));
    }

    /// Append a caption.
    pub fn text(
        &mut self,
        position: DVec2,
        content: impl Into<String>,
        anchor: TextAnchor,
        color: Color,
        font_size_px: f64,
    ) {
        self.push(Primitive::Text(TextPrimitive {
            position,
            content: content.into(),
            anchor,
            color,
            font_size_px,
        }));
    }

    /// All primitives in paint order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Line segments in paint order.
    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Rectangles in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// Captions in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_keep_paint_order() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.text(DVec2::ZERO, "a", TextAnchor::Start, Color::BLACK, 12.0);
        scene.line(DVec2::ZERO, DVec2::ONE, Stroke::solid(Color::BLACK, 1.0));
        scene.text(DVec2::ONE, "b", TextAnchor::End, Color::BLACK, 12.0);

        let texts: Vec<&str> = scene.texts().map(|t| t.content.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(scene.lines().count(), 1);
        assert_eq!(scene.rects().count(), 0);
        assert_eq!(scene.len(), 3);
    }
}
