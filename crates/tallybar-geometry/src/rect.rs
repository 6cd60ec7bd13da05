//! Rectangles in surface pixels.

use glam::DVec2;

/// Axis-aligned pixel rectangle; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle with its top-left corner at `origin`.
    pub fn from_pos_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Hit test with edges counting as inside.
    pub fn contains(&self, point: DVec2) -> bool {
        (self.x..=self.x + self.width).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(rect.contains(DVec2::new(10.0, 10.0)));
        assert!(rect.contains(DVec2::new(30.0, 15.0)));
        assert!(!rect.contains(DVec2::new(30.1, 12.0)));
        assert_eq!(rect.center(), DVec2::new(20.0, 12.5));
    }

    #[test]
    fn test_from_pos_size() {
        let rect = Rect::from_pos_size(DVec2::new(4.0, 6.0), DVec2::splat(12.0));
        assert_eq!(rect, Rect::new(4.0, 6.0, 12.0, 12.0));
        assert_eq!(rect.center(), DVec2::new(10.0, 12.0));
    }
}
