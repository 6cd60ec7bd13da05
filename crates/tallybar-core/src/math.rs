/// Double precision vector types.
///
/// Data coordinates and pixel coordinates are both carried as `f64` so the
/// transform never loses precision when mapping back and forth.
pub use glam::{DVec2, dvec2};
