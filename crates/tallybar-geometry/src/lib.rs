//! Tallybar Geometry - coordinate systems for small interactive charts
//!
//! This crate provides:
//! - [`Diagram`], an immutable transform between data space and pixel space
//! - Tick planning with notable tick selection ([`plan_ticks`])
//! - Notation geometry for both axes (tick bars, level lines, captions)
//! - [`CoordinateSystem`], which draws axes and notations into a [`Scene`]
//!   and lets callers draw their own content through the same [`Diagram`]
//!
//! # Example
//!
//! ```
//! use tallybar_geometry::*;
//!
//! let system = CoordinateSystem::new(
//!     CoordinateSystemConfig::new(400.0, 300.0)
//!         .with_x_range(AxisRange::new(10.0, 1.0))
//!         .with_y_range(AxisRange::new(5.0, 1.0)),
//! );
//!
//! let diagram = system.diagram();
//! let origin = diagram.to_pixel_xy(glam::DVec2::ZERO, 0.0);
//! let scene = system.render(|diagram, scene| {
//!     scene.line(
//!         diagram.to_pixel_xy(glam::dvec2(0.0, 0.0), 0.0),
//!         diagram.to_pixel_xy(glam::dvec2(10.0, 5.0), 0.0),
//!         Stroke::solid(tallybar_core::Color::BLACK, 1.0),
//!     );
//! });
//! assert!(!scene.is_empty());
//! # let _ = origin;
//! ```

mod axis;
mod coordinate_system;
mod diagram;
mod notation;
pub mod rect;
mod scene;
mod style;
mod ticks;

pub use axis::*;
pub use coordinate_system::*;
pub use diagram::*;
pub use notation::*;
pub use rect::Rect;
pub use scene::*;
pub use style::*;
pub use ticks::*;
