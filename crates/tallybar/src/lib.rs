//! Tallybar - interactive charts as display lists
//!
//! Tallybar computes everything a small interactive chart needs and leaves
//! the drawing to the host:
//!
//! - **Coordinate systems**: data to pixel transforms, ticks and notation
//! - **Scenes**: ordered lines, rectangles and captions in pixel space
//! - **Bars widget**: bars whose values are edited by dragging in steps
//! - **Input**: a pressed-state signal the widgets subscribe to
//!
//! # Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use tallybar::prelude::*;
//!
//! let pressed = PointerPressedSignal::new();
//! let mut widget = BarsWidget::new(
//!     BarsWidgetConfig::new(4).max(15.0).step(1.0),
//!     Rc::new(pressed.clone()),
//! );
//!
//! let marker = widget.bar_geometry()[0].marker.center();
//! let step_px = widget.diagram().step_px(Axis::Y);
//!
//! for event in [
//!     PointerEvent::Pressed(marker),
//!     PointerEvent::Moved(marker - DVec2::new(0.0, step_px)),
//!     PointerEvent::Released(marker),
//! ] {
//!     pressed.handle_event(&event);
//!     widget.handle_pointer_event(event);
//! }
//!
//! assert_eq!(widget.value("0"), Some(1.0));
//! let scene = widget.render();
//! assert!(scene.rects().count() >= 4);
//! ```

// Re-export core types
pub use tallybar_core as core;
pub use tallybar_core::math;
pub use tallybar_core::{Color, ParseColorError};

pub use tallybar_geometry as geometry;
pub use tallybar_geometry::{
    Axis, AxisRange, CoordinateSystem, CoordinateSystemConfig, Diagram, DiagramConfig, Scene,
};

// Re-export sub-crates based on features
#[cfg(feature = "input")]
pub use tallybar_input as input;
#[cfg(feature = "input")]
pub use tallybar_input::{PointerEvent, PointerPressedObserver, PointerPressedSignal, Subscription};

#[cfg(feature = "ui")]
pub use tallybar_ui as ui;
#[cfg(feature = "ui")]
pub use tallybar_ui::{BarsWidget, BarsWidgetConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tallybar_core::Color;
    pub use tallybar_core::math::{DVec2, dvec2};

    pub use tallybar_geometry::{
        Axis, AxisRange, AxisStyle, CoordinateSystem, CoordinateSystemConfig, Diagram,
        NotationFlags, NotationStyle, Primitive, Rect, Scene, Stroke, TextAnchor,
    };

    #[cfg(feature = "input")]
    pub use tallybar_input::{
        PointerEvent, PointerPressedObserver, PointerPressedSignal, Subscription,
    };

    #[cfg(feature = "ui")]
    pub use tallybar_ui::{
        Bar, BarDefaults, BarsSource, BarsWidget, BarsWidgetConfig, DragLevelLineStyle,
        ListenerId, MarkerStyle, PartialBar,
    };
}
