//! Tallybar UI - interactive chart widgets
//!
//! This crate provides:
//! - [`BarsWidget`], a bar chart whose values can be dragged in steps
//! - [`BarCollection`], the owned bar list with change listeners
//! - [`reconcile`], the pure transition from one bar source to the next
//! - [`layout_bars`], the pixel geometry of bars, markers and hit columns
//! - [`DragController`], turning pointer moves into step requests
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use tallybar_input::PointerPressedSignal;
//! use tallybar_ui::{BarsWidget, BarsWidgetConfig, PartialBar};
//!
//! let signal = PointerPressedSignal::new();
//! let config = BarsWidgetConfig::new(vec![
//!     PartialBar::new().key("a").value(3.0),
//!     PartialBar::new().key("b").value(6.0),
//! ])
//! .max(15.0)
//! .on_bar_value_changed(|key, value| println!("{key} -> {value}"));
//!
//! let mut widget = BarsWidget::new(config, Rc::new(signal.clone()));
//! widget.set_value("a", 5.0);
//!
//! let scene = widget.render();
//! assert!(!scene.is_empty());
//! ```

pub mod bars;

pub use bars::*;
