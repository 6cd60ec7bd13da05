//! Pointer input for Tallybar widgets.
//!
//! Widgets never install global listeners themselves. The host owns a
//! [`PointerPressedSignal`] (or any other [`PointerPressedObserver`]),
//! feeds it the pointer events it sees anywhere on the page or window, and
//! hands it to the widgets that need to know when a button is held.

mod event;
mod pressed;

pub use event::*;
pub use pressed::*;
