//! Test utilities for Tallybar widgets.
//!
//! - [`ChangeRecorder`] collects `(key, value)` notifications from any
//!   widget or collection listener slot.
//! - [`CountingObserver`] wraps a pressed signal and counts live
//!   subscriptions, so tests can check that widgets clean up after
//!   themselves.
//! - [`pointer`] builds pointer paths for drag gestures.
//!
//! # Example
//!
//! ```rust
//! use tallybar_test_utils::ChangeRecorder;
//!
//! let recorder = ChangeRecorder::new();
//! let mut listener = recorder.listener();
//! listener("a", 5.0);
//!
//! assert_eq!(recorder.take(), vec![("a".to_string(), 5.0)]);
//! assert!(recorder.is_empty());
//! ```

mod observer;
pub mod pointer;
mod recorder;

pub use observer::CountingObserver;
pub use recorder::ChangeRecorder;
