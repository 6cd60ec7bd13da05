//! Tallybar Core
//!
//! Shared building blocks for the Tallybar crates: logging setup, profiling
//! scopes, colors and the hash collections used for key lookups.

pub mod alloc;
pub mod color;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::{Color, ParseColorError};
