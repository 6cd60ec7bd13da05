//! Collection types used across Tallybar.
//!
//! Bar keys are looked up on every reconcile and every drag step, so the
//! maps use AHash instead of SipHash.

pub use ahash::AHashMap as HashMap;
