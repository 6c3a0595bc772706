//! Transcript normalization and local keyword scoring.
//!
//! The deterministic, offline tier of command resolution: canonicalize the
//! transcript, count trigger-token hits per category, accept when the
//! combined confidence clears the fixed threshold.

pub mod normalize;
pub mod scorer;
pub mod tables;

pub use normalize::normalize;
pub use scorer::{score_local, CONFIDENCE_THRESHOLD};
