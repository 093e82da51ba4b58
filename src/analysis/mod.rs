//! Derived checks over collected reports.

pub mod thresholds;

pub use thresholds::{evaluate_thresholds, ThresholdRule};
