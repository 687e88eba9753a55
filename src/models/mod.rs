//! Data models
//!
//! Measurement, size chart and selector types shared by the sizing engine and tools.

mod measurement;
mod selector;
mod size_band;

pub use measurement::{Dimension, Measurements};
pub use selector::{Brand, Category, Gender, Selector};
pub use size_band::{SizeBand, SizeRange};
