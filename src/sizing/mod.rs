//! Sizing module
//!
//! Unit normalization, compiled-in size charts and size matching.

pub mod charts;
pub mod matcher;
pub mod units;

pub use charts::{brand, brands, lookup, tables_for, SizeTable};
pub use matcher::{find_band, match_size, recommend, Fit, Recommendation, SizeMatch};
pub use units::{format_display, normalize, to_display, to_inches, MeasurementUnit, CM_PER_INCH};
