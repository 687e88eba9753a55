//! Sizewise Tools module
//!
//! MCP tool implementations: size conversion, chart browsing and status.

pub mod charts;
pub mod convert;
pub mod status;

pub use convert::ConvertError;
