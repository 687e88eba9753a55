//! Sizewise Library
//!
//! Clothing size recommendation from body measurements across brand size charts.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod sizing;
pub mod tools;
