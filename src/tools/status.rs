//! Sizewise Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::sizing::charts::{BRANDS, SIZE_TABLES};

/// Size conversion instructions for AI assistants
pub const SIZING_INSTRUCTIONS: &str = r#"
# Sizewise Size Conversion Instructions

This guide explains how to recommend clothing sizes with the Sizewise tools.

## Overview

To recommend a size you need:
1. **Gender** - `men` or `women`
2. **Category** - women: `tops`, `pants`, `dresses`; men: `tops`, `pants`, `jackets`
3. **Unit** - `in` or `cm` (all charts are stored in inches; cm input is divided by 2.54)
4. **Measurements** - chest/bust, waist and hips as numbers
5. **Brands** - one or more brand keys from `list_brands` (`hm`, `zara`)

## Required Measurements

| Category | Needs at least one of |
|----------|-----------------------|
| tops     | chest, waist          |
| dresses  | chest, waist          |
| pants    | waist                 |
| jackets  | waist                 |

Blank, zero or non-numeric values count as "not provided". Give every measurement
you have: more measurements make the match more specific.

## Reading Results

Each brand gets one result:

- `outcome: "match"` with `fit.kind: "in_range"` - the measurements fall inside the size's chart ranges
- `outcome: "match"` with `fit.kind: "nearest"` - nothing fit exactly; this is the closest size.
  `fit.distance` is the average gap in inches. Tell the user it is the closest size.
- `outcome: "no_data"` - the brand has no chart for this gender and category
- `outcome: "no_match"` - the chart does not use any of the supplied measurements
  (e.g. only hips given for a chest-only chart)

`measurements_used` echoes the normalized measurements back in the requested unit.

## How Sizes Are Chosen

1. Each size scores one point per measurement inside its range (bounds inclusive)
2. Highest score wins; ties go to the size with narrower ranges, then the first listed size
3. If no size scores, the size with the smallest average distance outside its ranges wins

## Browsing Charts

- `list_brands` - brands and the gender/category charts each has
- `get_size_chart` - one chart with ranges converted to `in` or `cm`
"#;

/// Runtime status of the Sizewise service
#[derive(Debug, Clone, Serialize)]
pub struct SizewiseStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Chart information
    pub brand_count: usize,
    pub size_table_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> SizewiseStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SizewiseStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            brand_count: BRANDS.len(),
            size_table_count: SIZE_TABLES.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
