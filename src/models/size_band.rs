//! Size band model
//!
//! One row of a brand size chart: a label and inclusive ranges per dimension.

use serde::Serialize;

use super::{Dimension, Measurements};

/// Inclusive measurement range in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Distance from the value to the nearest bound, 0 when inside
    pub fn excess(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// A single size in a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeBand {
    pub label: &'static str,
    pub chest: Option<SizeRange>,
    pub waist: Option<SizeRange>,
    pub hips: Option<SizeRange>,
}

impl SizeBand {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            chest: None,
            waist: None,
            hips: None,
        }
    }

    pub const fn chest(mut self, min: f64, max: f64) -> Self {
        self.chest = Some(SizeRange::new(min, max));
        self
    }

    pub const fn waist(mut self, min: f64, max: f64) -> Self {
        self.waist = Some(SizeRange::new(min, max));
        self
    }

    pub const fn hips(mut self, min: f64, max: f64) -> Self {
        self.hips = Some(SizeRange::new(min, max));
        self
    }

    pub fn range(&self, dimension: Dimension) -> Option<SizeRange> {
        match dimension {
            Dimension::Chest => self.chest,
            Dimension::Waist => self.waist,
            Dimension::Hips => self.hips,
        }
    }

    /// Ranges this band defines, in dimension order
    pub fn ranges(&self) -> impl Iterator<Item = (Dimension, SizeRange)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(move |d| self.range(d).map(|r| (d, r)))
    }

    /// Dimensions that the band defines and the measurements supply
    pub fn usable<'a>(
        &'a self,
        measurements: &'a Measurements,
    ) -> impl Iterator<Item = (SizeRange, f64)> + 'a {
        self.ranges()
            .filter_map(move |(d, r)| measurements.get(d).map(|v| (r, v)))
    }

    /// Number of supplied measurements that fall inside this band
    pub fn score(&self, measurements: &Measurements) -> usize {
        self.usable(measurements)
            .filter(|(range, value)| range.contains(*value))
            .count()
    }

    /// Sum of range widths; narrower bands are more specific
    pub fn total_width(&self) -> f64 {
        self.ranges().map(|(_, r)| r.width()).sum()
    }

    /// Average out-of-range excess over usable dimensions, `None` if there are none
    pub fn distance(&self, measurements: &Measurements) -> Option<f64> {
        let (sum, count) = self
            .usable(measurements)
            .fold((0.0, 0usize), |(sum, count), (range, value)| {
                (sum + range.excess(value), count + 1)
            });
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    pub fn has_ranges(&self) -> bool {
        self.ranges().next().is_some()
    }
}
