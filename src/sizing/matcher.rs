//! Size matching
//!
//! Picks the best band from a size table for a set of measurements.
//!
//! Bands are first scored by how many supplied measurements fall inside their
//! ranges. The highest score wins, then the narrowest band (smallest summed
//! range width), then the earliest band in the table. When no band contains
//! any measurement, the band with the smallest average distance to its ranges
//! is returned instead, so a slightly out-of-chart measurement still gets the
//! closest size.

use serde::Serialize;

use crate::models::{Measurements, Selector, SizeBand};

use super::charts;

/// How a band was chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fit {
    /// `score` measurements fell inside the band's ranges
    InRange { score: usize },
    /// No band contained a measurement; `distance` is the average excess in inches
    Nearest { distance: f64 },
}

/// The band selected for a set of measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMatch<'a> {
    pub band: &'a SizeBand,
    pub fit: Fit,
}

impl SizeMatch<'_> {
    pub fn label(&self) -> &'static str {
        self.band.label
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.fit, Fit::InRange { .. })
    }
}

/// Outcome of a lookup for one brand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    Size(SizeMatch<'static>),
    /// The selector has no table
    NoData,
    /// The table has no band with a usable dimension
    NoMatch,
}

impl Recommendation {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Recommendation::Size(m) => Some(m.label()),
            Recommendation::NoData | Recommendation::NoMatch => None,
        }
    }
}

/// Find the best band in `bands` for the measurements
pub fn find_band<'a>(bands: &'a [SizeBand], measurements: &Measurements) -> Option<SizeMatch<'a>> {
    best_scoring(bands, measurements).or_else(|| nearest(bands, measurements))
}

fn best_scoring<'a>(bands: &'a [SizeBand], measurements: &Measurements) -> Option<SizeMatch<'a>> {
    let mut best: Option<(usize, f64, &'a SizeBand)> = None;

    for band in bands {
        let score = band.score(measurements);
        if score == 0 {
            continue;
        }
        let width = band.total_width();
        let better = match best {
            None => true,
            Some((best_score, best_width, _)) => {
                score > best_score || (score == best_score && width < best_width)
            }
        };
        if better {
            best = Some((score, width, band));
        }
    }

    best.map(|(score, _, band)| SizeMatch {
        band,
        fit: Fit::InRange { score },
    })
}

fn nearest<'a>(bands: &'a [SizeBand], measurements: &Measurements) -> Option<SizeMatch<'a>> {
    let mut best: Option<(f64, &'a SizeBand)> = None;

    for band in bands {
        let Some(distance) = band.distance(measurements) else {
            continue;
        };
        if best.map_or(true, |(best_distance, _)| distance < best_distance) {
            best = Some((distance, band));
        }
    }

    let (distance, band) = best?;
    tracing::debug!(
        "No band contains the measurements; nearest is '{}' at {:.2} in",
        band.label,
        distance
    );
    Some(SizeMatch {
        band,
        fit: Fit::Nearest { distance },
    })
}

/// Recommend a size for a selector, separating "no table" from "no band"
pub fn recommend(selector: &Selector<'_>, measurements: &Measurements) -> Recommendation {
    let Some(bands) = charts::lookup(selector) else {
        tracing::debug!(
            "No size data for {}/{}/{}",
            selector.brand,
            selector.gender.as_str(),
            selector.category.as_str()
        );
        return Recommendation::NoData;
    };

    match find_band(bands, measurements) {
        Some(m) => Recommendation::Size(m),
        None => Recommendation::NoMatch,
    }
}

/// Best size label for a selector, or `None` when there is no data or no match
pub fn match_size(selector: &Selector<'_>, measurements: &Measurements) -> Option<&'static str> {
    recommend(selector, measurements).label()
}
