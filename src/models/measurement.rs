//! Measurement model
//!
//! Body measurements in canonical inches, one optional value per dimension.

use serde::{Deserialize, Serialize};

use super::Gender;

/// A measured body dimension
///
/// Chest and bust are the same dimension; charts for women label it "Bust".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Chest,
    Waist,
    Hips,
}

impl Dimension {
    /// All dimensions in matching order
    pub const ALL: [Dimension; 3] = [Dimension::Chest, Dimension::Waist, Dimension::Hips];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Chest => "chest",
            Dimension::Waist => "waist",
            Dimension::Hips => "hips",
        }
    }

    /// Label used on a chart for the given gender
    pub fn display_name(&self, gender: Gender) -> &'static str {
        match (self, gender) {
            (Dimension::Chest, Gender::Women) => "Bust",
            (Dimension::Chest, Gender::Men) => "Chest",
            (Dimension::Waist, _) => "Waist",
            (Dimension::Hips, _) => "Hips",
        }
    }
}

/// Normalized measurements in inches; `None` means not provided
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
}

impl Measurements {
    pub fn new(chest: Option<f64>, waist: Option<f64>, hips: Option<f64>) -> Self {
        Self { chest, waist, hips }
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Chest => self.chest,
            Dimension::Waist => self.waist,
            Dimension::Hips => self.hips,
        }
    }

    /// Whether a positive value was supplied for the dimension
    pub fn has(&self, dimension: Dimension) -> bool {
        self.get(dimension).is_some_and(|v| v > 0.0)
    }

    /// Drop zero and negative values, which count as not provided
    pub fn positive_only(self) -> Self {
        let keep = |v: Option<f64>| v.filter(|x| *x > 0.0);
        Self {
            chest: keep(self.chest),
            waist: keep(self.waist),
            hips: keep(self.hips),
        }
    }
}
