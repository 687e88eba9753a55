//! Measurement units and normalization
//!
//! All matching happens in inches. Input in centimeters is converted on the way
//! in, and canonical inches are converted back for display.

use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit of a user-supplied measurement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    In,
    Cm,
}

impl MeasurementUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::In => "in",
            MeasurementUnit::Cm => "cm",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Some(MeasurementUnit::In),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(MeasurementUnit::Cm)
            }
            _ => None,
        }
    }
}

/// Parse a raw measurement, returning `None` for blank or non-numeric input
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize a raw measurement to inches
///
/// Blank and non-numeric input is "not provided", never an error.
pub fn normalize(raw: &str, unit: MeasurementUnit) -> Option<f64> {
    parse_measurement(raw).map(|value| to_inches(value, unit))
}

pub fn to_inches(value: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::In => value,
        MeasurementUnit::Cm => value / CM_PER_INCH,
    }
}

/// Convert canonical inches back to the display unit
pub fn to_display(inches: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::In => inches,
        MeasurementUnit::Cm => inches * CM_PER_INCH,
    }
}

/// Format a value for display with one decimal, or "-" when absent
///
/// Examples:
/// - `Some(38.0)`, in -> "38.0 in"
/// - `Some(38.0)`, cm -> "96.5 cm"
/// - `None` -> "-"
pub fn format_display(inches: Option<f64>, unit: MeasurementUnit) -> String {
    match inches {
        Some(v) => format!("{:.1} {}", to_display(v, unit), unit.as_str()),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!(MeasurementUnit::from_str("in"), Some(MeasurementUnit::In));
        assert_eq!(MeasurementUnit::from_str("Inches"), Some(MeasurementUnit::In));
        assert_eq!(MeasurementUnit::from_str("CM"), Some(MeasurementUnit::Cm));
        assert_eq!(MeasurementUnit::from_str("centimetres"), Some(MeasurementUnit::Cm));
        assert_eq!(MeasurementUnit::from_str("mm"), None);
    }

    #[test]
    fn test_normalize_inches_pass_through() {
        assert_eq!(normalize("38", MeasurementUnit::In), Some(38.0));
        assert_eq!(normalize(" 34.5 ", MeasurementUnit::In), Some(34.5));
    }

    #[test]
    fn test_normalize_cm() {
        let v = normalize("96.52", MeasurementUnit::Cm).unwrap();
        assert!((v - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_cm_round_trip() {
        for raw in ["1", "50", "76.2", "101.6", "0.5", "180"] {
            let original: f64 = raw.parse().unwrap();
            let inches = normalize(raw, MeasurementUnit::Cm).unwrap();
            assert!((inches * CM_PER_INCH - original).abs() < 1e-9, "{}", raw);
        }
    }

    #[test]
    fn test_normalize_blank_and_non_numeric() {
        for unit in [MeasurementUnit::In, MeasurementUnit::Cm] {
            assert_eq!(normalize("", unit), None);
            assert_eq!(normalize("   ", unit), None);
            assert_eq!(normalize("abc", unit), None);
            assert_eq!(normalize("38in", unit), None);
            assert_eq!(normalize("NaN", unit), None);
            assert_eq!(normalize("inf", unit), None);
        }
    }

    #[test]
    fn test_normalize_zero_is_numeric() {
        assert_eq!(normalize("0", MeasurementUnit::Cm), Some(0.0));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(Some(38.0), MeasurementUnit::In), "38.0 in");
        assert_eq!(format_display(Some(38.0), MeasurementUnit::Cm), "96.5 cm");
        assert_eq!(format_display(None, MeasurementUnit::Cm), "-");
    }
}
