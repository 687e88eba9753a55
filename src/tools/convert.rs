//! Size conversion tool
//!
//! Validates form-style input, normalizes measurements and recommends a size
//! for every selected brand.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Category, Dimension, Gender, Measurements, Selector};
use crate::sizing::{self, Fit, MeasurementUnit, Recommendation};

/// Validation errors reported back to the caller
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("Please enter at least one relevant measurement ({}).", .needed.join(" or "))]
    MissingInput { needed: Vec<&'static str> },

    #[error("Please select at least one brand.")]
    NoBrandSelected,

    #[error("Unknown gender '{0}' (expected men or women)")]
    UnknownGender(String),

    #[error("Unknown category '{0}' (expected tops, pants, dresses or jackets)")]
    UnknownCategory(String),

    #[error("Unknown unit '{0}' (expected in or cm)")]
    UnknownUnit(String),

    #[error("Unknown brand '{0}'")]
    UnknownBrand(String),
}

pub fn parse_gender(s: &str) -> Result<Gender, ConvertError> {
    Gender::from_str(s).ok_or_else(|| ConvertError::UnknownGender(s.to_string()))
}

pub fn parse_category(s: &str) -> Result<Category, ConvertError> {
    Category::from_str(s).ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
}

pub fn parse_unit(s: &str) -> Result<MeasurementUnit, ConvertError> {
    MeasurementUnit::from_str(s).ok_or_else(|| ConvertError::UnknownUnit(s.to_string()))
}

/// Raw form input for a conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub gender: String,
    pub category: String,
    pub unit: String,
    pub chest: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub brands: Vec<String>,
}

/// Per-brand outcome kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Match,
    NoData,
    NoMatch,
}

/// Recommendation for one brand
#[derive(Debug, Serialize)]
pub struct BrandResult {
    pub brand: String,
    pub brand_name: String,
    pub outcome: Outcome,
    pub size: Option<&'static str>,
    pub fit: Option<Fit>,
    pub message: String,
}

/// A measurement echoed back in the caller's unit
#[derive(Debug, Serialize)]
pub struct MeasurementDisplay {
    pub label: &'static str,
    pub value: Option<f64>,
    pub formatted: String,
}

/// Measurements used for matching
#[derive(Debug, Serialize)]
pub struct MeasurementsUsed {
    pub chest: MeasurementDisplay,
    pub waist: MeasurementDisplay,
    pub hips: MeasurementDisplay,
}

/// Response for convert_size
#[derive(Debug, Serialize)]
pub struct ConvertSizeResponse {
    pub gender: Gender,
    pub category: Category,
    pub unit: MeasurementUnit,
    pub results: Vec<BrandResult>,
    pub measurements_used: MeasurementsUsed,
}

/// Normalize the raw measurement strings; non-positive values count as not provided
pub fn normalize_measurements(
    chest: Option<&str>,
    waist: Option<&str>,
    hips: Option<&str>,
    unit: MeasurementUnit,
) -> Measurements {
    let norm = |raw: Option<&str>| raw.and_then(|r| sizing::normalize(r, unit));
    Measurements::new(norm(chest), norm(waist), norm(hips)).positive_only()
}

/// Trim, drop blanks and de-duplicate brand keys, keeping first occurrence order
fn selected_brands(brands: &[String]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();
    for brand in brands {
        let key = brand.trim().to_lowercase();
        if !key.is_empty() && !selected.contains(&key) {
            selected.push(key);
        }
    }
    selected
}

fn display(label: &'static str, value: Option<f64>, unit: MeasurementUnit) -> MeasurementDisplay {
    MeasurementDisplay {
        label,
        value: value.map(|v| sizing::to_display(v, unit)),
        formatted: sizing::format_display(value, unit),
    }
}

fn brand_result(key: String, recommendation: Recommendation) -> BrandResult {
    let brand_name = sizing::brand(&key)
        .map(|b| b.name.to_string())
        .unwrap_or_else(|| key.clone());

    let (outcome, size, fit, message) = match recommendation {
        Recommendation::Size(m) => {
            let message = if m.is_exact() {
                m.label().to_string()
            } else {
                format!("{} (closest size)", m.label())
            };
            (Outcome::Match, Some(m.label()), Some(m.fit), message)
        }
        Recommendation::NoData => (Outcome::NoData, None, None, "No size data".to_string()),
        Recommendation::NoMatch => (Outcome::NoMatch, None, None, "No close match".to_string()),
    };

    BrandResult {
        brand: key,
        brand_name,
        outcome,
        size,
        fit,
        message,
    }
}

/// Recommend a size for each selected brand
pub fn convert_size(request: &ConvertRequest) -> Result<ConvertSizeResponse, ConvertError> {
    let gender = parse_gender(&request.gender)?;
    let category = parse_category(&request.category)?;
    let unit = parse_unit(&request.unit)?;

    let measurements = normalize_measurements(
        request.chest.as_deref(),
        request.waist.as_deref(),
        request.hips.as_deref(),
        unit,
    );

    let needed = category.required_dimensions();
    if !needed.iter().any(|d| measurements.has(*d)) {
        return Err(ConvertError::MissingInput {
            needed: needed.iter().map(|d| d.as_str()).collect(),
        });
    }

    let brands = selected_brands(&request.brands);
    if brands.is_empty() {
        return Err(ConvertError::NoBrandSelected);
    }

    tracing::info!(
        "Converting {}/{} in {} for {} brand(s)",
        gender.as_str(),
        category.as_str(),
        unit.as_str(),
        brands.len()
    );

    let results = brands
        .into_iter()
        .map(|key| {
            let selector = Selector::new(&key, gender, category);
            let recommendation = sizing::recommend(&selector, &measurements);
            brand_result(key, recommendation)
        })
        .collect();

    Ok(ConvertSizeResponse {
        gender,
        category,
        unit,
        results,
        measurements_used: MeasurementsUsed {
            chest: display(Dimension::Chest.display_name(gender), measurements.chest, unit),
            waist: display(Dimension::Waist.display_name(gender), measurements.waist, unit),
            hips: display(Dimension::Hips.display_name(gender), measurements.hips, unit),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gender: &str, category: &str, unit: &str) -> ConvertRequest {
        ConvertRequest {
            gender: gender.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            brands: vec!["hm".to_string(), "zara".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_convert_men_tops_inches() {
        let mut req = request("men", "tops", "in");
        req.chest = Some("38".to_string());
        req.waist = Some("34".to_string());

        let resp = convert_size(&req).unwrap();
        assert_eq!(resp.results.len(), 2);

        let hm = &resp.results[0];
        assert_eq!(hm.brand_name, "H&M");
        assert_eq!(hm.outcome, Outcome::Match);
        assert_eq!(hm.size, Some("M"));
        assert_eq!(hm.message, "M");

        let zara = &resp.results[1];
        assert_eq!(zara.brand_name, "Zara");
        assert_eq!(zara.size, Some("M"));

        assert_eq!(resp.measurements_used.chest.formatted, "38.0 in");
        assert_eq!(resp.measurements_used.hips.formatted, "-");
    }

    #[test]
    fn test_convert_centimeters_echoes_cm() {
        let mut req = request("women", "pants", "cm");
        req.waist = Some("76.2".to_string());
        req.hips = Some("101.6".to_string());

        let resp = convert_size(&req).unwrap();
        // 30 in waist, 40 in hips
        assert_eq!(resp.results[0].size, Some("M"));
        assert_eq!(resp.results[1].size, Some("M"));
        assert_eq!(resp.measurements_used.waist.formatted, "76.2 cm");
        let waist = resp.measurements_used.waist.value.unwrap();
        assert!((waist - 76.2).abs() < 1e-9);
        assert_eq!(resp.measurements_used.chest.label, "Bust");
    }

    #[test]
    fn test_convert_closest_size_message() {
        let mut req = request("women", "tops", "in");
        req.chest = Some("29".to_string());
        req.brands = vec!["hm".to_string()];

        let resp = convert_size(&req).unwrap();
        assert_eq!(resp.results[0].size, Some("XS"));
        assert_eq!(resp.results[0].message, "XS (closest size)");
    }

    #[test]
    fn test_convert_no_data_for_missing_table() {
        let mut req = request("women", "dresses", "in");
        req.chest = Some("36".to_string());

        let resp = convert_size(&req).unwrap();
        assert_eq!(resp.results[0].outcome, Outcome::Match);
        assert_eq!(resp.results[1].outcome, Outcome::NoData);
        assert_eq!(resp.results[1].size, None);
        assert_eq!(resp.results[1].message, "No size data");
    }

    #[test]
    fn test_convert_unknown_brand_is_no_data() {
        let mut req = request("men", "pants", "in");
        req.waist = Some("32".to_string());
        req.brands = vec!["Uniqlo".to_string()];

        let resp = convert_size(&req).unwrap();
        assert_eq!(resp.results[0].brand, "uniqlo");
        assert_eq!(resp.results[0].brand_name, "uniqlo");
        assert_eq!(resp.results[0].outcome, Outcome::NoData);
    }

    #[test]
    fn test_convert_no_match_when_no_usable_dimension() {
        let mut req = request("men", "tops", "in");
        req.waist = Some("32".to_string());
        req.brands = vec!["zara".to_string()];

        let resp = convert_size(&req).unwrap();
        assert_eq!(resp.results[0].outcome, Outcome::NoMatch);
        assert_eq!(resp.results[0].message, "No close match");
    }

    #[test]
    fn test_missing_input() {
        let mut req = request("men", "pants", "in");
        req.chest = Some("40".to_string());
        req.waist = Some("  ".to_string());

        let err = convert_size(&req).unwrap_err();
        assert_eq!(err, ConvertError::MissingInput { needed: vec!["waist"] });
        assert_eq!(
            err.to_string(),
            "Please enter at least one relevant measurement (waist)."
        );
    }

    #[test]
    fn test_missing_input_zero_is_not_provided() {
        let mut req = request("women", "tops", "cm");
        req.chest = Some("0".to_string());
        req.waist = Some("abc".to_string());

        let err = convert_size(&req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter at least one relevant measurement (chest or waist)."
        );
    }

    #[test]
    fn test_missing_input_checked_before_brands() {
        let mut req = request("men", "tops", "in");
        req.brands.clear();
        assert!(matches!(convert_size(&req), Err(ConvertError::MissingInput { .. })));
    }

    #[test]
    fn test_no_brand_selected() {
        let mut req = request("men", "tops", "in");
        req.chest = Some("40".to_string());
        req.brands = vec!["  ".to_string()];

        let err = convert_size(&req).unwrap_err();
        assert_eq!(err, ConvertError::NoBrandSelected);
        assert_eq!(err.to_string(), "Please select at least one brand.");
    }

    #[test]
    fn test_brands_are_deduplicated_in_order() {
        let brands = vec![
            "zara".to_string(),
            " HM ".to_string(),
            "Zara".to_string(),
        ];
        assert_eq!(selected_brands(&brands), vec!["zara", "hm"]);
    }

    #[test]
    fn test_unknown_selector_values() {
        let mut req = request("kids", "tops", "in");
        req.chest = Some("30".to_string());
        assert_eq!(
            convert_size(&req).unwrap_err(),
            ConvertError::UnknownGender("kids".to_string())
        );

        let req = request("men", "socks", "in");
        assert!(matches!(convert_size(&req), Err(ConvertError::UnknownCategory(_))));

        let req = request("men", "tops", "mm");
        assert!(matches!(convert_size(&req), Err(ConvertError::UnknownUnit(_))));
    }

    #[test]
    fn test_normalize_measurements_drops_non_positive() {
        let m = normalize_measurements(Some("-3"), Some("30"), None, MeasurementUnit::In);
        assert_eq!(m, Measurements::new(None, Some(30.0), None));
    }
}
