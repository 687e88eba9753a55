//! Size chart tools
//!
//! Browse the compiled-in brand charts.

use serde::Serialize;

use crate::models::{Category, Gender, Selector, SizeBand};
use crate::sizing::{self, MeasurementUnit};

use super::convert::{parse_category, parse_gender, parse_unit, ConvertError};

/// Table summary for list_brands
#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub gender: Gender,
    pub category: Category,
    pub title: String,
    pub sizes: Vec<&'static str>,
}

/// Brand summary for list_brands
#[derive(Debug, Serialize)]
pub struct BrandSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub tables: Vec<TableSummary>,
}

/// Response for list_brands
#[derive(Debug, Serialize)]
pub struct ListBrandsResponse {
    pub brands: Vec<BrandSummary>,
    pub total: usize,
}

/// One dimension range converted to the display unit
#[derive(Debug, Serialize)]
pub struct RangeDetail {
    pub dimension: &'static str,
    pub min: f64,
    pub max: f64,
    pub formatted: String,
}

/// One size row of a chart
#[derive(Debug, Serialize)]
pub struct BandDetail {
    pub size: &'static str,
    pub ranges: Vec<RangeDetail>,
}

/// Response for get_size_chart
#[derive(Debug, Serialize)]
pub struct SizeChartResponse {
    pub brand: &'static str,
    pub brand_name: &'static str,
    pub gender: Gender,
    pub category: Category,
    pub unit: MeasurementUnit,
    pub sizes: Vec<BandDetail>,
}

/// List every brand with the tables it defines
pub fn list_brands() -> ListBrandsResponse {
    let brands: Vec<BrandSummary> = sizing::brands()
        .iter()
        .map(|b| BrandSummary {
            key: b.key,
            name: b.name,
            tables: sizing::tables_for(b.key)
                .into_iter()
                .map(|t| TableSummary {
                    gender: t.gender,
                    category: t.category,
                    title: format!("{} {}", t.gender.display_name(), t.category.display_name()),
                    sizes: t.bands.iter().map(|band| band.label).collect(),
                })
                .collect(),
        })
        .collect();

    let total = brands.len();
    ListBrandsResponse { brands, total }
}

fn band_detail(band: &SizeBand, gender: Gender, unit: MeasurementUnit) -> BandDetail {
    let ranges = band
        .ranges()
        .map(|(dimension, range)| {
            let min = sizing::to_display(range.min, unit);
            let max = sizing::to_display(range.max, unit);
            let formatted = if range.width() == 0.0 {
                format!("{:.1} {}", min, unit.as_str())
            } else {
                format!("{:.1}-{:.1} {}", min, max, unit.as_str())
            };
            RangeDetail {
                dimension: dimension.display_name(gender),
                min,
                max,
                formatted,
            }
        })
        .collect();

    BandDetail {
        size: band.label,
        ranges,
    }
}

/// Get one chart with ranges in the requested unit
///
/// Returns `Ok(None)` when the brand has no chart for the gender and category.
pub fn get_size_chart(
    brand: &str,
    gender: &str,
    category: &str,
    unit: &str,
) -> Result<Option<SizeChartResponse>, ConvertError> {
    let found = sizing::brand(brand).ok_or_else(|| ConvertError::UnknownBrand(brand.to_string()))?;
    let gender = parse_gender(gender)?;
    let category = parse_category(category)?;
    let unit = parse_unit(unit)?;

    let Some(bands) = sizing::lookup(&Selector::new(found.key, gender, category)) else {
        return Ok(None);
    };

    Ok(Some(SizeChartResponse {
        brand: found.key,
        brand_name: found.name,
        gender,
        category,
        unit,
        sizes: bands.iter().map(|b| band_detail(b, gender, unit)).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_brands() {
        let resp = list_brands();
        assert_eq!(resp.total, 2);
        assert_eq!(resp.brands[0].name, "H&M");
        assert_eq!(resp.brands[0].tables.len(), 6);
        assert_eq!(resp.brands[1].key, "zara");
        assert_eq!(resp.brands[1].tables[0].sizes, vec!["S", "M", "L", "XL", "XXL"]);
        assert_eq!(resp.brands[1].tables[0].title, "Men Tops");
        assert_eq!(resp.brands[0].tables[2].title, "Women Dresses");
    }

    #[test]
    fn test_get_size_chart_inches() {
        let chart = get_size_chart("hm", "women", "tops", "in").unwrap().unwrap();
        assert_eq!(chart.brand_name, "H&M");
        assert_eq!(chart.sizes.len(), 5);
        let xs = &chart.sizes[0];
        assert_eq!(xs.size, "XS");
        assert_eq!(xs.ranges[0].dimension, "Bust");
        assert_eq!(xs.ranges[0].formatted, "30.0-31.5 in");
        assert_eq!(xs.ranges[1].dimension, "Waist");
    }

    #[test]
    fn test_get_size_chart_cm() {
        let chart = get_size_chart("zara", "men", "pants", "cm").unwrap().unwrap();
        let s = &chart.sizes[0];
        assert!((s.ranges[0].min - 71.12).abs() < 1e-9);
        assert_eq!(s.ranges[0].formatted, "71.1-76.2 cm");
    }

    #[test]
    fn test_get_size_chart_point_range() {
        let chart = get_size_chart("hm", "men", "jackets", "in").unwrap().unwrap();
        assert_eq!(chart.sizes[0].size, "40");
        assert_eq!(chart.sizes[0].ranges[0].formatted, "39.5 in");
    }

    #[test]
    fn test_get_size_chart_missing_table() {
        assert!(get_size_chart("zara", "women", "dresses", "in").unwrap().is_none());
    }

    #[test]
    fn test_get_size_chart_unknown_brand() {
        assert_eq!(
            get_size_chart("gap", "men", "tops", "in").unwrap_err(),
            ConvertError::UnknownBrand("gap".to_string())
        );
    }
}
