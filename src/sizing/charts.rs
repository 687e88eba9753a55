//! Compiled-in brand size charts
//!
//! Ranges are in inches and simplified from each brand's published charts.
//! Bands within a table keep chart order, which is the last tie-break when
//! matching.

use crate::models::{Brand, Category, Gender, Selector, SizeBand};

/// One brand/gender/category chart
#[derive(Debug, Clone, Copy)]
pub struct SizeTable {
    pub brand: &'static str,
    pub gender: Gender,
    pub category: Category,
    pub bands: &'static [SizeBand],
}

pub static BRANDS: &[Brand] = &[
    Brand { key: "hm", name: "H&M" },
    Brand { key: "zara", name: "Zara" },
];

// ============================================================================
// H&M
// ============================================================================

static HM_WOMEN_TOPS: &[SizeBand] = &[
    SizeBand::new("XS").chest(30.0, 31.5).waist(23.5, 25.25),
    SizeBand::new("S").chest(33.0, 34.5).waist(26.75, 28.5),
    SizeBand::new("M").chest(36.25, 37.75).waist(30.0, 31.5),
    SizeBand::new("L").chest(39.5, 41.0).waist(33.0, 34.5),
    SizeBand::new("XL").chest(43.25, 45.5).waist(37.0, 39.5),
];

static HM_WOMEN_PANTS: &[SizeBand] = &[
    SizeBand::new("XS").waist(24.0, 25.0).hips(33.0, 34.5),
    SizeBand::new("S").waist(26.0, 28.0).hips(36.25, 37.75),
    SizeBand::new("M").waist(29.0, 31.0).hips(39.5, 41.0),
    SizeBand::new("L").waist(32.0, 34.0).hips(42.5, 44.0),
    SizeBand::new("XL").waist(37.0, 39.5).hips(46.0, 48.0),
];

static HM_WOMEN_DRESSES: &[SizeBand] = &[
    SizeBand::new("XS").chest(30.0, 31.5).waist(23.5, 25.25).hips(33.0, 34.5),
    SizeBand::new("S").chest(33.0, 34.5).waist(26.75, 28.5).hips(36.25, 37.75),
    SizeBand::new("M").chest(36.25, 37.75).waist(30.0, 31.5).hips(39.5, 41.0),
    SizeBand::new("L").chest(39.5, 41.0).waist(33.0, 34.5).hips(42.5, 44.0),
    SizeBand::new("XL").chest(43.25, 45.5).waist(37.0, 39.5).hips(46.0, 48.0),
    SizeBand::new("2XL").chest(48.0, 50.5).waist(41.75, 44.0).hips(50.0, 52.0),
    SizeBand::new("3XL").chest(52.75, 55.0).waist(46.5, 48.75).hips(54.0, 56.0),
];

static HM_MEN_TOPS: &[SizeBand] = &[
    SizeBand::new("XS").chest(31.5, 33.0).waist(26.75, 28.25),
    SizeBand::new("S").chest(34.5, 36.25).waist(30.0, 31.5),
    SizeBand::new("M").chest(37.75, 39.5).waist(33.0, 34.5),
    SizeBand::new("L").chest(41.0, 42.5).waist(36.25, 37.75),
    SizeBand::new("XL").chest(44.0, 45.5).waist(39.5, 41.0),
    SizeBand::new("XXL").chest(47.25, 48.75).waist(42.5, 44.0),
];

static HM_MEN_PANTS: &[SizeBand] = &[
    SizeBand::new("XS").waist(26.0, 28.0),
    SizeBand::new("S").waist(30.0, 32.0),
    SizeBand::new("M").waist(34.0, 36.0),
    SizeBand::new("L").waist(38.0, 40.0),
    SizeBand::new("XL").waist(42.0, 44.0),
    SizeBand::new("XXL").waist(50.0, 52.0),
];

// Jacket sizes are single points on the chart
static HM_MEN_JACKETS: &[SizeBand] = &[
    SizeBand::new("40").chest(39.5, 39.5).waist(34.5, 34.5),
    SizeBand::new("42").chest(41.0, 41.0).waist(36.25, 36.25),
    SizeBand::new("44").chest(42.5, 42.5).waist(37.75, 37.75),
    SizeBand::new("46").chest(44.0, 44.0).waist(39.5, 39.5),
];

// ============================================================================
// Zara
// ============================================================================

static ZARA_MEN_TOPS: &[SizeBand] = &[
    SizeBand::new("S").chest(35.0, 36.5),
    SizeBand::new("M").chest(37.0, 38.5),
    SizeBand::new("L").chest(39.0, 40.5),
    SizeBand::new("XL").chest(41.0, 42.5),
    SizeBand::new("XXL").chest(43.0, 45.0),
];

static ZARA_MEN_PANTS: &[SizeBand] = &[
    SizeBand::new("S").waist(28.0, 30.0),
    SizeBand::new("M").waist(30.0, 32.0),
    SizeBand::new("L").waist(32.0, 34.0),
    SizeBand::new("XL").waist(34.0, 36.0),
];

static ZARA_WOMEN_TOPS: &[SizeBand] = &[
    SizeBand::new("XS").chest(30.0, 32.0),
    SizeBand::new("S").chest(33.0, 34.5),
    SizeBand::new("M").chest(36.0, 37.5),
    SizeBand::new("L").chest(39.0, 40.5),
    SizeBand::new("XL").chest(42.0, 44.0),
];

static ZARA_WOMEN_PANTS: &[SizeBand] = &[
    SizeBand::new("S").waist(26.0, 28.0),
    SizeBand::new("M").waist(29.0, 31.0),
    SizeBand::new("L").waist(32.0, 34.0),
    SizeBand::new("XL").waist(35.0, 37.0),
];

pub static SIZE_TABLES: &[SizeTable] = &[
    SizeTable {
        brand: "hm",
        gender: Gender::Women,
        category: Category::Tops,
        bands: HM_WOMEN_TOPS,
    },
    SizeTable {
        brand: "hm",
        gender: Gender::Women,
        category: Category::Pants,
        bands: HM_WOMEN_PANTS,
    },
    SizeTable {
        brand: "hm",
        gender: Gender::Women,
        category: Category::Dresses,
        bands: HM_WOMEN_DRESSES,
    },
    SizeTable {
        brand: "hm",
        gender: Gender::Men,
        category: Category::Tops,
        bands: HM_MEN_TOPS,
    },
    SizeTable {
        brand: "hm",
        gender: Gender::Men,
        category: Category::Pants,
        bands: HM_MEN_PANTS,
    },
    SizeTable {
        brand: "hm",
        gender: Gender::Men,
        category: Category::Jackets,
        bands: HM_MEN_JACKETS,
    },
    SizeTable {
        brand: "zara",
        gender: Gender::Men,
        category: Category::Tops,
        bands: ZARA_MEN_TOPS,
    },
    SizeTable {
        brand: "zara",
        gender: Gender::Men,
        category: Category::Pants,
        bands: ZARA_MEN_PANTS,
    },
    SizeTable {
        brand: "zara",
        gender: Gender::Women,
        category: Category::Tops,
        bands: ZARA_WOMEN_TOPS,
    },
    SizeTable {
        brand: "zara",
        gender: Gender::Women,
        category: Category::Pants,
        bands: ZARA_WOMEN_PANTS,
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// All brands with compiled-in charts
pub fn brands() -> &'static [Brand] {
    BRANDS
}

/// Resolve a brand key, ignoring case and surrounding whitespace
pub fn brand(key: &str) -> Option<&'static Brand> {
    let key = key.trim();
    BRANDS.iter().find(|b| b.key.eq_ignore_ascii_case(key))
}

/// Bands for a selector, or `None` if any key segment is undefined
pub fn lookup(selector: &Selector<'_>) -> Option<&'static [SizeBand]> {
    let brand = brand(selector.brand)?;
    SIZE_TABLES
        .iter()
        .find(|t| {
            t.brand == brand.key && t.gender == selector.gender && t.category == selector.category
        })
        .map(|t| t.bands)
}

/// Tables defined for a brand, in declaration order
pub fn tables_for(brand_key: &str) -> Vec<&'static SizeTable> {
    match brand(brand_key) {
        Some(b) => SIZE_TABLES.iter().filter(|t| t.brand == b.key).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_band_defines_a_valid_range() {
        for table in SIZE_TABLES {
            assert!(
                !table.bands.is_empty(),
                "{} {:?} {:?}",
                table.brand,
                table.gender,
                table.category
            );
            for band in table.bands {
                assert!(band.has_ranges(), "{} {}", table.brand, band.label);
                for (_, range) in band.ranges() {
                    assert!(range.min <= range.max, "{} {}", table.brand, band.label);
                }
            }
        }
    }

    #[test]
    fn test_every_table_has_a_known_brand() {
        for table in SIZE_TABLES {
            assert!(brand(table.brand).is_some(), "{}", table.brand);
        }
    }

    #[test]
    fn test_tables_are_offered_for_their_gender() {
        for table in SIZE_TABLES {
            assert!(table.gender.categories().contains(&table.category));
        }
    }

    #[test]
    fn test_lookup_known_selector() {
        let bands = lookup(&Selector::new("hm", Gender::Men, Category::Tops)).unwrap();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[0].label, "XS");
    }

    #[test]
    fn test_lookup_is_case_insensitive_on_brand() {
        assert!(lookup(&Selector::new("ZARA", Gender::Women, Category::Pants)).is_some());
    }

    #[test]
    fn test_lookup_missing_segments() {
        assert!(lookup(&Selector::new("uniqlo", Gender::Men, Category::Tops)).is_none());
        assert!(lookup(&Selector::new("zara", Gender::Women, Category::Dresses)).is_none());
        assert!(lookup(&Selector::new("hm", Gender::Women, Category::Jackets)).is_none());
    }

    #[test]
    fn test_tables_for() {
        assert_eq!(tables_for("hm").len(), 6);
        assert_eq!(tables_for("zara").len(), 4);
        assert!(tables_for("gap").is_empty());
    }
}
