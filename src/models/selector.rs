//! Selector model
//!
//! Brand, gender and category keys identifying a size table.

use serde::{Deserialize, Serialize};

use super::Dimension;

/// Gender section of a brand's charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "men" | "man" | "male" | "m" => Some(Gender::Men),
            "women" | "woman" | "female" | "w" | "f" => Some(Gender::Women),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
        }
    }

    /// Garment categories offered for this gender
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Gender::Men => &[Category::Tops, Category::Pants, Category::Jackets],
            Gender::Women => &[Category::Tops, Category::Pants, Category::Dresses],
        }
    }
}

/// Garment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Pants,
    Dresses,
    Jackets,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Pants => "pants",
            Category::Dresses => "dresses",
            Category::Jackets => "jackets",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tops" | "top" | "shirts" | "shirt" => Some(Category::Tops),
            "pants" | "trousers" | "bottoms" => Some(Category::Pants),
            "dresses" | "dress" => Some(Category::Dresses),
            "jackets" | "jacket" | "suits" => Some(Category::Jackets),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Pants => "Pants",
            Category::Dresses => "Dresses",
            Category::Jackets => "Jackets",
        }
    }

    /// Measurements of which at least one must be given before matching
    pub fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            Category::Tops | Category::Dresses => &[Dimension::Chest, Dimension::Waist],
            Category::Pants | Category::Jackets => &[Dimension::Waist],
        }
    }
}

/// A retail brand with compiled-in charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub key: &'static str,
    pub name: &'static str,
}

/// Key identifying one size table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'a> {
    pub brand: &'a str,
    pub gender: Gender,
    pub category: Category,
}

impl<'a> Selector<'a> {
    pub fn new(brand: &'a str, gender: Gender, category: Category) -> Self {
        Self {
            brand,
            gender,
            category,
        }
    }
}
