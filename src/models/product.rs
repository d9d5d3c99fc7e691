use super::{Category, UNKNOWN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Typed value of one facet after extraction.
///
/// Numeric facets are carried as text ("16GB", "3200MHz") because they are
/// matched by exact membership, never arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecValue {
    Text(String),
    Flag(bool),
}

impl SpecValue {
    pub fn text(value: impl Into<String>) -> Self {
        SpecValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(s) => Some(s),
            SpecValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SpecValue::Flag(b) => Some(*b),
            SpecValue::Text(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SpecValue::Text(s) if s == UNKNOWN)
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Text(s) => write!(f, "{}", s),
            SpecValue::Flag(true) => write!(f, "Yes"),
            SpecValue::Flag(false) => write!(f, "No"),
        }
    }
}

/// One normalized catalog entry.
///
/// `specs` always carries every facet key of the product's category; misses
/// during extraction land as the facet's fallback, never as an absent key.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub model: String,
    /// 0 means "contact for price", not free.
    pub price: u64,
    pub image: String,
    pub category: Category,
    pub specs: BTreeMap<&'static str, SpecValue>,
    /// Raw multi-line description the specs were extracted from; the
    /// comparison view projects it line by line.
    pub specs_text: String,
    pub features: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    pub in_stock: bool,
}

impl Product {
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specs.get(key)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            name: UNKNOWN.to_string(),
            brand: UNKNOWN.to_string(),
            model: UNKNOWN.to_string(),
            price: 0,
            image: String::new(),
            category: Category::Ram,
            specs: BTreeMap::new(),
            specs_text: String::new(),
            features: Vec::new(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
        }
    }
}

/// Immutable per-category catalog, fetched once per page view.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub category: Category,
    pub products: Vec<Product>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(category: Category, products: Vec<Product>) -> Self {
        Self {
            category,
            products,
            fetched_at: Utc::now(),
        }
    }

    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
