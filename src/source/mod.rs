use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SourceError;
use crate::models::Category;

mod http;
mod static_data;

pub use http::HttpProductSource;
pub use static_data::StaticProductSource;

/// Product record as the remote API (or the built-in data) hands it over.
/// Everything is optional; the normalizer supplies defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Free-text multi-line specification description.
    pub specs: Option<String>,
    pub image_url1: Option<String>,
    pub category_id: Option<u64>,
    #[serde(rename = "productPrices", alias = "product_prices")]
    pub product_prices: Vec<RawPrice>,
    pub features: Vec<String>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    #[serde(rename = "inStock", alias = "in_stock")]
    pub in_stock: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawPrice {
    pub price: f64,
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawProduct>, SourceError>;
}
