use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    /// Facet values applied when extraction finds nothing, keyed
    /// [category][facet]. Ships with the storefront's always-true booleans
    /// (mainboard wifi/bluetooth, mouse rgb/gaming) and the 2-slot PCIe
    /// assumption so a deployment can change them without a code change.
    pub facet_defaults: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Image shown for products whose record carries no usable image URL.
    pub placeholder_image: String,
    /// Categories served from built-in data instead of the remote API.
    pub static_categories: Vec<String>,
}

impl Config {
    /// Built-in defaults, overridden by an optional `catalog.toml` and
    /// `CATALOG_*` environment variables, in that order.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api.base_url", "https://api.techshop.vn/api/v1")?
            .set_default("api.user_agent", "component-catalog/0.1")?
            .set_default("api.timeout_seconds", 25_i64)?
            .set_default("api.max_retries", 3_i64)?
            .set_default(
                "catalog.placeholder_image",
                "https://static.techshop.vn/images/placeholder-product.png",
            )?
            .set_default("catalog.static_categories", vec!["microphone", "speakers"])?
            .set_default("facet_defaults.mainboard.wifi", "true")?
            .set_default("facet_defaults.mainboard.bluetooth", "true")?
            .set_default("facet_defaults.mainboard.pcieslots", "2")?
            .set_default("facet_defaults.mouse.rgb", "true")?
            .set_default("facet_defaults.mouse.gaming", "true")?
            .add_source(config::File::with_name("catalog").required(false))
            .add_source(config::Environment::with_prefix("CATALOG").separator("__"))
            .build()
            .context("Failed to assemble configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn facet_overrides(&self, category: Category) -> Option<&HashMap<String, String>> {
        self.facet_defaults.get(category.key())
    }

    pub fn is_static(&self, category: Category) -> bool {
        self.catalog
            .static_categories
            .iter()
            .any(|key| key == category.key())
    }

    pub fn category_url(&self, category: Category) -> String {
        format!(
            "{}/products/category/{}",
            self.api.base_url.trim_end_matches('/'),
            category.remote_id()
        )
    }
}
