use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{CatalogSnapshot, Category};
use crate::normalize::normalize;
use crate::source::{HttpProductSource, ProductSource, StaticProductSource};

/// Page-boundary catalog access: routes each category to its source,
/// normalizes, and swallows fetch failures into empty snapshots.
pub struct CatalogLoader {
    config: Arc<Config>,
    http: HttpProductSource,
    static_data: StaticProductSource,
}

impl CatalogLoader {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self {
            http: HttpProductSource::new(client, config.clone()),
            static_data: StaticProductSource,
            config,
        }
    }

    fn source_for(&self, category: Category) -> &dyn ProductSource {
        if self.config.is_static(category) {
            &self.static_data
        } else {
            &self.http
        }
    }

    /// One fetch per page view. A failed fetch logs and yields an empty
    /// snapshot instead of propagating.
    pub async fn load_catalog(&self, category: Category) -> CatalogSnapshot {
        match self.source_for(category).fetch_category(category).await {
            Ok(raw) => {
                let products: Vec<_> = raw
                    .iter()
                    .map(|record| normalize(record, category, &self.config))
                    .collect();
                info!(
                    "Loaded {} products for {}",
                    products.len(),
                    category.key()
                );
                CatalogSnapshot::new(category, products)
            }
            Err(e) => {
                error!("Failed to load {} catalog: {}", category.key(), e);
                CatalogSnapshot::empty(category)
            }
        }
    }

    /// Comparison surface: every known category, one call at a time, each
    /// failure tolerated independently.
    pub async fn load_all(&self) -> Vec<CatalogSnapshot> {
        let mut snapshots = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            snapshots.push(self.load_catalog(category).await);
        }
        snapshots
    }
}
