use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

use super::{ProductSource, RawProduct};
use crate::config::Config;
use crate::error::SourceError;
use crate::models::Category;
use crate::utils::http::fetch_with_retry;

/// Remote catalog API: one `GET /products/category/{id}` per category load.
pub struct HttpProductSource {
    client: Client,
    config: Arc<Config>,
}

impl HttpProductSource {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawProduct>, SourceError> {
        let url = self.config.category_url(category);
        let response = fetch_with_retry(&self.client, &url, self.config.api.max_retries).await?;
        let products: Vec<RawProduct> = response.json().await?;
        info!(
            "Fetched {} raw products for {}",
            products.len(),
            category.key()
        );
        Ok(products)
    }
}
