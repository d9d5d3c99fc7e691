use anyhow::Result;
use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

use component_catalog::catalog::CatalogLoader;
use component_catalog::compare::format_price_vnd;
use component_catalog::config::Config;
use component_catalog::utils::http::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("component_catalog=info".parse()?),
        )
        .init();

    info!("Starting Component Catalog");

    // Load configuration
    let config = Arc::new(Config::load()?);

    // Initialize HTTP client with connection pooling
    let client = create_client(&config.api)?;

    let loader = CatalogLoader::new(client, config.clone());

    info!(
        "--- Loading catalogs at {} ---",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let snapshots = loader.load_all().await;

    for snapshot in &snapshots {
        if snapshot.is_empty() {
            warn!("No products available for {}", snapshot.category.key());
            continue;
        }
        info!(
            "{}: {} products",
            snapshot.category.display_name(),
            snapshot.len()
        );
        for product in snapshot.products.iter().take(3) {
            info!(
                "  {} ({}) - {}",
                product.name,
                product.brand,
                format_price_vnd(product.price)
            );
        }
    }

    let total: usize = snapshots.iter().map(|s| s.len()).sum();
    info!("Catalog load completed: {} products across {} categories", total, snapshots.len());

    Ok(())
}
