use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use component_catalog::catalog::CatalogLoader;
use component_catalog::compare::{comparison_rows, search_all};
use component_catalog::config::Config;
use component_catalog::facets::schema_for;
use component_catalog::filter::{apply, FilterState, PriceRange};
use component_catalog::models::Category;
use component_catalog::utils::http::create_client;

fn loader_for(base_url: &str) -> CatalogLoader {
    let mut config = Config::load().unwrap();
    config.api.base_url = base_url.to_string();
    config.api.max_retries = 1;
    let config = Arc::new(config);
    let client = create_client(&config.api).unwrap();
    CatalogLoader::new(client, config)
}

#[tokio::test]
async fn fetched_catalog_filters_with_price_sentinel_bypass() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/category/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "X",
                "brand": "Acme",
                "productPrices": []
            },
            {
                "id": 2,
                "name": "Y",
                "brand": "Acme",
                "productPrices": [{"price": 150.0}]
            }
        ])))
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri());
    let snapshot = loader.load_catalog(Category::Ram).await;
    assert_eq!(snapshot.len(), 2);

    let schema = schema_for(Category::Ram);
    let mut state = FilterState::new(schema);
    state.price = PriceRange::new(50, 100);

    let hits = apply(&snapshot.products, &state, schema);
    let ids: Vec<u64> = hits.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn failed_fetch_yields_empty_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/category/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri());
    let snapshot = loader.load_catalog(Category::Mainboard).await;
    assert_eq!(snapshot.category, Category::Mainboard);
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn missing_fields_take_defaults_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/category/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .mount(&server)
        .await;

    let loader = loader_for(&server.uri());
    let snapshot = loader.load_catalog(Category::Mouse).await;
    assert_eq!(snapshot.len(), 1);

    let product = &snapshot.products[0];
    assert_eq!(product.id, 0);
    assert_eq!(product.name, "Unknown Mouse");
    assert_eq!(product.brand, "Unknown");
    assert_eq!(product.price, 0);
    assert!(!product.image.is_empty());
    assert_eq!(
        product.specs.keys().count(),
        schema_for(Category::Mouse).facets.len()
    );
}

#[tokio::test]
async fn static_category_loads_without_network() {
    // Nothing listens on the base URL; static categories must not care.
    let loader = loader_for("http://127.0.0.1:9");
    let snapshot = loader.load_catalog(Category::Microphone).await;
    assert_eq!(snapshot.len(), 4);

    let schema = schema_for(Category::Microphone);
    for product in &snapshot.products {
        assert_eq!(product.specs.keys().count(), schema.facets.len());
    }

    // The comparison picker sees them through a category query.
    let catalogs = vec![snapshot];
    assert_eq!(search_all(&catalogs, "microphone").len(), 4);
    assert!(search_all(&catalogs, "").is_empty());

    let rows = comparison_rows(Some(&catalogs[0].products[0]));
    assert_eq!(rows[0].label, "Name");
    assert_eq!(rows[4].label, "Price");
    assert!(rows.len() > 5);
}
