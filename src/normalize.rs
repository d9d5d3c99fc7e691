use url::Url;

use crate::config::Config;
use crate::extract::{clean_text, SpecSource};
use crate::facets::{extract_specs, schema_for};
use crate::models::{Category, Product, UNKNOWN};
use crate::source::RawProduct;

/// Convert one raw source record into the canonical `Product`. Missing or
/// malformed fields degrade to defaults; this never fails.
pub fn normalize(raw: &RawProduct, category: Category, config: &Config) -> Product {
    let name = display_field(raw.name.as_deref())
        .unwrap_or_else(|| category.unknown_name());
    let brand = display_field(raw.brand.as_deref()).unwrap_or_else(|| UNKNOWN.to_string());
    let model = display_field(raw.model.as_deref()).unwrap_or_else(|| UNKNOWN.to_string());

    let specs_text = raw.specs.clone().unwrap_or_default();
    let src = SpecSource::new(&specs_text, &name);
    let specs = extract_specs(schema_for(category), &src, config.facet_overrides(category));

    Product {
        id: raw.id.unwrap_or(0),
        price: resolve_price(raw),
        image: resolve_image(raw.image_url1.as_deref(), config),
        name,
        brand,
        model,
        category,
        specs,
        specs_text,
        features: raw.features.clone(),
        rating: raw.rating.unwrap_or(0.0),
        reviews: raw.reviews.unwrap_or(0),
        in_stock: raw.in_stock.unwrap_or(true),
    }
}

fn display_field(value: Option<&str>) -> Option<String> {
    let cleaned = clean_text(value?);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Display price is the minimum across all price entries; no entries (or
/// nothing usable) leaves the 0 "contact for price" sentinel.
fn resolve_price(raw: &RawProduct) -> u64 {
    raw.product_prices
        .iter()
        .map(|p| p.price)
        .filter(|p| p.is_finite())
        .fold(None::<f64>, |min, p| match min {
            Some(m) => Some(m.min(p)),
            None => Some(p),
        })
        .map(|p| p.max(0.0).round() as u64)
        .unwrap_or(0)
}

fn resolve_image(source: Option<&str>, config: &Config) -> String {
    let Some(path) = source.map(str::trim).filter(|s| !s.is_empty()) else {
        return config.catalog.placeholder_image.clone();
    };
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    // Relative paths resolve against the API host.
    match Url::parse(&config.api.base_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => config.catalog.placeholder_image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpecValue;
    use crate::source::RawPrice;

    fn config() -> Config {
        Config::load().unwrap()
    }

    #[test]
    fn price_is_minimum_across_entries() {
        let raw = RawProduct {
            product_prices: vec![
                RawPrice { price: 1_990_000.0 },
                RawPrice { price: 1_790_000.0 },
                RawPrice { price: 2_190_000.0 },
            ],
            ..Default::default()
        };
        assert_eq!(resolve_price(&raw), 1_790_000);
    }

    #[test]
    fn no_price_entries_leave_contact_sentinel() {
        assert_eq!(resolve_price(&RawProduct::default()), 0);
    }

    #[test]
    fn empty_record_degrades_to_defaults() {
        let cfg = config();
        let product = normalize(&RawProduct::default(), Category::Ram, &cfg);
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Unknown RAM");
        assert_eq!(product.brand, UNKNOWN);
        assert_eq!(product.price, 0);
        assert_eq!(product.image, cfg.catalog.placeholder_image);
        assert!(product.in_stock);
    }

    #[test]
    fn relative_image_resolves_against_api_host() {
        let cfg = config();
        let raw = RawProduct {
            image_url1: Some("/images/products/42.jpg".to_string()),
            ..Default::default()
        };
        let product = normalize(&raw, Category::Mouse, &cfg);
        assert!(product.image.starts_with("https://"));
        assert!(product.image.ends_with("/images/products/42.jpg"));
    }

    #[test]
    fn specs_key_set_matches_schema_for_every_record() {
        let cfg = config();
        let schema = schema_for(Category::Mainboard);
        let empty = normalize(&RawProduct::default(), Category::Mainboard, &cfg);
        let full = normalize(
            &RawProduct {
                name: Some("ROG Strix X670E-E".to_string()),
                specs: Some("Socket: AM5\nChipset: X670E\nWiFi 6E".to_string()),
                ..Default::default()
            },
            Category::Mainboard,
            &cfg,
        );
        let keys: Vec<_> = schema.keys().collect();
        assert_eq!(empty.specs.keys().copied().collect::<Vec<_>>().len(), keys.len());
        assert_eq!(
            empty.specs.keys().collect::<Vec<_>>(),
            full.specs.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn extraction_reads_description_and_name() {
        let cfg = config();
        let raw = RawProduct {
            name: Some("Kingston Fury Beast 32GB DDR5".to_string()),
            specs: Some("Speed: 6000MHz\nLatency: CL36".to_string()),
            product_prices: vec![RawPrice { price: 3_190_000.0 }],
            ..Default::default()
        };
        let product = normalize(&raw, Category::Ram, &cfg);
        assert_eq!(product.spec("capacity"), Some(&SpecValue::text("32GB")));
        assert_eq!(product.spec("memoryType"), Some(&SpecValue::text("DDR5")));
        assert_eq!(product.spec("speed"), Some(&SpecValue::text("6000MHz")));
        assert_eq!(product.price, 3_190_000);
    }
}
