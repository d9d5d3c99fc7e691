use async_trait::async_trait;
use tracing::debug;

use super::{ProductSource, RawPrice, RawProduct};
use crate::error::SourceError;
use crate::models::Category;

/// Built-in catalogs for the categories the storefront ships without a
/// remote endpoint. Categories not listed here resolve to zero products.
pub struct StaticProductSource;

fn record(
    id: u64,
    name: &str,
    brand: &str,
    model: &str,
    price: f64,
    specs: &str,
    features: &[&str],
    rating: f32,
    reviews: u32,
) -> RawProduct {
    RawProduct {
        id: Some(id),
        name: Some(name.to_string()),
        brand: Some(brand.to_string()),
        model: Some(model.to_string()),
        specs: Some(specs.to_string()),
        image_url1: Some(format!("/images/products/{}.jpg", id)),
        category_id: None,
        product_prices: if price > 0.0 {
            vec![RawPrice { price }]
        } else {
            Vec::new()
        },
        features: features.iter().map(|f| f.to_string()).collect(),
        rating: Some(rating),
        reviews: Some(reviews),
        in_stock: Some(true),
    }
}

fn microphones() -> Vec<RawProduct> {
    vec![
        record(
            601,
            "HyperX QuadCast S",
            "HyperX",
            "QuadCast S",
            3_290_000.0,
            "Type: Condenser\nPolar Pattern: Multi-pattern (cardioid, omnidirectional, bidirectional, stereo mode)\nSample Rate: 48kHz\nConnection: USB-C\nBuilt for streaming and podcasting",
            &["RGB lighting", "Tap-to-mute", "Anti-vibration shock mount"],
            4.7,
            812,
        ),
        record(
            602,
            "Shure SM7B",
            "Shure",
            "SM7B",
            9_990_000.0,
            "Type: Dynamic\nPolar Pattern: Cardioid\nConnection: XLR\nFrequency Response: 50Hz-20kHz\nBroadcast studio standard",
            &["Air suspension shock isolation", "Pop filter included"],
            4.9,
            1543,
        ),
        record(
            603,
            "Blue Yeti",
            "Logitech",
            "Yeti",
            2_590_000.0,
            "Type: Condenser\nPolar Pattern: Multi-pattern (cardioid, omnidirectional, bidirectional, stereo mode)\nSample Rate: 48kHz\nConnection: USB\nGreat for streaming",
            &["Gain control", "Mute button", "Headphone output"],
            4.5,
            2210,
        ),
        record(
            604,
            "Rode NT1 Signature",
            "Rode",
            "NT1 Signature",
            0.0,
            "Type: Condenser\nPolar Pattern: Cardioid\nConnection: XLR\nSample Rate: 192kHz\nUltra-low self noise",
            &["Shock mount included", "Pop shield included"],
            4.8,
            327,
        ),
    ]
}

fn speakers() -> Vec<RawProduct> {
    vec![
        record(
            701,
            "Logitech Z407",
            "Logitech",
            "Z407",
            1_990_000.0,
            "Configuration: 2.1\nOutput: 80W peak\nBluetooth 5.0 and 3.5mm AUX input\nWireless control dial",
            &["Wireless control dial", "Compact subwoofer"],
            4.4,
            968,
        ),
        record(
            702,
            "Edifier R1280T",
            "Edifier",
            "R1280T",
            1_690_000.0,
            "Configuration: 2.0\nOutput: 42W RMS\nDual RCA and 3.5mm AUX input\nClassic bookshelf design",
            &["Remote control", "Bass adjustment"],
            4.6,
            1754,
        ),
        record(
            703,
            "Razer Nommo V2",
            "Razer",
            "Nommo V2",
            4_490_000.0,
            "Configuration: 2.1\nOutput: 98W peak\nBluetooth 5.3, USB and 3.5mm connectivity\nRGB underglow for gaming setups",
            &["Chroma RGB", "Down-firing subwoofer", "THX Spatial Audio"],
            4.3,
            412,
        ),
        record(
            704,
            "Creative Pebble V3",
            "Creative",
            "Pebble V3",
            0.0,
            "Configuration: 2.0\nOutput: 16W peak\nUSB-C audio with Bluetooth 5.0 and 3.5mm AUX\nMinimalist desktop speakers",
            &["Clear Dialog audio processing", "Gain switch"],
            4.2,
            2893,
        ),
    ]
}

pub fn builtin_catalog(category: Category) -> Vec<RawProduct> {
    match category {
        Category::Microphone => microphones(),
        Category::Speakers => speakers(),
        _ => Vec::new(),
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawProduct>, SourceError> {
        let products = builtin_catalog(category);
        debug!(
            "Serving {} built-in products for {}",
            products.len(),
            category.key()
        );
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_cover_static_categories() {
        assert!(!builtin_catalog(Category::Microphone).is_empty());
        assert!(!builtin_catalog(Category::Speakers).is_empty());
        assert!(builtin_catalog(Category::Ram).is_empty());
    }

    #[test]
    fn serving_is_infallible() {
        let source = StaticProductSource;
        let products = tokio_test::block_on(source.fetch_category(Category::Speakers)).unwrap();
        assert_eq!(products.len(), 4);
    }
}
