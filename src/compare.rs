use crate::extract::spec_lines;
use crate::models::{CatalogSnapshot, Product};

/// Shown instead of a number for the 0 price sentinel.
pub const CONTACT_FOR_PRICE: &str = "Liên hệ";

/// One row of the side-by-side comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRow {
    pub label: String,
    pub value: String,
}

impl CompareRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// VND display price: dot-grouped thousands, "Liên hệ" for the 0 sentinel.
pub fn format_price_vnd(price: u64) -> String {
    if price == 0 {
        return CONTACT_FOR_PRICE.to_string();
    }
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{} VND", grouped)
}

/// Flatten one selected product into ordered display rows: five fixed rows,
/// then the raw spec description line by line. No selection yields no rows;
/// the caller renders its own placeholder.
pub fn comparison_rows(selected: Option<&Product>) -> Vec<CompareRow> {
    let Some(product) = selected else {
        return Vec::new();
    };

    let mut rows = vec![
        CompareRow::new("Name", product.name.clone()),
        CompareRow::new("Brand", product.brand.clone()),
        CompareRow::new("Model", product.model.clone()),
        CompareRow::new("Category", product.category.display_name()),
        CompareRow::new("Price", format_price_vnd(product.price)),
    ];
    rows.extend(
        spec_lines(&product.specs_text)
            .into_iter()
            .map(|(key, value)| CompareRow::new(key, value)),
    );
    rows
}

/// Cross-category product search for the comparison picker.
///
/// Unlike category pages, an empty query here means "nothing picked yet" and
/// yields an empty result set, not the whole catalog.
pub fn search_all<'a>(catalogs: &'a [CatalogSnapshot], query: &str) -> Vec<&'a Product> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    catalogs
        .iter()
        .flat_map(|snapshot| snapshot.products.iter())
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.brand.to_lowercase().contains(&term)
                || p.category.display_name().to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use pretty_assertions::assert_eq;

    fn product(name: &str, brand: &str, category: Category, price: u64) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            brand: brand.to_string(),
            model: format!("{}-01", brand),
            price,
            category,
            ..Default::default()
        }
    }

    #[test]
    fn price_grouping_uses_dots() {
        assert_eq!(format_price_vnd(999), "999 VND");
        assert_eq!(format_price_vnd(1500), "1.500 VND");
        assert_eq!(format_price_vnd(1_500_000), "1.500.000 VND");
        assert_eq!(format_price_vnd(12_345_678), "12.345.678 VND");
    }

    #[test]
    fn zero_price_shows_contact_sentinel() {
        assert_eq!(format_price_vnd(0), CONTACT_FOR_PRICE);
    }

    #[test]
    fn fixed_rows_come_first_in_order() {
        let mut p = product("Aorus Elite", "Gigabyte", Category::Mainboard, 4_290_000);
        p.specs_text = "Socket: AM5\nChipset: B650\n\nBadLine".to_string();

        let rows = comparison_rows(Some(&p));
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Name", "Brand", "Model", "Category", "Price", "Socket", "Chipset"]
        );
        assert_eq!(rows[4].value, "4.290.000 VND");
        assert_eq!(rows[5], CompareRow::new("Socket", "AM5"));
        assert_eq!(rows[6], CompareRow::new("Chipset", "B650"));
    }

    #[test]
    fn no_selection_yields_no_rows() {
        assert!(comparison_rows(None).is_empty());
    }

    #[test]
    fn empty_query_yields_empty_result_set() {
        let catalogs = vec![CatalogSnapshot::new(
            Category::Mouse,
            vec![product("G502", "Logitech", Category::Mouse, 990_000)],
        )];
        assert!(search_all(&catalogs, "").is_empty());
        assert!(search_all(&catalogs, "   ").is_empty());
    }

    #[test]
    fn query_matches_name_brand_or_category() {
        let catalogs = vec![
            CatalogSnapshot::new(
                Category::Mouse,
                vec![product("G502 Hero", "Logitech", Category::Mouse, 990_000)],
            ),
            CatalogSnapshot::new(
                Category::Microphone,
                vec![product("QuadCast S", "HyperX", Category::Microphone, 0)],
            ),
        ];

        assert_eq!(search_all(&catalogs, "g502").len(), 1);
        assert_eq!(search_all(&catalogs, "HYPERX").len(), 1);
        assert_eq!(search_all(&catalogs, "microphone").len(), 1);
        assert!(search_all(&catalogs, "keyboard").is_empty());
    }
}
