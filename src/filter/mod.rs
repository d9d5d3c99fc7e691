use crate::facets::{CategorySchema, FacetKind, MatchMode};
use crate::models::{CatalogSnapshot, Product};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Inclusive price window. `price == 0` products ("contact for price") are
/// never judged against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }
}

/// Page-owned filter selections for one category.
///
/// Multi-select facets hold a membership list (empty means unconstrained);
/// boolean facets are tri-state (`None` means unconstrained).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub price: PriceRange,
    selections: BTreeMap<&'static str, Vec<String>>,
    flags: BTreeMap<&'static str, Option<bool>>,
}

impl FilterState {
    /// Unconstrained state seeded with every facet of the schema.
    pub fn new(schema: &CategorySchema) -> Self {
        let mut selections = BTreeMap::new();
        let mut flags = BTreeMap::new();
        for facet in schema.facets {
            match facet.kind {
                FacetKind::MultiSelect(_) => {
                    selections.insert(facet.key, Vec::new());
                }
                FacetKind::Flag => {
                    flags.insert(facet.key, None);
                }
            }
        }
        Self {
            search: String::new(),
            price: PriceRange::default(),
            selections,
            flags,
        }
    }

    pub fn selected(&self, facet: &str) -> &[String] {
        self.selections.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flag(&self, facet: &str) -> Option<bool> {
        self.flags.get(facet).copied().flatten()
    }

    /// Symmetric-difference toggle: selecting an already-selected value
    /// removes it, a new value is appended in insertion order.
    pub fn toggle_value(&mut self, facet: &str, value: &str) {
        if let Some(list) = self.selections.get_mut(facet) {
            if let Some(pos) = list.iter().position(|v| v == value) {
                list.remove(pos);
            } else {
                list.push(value.to_string());
            }
        }
    }

    /// Tri-state toggle: a second click on the active value clears the
    /// constraint instead of flipping to the opposite boolean.
    pub fn toggle_flag(&mut self, facet: &str, value: bool) {
        if let Some(state) = self.flags.get_mut(facet) {
            *state = if *state == Some(value) {
                None
            } else {
                Some(value)
            };
        }
    }

    /// Restore every facet, the search term and the price range to their
    /// unconstrained defaults.
    pub fn clear(&mut self) {
        self.search.clear();
        self.price = PriceRange::default();
        for list in self.selections.values_mut() {
            list.clear();
        }
        for state in self.flags.values_mut() {
            *state = None;
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.trim().is_empty()
            && self.price == PriceRange::default()
            && self.selections.values().all(Vec::is_empty)
            && self.flags.values().all(Option::is_none)
    }
}

/// Whether one product satisfies every active constraint: AND across
/// constraint classes, OR within a facet's selected list.
pub fn matches(product: &Product, state: &FilterState, schema: &CategorySchema) -> bool {
    if product.price > 0 && !state.price.contains(product.price) {
        return false;
    }

    let term = state.search.trim().to_lowercase();
    if !term.is_empty() {
        let name = product.name.to_lowercase();
        let brand = product.brand.to_lowercase();
        if !name.contains(&term) && !brand.contains(&term) {
            return false;
        }
    }

    for facet in schema.facets {
        match facet.kind {
            FacetKind::MultiSelect(mode) => {
                let selected = state.selected(facet.key);
                if selected.is_empty() {
                    continue;
                }
                let value = product
                    .spec(facet.key)
                    .and_then(|v| v.as_text())
                    .unwrap_or("");
                let hit = match mode {
                    MatchMode::Exact => selected.iter().any(|s| s == value),
                    MatchMode::ContainsAny => selected.iter().any(|s| value.contains(s.as_str())),
                };
                if !hit {
                    return false;
                }
            }
            FacetKind::Flag => {
                if let Some(want) = state.flag(facet.key) {
                    if product.spec(facet.key).and_then(|v| v.as_flag()) != Some(want) {
                        return false;
                    }
                }
            }
        }
    }

    true
}

/// Filter a catalog against the current state. Pure and deterministic;
/// source order is preserved.
pub fn apply<'a>(
    products: &'a [Product],
    state: &FilterState,
    schema: &CategorySchema,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, state, schema))
        .collect()
}

/// Last-result cache keyed by the current inputs: filter state plus the
/// snapshot's fetch stamp. Recomputed only when either changes.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<(FilterState, DateTime<Utc>)>,
    indices: Vec<usize>,
}

impl FilterCache {
    pub fn filter<'a>(
        &mut self,
        snapshot: &'a CatalogSnapshot,
        state: &FilterState,
        schema: &CategorySchema,
    ) -> Vec<&'a Product> {
        let fresh = (state.clone(), snapshot.fetched_at);
        if self.key.as_ref() != Some(&fresh) {
            self.indices = snapshot
                .products
                .iter()
                .enumerate()
                .filter(|(_, p)| matches(p, state, schema))
                .map(|(i, _)| i)
                .collect();
            self.key = Some(fresh);
        }
        self.indices
            .iter()
            .map(|&i| &snapshot.products[i])
            .collect()
    }
}
