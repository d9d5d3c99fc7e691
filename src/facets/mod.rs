use crate::extract::SpecSource;
use crate::models::{Category, SpecValue, UNKNOWN};
use std::collections::{BTreeMap, HashMap};

mod case_fan;
mod cpu_cooler;
mod mainboard;
mod microphone;
mod mouse;
mod ram;
mod speakers;

/// How a multi-select facet compares a product value against selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Selected value must equal the product value.
    Exact,
    /// Product value may be a joined list ("LGA1700, AM4, AM5"); any selected
    /// value occurring as a substring matches.
    ContainsAny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    MultiSelect(MatchMode),
    /// Tri-state boolean filter: unconstrained, must-be-true, must-be-false.
    Flag,
}

/// Value a facet takes when extraction finds nothing and configuration does
/// not override it.
#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    Unknown,
    Text(&'static str),
    Flag(bool),
}

impl Fallback {
    pub fn value(&self) -> SpecValue {
        match self {
            Fallback::Unknown => SpecValue::text(UNKNOWN),
            Fallback::Text(s) => SpecValue::text(*s),
            Fallback::Flag(b) => SpecValue::Flag(*b),
        }
    }
}

/// One filterable attribute of a category: how to extract it, how to match
/// it, and the full list of legal picker values.
pub struct FacetDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FacetKind,
    /// Every legal value for "show more" pickers, independent of what the
    /// current catalog contains. Empty for flags.
    pub options: &'static [&'static str],
    pub extract: fn(&SpecSource<'_>) -> Option<SpecValue>,
    pub fallback: Fallback,
}

pub struct CategorySchema {
    pub category: Category,
    pub facets: &'static [FacetDescriptor],
}

impl CategorySchema {
    pub fn facet(&self, key: &str) -> Option<&FacetDescriptor> {
        self.facets.iter().find(|f| f.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.facets.iter().map(|f| f.key)
    }
}

pub fn schema_for(category: Category) -> &'static CategorySchema {
    match category {
        Category::Ram => &ram::SCHEMA,
        Category::Mainboard => &mainboard::SCHEMA,
        Category::Mouse => &mouse::SCHEMA,
        Category::CpuCooler => &cpu_cooler::SCHEMA,
        Category::CaseFan => &case_fan::SCHEMA,
        Category::Microphone => &microphone::SCHEMA,
        Category::Speakers => &speakers::SCHEMA,
    }
}

/// Run every facet extractor of a schema over one source, landing misses on
/// the configured override (when present) or the descriptor fallback. The
/// result always carries the full key set of the schema.
pub fn extract_specs(
    schema: &CategorySchema,
    src: &SpecSource<'_>,
    overrides: Option<&HashMap<String, String>>,
) -> BTreeMap<&'static str, SpecValue> {
    let mut specs = BTreeMap::new();
    for facet in schema.facets {
        let value = (facet.extract)(src)
            .or_else(|| {
                // Configuration sources lowercase their keys, so look the
                // facet up both ways.
                overrides
                    .and_then(|o| {
                        o.get(facet.key)
                            .or_else(|| o.get(&facet.key.to_lowercase()))
                    })
                    .and_then(|raw| parse_override(facet.kind, raw))
            })
            .unwrap_or_else(|| facet.fallback.value());
        specs.insert(facet.key, value);
    }
    specs
}

fn parse_override(kind: FacetKind, raw: &str) -> Option<SpecValue> {
    match kind {
        FacetKind::Flag => raw.trim().parse::<bool>().ok().map(SpecValue::Flag),
        FacetKind::MultiSelect(_) => {
            let raw = raw.trim();
            if raw.is_empty() {
                None
            } else {
                Some(SpecValue::text(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_has_unique_keys() {
        for category in Category::ALL {
            let schema = schema_for(category);
            let mut keys: Vec<_> = schema.keys().collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), schema.facets.len(), "{}", category.key());
        }
    }

    #[test]
    fn flag_facets_carry_no_options() {
        for category in Category::ALL {
            for facet in schema_for(category).facets {
                if matches!(facet.kind, FacetKind::Flag) {
                    assert!(facet.options.is_empty(), "{}.{}", category.key(), facet.key);
                }
            }
        }
    }

    #[test]
    fn extract_specs_covers_full_key_set_on_empty_input() {
        let src = SpecSource::new("", "");
        for category in Category::ALL {
            let schema = schema_for(category);
            let specs = extract_specs(schema, &src, None);
            assert_eq!(specs.len(), schema.facets.len(), "{}", category.key());
        }
    }

    #[test]
    fn override_applies_only_on_miss() {
        let schema = schema_for(Category::Mainboard);
        let mut overrides = HashMap::new();
        overrides.insert("wifi".to_string(), "false".to_string());

        let silent = SpecSource::new("Chipset: B650", "");
        let specs = extract_specs(schema, &silent, Some(&overrides));
        assert_eq!(specs["wifi"], SpecValue::Flag(false));

        let explicit = SpecSource::new("WiFi 6E onboard", "");
        let specs = extract_specs(schema, &explicit, Some(&overrides));
        assert_eq!(specs["wifi"], SpecValue::Flag(true));
    }
}
