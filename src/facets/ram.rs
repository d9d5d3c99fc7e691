use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static CAPACITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(8|16|32|64|128)\s*GB\b").expect("Invalid capacity regex")
});

static SPEED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{4})\s*(?:MHz|MT/s)\b").expect("Invalid speed regex"));

static TYPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bDDR([345])\b").expect("Invalid memory type regex"));

static LATENCY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bCL\s*(\d{1,2})\b").expect("Invalid latency regex"));

static VOLTAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d\.\d{1,2})\s*V\b").expect("Invalid voltage regex"));

static MODULES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d)\s*x\s*(\d{1,3})\s*GB\b").expect("Invalid modules regex"));

fn capacity(src: &SpecSource<'_>) -> Option<SpecValue> {
    // Kit notation ("2x16GB") describes the module, total capacity is the
    // first standalone GB token.
    src.find(&CAPACITY_REGEX)
        .map(|gb| SpecValue::text(format!("{}GB", gb)))
}

fn speed(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&SPEED_REGEX)
        .map(|mhz| SpecValue::text(format!("{}MHz", mhz)))
}

fn memory_type(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&TYPE_REGEX)
        .map(|gen| SpecValue::text(format!("DDR{}", gen)))
}

fn latency(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&LATENCY_REGEX)
        .map(|cl| SpecValue::text(format!("CL{}", cl)))
}

fn voltage(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&VOLTAGE_REGEX)
        .map(|v| SpecValue::text(format!("{}V", v)))
}

fn modules(src: &SpecSource<'_>) -> Option<SpecValue> {
    for haystack in [src.text, src.name] {
        if let Some(caps) = MODULES_REGEX.captures(haystack) {
            return Some(SpecValue::text(format!("{}x{}GB", &caps[1], &caps[2])));
        }
    }
    None
}

fn rgb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["rgb", "aura sync", "mystic light"], &["no rgb", "non-rgb"])
        .map(SpecValue::Flag)
}

fn ecc(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["ecc"], &["non-ecc", "no ecc"]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::Ram,
    facets: &[
        FacetDescriptor {
            key: "capacity",
            label: "Capacity",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["8GB", "16GB", "32GB", "64GB", "128GB"],
            extract: capacity,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "speed",
            label: "Speed",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &[
                "2666MHz", "3200MHz", "3600MHz", "4800MHz", "5600MHz", "6000MHz", "6400MHz",
            ],
            extract: speed,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "memoryType",
            label: "Memory Type",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["DDR3", "DDR4", "DDR5"],
            extract: memory_type,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "latency",
            label: "CAS Latency",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["CL14", "CL16", "CL18", "CL30", "CL32", "CL36", "CL40"],
            extract: latency,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "voltage",
            label: "Voltage",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["1.1V", "1.2V", "1.35V", "1.4V"],
            extract: voltage,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "modules",
            label: "Module Kit",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["1x8GB", "1x16GB", "2x8GB", "2x16GB", "2x32GB", "4x16GB"],
            extract: modules,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "rgb",
            label: "RGB",
            kind: FacetKind::Flag,
            options: &[],
            extract: rgb,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "ecc",
            label: "ECC",
            kind: FacetKind::Flag,
            options: &[],
            extract: ecc,
            fallback: Fallback::Flag(false),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::extract_specs;

    #[test]
    fn extracts_core_facets_from_description() {
        let src = SpecSource::new(
            "Capacity: 32GB (2x16GB)\nSpeed: 6000MHz\nLatency: CL30\nVoltage: 1.35V\nRGB lighting",
            "Corsair Vengeance DDR5",
        );
        let specs = extract_specs(&SCHEMA, &src, None);
        assert_eq!(specs["capacity"], SpecValue::text("32GB"));
        assert_eq!(specs["speed"], SpecValue::text("6000MHz"));
        assert_eq!(specs["memoryType"], SpecValue::text("DDR5"));
        assert_eq!(specs["latency"], SpecValue::text("CL30"));
        assert_eq!(specs["voltage"], SpecValue::text("1.35V"));
        assert_eq!(specs["modules"], SpecValue::text("2x16GB"));
        assert_eq!(specs["rgb"], SpecValue::Flag(true));
        assert_eq!(specs["ecc"], SpecValue::Flag(false));
    }

    #[test]
    fn unparseable_text_degrades_to_defaults() {
        let src = SpecSource::new("Great memory, very fast", "Value kit");
        let specs = extract_specs(&SCHEMA, &src, None);
        assert!(specs["capacity"].is_unknown());
        assert!(specs["speed"].is_unknown());
        assert_eq!(specs["rgb"], SpecValue::Flag(false));
    }
}
