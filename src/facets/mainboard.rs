use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static SOCKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bLGA\s?(?:1700|1851|1200)\b|\bAM[45]\b|\bTR4\b|\bsTRX4\b")
        .expect("Invalid socket regex")
});

static CHIPSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Z890|Z790|B760|H770|H610|X870E|X870|X670E|X670|B650E|B650|A620)\b")
        .expect("Invalid chipset regex")
});

static MEMORY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bDDR([45])\b").expect("Invalid memory regex"));

static PCIE_COUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)PCIe\s*(?:x16\s*)?slots?\s*:?\s*(\d)").expect("Invalid PCIe regex")
});

static PCIE_TIMES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d)\s*x\s*PCIe\b").expect("Invalid PCIe regex"));

/// Boards list every CPU socket they accept; keep the joined list so the
/// contains-any filter can hit each one.
fn socket(src: &SpecSource<'_>) -> Option<SpecValue> {
    let sockets: Vec<String> = src
        .find_all(&SOCKET_REGEX)
        .into_iter()
        .map(|s| s.to_uppercase().replace(' ', ""))
        .collect();
    if sockets.is_empty() {
        None
    } else {
        Some(SpecValue::text(sockets.join(", ")))
    }
}

fn chipset(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&CHIPSET_REGEX)
        .map(|c| SpecValue::text(c.to_uppercase()))
}

fn form_factor(src: &SpecSource<'_>) -> Option<SpecValue> {
    // Longer tokens first so plain "ATX" does not shadow the rest.
    if src.mentions(&["e-atx", "eatx"]) {
        Some(SpecValue::text("E-ATX"))
    } else if src.mentions(&["micro-atx", "micro atx", "matx", "m-atx"]) {
        Some(SpecValue::text("Micro-ATX"))
    } else if src.mentions(&["mini-itx", "mini itx", "itx"]) {
        Some(SpecValue::text("Mini-ITX"))
    } else if src.mentions(&["atx"]) {
        Some(SpecValue::text("ATX"))
    } else {
        None
    }
}

fn memory_type(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&MEMORY_REGEX)
        .map(|gen| SpecValue::text(format!("DDR{}", gen)))
}

fn pcie_slots(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&PCIE_COUNT_REGEX)
        .or_else(|| src.find(&PCIE_TIMES_REGEX))
        .map(SpecValue::text)
}

fn wifi(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(
        src,
        &["wifi", "wi-fi", "wireless lan"],
        &["no wifi", "without wifi"],
    )
    .map(SpecValue::Flag)
}

fn bluetooth(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["bluetooth"], &["no bluetooth"]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::Mainboard,
    facets: &[
        FacetDescriptor {
            key: "socket",
            label: "Socket",
            kind: FacetKind::MultiSelect(MatchMode::ContainsAny),
            options: &["LGA1700", "LGA1851", "LGA1200", "AM4", "AM5", "TR4"],
            extract: socket,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "chipset",
            label: "Chipset",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &[
                "Z890", "Z790", "B760", "H770", "H610", "X870E", "X670E", "B650E", "B650", "A620",
            ],
            extract: chipset,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "formFactor",
            label: "Form Factor",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["ATX", "Micro-ATX", "Mini-ITX", "E-ATX"],
            extract: form_factor,
            fallback: Fallback::Text("ATX"),
        },
        FacetDescriptor {
            key: "memoryType",
            label: "Memory Type",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["DDR4", "DDR5"],
            extract: memory_type,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "pcieSlots",
            label: "PCIe Slots",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["1", "2", "3", "4"],
            extract: pcie_slots,
            fallback: Fallback::Text("2"),
        },
        FacetDescriptor {
            key: "wifi",
            label: "WiFi",
            kind: FacetKind::Flag,
            options: &[],
            extract: wifi,
            fallback: Fallback::Flag(true),
        },
        FacetDescriptor {
            key: "bluetooth",
            label: "Bluetooth",
            kind: FacetKind::Flag,
            options: &[],
            extract: bluetooth,
            fallback: Fallback::Flag(true),
        },
    ],
};
