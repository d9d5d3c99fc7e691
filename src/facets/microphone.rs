use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static SAMPLE_RATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3})\s*kHz\b").expect("Invalid sample rate regex"));

fn mic_type(src: &SpecSource<'_>) -> Option<SpecValue> {
    if src.mentions(&["condenser"]) {
        Some(SpecValue::text("Condenser"))
    } else if src.mentions(&["dynamic"]) {
        Some(SpecValue::text("Dynamic"))
    } else if src.mentions(&["ribbon"]) {
        Some(SpecValue::text("Ribbon"))
    } else {
        None
    }
}

fn polar_pattern(src: &SpecSource<'_>) -> Option<SpecValue> {
    // Mics advertising several switchable patterns count as multi-pattern.
    let patterns = [
        src.mentions(&["cardioid"]),
        src.mentions(&["omnidirectional", "omni-directional"]),
        src.mentions(&["bidirectional", "bi-directional", "figure-8", "figure 8"]),
        src.mentions(&["stereo pattern", "stereo mode"]),
    ];
    let count = patterns.iter().filter(|&&p| p).count();
    if count > 1 || src.mentions(&["multi-pattern", "multipattern", "4 polar patterns"]) {
        Some(SpecValue::text("Multi-pattern"))
    } else if patterns[0] {
        Some(SpecValue::text("Cardioid"))
    } else if patterns[1] {
        Some(SpecValue::text("Omnidirectional"))
    } else if patterns[2] {
        Some(SpecValue::text("Bidirectional"))
    } else {
        None
    }
}

fn connectivity(src: &SpecSource<'_>) -> Option<SpecValue> {
    let usb = src.mentions(&["usb"]);
    let xlr = src.mentions(&["xlr"]);
    match (usb, xlr) {
        (true, true) => Some(SpecValue::text("USB/XLR")),
        (true, false) => Some(SpecValue::text("USB")),
        (false, true) => Some(SpecValue::text("XLR")),
        (false, false) => None,
    }
}

fn sample_rate(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&SAMPLE_RATE_REGEX)
        .map(|khz| SpecValue::text(format!("{}kHz", khz)))
}

fn usb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["usb"], &[]).map(SpecValue::Flag)
}

fn xlr(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["xlr"], &[]).map(SpecValue::Flag)
}

fn streaming(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["stream", "podcast", "broadcast"], &[]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::Microphone,
    facets: &[
        FacetDescriptor {
            key: "micType",
            label: "Type",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["Condenser", "Dynamic", "Ribbon"],
            extract: mic_type,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "polarPattern",
            label: "Polar Pattern",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["Cardioid", "Omnidirectional", "Bidirectional", "Multi-pattern"],
            extract: polar_pattern,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "connectivity",
            label: "Connectivity",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["USB", "XLR", "USB/XLR"],
            extract: connectivity,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "sampleRate",
            label: "Sample Rate",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["48kHz", "96kHz", "192kHz"],
            extract: sample_rate,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "usb",
            label: "USB",
            kind: FacetKind::Flag,
            options: &[],
            extract: usb,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "xlr",
            label: "XLR",
            kind: FacetKind::Flag,
            options: &[],
            extract: xlr,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "streaming",
            label: "Streaming",
            kind: FacetKind::Flag,
            options: &[],
            extract: streaming,
            fallback: Fallback::Flag(false),
        },
    ],
};
