use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static SOCKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bLGA\s?(?:1700|1851|1200|115x)\b|\bAM[45]\b|\bTR4\b")
        .expect("Invalid socket regex")
});

static RADIATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(240|280|360|420)\s*mm\b").expect("Invalid radiator regex"));

static FAN_SIZE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(92|120|140)\s*mm\b").expect("Invalid fan size regex"));

static TDP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)TDP\s*:?\s*(\d{2,3})\s*W\b").expect("Invalid TDP regex"));

static TDP_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3})\s*W\s*TDP\b").expect("Invalid TDP regex"));

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

fn cooler_type(src: &SpecSource<'_>) -> Option<SpecValue> {
    if src.mentions(&["aio", "liquid", "water cooling", "watercool"]) {
        match src.find(&RADIATOR_REGEX) {
            Some(size) => Some(SpecValue::text(format!("AIO {}mm", size))),
            None => Some(SpecValue::text("AIO")),
        }
    } else if src.mentions(&["tower", "air cooler", "heatsink", "heat pipe", "heatpipe"]) {
        Some(SpecValue::text("Air"))
    } else {
        None
    }
}

fn fan_size(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&FAN_SIZE_REGEX)
        .map(|mm| SpecValue::text(format!("{}mm", mm)))
}

fn tdp(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&TDP_REGEX)
        .or_else(|| src.find(&TDP_SUFFIX_REGEX))
        .map(|w| SpecValue::text(format!("{}W", w)))
}

fn liquid_cooling(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(
        src,
        &["aio", "liquid", "water cooling", "watercool"],
        &["air cool"],
    )
    .map(SpecValue::Flag)
}

fn pwm(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["pwm"], &[]).map(SpecValue::Flag)
}

fn rgb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["rgb", "argb"], &["no rgb", "non-rgb"]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::CpuCooler,
    facets: &[
        FacetDescriptor {
            key: "socket",
            label: "Socket Support",
            kind: FacetKind::MultiSelect(MatchMode::ContainsAny),
            options: &["LGA1700", "LGA1851", "LGA1200", "LGA115X", "AM4", "AM5", "TR4"],
            extract: socket,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "coolerType",
            label: "Type",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["Air", "AIO", "AIO 240mm", "AIO 280mm", "AIO 360mm", "AIO 420mm"],
            extract: cooler_type,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "fanSize",
            label: "Fan Size",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["92mm", "120mm", "140mm"],
            extract: fan_size,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "tdp",
            label: "TDP Rating",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["150W", "180W", "220W", "250W", "300W"],
            extract: tdp,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "liquidCooling",
            label: "Liquid Cooling",
            kind: FacetKind::Flag,
            options: &[],
            extract: liquid_cooling,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "pwm",
            label: "PWM Fan",
            kind: FacetKind::Flag,
            options: &[],
            extract: pwm,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "rgb",
            label: "RGB",
            kind: FacetKind::Flag,
            options: &[],
            extract: rgb,
            fallback: Fallback::Flag(false),
        },
    ],
};
