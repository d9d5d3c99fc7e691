use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static DPI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{3,5})\s*DPI\b").expect("Invalid DPI regex"));

static BUTTONS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*(?:programmable\s+)?buttons\b").expect("Invalid buttons regex")
});

static WEIGHT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3})\s*g(?:rams)?\b").expect("Invalid weight regex"));

fn dpi(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&DPI_REGEX).map(SpecValue::text)
}

fn sensor_type(src: &SpecSource<'_>) -> Option<SpecValue> {
    if src.mentions(&["laser"]) {
        Some(SpecValue::text("Laser"))
    } else if src.mentions(&["optical", "hero", "focus pro"]) {
        Some(SpecValue::text("Optical"))
    } else {
        None
    }
}

fn connectivity(src: &SpecSource<'_>) -> Option<SpecValue> {
    let wireless = src.mentions(&["wireless", "2.4ghz", "2.4 ghz", "lightspeed"]);
    let wired = src.mentions(&["wired", "usb cable"]);
    match (wireless, wired) {
        (true, true) => Some(SpecValue::text("Hybrid")),
        (true, false) => Some(SpecValue::text("Wireless")),
        (false, true) => Some(SpecValue::text("Wired")),
        (false, false) => None,
    }
}

fn buttons(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&BUTTONS_REGEX).map(SpecValue::text)
}

fn weight(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&WEIGHT_REGEX)
        .map(|g| SpecValue::text(format!("{}g", g)))
}

fn rgb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["rgb", "chroma"], &["no rgb", "non-rgb"]).map(SpecValue::Flag)
}

fn wireless(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(
        src,
        &["wireless", "2.4ghz", "2.4 ghz", "lightspeed"],
        &["wired only"],
    )
    .map(SpecValue::Flag)
}

fn gaming(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["gaming", "esports"], &["office", "productivity"])
        .map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::Mouse,
    facets: &[
        FacetDescriptor {
            key: "dpi",
            label: "Max DPI",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["8000", "12000", "16000", "20000", "25600", "30000"],
            extract: dpi,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "sensorType",
            label: "Sensor",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["Optical", "Laser"],
            extract: sensor_type,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "connectivity",
            label: "Connectivity",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["Wired", "Wireless", "Hybrid"],
            extract: connectivity,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "buttons",
            label: "Buttons",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["5", "6", "7", "8", "11"],
            extract: buttons,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "weight",
            label: "Weight",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["59g", "63g", "69g", "85g", "95g", "110g"],
            extract: weight,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "rgb",
            label: "RGB",
            kind: FacetKind::Flag,
            options: &[],
            extract: rgb,
            fallback: Fallback::Flag(true),
        },
        FacetDescriptor {
            key: "wireless",
            label: "Wireless",
            kind: FacetKind::Flag,
            options: &[],
            extract: wireless,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "gaming",
            label: "Gaming",
            kind: FacetKind::Flag,
            options: &[],
            extract: gaming,
            fallback: Fallback::Flag(true),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::extract_specs;

    #[test]
    fn extracts_mouse_facets() {
        let src = SpecSource::new(
            "DPI: 25600\nSensor: HERO 25K optical\n11 programmable buttons\nWeight: 110g\nWireless 2.4GHz",
            "Logitech G502 Lightspeed",
        );
        let specs = extract_specs(&SCHEMA, &src, None);
        assert_eq!(specs["dpi"], SpecValue::text("25600"));
        assert_eq!(specs["sensorType"], SpecValue::text("Optical"));
        assert_eq!(specs["connectivity"], SpecValue::text("Wireless"));
        assert_eq!(specs["buttons"], SpecValue::text("11"));
        assert_eq!(specs["weight"], SpecValue::text("110g"));
        assert_eq!(specs["wireless"], SpecValue::Flag(true));
    }

    #[test]
    fn silent_mouse_keeps_shipped_true_defaults() {
        let specs = extract_specs(&SCHEMA, &SpecSource::new("", ""), None);
        assert_eq!(specs["rgb"], SpecValue::Flag(true));
        assert_eq!(specs["gaming"], SpecValue::Flag(true));
        assert_eq!(specs["wireless"], SpecValue::Flag(false));
    }
}
