use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

// "5.1" also shows up in "Bluetooth 5.1", so the channel layout is only
// trusted next to a labeled line or a channel word.
static CONFIG_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)configuration\s*:\s*([257]\.[01])\b").expect("Invalid configuration regex")
});

static CONFIG_CONTEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([257]\.[01])\s*(?:ch\b|channel|system|speaker|setup)")
        .expect("Invalid configuration regex")
});

static POWER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3})\s*W(?:att)?s?\b(?:\s*RMS)?").expect("Invalid power regex"));

fn configuration(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&CONFIG_LINE_REGEX)
        .or_else(|| src.find(&CONFIG_CONTEXT_REGEX))
        .map(SpecValue::text)
}

fn power(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&POWER_REGEX)
        .map(|w| SpecValue::text(format!("{}W", w)))
}

fn connectivity(src: &SpecSource<'_>) -> Option<SpecValue> {
    if src.mentions(&["bluetooth"]) {
        Some(SpecValue::text("Bluetooth"))
    } else if src.mentions(&["optical", "toslink"]) {
        Some(SpecValue::text("Optical"))
    } else if src.mentions(&["usb"]) {
        Some(SpecValue::text("USB"))
    } else if src.mentions(&["3.5mm", "3.5 mm", "aux"]) {
        Some(SpecValue::text("3.5mm"))
    } else {
        None
    }
}

fn bluetooth(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["bluetooth"], &["no bluetooth"]).map(SpecValue::Flag)
}

fn aux(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["aux", "3.5mm", "3.5 mm"], &[]).map(SpecValue::Flag)
}

fn rgb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["rgb"], &["no rgb"]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::Speakers,
    facets: &[
        FacetDescriptor {
            key: "configuration",
            label: "Configuration",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["2.0", "2.1", "5.1", "7.1"],
            extract: configuration,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "power",
            label: "Output Power",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["20W", "40W", "60W", "80W", "120W"],
            extract: power,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "connectivity",
            label: "Connectivity",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["3.5mm", "Bluetooth", "USB", "Optical"],
            extract: connectivity,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "bluetooth",
            label: "Bluetooth",
            kind: FacetKind::Flag,
            options: &[],
            extract: bluetooth,
            fallback: Fallback::Flag(false),
        },
        FacetDescriptor {
            key: "aux",
            label: "AUX Input",
            kind: FacetKind::Flag,
            options: &[],
            extract: aux,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::extract_specs;

    #[test]
    fn extracts_speaker_facets() {
        let src = SpecSource::new(
            "Configuration: 2.1\nOutput: 80W RMS\nBluetooth 5.1 and 3.5mm AUX input",
            "Logitech Z407",
        );
        let specs = extract_specs(&SCHEMA, &src, None);
        assert_eq!(specs["configuration"], SpecValue::text("2.1"));
        assert_eq!(specs["power"], SpecValue::text("80W"));
        assert_eq!(specs["connectivity"], SpecValue::text("Bluetooth"));
        assert_eq!(specs["bluetooth"], SpecValue::Flag(true));
        assert_eq!(specs["aux"], SpecValue::Flag(true));
    }

    #[test]
    fn bluetooth_version_is_not_a_channel_layout() {
        let src = SpecSource::new("Bluetooth 5.1 wireless link", "");
        assert_eq!(configuration(&src), None);
    }
}
