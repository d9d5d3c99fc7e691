use super::{CategorySchema, FacetDescriptor, FacetKind, Fallback, MatchMode};
use crate::extract::{flag_from_keywords, SpecSource};
use crate::models::{Category, SpecValue};
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(80|92|120|140|200)\s*mm\b").expect("Invalid size regex"));

static RPM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{3,4})\s*RPM\b").expect("Invalid RPM regex"));

static AIRFLOW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2,3}(?:\.\d)?)\s*CFM\b").expect("Invalid airflow regex"));

static NOISE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{2}(?:\.\d)?)\s*dB\s*\(?A?\)?").expect("Invalid noise regex"));

fn size(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&SIZE_REGEX)
        .map(|mm| SpecValue::text(format!("{}mm", mm)))
}

fn rpm(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&RPM_REGEX)
        .map(|rpm| SpecValue::text(format!("{}RPM", rpm)))
}

fn airflow(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&AIRFLOW_REGEX)
        .map(|cfm| SpecValue::text(format!("{}CFM", cfm)))
}

fn noise_level(src: &SpecSource<'_>) -> Option<SpecValue> {
    src.find(&NOISE_REGEX)
        .map(|db| SpecValue::text(format!("{}dBA", db)))
}

fn connector(src: &SpecSource<'_>) -> Option<SpecValue> {
    if src.mentions(&["4-pin", "4 pin", "pwm"]) {
        Some(SpecValue::text("4-pin PWM"))
    } else if src.mentions(&["3-pin", "3 pin", "dc fan"]) {
        Some(SpecValue::text("3-pin"))
    } else {
        None
    }
}

fn pwm(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["pwm", "4-pin"], &["3-pin only"]).map(SpecValue::Flag)
}

fn rgb(src: &SpecSource<'_>) -> Option<SpecValue> {
    flag_from_keywords(src, &["rgb", "argb"], &["no rgb", "non-rgb"]).map(SpecValue::Flag)
}

pub static SCHEMA: CategorySchema = CategorySchema {
    category: Category::CaseFan,
    facets: &[
        FacetDescriptor {
            key: "size",
            label: "Size",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["80mm", "92mm", "120mm", "140mm", "200mm"],
            extract: size,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "rpm",
            label: "Max Speed",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["1200RPM", "1500RPM", "1800RPM", "2000RPM", "3000RPM"],
            extract: rpm,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "airflow",
            label: "Airflow",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["50CFM", "60CFM", "75CFM", "90CFM"],
            extract: airflow,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "noiseLevel",
            label: "Noise Level",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["20dBA", "25dBA", "30dBA", "36dBA"],
            extract: noise_level,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "connector",
            label: "Connector",
            kind: FacetKind::MultiSelect(MatchMode::Exact),
            options: &["3-pin", "4-pin PWM"],
            extract: connector,
            fallback: Fallback::Unknown,
        },
        FacetDescriptor {
            key: "pwm",
            label: "PWM",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::extract_specs;

    #[test]
    fn extracts_fan_facets() {
        let src = SpecSource::new(
            "Size: 120mm\nSpeed: 1800 RPM\nAirflow: 75 CFM\nNoise: 25 dBA\n4-pin PWM connector\nARGB lighting",
            "Lian Li UNI FAN SL120",
        );
        let specs = extract_specs(&SCHEMA, &src, None);
        assert_eq!(specs["size"], SpecValue::text("120mm"));
        assert_eq!(specs["rpm"], SpecValue::text("1800RPM"));
        assert_eq!(specs["airflow"], SpecValue::text("75CFM"));
        assert_eq!(specs["noiseLevel"], SpecValue::text("25dBA"));
        assert_eq!(specs["connector"], SpecValue::text("4-pin PWM"));
        assert_eq!(specs["pwm"], SpecValue::Flag(true));
        assert_eq!(specs["rgb"], SpecValue::Flag(true));
    }
}
