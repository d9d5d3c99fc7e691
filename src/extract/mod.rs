use html_escape::decode_html_entities;
use regex::Regex;

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Split a raw multi-line spec description into `(key, value)` pairs.
///
/// Each non-blank line is split on the first `:`; lines without a colon or
/// with an empty side are dropped, not reported.
pub fn spec_lines(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = clean_text(key);
            let value = clean_text(value);
            if key.is_empty() || value.is_empty() {
                None
            } else {
                Some((key, value))
            }
        })
        .collect()
}

/// Raw material one facet extractor works from: the spec description plus the
/// product name as a secondary source (names often carry tokens the
/// description omits, e.g. "DDR5" or a socket family).
#[derive(Debug, Clone, Copy)]
pub struct SpecSource<'a> {
    pub text: &'a str,
    pub name: &'a str,
}

impl<'a> SpecSource<'a> {
    pub fn new(text: &'a str, name: &'a str) -> Self {
        Self { text, name }
    }

    /// First regex hit, description first, then the name. Returns capture
    /// group 1 when the pattern has one, otherwise the whole match.
    pub fn find(&self, re: &Regex) -> Option<String> {
        for haystack in [self.text, self.name] {
            if let Some(caps) = re.captures(haystack) {
                let m = caps.get(1).or_else(|| caps.get(0));
                if let Some(m) = m {
                    return Some(m.as_str().to_string());
                }
            }
        }
        None
    }

    /// All distinct whole-pattern hits across description and name, in first
    /// occurrence order. Used for facets whose value is a joined list
    /// (mainboard and cooler socket support).
    pub fn find_all(&self, re: &Regex) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for haystack in [self.text, self.name] {
            for m in re.find_iter(haystack) {
                let token = m.as_str().to_string();
                if !out.contains(&token) {
                    out.push(token);
                }
            }
        }
        out
    }

    /// Case-insensitive keyword presence across description and name.
    pub fn mentions(&self, needles: &[&str]) -> bool {
        let text = self.text.to_lowercase();
        let name = self.name.to_lowercase();
        needles
            .iter()
            .any(|n| text.contains(&n.to_lowercase()) || name.contains(&n.to_lowercase()))
    }
}

/// Keyword-driven boolean extraction: explicit negations win over mentions,
/// and silence stays undecided so the facet fallback applies.
pub fn flag_from_keywords(src: &SpecSource<'_>, yes: &[&str], no: &[&str]) -> Option<bool> {
    if src.mentions(no) {
        Some(false)
    } else if src.mentions(yes) {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static DDR: Lazy<Regex> = Lazy::new(|| Regex::new(r"DDR[345]").unwrap());
    static CAPACITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*GB").unwrap());

    #[test]
    fn clean_text_collapses_whitespace_and_entities() {
        assert_eq!(clean_text("  16GB &amp;\n  DDR5 "), "16GB & DDR5");
    }

    #[test]
    fn spec_lines_drops_malformed_lines() {
        let rows = spec_lines("Socket: AM5\nChipset: B650\n\nBadLine");
        assert_eq!(
            rows,
            vec![
                ("Socket".to_string(), "AM5".to_string()),
                ("Chipset".to_string(), "B650".to_string()),
            ]
        );
    }

    #[test]
    fn spec_lines_drops_empty_sides() {
        let rows = spec_lines(": no key\nWiFi:\nForm Factor: ATX");
        assert_eq!(rows, vec![("Form Factor".to_string(), "ATX".to_string())]);
    }

    #[test]
    fn find_falls_back_to_name() {
        let src = SpecSource::new("Latency: CL36", "Kingston Fury 32GB DDR5");
        assert_eq!(src.find(&DDR), Some("DDR5".to_string()));
        assert_eq!(src.find(&CAPACITY), Some("32".to_string()));
    }

    #[test]
    fn find_all_dedups_in_order() {
        static SOCKET: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"LGA\s?1700|AM[45]").unwrap());
        let src = SpecSource::new("Socket: LGA1700, AM4, AM5, AM4", "");
        assert_eq!(src.find_all(&SOCKET), vec!["LGA1700", "AM4", "AM5"]);
    }

    #[test]
    fn flag_negation_wins() {
        let src = SpecSource::new("No RGB lighting", "");
        assert_eq!(
            flag_from_keywords(&src, &["rgb"], &["no rgb"]),
            Some(false)
        );
        let silent = SpecSource::new("Plain black fan", "");
        assert_eq!(flag_from_keywords(&silent, &["rgb"], &["no rgb"]), None);
    }
}
