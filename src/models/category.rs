use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ram,
    Mainboard,
    Mouse,
    CpuCooler,
    CaseFan,
    Microphone,
    Speakers,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Ram,
        Category::Mainboard,
        Category::Mouse,
        Category::CpuCooler,
        Category::CaseFan,
        Category::Microphone,
        Category::Speakers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Ram => "ram",
            Category::Mainboard => "mainboard",
            Category::Mouse => "mouse",
            Category::CpuCooler => "cpu_cooler",
            Category::CaseFan => "case_fan",
            Category::Microphone => "microphone",
            Category::Speakers => "speakers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ram" => Some(Category::Ram),
            "mainboard" => Some(Category::Mainboard),
            "mouse" => Some(Category::Mouse),
            "cpu_cooler" => Some(Category::CpuCooler),
            "case_fan" => Some(Category::CaseFan),
            "microphone" => Some(Category::Microphone),
            "speakers" => Some(Category::Speakers),
            _ => None,
        }
    }

    /// Category id used by the remote product API.
    pub fn remote_id(&self) -> u64 {
        match self {
            Category::Ram => 1,
            Category::Mainboard => 2,
            Category::Mouse => 3,
            Category::CpuCooler => 4,
            Category::CaseFan => 5,
            Category::Microphone => 6,
            Category::Speakers => 7,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Ram => "RAM",
            Category::Mainboard => "Mainboard",
            Category::Mouse => "Mouse",
            Category::CpuCooler => "CPU Cooler",
            Category::CaseFan => "Case Fan",
            Category::Microphone => "Microphone",
            Category::Speakers => "Speakers",
        }
    }

    /// Placeholder product name for records missing one.
    pub fn unknown_name(&self) -> String {
        format!("Unknown {}", self.display_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("gpu"), None);
    }

    #[test]
    fn remote_ids_are_unique() {
        let mut ids: Vec<u64> = Category::ALL.iter().map(|c| c.remote_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Category::ALL.len());
    }
}
