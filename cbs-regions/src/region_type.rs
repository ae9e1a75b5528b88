use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Administrative granularity of a region.
///
/// Gemeenten contain wijken, which contain buurten. The hierarchy is nominal
/// only; records never point at their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    /// Municipality
    Gemeente,
    /// District
    Wijk,
    /// Neighbourhood
    Buurt,
}

impl RegionType {
    /// All granularities, broadest first.
    pub const ALL: [RegionType; 3] = [RegionType::Gemeente, RegionType::Wijk, RegionType::Buurt];

    /// The CBS code used in data files and serialized state.
    pub fn code(&self) -> &'static str {
        match self {
            RegionType::Gemeente => "gemeente",
            RegionType::Wijk => "wijk",
            RegionType::Buurt => "buurt",
        }
    }

    /// Human readable label for selectors and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            RegionType::Gemeente => "Municipality",
            RegionType::Wijk => "District",
            RegionType::Buurt => "Neighbourhood",
        }
    }
}

impl Default for RegionType {
    fn default() -> Self {
        RegionType::Gemeente
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RegionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionType::ALL
            .into_iter()
            .find(|region_type| region_type.code() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown region type: {s}"))
    }
}
