use crate::DataField;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Population counts for one administrative region.
///
/// The sub-population counts are trusted as delivered by the loader: they are
/// expected to be subsets of `total`, but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// CBS region code, e.g. "GM0363"
    pub id: String,
    pub name: String,
    pub total: u64,
    pub western_total: u64,
    pub non_western_total: u64,
    pub morocco: u64,
    pub antilles_and_aruba: u64,
    pub surinam: u64,
    pub turkey: u64,
    /// Missing from older data exports; reads as 0 there.
    #[serde(default)]
    pub other_non_western: u64,
}

impl Region {
    /// The count stored under `field`.
    pub fn value(&self, field: DataField) -> u64 {
        match field {
            DataField::WesternTotal => self.western_total,
            DataField::NonWesternTotal => self.non_western_total,
            DataField::Morocco => self.morocco,
            DataField::AntillesAndAruba => self.antilles_and_aruba,
            DataField::Surinam => self.surinam,
            DataField::Turkey => self.turkey,
            DataField::OtherNonWestern => self.other_non_western,
            DataField::Total => self.total,
        }
    }
}

/// Regions keyed by id. Key order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Regions(HashMap<String, Region>);

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{ "<id>": { ...region } }` mapping delivered by the loader.
    ///
    /// # Example JSON
    /// ```text
    /// { "GM0363": { "id": "GM0363", "name": "Amsterdam", "total": 872680, ... } }
    /// ```
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let regions: Regions =
            serde_json::from_str(json).context("Failed to parse region JSON")?;
        log::info!("Loaded {} regions", regions.len());
        Ok(regions)
    }

    /// Insert a region under its own id, returning any region it replaced.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.0.insert(region.id.clone(), region)
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.values()
    }
}

impl FromIterator<Region> for Regions {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut regions = Regions::new();
        for region in iter {
            regions.insert(region);
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMSTERDAM_JSON: &str = r#"{
        "GM0363": {
            "id": "GM0363",
            "name": "Amsterdam",
            "total": 1000,
            "westernTotal": 200,
            "nonWesternTotal": 350,
            "morocco": 90,
            "antillesAndAruba": 20,
            "surinam": 80,
            "turkey": 50,
            "otherNonWestern": 110
        }
    }"#;

    #[test]
    fn test_from_json() {
        let regions = Regions::from_json(AMSTERDAM_JSON).unwrap();
        assert_eq!(regions.len(), 1);
        let amsterdam = regions.get("GM0363").unwrap();
        assert_eq!(amsterdam.name, "Amsterdam");
        assert_eq!(amsterdam.value(DataField::Total), 1000);
        assert_eq!(amsterdam.value(DataField::NonWesternTotal), 350);
        assert_eq!(amsterdam.value(DataField::OtherNonWestern), 110);
    }

    #[test]
    fn test_missing_other_non_western_defaults_to_zero() {
        let json = r#"{
            "WK036300": {
                "id": "WK036300", "name": "Burgwallen-Oude Zijde", "total": 4000,
                "westernTotal": 1500, "nonWesternTotal": 600, "morocco": 100,
                "antillesAndAruba": 50, "surinam": 150, "turkey": 40
            }
        }"#;
        let regions = Regions::from_json(json).unwrap();
        let wijk = regions.get("WK036300").unwrap();
        assert_eq!(wijk.other_non_western, 0);
        assert_eq!(wijk.value(DataField::Surinam), 150);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Regions::from_json("[1, 2, 3]").is_err());
        assert!(Regions::from_json(r#"{ "x": { "id": "x" } }"#).is_err());
    }

    #[test]
    fn test_collect_keys_by_id() {
        let region = Region {
            id: "BU03630000".to_string(),
            name: "Kop Zeedijk".to_string(),
            total: 1,
            western_total: 0,
            non_western_total: 1,
            morocco: 0,
            antilles_and_aruba: 0,
            surinam: 1,
            turkey: 0,
            other_non_western: 0,
        };
        let regions: Regions = vec![region.clone(), region].into_iter().collect();
        assert_eq!(regions.len(), 1);
        assert!(regions.get("BU03630000").is_some());
    }
}
