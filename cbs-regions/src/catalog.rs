//! Loaded region data for every granularity.
//!
//! The catalog is filled once by the embedding app and treated as read-only
//! afterwards. UI state refers into it with a [`RegionRef`] instead of holding
//! copies of region records.

use crate::{Region, RegionType, Regions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to a single region: its granularity plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRef {
    pub region_type: RegionType,
    pub id: String,
}

impl RegionRef {
    pub fn new(region_type: RegionType, id: impl Into<String>) -> Self {
        Self {
            region_type,
            id: id.into(),
        }
    }
}

/// Region maps per granularity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionCatalog {
    by_type: HashMap<RegionType, Regions>,
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the regions of one granularity.
    pub fn insert(&mut self, region_type: RegionType, regions: Regions) {
        log::debug!(
            "catalog: {} {} regions",
            regions.len(),
            region_type.code()
        );
        self.by_type.insert(region_type, regions);
    }

    pub fn regions(&self, region_type: RegionType) -> Option<&Regions> {
        self.by_type.get(&region_type)
    }

    pub fn get(&self, region_ref: &RegionRef) -> Option<&Region> {
        self.regions(region_ref.region_type)?.get(&region_ref.id)
    }

    /// Total number of regions across all granularities.
    pub fn len(&self) -> usize {
        self.by_type.values().map(Regions::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, name: &str) -> Region {
        Region {
            id: id.to_string(),
            name: name.to_string(),
            total: 100,
            western_total: 10,
            non_western_total: 20,
            morocco: 5,
            antilles_and_aruba: 2,
            surinam: 6,
            turkey: 4,
            other_non_western: 3,
        }
    }

    #[test]
    fn test_lookup_by_ref() {
        let mut catalog = RegionCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(
            RegionType::Gemeente,
            [region("GM0599", "Rotterdam")].into_iter().collect(),
        );
        catalog.insert(
            RegionType::Wijk,
            [region("WK059901", "Stadsdriehoek"), region("WK059902", "Cool")]
                .into_iter()
                .collect(),
        );

        assert_eq!(catalog.len(), 3);
        let found = catalog.get(&RegionRef::new(RegionType::Wijk, "WK059902")).unwrap();
        assert_eq!(found.name, "Cool");
    }

    #[test]
    fn test_lookup_respects_region_type() {
        let mut catalog = RegionCatalog::new();
        catalog.insert(
            RegionType::Gemeente,
            [region("GM0599", "Rotterdam")].into_iter().collect(),
        );
        assert!(catalog.get(&RegionRef::new(RegionType::Buurt, "GM0599")).is_none());
        assert!(catalog.get(&RegionRef::new(RegionType::Gemeente, "GM0000")).is_none());
    }

    #[test]
    fn test_region_ref_json_shape() {
        let region_ref = RegionRef::new(RegionType::Buurt, "BU05990110");
        let json = serde_json::to_string(&region_ref).unwrap();
        assert_eq!(json, r#"{"regionType":"buurt","id":"BU05990110"}"#);
    }
}
