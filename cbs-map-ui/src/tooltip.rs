//! Display-ready tooltip payload.
//!
//! Built on demand from a region reference so the state only ever stores the
//! reference itself.

use cbs_regions::{DataField, Region, RegionType};
use cbs_utils::format::{format_number, format_percentage_fixed};
use cbs_utils::math::calc_percentage;
use serde::Serialize;

/// Strings shown in the hover tooltip for one region.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub region_name: String,
    /// e.g. "District"
    pub region_type: String,
    /// e.g. "Non-western"
    pub field_label: String,
    /// Count at the displayed field, grouped with no-break spaces.
    pub value: String,
    pub total: String,
    /// Share of the total, always two decimals.
    pub percentage: String,
}

impl Tooltip {
    pub fn new(region_type: RegionType, region: &Region, field: DataField) -> Self {
        Self {
            region_name: region.name.clone(),
            region_type: region_type.label().to_string(),
            field_label: field.label().to_string(),
            value: format_number(region.value(field)),
            total: format_number(region.total),
            percentage: format_percentage_fixed(calc_percentage(region, field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_strings() {
        let region = Region {
            id: "GM0344".to_string(),
            name: "Utrecht".to_string(),
            total: 361_924,
            western_total: 40_000,
            non_western_total: 72_384,
            morocco: 30_000,
            antilles_and_aruba: 3_000,
            surinam: 6_000,
            turkey: 9_000,
            other_non_western: 24_384,
        };

        let tooltip = Tooltip::new(RegionType::Gemeente, &region, DataField::NonWesternTotal);
        assert_eq!(tooltip.region_name, "Utrecht");
        assert_eq!(tooltip.region_type, "Municipality");
        assert_eq!(tooltip.field_label, "Non-western");
        assert_eq!(tooltip.value, "72\u{a0}384");
        assert_eq!(tooltip.total, "361\u{a0}924");
        assert_eq!(tooltip.percentage, "20.00%");
    }

    #[test]
    fn test_tooltip_empty_region() {
        let region = Region {
            id: "BU00000000".to_string(),
            name: "Industrieterrein".to_string(),
            total: 0,
            western_total: 0,
            non_western_total: 0,
            morocco: 0,
            antilles_and_aruba: 0,
            surinam: 0,
            turkey: 0,
            other_non_western: 0,
        };

        let tooltip = Tooltip::new(RegionType::Buurt, &region, DataField::Turkey);
        assert_eq!(tooltip.value, "0");
        assert_eq!(tooltip.percentage, "0.00%");
    }
}
