use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A population attribute of a [`Region`](crate::Region) that the map can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataField {
    WesternTotal,
    NonWesternTotal,
    Morocco,
    AntillesAndAruba,
    Surinam,
    Turkey,
    OtherNonWestern,
    Total,
}

impl DataField {
    pub const ALL: [DataField; 8] = [
        DataField::WesternTotal,
        DataField::NonWesternTotal,
        DataField::Morocco,
        DataField::AntillesAndAruba,
        DataField::Surinam,
        DataField::Turkey,
        DataField::OtherNonWestern,
        DataField::Total,
    ];

    /// Key of the field in the region JSON records.
    pub fn key(&self) -> &'static str {
        match self {
            DataField::WesternTotal => "westernTotal",
            DataField::NonWesternTotal => "nonWesternTotal",
            DataField::Morocco => "morocco",
            DataField::AntillesAndAruba => "antillesAndAruba",
            DataField::Surinam => "surinam",
            DataField::Turkey => "turkey",
            DataField::OtherNonWestern => "otherNonWestern",
            DataField::Total => "total",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataField::WesternTotal => "Western",
            DataField::NonWesternTotal => "Non-western",
            DataField::Morocco => "Morocco",
            DataField::AntillesAndAruba => "Antilles and Aruba",
            DataField::Surinam => "Surinam",
            DataField::Turkey => "Turkey",
            DataField::OtherNonWestern => "Other non-western",
            DataField::Total => "Total",
        }
    }

    /// True for the per-origin buckets that make up the non-western total.
    pub fn is_origin_breakdown(&self) -> bool {
        matches!(
            self,
            DataField::Morocco
                | DataField::AntillesAndAruba
                | DataField::Surinam
                | DataField::Turkey
                | DataField::OtherNonWestern
        )
    }
}

impl Default for DataField {
    fn default() -> Self {
        DataField::NonWesternTotal
    }
}

impl fmt::Display for DataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DataField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown data field: {s}"))
    }
}
