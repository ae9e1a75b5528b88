//! Region data model for the CBS population composition map.
//!
//! - `region`: a single `Region` record and the id-keyed `Regions` map
//! - `region_type`: granularity levels (gemeente / wijk / buurt)
//! - `data_field`: the population attributes that can be displayed
//! - `catalog`: loaded regions per granularity plus `RegionRef` lookups

pub mod catalog;
pub mod data_field;
pub mod region;
pub mod region_type;

pub use catalog::{RegionCatalog, RegionRef};
pub use data_field::DataField;
pub use region::{Region, Regions};
pub use region_type::RegionType;
