//! Reusable Dioxus RSX components for the CBS map app.

mod data_field_selector;
mod region_tooltip;
mod region_type_selector;

pub use data_field_selector::DataFieldSelector;
pub use region_tooltip::RegionTooltip;
pub use region_type_selector::RegionTypeSelector;
