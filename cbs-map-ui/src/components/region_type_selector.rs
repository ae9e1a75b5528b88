//! Dropdown selector for the region granularity.

use crate::state::AppState;
use cbs_regions::RegionType;
use dioxus::prelude::*;

/// Gemeente / wijk / buurt dropdown.
/// Writes the chosen granularity to `AppState::region_type`.
#[component]
pub fn RegionTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.region_type)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<RegionType>() {
        Ok(region_type) => state.region_type.set(region_type),
        Err(err) => log::warn!("RegionTypeSelector: {err}"),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-type-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Regions: "
            }
            select {
                id: "region-type-select",
                onchange: on_change,
                for region_type in RegionType::ALL {
                    option {
                        value: region_type.code(),
                        selected: region_type == current,
                        {region_type.label()}
                    }
                }
            }
        }
    }
}
