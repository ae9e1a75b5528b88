//! Dropdown selector for the displayed population attribute.

use crate::state::AppState;
use cbs_regions::DataField;
use dioxus::prelude::*;

/// Data field dropdown.
/// Writes the chosen field to `AppState::data_field`.
#[component]
pub fn DataFieldSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.data_field)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<DataField>() {
        Ok(field) => state.data_field.set(field),
        Err(err) => log::warn!("DataFieldSelector: {err}"),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "data-field-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Show: "
            }
            select {
                id: "data-field-select",
                onchange: on_change,
                for field in DataField::ALL {
                    option {
                        value: field.key(),
                        selected: field == current,
                        {field.label()}
                    }
                }
            }
        }
    }
}
