//! Tooltip for the hovered region, following the pointer.

use crate::hooks::use_mouse;
use crate::state::AppState;
use dioxus::prelude::*;

/// Distance in pixels between the pointer and the tooltip's top-left corner.
const POINTER_OFFSET: f64 = 12.0;

/// Shows name, count and share of the hovered region next to the pointer.
/// Renders nothing while no region is hovered.
#[component]
pub fn RegionTooltip() -> Element {
    let state = use_context::<AppState>();
    let mouse = use_mouse();

    let Some(tooltip) = state.tooltip() else {
        return rsx! {};
    };

    let position = mouse();
    let style = format!(
        "position: absolute; left: {}px; top: {}px; pointer-events: none; \
         padding: 6px 8px; background: #fff; border: 1px solid #ccc; border-radius: 4px; \
         font-size: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.2);",
        position.x + POINTER_OFFSET,
        position.y + POINTER_OFFSET
    );

    rsx! {
        div {
            class: "region-tooltip",
            style: "{style}",
            strong { "{tooltip.region_name}" }
            span {
                style: "color: #666; margin-left: 4px;",
                "({tooltip.region_type})"
            }
            div { "{tooltip.field_label}: {tooltip.value} of {tooltip.total}" }
            div { "{tooltip.percentage}" }
        }
    }
}
