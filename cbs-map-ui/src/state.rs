//! Map view state.
//!
//! `MapState` is the plain value: what granularity and data field are shown,
//! which region is hovered or selected, and the colour-scale bounds. `AppState`
//! bundles the same fields as Dioxus signals and is provided once per app with
//! `use_context_provider(AppState::new)`. Child components retrieve it with
//! `use_context::<AppState>()` and write the fields directly; nothing is
//! validated on assignment.

use crate::tooltip::Tooltip;
use anyhow::Context;
use cbs_regions::{DataField, Region, RegionCatalog, RegionRef, RegionType};
use cbs_utils::math::{calc_percentage, clamp, lerp, unlerp};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Lower colour-scale bound: ratios at or below it get the lightest colour.
pub const DEFAULT_MIN_COLOR_RATIO: f64 = 0.0;
/// Upper colour-scale bound: ratios at or above it get the darkest colour.
pub const DEFAULT_MAX_COLOR_RATIO: f64 = 0.5;

/// Ratio bounds used to normalize values for choropleth colouring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl ColorScale {
    /// Position of `ratio` on the scale, clamped to `[0, 1]`.
    pub fn normalize(&self, ratio: f64) -> f64 {
        clamp(unlerp(self.min_ratio, self.max_ratio, ratio), 0.0, 1.0)
    }

    /// Ratio at position `t` of the scale, used for legend ticks.
    pub fn ratio_at(&self, t: f64) -> f64 {
        lerp(self.min_ratio, self.max_ratio, t)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            min_ratio: DEFAULT_MIN_COLOR_RATIO,
            max_ratio: DEFAULT_MAX_COLOR_RATIO,
        }
    }
}

/// Plain snapshot of the map view state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapState {
    pub region_type: RegionType,
    pub data_field: DataField,
    pub hover: Option<RegionRef>,
    pub selection: Option<RegionRef>,
    pub color_scale: ColorScale,
}

impl MapState {
    /// Restore a view from JSON. Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse map state JSON")
    }

    pub fn set_hover(&mut self, region_ref: RegionRef) {
        self.hover = Some(region_ref);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn set_selection(&mut self, region_ref: RegionRef) {
        self.selection = Some(region_ref);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn hovered<'a>(&self, catalog: &'a RegionCatalog) -> Option<&'a Region> {
        catalog.get(self.hover.as_ref()?)
    }

    pub fn selected<'a>(&self, catalog: &'a RegionCatalog) -> Option<&'a Region> {
        catalog.get(self.selection.as_ref()?)
    }

    /// Colour position of `region` for the current data field.
    pub fn color_ratio(&self, region: &Region) -> f64 {
        self.color_scale
            .normalize(calc_percentage(region, self.data_field))
    }

    /// Tooltip for the hovered region, if it resolves in `catalog`.
    pub fn tooltip(&self, catalog: &RegionCatalog) -> Option<Tooltip> {
        let hover = self.hover.as_ref()?;
        let region = catalog.get(hover)?;
        Some(Tooltip::new(hover.region_type, region, self.data_field))
    }
}

/// Shared, signal-backed state for the map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded regions per granularity (empty until the loader fills it)
    pub regions: Signal<RegionCatalog>,
    /// Granularity currently drawn
    pub region_type: Signal<RegionType>,
    /// Population attribute currently coloured
    pub data_field: Signal<DataField>,
    /// Region under the pointer
    pub hover: Signal<Option<RegionRef>>,
    /// Region the user clicked
    pub selection: Signal<Option<RegionRef>>,
    pub color_scale: Signal<ColorScale>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::from_state(MapState::default())
    }

    pub fn from_state(state: MapState) -> Self {
        Self {
            regions: Signal::new(RegionCatalog::new()),
            region_type: Signal::new(state.region_type),
            data_field: Signal::new(state.data_field),
            hover: Signal::new(state.hover),
            selection: Signal::new(state.selection),
            color_scale: Signal::new(state.color_scale),
        }
    }

    /// Read every field (subscribing the caller to all of them).
    pub fn snapshot(&self) -> MapState {
        MapState {
            region_type: (self.region_type)(),
            data_field: (self.data_field)(),
            hover: self.hover.read().clone(),
            selection: self.selection.read().clone(),
            color_scale: (self.color_scale)(),
        }
    }

    pub fn set_hover(&mut self, region_ref: RegionRef) {
        log::debug!("hover: {} {}", region_ref.region_type, region_ref.id);
        self.hover.set(Some(region_ref));
    }

    pub fn clear_hover(&mut self) {
        self.hover.set(None);
    }

    pub fn set_selection(&mut self, region_ref: RegionRef) {
        log::debug!("selection: {} {}", region_ref.region_type, region_ref.id);
        self.selection.set(Some(region_ref));
    }

    pub fn clear_selection(&mut self) {
        self.selection.set(None);
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.snapshot().tooltip(&self.regions.read())
    }

    pub fn color_ratio(&self, region: &Region) -> f64 {
        self.snapshot().color_ratio(region)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
