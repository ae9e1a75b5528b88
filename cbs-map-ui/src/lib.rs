//! Dioxus state, sensors and components for the CBS population composition map.
//!
//! This crate provides:
//! - `state`: the map view state, both as a plain `MapState` and as the
//!   signal-backed `AppState` shared through Dioxus context
//! - `tooltip`: display-ready strings for the hovered region
//! - `sensor`: pointer and device-pixel-ratio sensors over an `EventHost`
//! - `hooks`: `use_mouse` / `use_device_pixel_ratio` wrapping the sensors
//! - `components`: selectors and the hover tooltip

pub mod components;
pub mod hooks;
pub mod sensor;
pub mod state;
pub mod tooltip;
