//! Dioxus hooks over the window sensors.
//!
//! Each hook activates its sensor when the component first renders and
//! deactivates it when the component is dropped. The `*_on` variants take the
//! host to listen on; the plain hooks listen on the browser window.

use crate::sensor::{DevicePixelRatioSensor, EventHost, PagePosition, PointerSensor, WebWindow};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn web_window() -> Rc<dyn EventHost> {
    Rc::new(WebWindow::new())
}

/// Live page coordinates of the mouse pointer.
pub fn use_mouse() -> Signal<PagePosition> {
    use_mouse_on(web_window)
}

/// Current `window.devicePixelRatio`, refreshed on resize.
pub fn use_device_pixel_ratio() -> Signal<f64> {
    use_device_pixel_ratio_on(web_window)
}

/// Pointer position on the host returned by `make_host` (called once).
pub fn use_mouse_on(make_host: impl FnOnce() -> Rc<dyn EventHost>) -> Signal<PagePosition> {
    let mut position = use_signal(PagePosition::default);

    let sensor = use_hook(move || {
        let mut sensor = PointerSensor::new(make_host()).on_update(move |new_position| {
            position.set(new_position);
        });
        if let Err(err) = sensor.activate() {
            log::warn!("use_mouse: {err:#}");
        }
        Rc::new(RefCell::new(sensor))
    });

    use_drop(move || sensor.borrow_mut().deactivate());

    position
}

/// Device pixel ratio of the host returned by `make_host` (called once).
pub fn use_device_pixel_ratio_on(make_host: impl FnOnce() -> Rc<dyn EventHost>) -> Signal<f64> {
    let host = use_hook(move || make_host());
    let initial = host.clone();
    let mut ratio = use_signal(move || initial.device_pixel_ratio());

    let sensor = use_hook(move || {
        let mut sensor = DevicePixelRatioSensor::new(host).on_update(move |new_ratio| {
            ratio.set(new_ratio);
        });
        if let Err(err) = sensor.activate() {
            log::warn!("use_device_pixel_ratio: {err:#}");
        }
        Rc::new(RefCell::new(sensor))
    });

    use_drop(move || sensor.borrow_mut().deactivate());

    ratio
}
