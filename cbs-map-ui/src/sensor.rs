//! Pointer and device-pixel-ratio sensors.
//!
//! A sensor owns at most one listener registration on an [`EventHost`]. The
//! registration is made by `activate()` and removed by `deactivate()` or when
//! the sensor is dropped, so a sensor can never leak a window listener.
//!
//! [`WebWindow`] is the browser host. [`HeadlessHost`] dispatches synthetic
//! events and is used outside the browser.

use anyhow::Context;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pixel density assumed when no window is available.
pub const DEFAULT_DEVICE_PIXEL_RATIO: f64 = 1.0;

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PagePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Resize,
}

impl EventKind {
    /// DOM event type registered on the window.
    pub fn dom_event(&self) -> &'static str {
        match self {
            EventKind::PointerMove => "mousemove",
            EventKind::Resize => "resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMove(PagePosition),
    Resize { device_pixel_ratio: f64 },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove(_) => EventKind::PointerMove,
            HostEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Handler = Box<dyn FnMut(&HostEvent)>;

/// The windowing environment sensors listen to.
pub trait EventHost {
    fn add_listener(&self, kind: EventKind, handler: Handler) -> anyhow::Result<ListenerId>;
    /// Returns false if `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
    fn device_pixel_ratio(&self) -> f64;
}

/// Current `window.devicePixelRatio`, or 1.0 outside a browser window.
pub fn current_device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(DEFAULT_DEVICE_PIXEL_RATIO)
}

struct WebListener {
    kind: EventKind,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Browser host backed by `web_sys::Window`.
///
/// Each registration keeps its JS closure alive until it is removed.
#[derive(Default)]
pub struct WebWindow {
    listeners: RefCell<HashMap<ListenerId, WebListener>>,
    next_id: Cell<u64>,
}

impl WebWindow {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHost for WebWindow {
    fn add_listener(&self, kind: EventKind, mut handler: Handler) -> anyhow::Result<ListenerId> {
        let window = web_sys::window().context("No global window to listen on")?;

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let host_event = match kind {
                EventKind::PointerMove => match event.dyn_ref::<web_sys::MouseEvent>() {
                    Some(mouse) => HostEvent::PointerMove(PagePosition {
                        x: f64::from(mouse.page_x()),
                        y: f64::from(mouse.page_y()),
                    }),
                    None => return,
                },
                EventKind::Resize => HostEvent::Resize {
                    device_pixel_ratio: current_device_pixel_ratio(),
                },
            };
            handler(&host_event);
        });

        window
            .add_event_listener_with_callback(kind.dom_event(), closure.as_ref().unchecked_ref())
            .map_err(|err| anyhow::anyhow!("Failed to add {} listener: {:?}", kind.dom_event(), err))?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .insert(id, WebListener { kind, closure });
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let Some(listener) = self.listeners.borrow_mut().remove(&id) else {
            return false;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.remove_event_listener_with_callback(
                listener.kind.dom_event(),
                listener.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to remove {} listener: {:?}", listener.kind.dom_event(), err);
            }
        }
        true
    }

    fn device_pixel_ratio(&self) -> f64 {
        current_device_pixel_ratio()
    }
}

struct HeadlessListener {
    id: ListenerId,
    kind: EventKind,
    handler: Rc<RefCell<Handler>>,
}

/// In-process host driven by synthetic events.
pub struct HeadlessHost {
    listeners: RefCell<Vec<HeadlessListener>>,
    next_id: Cell<u64>,
    device_pixel_ratio: Cell<f64>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::with_device_pixel_ratio(DEFAULT_DEVICE_PIXEL_RATIO)
    }

    pub fn with_device_pixel_ratio(ratio: f64) -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            device_pixel_ratio: Cell::new(ratio),
        }
    }

    /// Deliver `event` to every listener of its kind, in registration order.
    pub fn dispatch(&self, event: HostEvent) {
        if let HostEvent::Resize { device_pixel_ratio } = event {
            self.device_pixel_ratio.set(device_pixel_ratio);
        }
        // Handlers run without the registry borrowed so they may add or
        // remove listeners themselves.
        let handlers: Vec<(ListenerId, Rc<RefCell<Handler>>)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == event.kind())
            .map(|listener| (listener.id, Rc::clone(&listener.handler)))
            .collect();
        for (id, handler) in handlers {
            // removed by an earlier handler of this event
            if !self.is_registered(id) {
                continue;
            }
            match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(&event),
                Err(_) => log::warn!(
                    "HeadlessHost: skipped re-entrant {} dispatch to {:?}",
                    event.kind().dom_event(),
                    id
                ),
            }
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|listener| listener.id == id)
    }

    pub fn move_pointer(&self, x: f64, y: f64) {
        self.dispatch(HostEvent::PointerMove(PagePosition { x, y }));
    }

    pub fn resize(&self, device_pixel_ratio: f64) {
        self.dispatch(HostEvent::Resize { device_pixel_ratio });
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHost for HeadlessHost {
    fn add_listener(&self, kind: EventKind, handler: Handler) -> anyhow::Result<ListenerId> {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(HeadlessListener {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        Ok(id)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.get()
    }
}

/// One listener registration on a host, removed on `detach` or drop.
pub struct ScopedListener {
    host: Rc<dyn EventHost>,
    kind: EventKind,
    id: Option<ListenerId>,
}

impl ScopedListener {
    pub fn new(host: Rc<dyn EventHost>, kind: EventKind) -> Self {
        Self {
            host,
            kind,
            id: None,
        }
    }

    /// Register `handler`. A no-op while already attached.
    pub fn attach(&mut self, handler: Handler) -> anyhow::Result<()> {
        if self.id.is_some() {
            return Ok(());
        }
        let id = self.host.add_listener(self.kind, handler)?;
        log::debug!("sensor: attached {} listener", self.kind.dom_event());
        self.id = Some(id);
        Ok(())
    }

    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            self.host.remove_listener(id);
            log::debug!("sensor: detached {} listener", self.kind.dom_event());
        }
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    pub fn host(&self) -> &Rc<dyn EventHost> {
        &self.host
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        self.detach();
    }
}

type Callback<T> = Rc<RefCell<Box<dyn FnMut(T)>>>;

fn notify<T: Copy>(callback: &Option<Callback<T>>, value: T) {
    if let Some(callback) = callback {
        if let Ok(mut callback) = callback.try_borrow_mut() {
            (*callback)(value);
        }
    }
}

/// Live pointer position, updated on every pointer move while active.
pub struct PointerSensor {
    position: Rc<Cell<PagePosition>>,
    on_update: Option<Callback<PagePosition>>,
    listener: ScopedListener,
}

impl PointerSensor {
    pub fn new(host: Rc<dyn EventHost>) -> Self {
        Self {
            position: Rc::new(Cell::new(PagePosition::default())),
            on_update: None,
            listener: ScopedListener::new(host, EventKind::PointerMove),
        }
    }

    /// Call `callback` with every new position. Takes effect on the next `activate()`.
    pub fn on_update(mut self, callback: impl FnMut(PagePosition) + 'static) -> Self {
        self.on_update = Some(Rc::new(RefCell::new(Box::new(callback))));
        self
    }

    pub fn activate(&mut self) -> anyhow::Result<()> {
        if self.listener.is_attached() {
            return Ok(());
        }
        let position = Rc::clone(&self.position);
        let on_update = self.on_update.clone();
        self.listener.attach(Box::new(move |event| {
            if let HostEvent::PointerMove(new_position) = *event {
                position.set(new_position);
                notify(&on_update, new_position);
            }
        }))
    }

    pub fn deactivate(&mut self) {
        self.listener.detach();
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_attached()
    }

    pub fn position(&self) -> PagePosition {
        self.position.get()
    }
}

/// Display pixel density, refreshed on window resize while active.
pub struct DevicePixelRatioSensor {
    ratio: Rc<Cell<f64>>,
    on_update: Option<Callback<f64>>,
    listener: ScopedListener,
}

impl DevicePixelRatioSensor {
    pub fn new(host: Rc<dyn EventHost>) -> Self {
        let ratio = host.device_pixel_ratio();
        Self {
            ratio: Rc::new(Cell::new(ratio)),
            on_update: None,
            listener: ScopedListener::new(host, EventKind::Resize),
        }
    }

    /// Call `callback` with the ratio after every resize. Takes effect on the next `activate()`.
    pub fn on_update(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_update = Some(Rc::new(RefCell::new(Box::new(callback))));
        self
    }

    pub fn activate(&mut self) -> anyhow::Result<()> {
        if self.listener.is_attached() {
            return Ok(());
        }
        // may have changed while inactive
        let current = self.listener.host().device_pixel_ratio();
        if current != self.ratio.get() {
            self.ratio.set(current);
            notify(&self.on_update, current);
        }

        let ratio = Rc::clone(&self.ratio);
        let on_update = self.on_update.clone();
        self.listener.attach(Box::new(move |event| {
            if let HostEvent::Resize { device_pixel_ratio } = *event {
                ratio.set(device_pixel_ratio);
                notify(&on_update, device_pixel_ratio);
            }
        }))
    }

    pub fn deactivate(&mut self) {
        self.listener.detach();
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_attached()
    }

    pub fn ratio(&self) -> f64 {
        self.ratio.get()
    }
}
