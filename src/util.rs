// Browser helpers shared by the components.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, Window};

/// Window event listener, removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach(
        window: &Window,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) =
            window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach {event} listener: {:?}", e);
            return None;
        }
        Some(Self {
            window: window.clone(),
            event,
            cb,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.cb.as_ref().unchecked_ref());
    }
}

/// Inner window size in CSS pixels.
pub fn viewport_size(window: &Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}

pub fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
