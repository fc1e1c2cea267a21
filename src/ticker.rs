//! Fixed-period tick scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub type TickFn = Box<dyn FnMut()>;

pub trait Ticker {
    /// Calls `on_tick` every `period_ms` until [`Ticker::stop`]. Restarting
    /// replaces the previous callback.
    fn start(&mut self, period_ms: i32, on_tick: TickFn);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Browser `setInterval` ticker. Not synchronized to display refresh.
#[derive(Default)]
pub struct IntervalTicker {
    handle: Option<(i32, Closure<dyn FnMut()>)>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period_ms: i32, on_tick: TickFn) {
        self.stop();
        let Some(window) = web_sys::window() else {
            log::warn!("no window; tick loop not started");
            return;
        };
        let cb = Closure::wrap(on_tick);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(id) => self.handle = Some((id, cb)),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn stop(&mut self) {
        if let Some((id, _cb)) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ticker driven by hand. Clones share the same slot, so a test can keep one
/// and hand the other to a loop.
#[derive(Clone, Default)]
pub struct ManualTicker {
    slot: Rc<RefCell<Option<TickFn>>>,
    period_ms: Rc<RefCell<Option<i32>>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one tick. Returns false when stopped.
    pub fn fire(&self) -> bool {
        match self.slot.borrow_mut().as_mut() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn fire_n(&self, n: usize) -> usize {
        (0..n).take_while(|_| self.fire()).count()
    }

    pub fn period_ms(&self) -> Option<i32> {
        *self.period_ms.borrow()
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, period_ms: i32, on_tick: TickFn) {
        *self.slot.borrow_mut() = Some(on_tick);
        *self.period_ms.borrow_mut() = Some(period_ms);
    }

    fn stop(&mut self) {
        self.slot.borrow_mut().take();
        self.period_ms.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn manual_ticker_fires_until_stopped() {
        let hits = Rc::new(Cell::new(0));
        let mut ticker = ManualTicker::new();
        let handle = ticker.clone();
        let h = hits.clone();
        ticker.start(16, Box::new(move || h.set(h.get() + 1)));
        assert_eq!(handle.period_ms(), Some(16));
        assert_eq!(handle.fire_n(3), 3);
        ticker.stop();
        assert!(!handle.fire());
        assert_eq!(hits.get(), 3);
        assert!(!handle.is_running());
    }
}
