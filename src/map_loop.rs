//! Mount/unmount lifecycle around a [`MapScene`] and its ticker.

use std::cell::RefCell;
use std::rc::Rc;

use crate::render::Surface;
use crate::scene::MapScene;
use crate::ticker::Ticker;

pub type SharedScene = Rc<RefCell<MapScene>>;
pub type SharedSurface = Rc<RefCell<Option<Box<dyn Surface>>>>;
pub type HoverCallback = Rc<dyn Fn(Option<String>)>;

pub struct MapLoop<T: Ticker> {
    scene: SharedScene,
    surface: SharedSurface,
    ticker: T,
    on_hover: Option<HoverCallback>,
}

impl<T: Ticker> MapLoop<T> {
    pub fn new(scene: SharedScene, ticker: T) -> Self {
        Self {
            scene,
            surface: Rc::new(RefCell::new(None)),
            ticker,
            on_hover: None,
        }
    }

    /// Called with the new hovered station id whenever it changes.
    pub fn on_hover_change(mut self, f: impl Fn(Option<String>) + 'static) -> Self {
        self.on_hover = Some(Rc::new(f));
        self
    }

    pub fn scene(&self) -> SharedScene {
        self.scene.clone()
    }

    pub fn attach_surface(&self, surface: Box<dyn Surface>) {
        *self.surface.borrow_mut() = Some(surface);
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn mount(&mut self) {
        let scene = self.scene.clone();
        let surface = self.surface.clone();
        let on_hover = self.on_hover.clone();
        let period = scene.borrow().config().tick_ms;
        self.ticker.start(
            period,
            Box::new(move || {
                let hovered = {
                    let mut sc = scene.borrow_mut();
                    let mut surf = surface.borrow_mut();
                    let target: Option<&mut dyn Surface> = match surf.as_mut() {
                        Some(b) => Some(b.as_mut()),
                        None => None,
                    };
                    match sc.tick(target) {
                        Some(report) if report.hover_changed => {
                            Some(sc.hovered_id().map(str::to_string))
                        }
                        _ => None,
                    }
                };
                if let (Some(id), Some(cb)) = (hovered, on_hover.as_ref()) {
                    cb(id);
                }
            }),
        );
        log::info!("map loop mounted ({period}ms tick)");
    }

    /// Stops ticking and detaches the surface. Held keys are dropped.
    pub fn unmount(&mut self) {
        if !self.ticker.is_running() {
            return;
        }
        self.ticker.stop();
        self.surface.borrow_mut().take();
        self.scene.borrow_mut().clear_input();
        log::info!("map loop unmounted");
    }
}

impl<T: Ticker> Drop for MapLoop<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
