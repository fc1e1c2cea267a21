use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::MapConfig;
use crate::map_loop::MapLoop;
use crate::model::GameArea;
use crate::scene::MapScene;
use crate::ticker::IntervalTicker;
use crate::util::{WindowListener, random_seed, viewport_size};

use super::{controls_panel::ControlsPanel, station_panel::StationPanel};

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub config: MapConfig,
    #[prop_or(GameArea::MissionControl)]
    pub initial_area: GameArea,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = {
        let config = props.config.clone();
        let area = props.initial_area;
        use_mut_ref(move || {
            let seed = config.star_seed.unwrap_or_else(random_seed);
            MapScene::new(config, area, seed)
        })
    };
    let hovered = use_state(|| None::<String>);
    let paused = use_state(|| false);
    let controls = use_state(|| props.config.controls);

    // Mount: canvas sizing, listeners, tick loop. Everything is released in the cleanup.
    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        let hovered = hovered.clone();
        let paused = paused.clone();
        use_effect_with((), move |_| {
            let mut map_loop = MapLoop::new(scene.clone(), IntervalTicker::new())
                .on_hover_change(move |id| hovered.set(id));
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                let fit_canvas = {
                    let scene = scene.clone();
                    let canvas_ref = canvas_ref.clone();
                    let window = window.clone();
                    move || {
                        let (w, h) = viewport_size(&window);
                        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                            canvas.set_width(w);
                            canvas.set_height(h);
                        }
                        scene.borrow_mut().resize(w, h);
                    }
                };
                fit_canvas();

                let ctx = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|c| c.get_context("2d").ok().flatten())
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                match ctx {
                    Some(ctx) => map_loop.attach_surface(Box::new(ctx)),
                    None => log::warn!("2d canvas context unavailable; map will not render"),
                }

                listeners.extend(WindowListener::attach(&window, "resize", move |_| {
                    fit_canvas()
                }));
                let keydown = {
                    let scene = scene.clone();
                    move |e: web_sys::Event| {
                        let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let toggled = scene.borrow_mut().key_down(&e.key());
                        if toggled {
                            e.prevent_default();
                            paused.set(scene.borrow().is_paused());
                        }
                    }
                };
                listeners.extend(WindowListener::attach(&window, "keydown", keydown));
                let keyup = {
                    let scene = scene.clone();
                    move |e: web_sys::Event| {
                        if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                            scene.borrow_mut().key_up(&e.key());
                        }
                    }
                };
                listeners.extend(WindowListener::attach(&window, "keyup", keyup));
                map_loop.mount();
            } else {
                log::warn!("no window; map loop not mounted");
            }
            move || {
                drop(listeners);
                map_loop.unmount();
            }
        });
    }

    let on_toggle_pause = {
        let scene = scene.clone();
        let paused = paused.clone();
        Callback::from(move |_| {
            let now = scene.borrow_mut().toggle_pause();
            paused.set(now);
        })
    };
    let on_toggle_controls = {
        let scene = scene.clone();
        let controls = controls.clone();
        Callback::from(move |_| {
            let next = controls.toggled();
            scene.borrow_mut().set_controls(next);
            controls.set(next);
            if let Err(e) = scene.borrow().config().save() {
                log::warn!("could not persist controls: {e}");
            }
        })
    };

    let station = hovered
        .as_deref()
        .and_then(|id| scene.borrow().catalog().get(id).cloned());

    html! {
        <div style="position:fixed; inset:0; background:#1C1C1E;">
            <div style="position:fixed; top:16px; left:50%; transform:translateX(-50%); pointer-events:none; font-family:'Press Start 2P', monospace; font-size:20px; color:#EBEBF599; text-align:center;">
                {"INTERGALACTIC CODE ACADEMY"}
            </div>
            <canvas ref={canvas_ref} style="display:block;" />
            <ControlsPanel
                paused={*paused}
                controls_label={controls.label().to_string()}
                on_toggle_pause={on_toggle_pause}
                on_toggle_controls={on_toggle_controls}
            />
            <StationPanel station={station} />
        </div>
    }
}
