use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub paused: bool,
    pub controls_label: String,
    pub on_toggle_pause: Callback<()>,
    pub on_toggle_controls: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let controls_cb = {
        let cb = props.on_toggle_controls.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pause_label = if props.paused { "Resume" } else { "Pause" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(28,28,30,0.9); border:1px solid #3a3a3c; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={pause_cb}>{ pause_label }</button>
        <button onclick={controls_cb}>{ format!("Controls: {}", props.controls_label) }</button>
        <div style="font-size:11px; opacity:0.7;">{"Space: pause/resume"}</div>
        { if props.paused { html!{ <div style="font-size:11px; color:#64D2FF;">{"Paused"}</div> } } else { html!{} } }
    </div>}
}
