use super::map_view::MapView;
use crate::config::MapConfig;
use crate::model::GameArea;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(MapConfig::load_or_default);
    html! {
        <div id="root">
            <MapView config={(*config).clone()} initial_area={GameArea::MissionControl} />
        </div>
    }
}
