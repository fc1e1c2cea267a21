use crate::model::Station;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StationPanelProps {
    pub station: Option<Station>,
}

#[function_component]
pub fn StationPanel(props: &StationPanelProps) -> Html {
    let Some(station) = &props.station else {
        return html! {};
    };
    let path = &station.learning_path;

    let panel_style = "position:absolute; left:12px; bottom:12px; \
        background:rgba(28,28,30,0.95); border:1px solid #3a3a3c; border-radius:8px; \
        padding:12px 16px; min-width:260px; max-width:320px; font-size:13px; color:#EBEBF5;";
    let header_style = "font-weight:600; font-size:15px; margin-bottom:6px; display:flex; align-items:center; gap:8px;";
    let section_style = "margin-top:10px; padding-top:8px; border-top:1px solid #3a3a3c;";
    let row_style = "display:flex; justify-content:space-between; margin:4px 0; font-size:12px;";
    let muted = "color:#8e8e93;";

    let lock = if station.is_unlocked {
        html! { <span style="color:#30d158;">{"Unlocked"}</span> }
    } else {
        html! { <span style="color:#ff453a;">{"Locked"}</span> }
    };

    html! {
        <div style={panel_style}>
            <div style={header_style}>
                <span>{ station.icon.clone() }</span>
                <span>{ station.name.clone() }</span>
            </div>
            <div style={muted}>{ station.description.clone() }</div>
            <div style={row_style}><span style={muted}>{"Status"}</span>{ lock }</div>
            {
                if station.required_stations.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div style={row_style}>
                            <span style={muted}>{"Requires"}</span>
                            <span>{ station.required_stations.join(", ") }</span>
                        </div>
                    }
                }
            }
            <div style={section_style}>
                <div style="font-weight:600;">{ path.title.clone() }</div>
                <div style={muted}>{ path.description.clone() }</div>
                <div style={row_style}><span style={muted}>{"Total XP"}</span><span>{ path.total_xp }</span></div>
                {
                    for path.modules.iter().map(|m| html! {
                        <div style={row_style}>
                            <span>{ format!("{} ({})", m.title, m.difficulty.label()) }</span>
                            <span style={muted}>{ format!("{} · {} XP", m.completion_status.label(), m.xp_reward) }</span>
                        </div>
                    })
                }
            </div>
        </div>
    }
}
