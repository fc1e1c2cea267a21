pub mod app;
pub mod controls_panel;
pub mod map_view;
pub mod station_panel;

pub use app::App;
