//! Keyboard-driven station map for the Intergalactic Code Academy.
//!
//! A canvas shows a starfield, a ship the player steers with the keyboard and
//! a few planet "stations", one per learning path. Flying close to a station
//! highlights it and shows its learning path.

pub mod catalog;
pub mod components;
pub mod config;
pub mod map_loop;
pub mod model;
pub mod render;
pub mod scene;
pub mod state;
pub mod ticker;
pub mod util;

pub use catalog::{Catalog, CatalogError, build_catalog, fixed_catalog};
pub use config::{ControlScheme, MapConfig};
pub use map_loop::MapLoop;
pub use scene::{MapScene, TickReport};
pub use ticker::{IntervalTicker, ManualTicker, Ticker};
