//! Map scene: player, input, catalog and the per-tick update/render pass.

use crate::catalog::{Catalog, build_catalog};
use crate::config::{ControlScheme, MapConfig};
use crate::model::{GameArea, PlayerState, Position, Station, Viewport};
use crate::render::{Gradient, Starfield, Surface, TextAlign, draw_planet};
use crate::state::{InputState, clamp_to_viewport, input::is_pause_key, step};

const LABEL_FONT: &str = "'Press Start 2P'";
const SHIP_GLYPH: &str = "🛸";
const SHIP_GLOW_BLUR: f64 = 15.0;
const TRAIL_RADIUS: f64 = 25.0;

/// How the catalog follows the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Rebuilt from viewport percentages on every resize.
    Relative,
    /// Supplied once and never moved.
    Static,
}

/// What changed during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub moved: bool,
    pub hover_changed: bool,
}

pub struct MapScene {
    config: MapConfig,
    layout: Layout,
    catalog: Catalog,
    player: PlayerState,
    input: InputState,
    viewport: Viewport,
    hovered: Option<String>,
    starfield: Starfield,
}

impl MapScene {
    /// Scene with a viewport-relative catalog; empty until the first [`MapScene::resize`].
    pub fn new(config: MapConfig, area: GameArea, star_seed: u64) -> Self {
        Self {
            config,
            layout: Layout::Relative,
            catalog: Catalog::default(),
            player: PlayerState::new(area),
            input: InputState::default(),
            viewport: Viewport::default(),
            hovered: None,
            starfield: Starfield::new(star_seed),
        }
    }

    /// Scene over a fixed catalog, player centered in `viewport`.
    pub fn with_catalog(
        config: MapConfig,
        catalog: Catalog,
        viewport: Viewport,
        area: GameArea,
        star_seed: u64,
    ) -> Self {
        let mut player = PlayerState::new(area);
        player.position = clamp_to_viewport(viewport.center(), viewport);
        Self {
            config,
            layout: Layout::Static,
            catalog,
            player,
            input: InputState::default(),
            viewport,
            hovered: None,
            starfield: Starfield::new(star_seed),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_paused(&self) -> bool {
        self.player.is_paused
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn hovered_station(&self) -> Option<&Station> {
        self.hovered.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// New viewport size. Rebuilds a relative catalog and re-centers the ship.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        if self.layout == Layout::Relative && self.viewport.is_drawable() {
            self.catalog = build_catalog(width, height);
            if let Err(e) = self.catalog.validate() {
                log::warn!("station catalog: {e}");
            }
        }
        self.player.position = clamp_to_viewport(self.viewport.center(), self.viewport);
        log::debug!("viewport resized to {width}x{height}");
    }

    pub fn set_position(&mut self, pos: Position) {
        self.player.position = clamp_to_viewport(pos, self.viewport);
    }

    pub fn set_controls(&mut self, scheme: ControlScheme) {
        self.config.controls = scheme;
        self.input.clear();
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.player.is_paused != paused {
            self.player.is_paused = paused;
            log::info!("map {}", if paused { "paused" } else { "resumed" });
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.player.is_paused);
        self.player.is_paused
    }

    /// Returns true when the key toggled pause.
    pub fn key_down(&mut self, key: &str) -> bool {
        if is_pause_key(key) {
            self.toggle_pause();
            return true;
        }
        if !self.player.is_paused {
            self.input.press(key);
        }
        false
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Moves the ship from held keys. No-op while paused.
    pub fn update(&mut self) -> bool {
        if self.player.is_paused {
            return false;
        }
        let next = step(
            self.player.position,
            &self.input,
            self.config.controls,
            self.config.ship_speed,
            self.viewport,
        );
        if next == self.player.position {
            return false;
        }
        self.player.position = next;
        true
    }

    /// Recomputes the hovered station; first match in catalog order wins.
    pub fn refresh_hover(&mut self) -> bool {
        let next = self
            .catalog
            .hovered_by(self.player.position)
            .map(|s| s.id.clone());
        if next == self.hovered {
            return false;
        }
        log::debug!("hovered station: {:?}", next);
        self.hovered = next;
        true
    }

    /// One update + render cycle. Nothing happens without a surface or with
    /// an empty viewport.
    pub fn tick(&mut self, surface: Option<&mut dyn Surface>) -> Option<TickReport> {
        let s = surface?;
        if !self.viewport.is_drawable() {
            return None;
        }
        let moved = self.update();
        let hover_changed = self.refresh_hover();
        self.render(s);
        Some(TickReport {
            moved,
            hover_changed,
        })
    }

    pub fn render(&mut self, s: &mut dyn Surface) {
        let Viewport { width, height } = self.viewport;
        let palette = &self.config.palette;

        s.set_fill(palette.background.as_str().into());
        s.fill_rect(0.0, 0.0, width as f64, height as f64);

        self.starfield.paint(s, width, height);

        for station in &self.catalog {
            let hovered = self.hovered.as_deref() == Some(station.id.as_str());
            let p = station.position;
            draw_planet(
                s,
                station.area.planet_style(),
                p.x,
                p.y,
                p.radius,
                station.is_unlocked,
                hovered,
                &palette.accent,
            );
            self.draw_label(s, station, hovered);
        }

        let Position { x, y } = self.player.position;
        if self.input.any_active() {
            let trail = Gradient::radial(x, y, 0.0, x, y, TRAIL_RADIUS)
                .stop(0.0, palette.glow.as_str())
                .stop(1.0, "transparent");
            s.set_fill(trail.into());
            s.circle(x, y + 5.0, TRAIL_RADIUS);
            s.fill();
        }

        s.save();
        s.set_glow(&palette.accent, SHIP_GLOW_BLUR);
        s.set_font("28px Arial");
        s.set_fill("#FFFFFF".into());
        s.fill_text(SHIP_GLYPH, x - 14.0, y + 10.0);
        s.clear_glow();
        s.restore();
    }

    fn draw_label(&self, s: &mut dyn Surface, station: &Station, hovered: bool) {
        let p = station.position;
        let palette = &self.config.palette;
        s.save();
        let size = if hovered { 16 } else { 14 };
        s.set_font(&format!("{size}px {LABEL_FONT}"));
        s.set_text_align(TextAlign::Center);
        let color = if hovered {
            &palette.accent
        } else {
            &palette.foreground
        };
        s.set_fill(color.as_str().into());
        s.fill_text(&station.name, p.x, p.y - p.radius - 20.0);
        if hovered {
            s.set_font(&format!("12px {LABEL_FONT}"));
            s.fill_text(&station.description, p.x, p.y - p.radius - 40.0);
        }
        s.restore();
    }
}
