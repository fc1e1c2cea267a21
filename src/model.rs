//! Core data models for the station map.
//! Stations, learning paths and the player's state on the map.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions positive; nothing is drawn otherwise.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn center(&self) -> Position {
        Position::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameArea {
    FrontendCorps,
    SystemsDivision,
    MissionControl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::Locked => "Locked",
            ModuleStatus::Available => "Available",
            ModuleStatus::InProgress => "In progress",
            ModuleStatus::Completed => "Completed",
        }
    }
}

impl ChallengeDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            ChallengeDifficulty::Beginner => "Beginner",
            ChallengeDifficulty::Intermediate => "Intermediate",
            ChallengeDifficulty::Advanced => "Advanced",
        }
    }
}

/// Which procedural planet glyph a station is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetStyle {
    Cratered,
    Ringed,
    Swirled,
}

impl GameArea {
    pub fn planet_style(&self) -> PlanetStyle {
        match self {
            GameArea::MissionControl => PlanetStyle::Cratered,
            GameArea::FrontendCorps => PlanetStyle::Swirled,
            GameArea::SystemsDivision => PlanetStyle::Ringed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationPosition {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: ChallengeDifficulty,
    /// Challenge ids, in the order they are meant to be attempted.
    pub challenges: Vec<String>,
    pub xp_reward: u32,
    pub completion_status: ModuleStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub title: String,
    pub description: String,
    pub modules: Vec<LearningModule>,
    pub total_xp: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub area: GameArea,
    pub position: StationPosition,
    pub icon: String,
    pub description: String,
    pub learning_path: LearningPath,
    /// Static; unlocking is not propagated from `required_stations` at runtime.
    pub is_unlocked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_stations: Vec<String>,
}

impl Station {
    /// Player is within interaction range (`radius + 30`) of the station center.
    pub fn is_near(&self, player: Position) -> bool {
        player.distance_to(self.position.x, self.position.y) < self.position.radius + 30.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeTest {
    pub id: String,
    pub description: String,
    pub test_function: String,
    pub expected_output: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub area: GameArea,
    pub difficulty: ChallengeDifficulty,
    pub requirements: Vec<String>,
    pub starting_code: String,
    pub solution: String,
    pub tests: Vec<ChallengeTest>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub current_area: GameArea,
    pub active_challenge: Option<Challenge>,
    /// Movement is frozen while set; rendering continues.
    pub is_paused: bool,
}

impl PlayerState {
    pub fn new(current_area: GameArea) -> Self {
        Self {
            position: Position::default(),
            current_area,
            active_challenge: None,
            is_paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_serializes_as_kebab_id() {
        let s = serde_json::to_string(&GameArea::MissionControl).unwrap();
        assert_eq!(s, "\"mission-control\"");
        let back: GameArea = serde_json::from_str("\"frontend-corps\"").unwrap();
        assert_eq!(back, GameArea::FrontendCorps);
    }

    #[test]
    fn module_status_uses_snake_case() {
        let s = serde_json::to_string(&ModuleStatus::InProgress).unwrap();
        assert_eq!(s, "\"in_progress\"");
    }

    #[test]
    fn every_area_maps_to_a_distinct_planet() {
        assert_eq!(GameArea::MissionControl.planet_style(), PlanetStyle::Cratered);
        assert_eq!(GameArea::FrontendCorps.planet_style(), PlanetStyle::Swirled);
        assert_eq!(GameArea::SystemsDivision.planet_style(), PlanetStyle::Ringed);
    }

    #[test]
    fn challenge_test_accepts_arbitrary_expected_output() {
        let raw = r#"{"id":"t1","description":"sum","test_function":"sum(1,2)","expected_output":{"value":[3,null,"x"]}}"#;
        let t: ChallengeTest = serde_json::from_str(raw).unwrap();
        assert_eq!(t.expected_output["value"][0], 3);
    }

    #[test]
    fn viewport_drawable_needs_both_dimensions() {
        assert!(!Viewport::new(0, 600).is_drawable());
        assert!(!Viewport::new(800, 0).is_drawable());
        assert!(Viewport::new(800, 600).is_drawable());
        assert_eq!(Viewport::new(800, 600).center(), Position::new(400.0, 300.0));
    }
}
