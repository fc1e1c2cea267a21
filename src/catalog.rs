//! Station catalog: the ordered set of stations shown on the map.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{
    ChallengeDifficulty, GameArea, LearningModule, LearningPath, ModuleStatus, Position, Station,
    StationPosition,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate station id `{0}`")]
    DuplicateId(String),
    #[error("station `{station}` requires unknown station `{required}`")]
    UnknownRequiredStation { station: String, required: String },
}

/// Ordered, immutable list of stations. Iteration order is the hover tie-break order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    stations: Vec<Station>,
}

impl Catalog {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// First station, in catalog order, within interaction range of `player`.
    pub fn hovered_by(&self, player: Position) -> Option<&Station> {
        self.stations.iter().find(|s| s.is_near(player))
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for s in &self.stations {
            if !seen.insert(s.id.as_str()) {
                return Err(CatalogError::DuplicateId(s.id.clone()));
            }
        }
        for s in &self.stations {
            for req in &s.required_stations {
                if !seen.contains(req.as_str()) {
                    return Err(CatalogError::UnknownRequiredStation {
                        station: s.id.clone(),
                        required: req.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

fn relative_position(width: u32, height: u32, percent_x: f64, percent_y: f64) -> StationPosition {
    let (w, h) = (width as f64, height as f64);
    StationPosition {
        x: w * percent_x,
        y: h * percent_y,
        radius: w.min(h) * 0.05,
    }
}

// Station records without a position; the layout functions place them.
fn frontend_corps(position: StationPosition) -> Station {
    Station {
        id: "frontend-corps".into(),
        name: "Frontend Engineering Corps".into(),
        area: GameArea::FrontendCorps,
        position,
        icon: "🚀".into(),
        description: "Master frontend engineering with challenges in UI/UX, state management, and optimization.".into(),
        learning_path: LearningPath {
            title: "Frontend Development Path".into(),
            description: "Learn modern frontend development practices".into(),
            modules: vec![LearningModule {
                id: "react-basics".into(),
                title: "React Fundamentals".into(),
                description: "Learn the core concepts of React".into(),
                difficulty: ChallengeDifficulty::Beginner,
                challenges: vec!["react-intro".into(), "state-props".into(), "hooks-basic".into()],
                xp_reward: 100,
                completion_status: ModuleStatus::Available,
            }],
            total_xp: 1000,
        },
        is_unlocked: true,
        required_stations: Vec::new(),
    }
}

fn systems_division(position: StationPosition) -> Station {
    Station {
        id: "systems-division".into(),
        name: "Systems Engineering Division".into(),
        area: GameArea::SystemsDivision,
        position,
        icon: "🛰️".into(),
        description: "Dive into systems engineering with algorithms, data structures, and system design.".into(),
        learning_path: LearningPath {
            title: "Systems Engineering Path".into(),
            description: "Master system design and backend development".into(),
            modules: vec![LearningModule {
                id: "algo-basics".into(),
                title: "Algorithm Fundamentals".into(),
                description: "Learn essential algorithms and data structures".into(),
                difficulty: ChallengeDifficulty::Beginner,
                challenges: vec![
                    "sorting-basics".into(),
                    "search-algo".into(),
                    "data-structures".into(),
                ],
                xp_reward: 100,
                completion_status: ModuleStatus::Locked,
            }],
            total_xp: 1200,
        },
        is_unlocked: false,
        required_stations: vec!["frontend-corps".into()],
    }
}

fn mission_control(position: StationPosition) -> Station {
    Station {
        id: "mission-control".into(),
        name: "Mission Control".into(),
        area: GameArea::MissionControl,
        position,
        icon: "🪐".into(),
        description: "Central hub for learning path selection and progress tracking.".into(),
        learning_path: LearningPath {
            title: "Mission Control Center".into(),
            description: "Track your progress and choose your path".into(),
            modules: Vec::new(),
            total_xp: 0,
        },
        is_unlocked: true,
        required_stations: Vec::new(),
    }
}

/// Viewport-relative layout. Zero dimensions collapse every station onto the origin.
pub fn build_catalog(width: u32, height: u32) -> Catalog {
    Catalog::new(vec![
        frontend_corps(relative_position(width, height, 0.25, 0.3)),
        systems_division(relative_position(width, height, 0.75, 0.3)),
        mission_control(relative_position(width, height, 0.5, 0.7)),
    ])
}

/// Fixed pixel layout, independent of the viewport.
pub fn fixed_catalog() -> Catalog {
    let at = |x: f64, y: f64| StationPosition { x, y, radius: 50.0 };
    Catalog::new(vec![
        frontend_corps(at(200.0, 200.0)),
        systems_division(at(600.0, 300.0)),
        mission_control(at(400.0, 500.0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_layout_scales_with_viewport() {
        let catalog = build_catalog(1000, 800);
        let fc = catalog.get("frontend-corps").unwrap();
        assert_eq!(fc.position.x, 250.0);
        assert_eq!(fc.position.y, 240.0);
        assert_eq!(fc.position.radius, 40.0);

        let mc = catalog.get("mission-control").unwrap();
        assert_eq!((mc.position.x, mc.position.y), (500.0, 560.0));
    }

    #[test]
    fn catalog_order_is_stable() {
        let ids: Vec<_> = build_catalog(800, 600).iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["frontend-corps", "systems-division", "mission-control"]);
    }

    #[test]
    fn zero_dimensions_collapse_to_origin() {
        let catalog = build_catalog(0, 600);
        for s in &catalog {
            assert_eq!(s.position.x, 0.0);
            assert_eq!(s.position.radius, 0.0);
        }
    }

    #[test]
    fn embedded_catalogs_validate() {
        assert_eq!(build_catalog(1280, 720).validate(), Ok(()));
        assert_eq!(fixed_catalog().validate(), Ok(()));
    }

    #[test]
    fn unknown_requirement_is_rejected() {
        let mut station = mission_control(relative_position(100, 100, 0.5, 0.5));
        station.required_stations = vec!["nowhere".into()];
        let err = Catalog::new(vec![station]).validate().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownRequiredStation {
                station: "mission-control".into(),
                required: "nowhere".into()
            }
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let p = relative_position(100, 100, 0.5, 0.5);
        let catalog = Catalog::new(vec![mission_control(p), mission_control(p)]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("mission-control".into()))
        );
    }

    #[test]
    fn hover_picks_first_in_catalog_order() {
        let p = StationPosition { x: 100.0, y: 100.0, radius: 50.0 };
        let catalog = Catalog::new(vec![frontend_corps(p), mission_control(p)]);
        let hovered = catalog.hovered_by(Position::new(100.0, 100.0)).unwrap();
        assert_eq!(hovered.id, "frontend-corps");
    }

    #[test]
    fn fixed_station_hover_range() {
        let catalog = fixed_catalog();
        let hovered = catalog.hovered_by(Position::new(210.0, 210.0));
        assert_eq!(hovered.map(|s| s.id.as_str()), Some("frontend-corps"));
        assert!(catalog.hovered_by(Position::new(400.0, 400.0)).is_none());
    }
}
