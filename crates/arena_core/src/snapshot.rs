//! Read-only view of an arena for renderers and hosts.

use crate::arena::Phase;
use crate::systems::placement::Selection;
use arena_data::{Entity, Position, Species, SpeciesCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub species: Species,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub glowing: bool,
    pub icon: String,
    pub color: String,
    /// Oldest first. Empty when trails are switched off.
    pub trail: Vec<Position>,
}

impl EntitySnapshot {
    #[must_use]
    pub fn from_entity(entity: &Entity, with_trail: bool) -> Self {
        let profile = entity.species.profile();
        Self {
            species: entity.species,
            x: entity.position.x,
            y: entity.position.y,
            radius: entity.radius,
            glowing: entity.glowing,
            icon: profile.icon.to_string(),
            color: profile.color.to_string(),
            trail: if with_trail {
                entity.trail.to_vec()
            } else {
                Vec::new()
            },
        }
    }
}

/// Everything a frame needs, captured between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub phase: Phase,
    pub width: f64,
    pub height: f64,
    pub entities: Vec<EntitySnapshot>,
    /// In-progress placement drag, if any.
    pub selection: Option<Selection>,
    pub counts: SpeciesCounts,
    pub elapsed_secs: f64,
    pub winner: Option<Species>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_data::Velocity;

    #[test]
    fn test_trail_only_when_enabled() {
        let mut entity = Entity::new(
            Species::Scissors,
            Position { x: 5.0, y: 6.0 },
            Velocity { vx: 1.0, vy: 0.0 },
        );
        entity.trail.push(Position { x: 4.0, y: 6.0 });

        let with = EntitySnapshot::from_entity(&entity, true);
        assert_eq!(with.trail.len(), 1);
        assert_eq!(with.icon, "✂️");

        let without = EntitySnapshot::from_entity(&entity, false);
        assert!(without.trail.is_empty());
    }

    #[test]
    fn test_appearance_follows_current_species() {
        let mut entity = Entity::new(Species::Rock, Position::default(), Velocity::default());
        entity.species = Species::Paper;
        let snap = EntitySnapshot::from_entity(&entity, false);
        assert_eq!(snap.color, "#FFE4B5");
        assert_eq!(snap.radius, 12.0);
    }
}
