use super::species::Species;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of past positions kept for trail rendering.
pub const TRAIL_CAPACITY: usize = 10;

/// Arena position of an entity's center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Velocity in arena units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    #[must_use]
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
        }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Rescales to `speed` keeping direction. A zero vector has no direction
    /// and is left as is.
    pub fn set_speed(&mut self, speed: f64) {
        let current = self.speed();
        if current > 0.0 {
            self.vx = self.vx / current * speed;
            self.vy = self.vy / current * speed;
        }
    }
}

/// Bounded history of recent positions, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Position>,
}

impl Trail {
    pub fn push(&mut self, position: Position) {
        self.points.push_back(position);
        while self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.points.iter().copied().collect()
    }
}

/// A mobile unit in the arena.
///
/// `radius`, `power` and `glowing` are taken from the species profile at
/// creation and are not recomputed when the species later changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub species: Species,
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub power: u32,
    pub glowing: bool,
    pub trail: Trail,
}

impl Entity {
    #[must_use]
    pub fn new(species: Species, position: Position, velocity: Velocity) -> Self {
        let profile = species.profile();
        Self {
            species,
            position,
            velocity,
            radius: profile.radius,
            power: profile.initial_power,
            glowing: profile.glowing,
            trail: Trail::default(),
        }
    }

    #[must_use]
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord {
            x: self.position.x,
            y: self.position.y,
            species: self.species,
            vx: self.velocity.vx,
            vy: self.velocity.vy,
        }
    }
}

/// Persisted form of an entity: species, position and velocity only.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Archive, RkyvSerialize, RkyvDeserialize,
)]
#[archive(check_bytes)]
pub struct EntityRecord {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type", alias = "species")]
    pub species: Species,
    pub vx: f64,
    pub vy: f64,
}

impl EntityRecord {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.vx.is_finite() && self.vy.is_finite()
    }

    #[must_use]
    pub fn into_entity(self) -> Entity {
        Entity::new(
            self.species,
            Position {
                x: self.x,
                y: self.y,
            },
            Velocity {
                vx: self.vx,
                vy: self.vy,
            },
        )
    }
}
