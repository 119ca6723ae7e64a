//! Manual drag-to-spawn placement.

use crate::lifecycle;
use crate::systems::motion::Bounds;
use arena_data::{Entity, Position, Species};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Arena area covered by each placed entity.
pub const AREA_PER_ENTITY: f64 = 2000.0;

/// Axis-aligned rectangle with normalized corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: Position,
    pub max: Position,
}

impl Region {
    /// Builds a region from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: Position, b: Position) -> Self {
        Self {
            min: Position {
                x: a.x.min(b.x),
                y: a.y.min(b.y),
            },
            max: Position {
                x: a.x.max(b.x),
                y: a.y.max(b.y),
            },
        }
    }

    /// Restricts the region to the arena. Infinite coordinates land on the
    /// nearest edge, NaN on the arena's center line for that axis.
    #[must_use]
    pub fn clamped_to(self, bounds: Bounds) -> Self {
        let axis = |v: f64, extent: f64| {
            if v.is_nan() {
                extent / 2.0
            } else {
                v.clamp(0.0, extent)
            }
        };
        let clamp = |p: Position| Position {
            x: axis(p.x, bounds.width),
            y: axis(p.y, bounds.height),
        };
        Self {
            min: clamp(self.min),
            max: clamp(self.max),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// `max(1, floor(area / 2000))`.
    #[must_use]
    pub fn spawn_count(&self) -> usize {
        ((self.area() / AREA_PER_ENTITY).floor() as usize).max(1)
    }
}

/// An in-progress drag, exposed to renderers as an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub cursor: Position,
}

impl Selection {
    #[must_use]
    pub fn region(&self) -> Region {
        Region::from_corners(self.anchor, self.cursor)
    }
}

/// Spawns `region.spawn_count()` entities of `species` uniformly inside the
/// region, each heading in a random direction at `speed`.
pub fn populate_region<R: Rng>(
    region: Region,
    species: Species,
    speed: f64,
    rng: &mut R,
) -> Vec<Entity> {
    (0..region.spawn_count())
        .map(|_| {
            let x = region.min.x + rng.gen::<f64>() * region.width();
            let y = region.min.y + rng.gen::<f64>() * region.height();
            lifecycle::create_entity_with_rng(species, x, y, speed, rng)
        })
        .collect()
}
