//! Per-entity motion integration with border reflection.

use arena_data::Entity;
use serde::{Deserialize, Serialize};

/// Rectangular arena extent; the origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a circle of `radius` centered at `(x, y)` lies inside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, radius: f64) -> bool {
        x >= radius && x <= self.width - radius && y >= radius && y <= self.height - radius
    }
}

/// Axes on which an entity touched the arena edge during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderHit {
    pub x: bool,
    pub y: bool,
}

/// Advances `entity` by one tick.
///
/// The pre-move position is pushed onto the trail, then the velocity is
/// added. An axis that leaves `[radius, bound - radius]` is clamped to the
/// violated edge and its velocity component negated.
pub fn advance(entity: &mut Entity, bounds: Bounds) -> Option<BorderHit> {
    entity.trail.push(entity.position);

    entity.position.x += entity.velocity.vx;
    entity.position.y += entity.velocity.vy;

    let r = entity.radius;
    let mut hit = BorderHit::default();

    if entity.position.x < r || entity.position.x > bounds.width - r {
        entity.velocity.vx = -entity.velocity.vx;
        entity.position.x = if entity.position.x < r {
            r
        } else {
            bounds.width - r
        };
        hit.x = true;
    }
    if entity.position.y < r || entity.position.y > bounds.height - r {
        entity.velocity.vy = -entity.velocity.vy;
        entity.position.y = if entity.position.y < r {
            r
        } else {
            bounds.height - r
        };
        hit.y = true;
    }

    (hit.x || hit.y).then_some(hit)
}

/// Rescales the entity's velocity to `speed`, keeping its direction.
pub fn set_speed(entity: &mut Entity, speed: f64) {
    entity.velocity.set_speed(speed);
}
