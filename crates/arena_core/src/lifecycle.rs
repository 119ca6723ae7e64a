//! Entity creation with a caller-supplied random source.

use crate::systems::motion::Bounds;
use arena_data::{Entity, Position, Species, Velocity};
use rand::Rng;
use std::f64::consts::TAU;

/// Creates an entity at `(x, y)` heading in a uniformly random direction.
pub fn create_entity_with_rng<R: Rng>(
    species: Species,
    x: f64,
    y: f64,
    speed: f64,
    rng: &mut R,
) -> Entity {
    let angle = rng.gen::<f64>() * TAU;
    Entity::new(species, Position { x, y }, Velocity::from_angle(angle, speed))
}

/// Uniform position at which an entity of `radius` fits inside `bounds`.
pub fn random_position<R: Rng>(bounds: Bounds, radius: f64, rng: &mut R) -> Position {
    Position {
        x: radius + rng.gen::<f64>() * (bounds.width - 2.0 * radius).max(0.0),
        y: radius + rng.gen::<f64>() * (bounds.height - 2.0 * radius).max(0.0),
    }
}

/// Creates an entity at a random in-bounds position.
pub fn spawn_anywhere<R: Rng>(species: Species, bounds: Bounds, speed: f64, rng: &mut R) -> Entity {
    let pos = random_position(bounds, species.profile().radius, rng);
    create_entity_with_rng(species, pos.x, pos.y, speed, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_created_entity_has_requested_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let e = create_entity_with_rng(Species::Scissors, 10.0, 20.0, 1.5, &mut rng);
            assert!((e.velocity.speed() - 1.5).abs() < 1e-9);
            assert_eq!(e.position, Position { x: 10.0, y: 20.0 });
        }
    }

    #[test]
    fn test_spawn_anywhere_is_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let bounds = Bounds::new(300.0, 200.0);
        for _ in 0..200 {
            let e = spawn_anywhere(Species::Shield, bounds, 1.0, &mut rng);
            assert!(bounds.contains(e.position.x, e.position.y, e.radius));
        }
    }
}
