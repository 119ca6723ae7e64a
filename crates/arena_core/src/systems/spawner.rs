//! Random power-up injection.

use crate::lifecycle;
use crate::systems::motion::Bounds;
use arena_data::{Entity, Species};
use rand::Rng;

/// Rolls once for a power-up.
///
/// When `enabled` and the roll lands under `chance`, returns a `Bomb` or
/// `Shield` (even odds) at a random in-bounds position moving at `speed`.
pub fn maybe_spawn<R: Rng>(
    enabled: bool,
    chance: f64,
    bounds: Bounds,
    speed: f64,
    rng: &mut R,
) -> Option<Entity> {
    if !enabled || rng.gen::<f64>() >= chance {
        return None;
    }
    let species = if rng.gen_bool(0.5) {
        Species::Bomb
    } else {
        Species::Shield
    };
    Some(lifecycle::spawn_anywhere(species, bounds, speed, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_disabled_never_spawns() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..1000 {
            assert!(maybe_spawn(false, 1.0, Bounds::new(500.0, 500.0), 1.0, &mut rng).is_none());
        }
    }

    #[test]
    fn test_certain_chance_spawns_power_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let e = maybe_spawn(true, 1.0, Bounds::new(500.0, 500.0), 0.8, &mut rng)
                .expect("chance 1.0 always spawns");
            assert!(e.species.is_power_up());
            assert!((e.velocity.speed() - 0.8).abs() < 1e-9);
            seen.insert(e.species);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_spawn_rate_is_roughly_two_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let spawned = (0..20_000)
            .filter(|_| maybe_spawn(true, 0.02, Bounds::new(500.0, 500.0), 1.0, &mut rng).is_some())
            .count();
        assert!((250..=550).contains(&spawned), "spawned {spawned}");
    }
}
