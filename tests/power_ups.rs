mod common;

use common::{run_ticks, ArenaBuilder};
use rps_arena_lib::model::data::Species;

#[test]
fn test_disabled_power_ups_never_spawn() {
    let mut arena = ArenaBuilder::new()
        .with_seed(5)
        .with_still_grid(Species::Rock, 2)
        .with_still_grid(Species::Paper, 2)
        .with_config(|c| c.power_ups.spawn_chance = 1.0)
        .build();
    run_ticks(&mut arena, 200);
    assert_eq!(arena.entities().len(), 4);
}

#[test]
fn test_spawned_power_ups_are_in_bounds_at_speed() {
    let mut arena = ArenaBuilder::new()
        .with_seed(5)
        .with_still_grid(Species::Rock, 1)
        .with_still_grid(Species::Paper, 1)
        .with_config(|c| {
            c.features.power_ups = true;
            c.power_ups.spawn_chance = 1.0;
            c.motion.speed = 1.5;
        })
        .build();
    arena.tick();
    assert_eq!(arena.entities().len(), 3);

    let spawned = &arena.entities()[2];
    assert!(spawned.species.is_power_up());
    assert!(spawned.glowing);
    assert_eq!(spawned.power, spawned.species.profile().initial_power);
    assert!(arena
        .bounds()
        .contains(spawned.position.x, spawned.position.y, spawned.radius));
    assert!((spawned.velocity.speed() - 1.5).abs() < 1e-9);
}

#[test]
fn test_toggle_power_ups_between_ticks() {
    let mut arena = ArenaBuilder::new()
        .with_seed(5)
        .with_still_grid(Species::Scissors, 1)
        .with_still_grid(Species::Paper, 1)
        .with_config(|c| c.power_ups.spawn_chance = 1.0)
        .build();
    arena.tick();
    assert_eq!(arena.entities().len(), 2);
    arena.set_power_ups(true);
    arena.tick();
    assert_eq!(arena.entities().len(), 3);
}
