mod common;

use common::ArenaBuilder;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rps_arena_lib::model::data::{Entity, Position, Species, Velocity};
use rps_arena_lib::model::systems::collision::resolve;
use rps_arena_lib::model::systems::rules::{apply_rules, Conversion};
use rps_arena_lib::model::ArenaEvent;

fn still(species: Species, x: f64) -> Entity {
    Entity::new(species, Position { x, y: 100.0 }, Velocity::default())
}

#[test]
fn test_rule_table_is_total() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for a in Species::ALL {
        for b in Species::ALL {
            let out = apply_rules(a, b, &mut rng);
            match (a, b) {
                (x, y) if x == y => {
                    assert_eq!(out.first, Conversion::Keep);
                    assert_eq!(out.second, Conversion::Keep);
                    let expected = (x == Species::Rock).then_some(ArenaEvent::RockRock);
                    assert_eq!(out.event, expected, "{a} vs {b}");
                }
                (Species::Bomb, _) | (_, Species::Bomb) => {
                    assert_eq!(out.event, Some(ArenaEvent::Bomb), "{a} vs {b}");
                    let (bomb_side, other_side) = if a == Species::Bomb {
                        (out.first, out.second)
                    } else {
                        (out.second, out.first)
                    };
                    assert_eq!(
                        bomb_side,
                        Conversion::Drain {
                            fallback: Species::Rock
                        }
                    );
                    assert!(matches!(other_side, Conversion::Become(s) if s.is_base()));
                }
                (Species::Shield, _) | (_, Species::Shield) => {
                    assert_eq!(out.event, Some(ArenaEvent::Shield), "{a} vs {b}");
                    if a == Species::Shield {
                        assert_eq!(
                            out.first,
                            Conversion::Drain {
                                fallback: Species::Rock
                            }
                        );
                        assert_eq!(out.second, Conversion::Keep);
                    } else {
                        assert_eq!(out.first, Conversion::Keep);
                        assert_eq!(
                            out.second,
                            Conversion::Drain {
                                fallback: Species::Paper
                            }
                        );
                    }
                }
                _ => {
                    assert_eq!(out.event, Some(ArenaEvent::Convert), "{a} vs {b}");
                    let winner = if a.beats(b) { a } else { b };
                    let first = if a == winner {
                        Conversion::Keep
                    } else {
                        Conversion::Become(winner)
                    };
                    let second = if b == winner {
                        Conversion::Keep
                    } else {
                        Conversion::Become(winner)
                    };
                    assert_eq!((out.first, out.second), (first, second), "{a} vs {b}");
                }
            }
        }
    }
}

#[test]
fn test_bomb_randomizes_every_base_outcome() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        if let Conversion::Become(s) = apply_rules(Species::Bomb, Species::Paper, &mut rng).second
        {
            seen.insert(s);
        }
    }
    assert_eq!(seen.len(), 3, "Bomb should reach all base species: {:?}", seen);
}

#[test]
fn test_bomb_downgrades_on_third_collision() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut bomb = still(Species::Bomb, 100.0);
    for hit in 1..=3 {
        bomb.position = Position { x: 100.0, y: 100.0 };
        let mut victim = still(Species::Scissors, 110.0);
        let event = resolve(&mut bomb, &mut victim, &mut rng);
        assert_eq!(event, Some(ArenaEvent::Bomb));
        assert!(victim.species.is_base());
        if hit < 3 {
            assert_eq!(bomb.species, Species::Bomb, "still armed after hit {hit}");
        }
    }
    assert_eq!(bomb.species, Species::Rock);
    assert_eq!(bomb.power, 0);
    // Radius is fixed at creation.
    assert_eq!(bomb.radius, 15.0);
}

#[test]
fn test_shield_downgrade_depends_on_call_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let mut first = still(Species::Shield, 100.0);
    for _ in 0..5 {
        first.position = Position { x: 100.0, y: 100.0 };
        let mut other = still(Species::Scissors, 110.0);
        assert_eq!(
            resolve(&mut first, &mut other, &mut rng),
            Some(ArenaEvent::Shield)
        );
        assert_eq!(other.species, Species::Scissors);
    }
    assert_eq!(first.species, Species::Rock);

    let mut second = still(Species::Shield, 110.0);
    second.power = 1;
    let mut other = still(Species::Rock, 100.0);
    resolve(&mut other, &mut second, &mut rng);
    assert_eq!(second.species, Species::Paper);
    assert_eq!(other.species, Species::Rock);
}

#[test]
fn test_shield_against_shield_is_silent() {
    let mut arena = ArenaBuilder::new()
        .with_seed(4)
        .with_entity(Species::Shield, 100.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Shield, 110.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Rock, 600.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Paper, 900.0, 100.0, 0.0, 0.0)
        .build();
    let events = arena.tick();
    assert!(events.is_empty());
    assert!(arena.entities()[..2].iter().all(|e| e.power == 5));
}

#[test]
fn test_rock_rock_is_feedback_only() {
    let mut arena = ArenaBuilder::new()
        .with_seed(4)
        .with_entity(Species::Rock, 100.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Rock, 110.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Paper, 900.0, 500.0, 0.0, 0.0)
        .build();
    let events = arena.tick();
    assert_eq!(events, vec![ArenaEvent::RockRock]);
    assert_base_counts!(arena, 2, 1, 0);
}

#[test]
fn test_shield_absorbs_in_running_arena() {
    let mut arena = ArenaBuilder::new()
        .with_seed(4)
        .with_entity(Species::Shield, 100.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Paper, 110.0, 100.0, 0.0, 0.0)
        .with_entity(Species::Rock, 900.0, 500.0, 0.0, 0.0)
        .build();
    let events = arena.tick();
    assert_eq!(events, vec![ArenaEvent::Shield]);
    assert_eq!(arena.entities()[0].species, Species::Shield);
    assert_eq!(arena.entities()[0].power, 4);
    assert_eq!(arena.entities()[1].species, Species::Paper);
}
