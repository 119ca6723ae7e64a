mod common;

use common::ArenaBuilder;

#[test]
fn test_long_run_invariants() {
    let mut arena = ArenaBuilder::new()
        .with_seed(2718)
        .with_population(60, 60, 60)
        .with_config(|c| {
            c.features.power_ups = true;
            c.power_ups.spawn_chance = 0.05;
            c.motion.speed = 2.0;
        })
        .build();
    arena.start();

    let mut base = arena.counts().base_total();
    let mut total = arena.entities().len();
    for _ in 0..3000 {
        if !arena.is_running() {
            break;
        }
        arena.tick();

        let counts = arena.counts();
        // Conversions only ever land on base species; power-ups only appear.
        assert!(counts.base_total() >= base, "Base population shrank");
        assert!(arena.entities().len() >= total, "Entities disappeared");
        assert!(counts.base_total() > 0);
        assert_eq!(counts.total(), arena.entities().len());
        base = counts.base_total();
        total = arena.entities().len();
    }
    assert_all_finite!(arena);
    assert!(arena.entities().iter().all(|e| e.power <= 5));
}
