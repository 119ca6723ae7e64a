/// Asserts the base-species counts of an arena.
#[macro_export]
macro_rules! assert_base_counts {
    ($arena:expr, $rock:expr, $paper:expr, $scissors:expr) => {
        let counts = $arena.counts();
        assert_eq!(
            (counts.rock, counts.paper, counts.scissors),
            ($rock, $paper, $scissors),
            "Base species counts mismatch"
        );
    };
}

/// Asserts that every entity has finite position and velocity.
#[macro_export]
macro_rules! assert_all_finite {
    ($arena:expr) => {
        for (idx, e) in $arena.entities().iter().enumerate() {
            assert!(
                e.position.x.is_finite()
                    && e.position.y.is_finite()
                    && e.velocity.vx.is_finite()
                    && e.velocity.vy.is_finite(),
                "Entity {} has non-finite state: {:?}",
                idx,
                e
            );
        }
    };
}

/// Asserts the arena's phase.
#[macro_export]
macro_rules! assert_phase {
    ($arena:expr, $phase:expr) => {
        assert_eq!($arena.phase(), $phase, "Unexpected arena phase");
    };
}
