pub mod macros;

use rps_arena_lib::model::config::ArenaConfig;
use rps_arena_lib::model::data::{EntityRecord, Species};
use rps_arena_lib::model::{Arena, ArenaEvent};

/// Builds arenas for tests. Starts from an empty population with sound off;
/// explicit entities are imported, which puts the arena straight into
/// `Running` as long as a base species is among them.
#[allow(dead_code)]
pub struct ArenaBuilder {
    config: ArenaConfig,
    records: Vec<EntityRecord>,
}

#[allow(dead_code)]
impl ArenaBuilder {
    pub fn new() -> Self {
        let mut config = ArenaConfig::default();
        config.population.rock = 0;
        config.population.paper = 0;
        config.population.scissors = 0;
        config.features.sound = false;
        Self {
            config,
            records: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.arena.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.config.arena.width = width;
        self.config.arena.height = height;
        self
    }

    pub fn with_population(mut self, rock: i64, paper: i64, scissors: i64) -> Self {
        self.config.population.rock = rock;
        self.config.population.paper = paper;
        self.config.population.scissors = scissors;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut ArenaConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_entity(mut self, species: Species, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        self.records.push(EntityRecord {
            x,
            y,
            species,
            vx,
            vy,
        });
        self
    }

    /// Lays out `count` motionless entities on a grid far enough apart that
    /// they never touch.
    pub fn with_still_grid(mut self, species: Species, count: usize) -> Self {
        for _ in 0..count {
            let idx = self.records.len();
            let x = 40.0 + (idx % 20) as f64 * 50.0;
            let y = 40.0 + (idx / 20) as f64 * 50.0;
            self.records.push(EntityRecord {
                x,
                y,
                species,
                vx: 0.0,
                vy: 0.0,
            });
        }
        self
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn build(self) -> Arena {
        let mut arena = Arena::new(self.config).expect("Failed to create arena in test builder");
        if self.records.is_empty() {
            arena.reset();
        } else {
            arena
                .import_state(&self.records)
                .expect("Failed to import test entities");
        }
        arena
    }
}

/// Ticks `n` times (or until the arena stops) and collects every event.
#[allow(dead_code)]
pub fn run_ticks(arena: &mut Arena, n: usize) -> Vec<ArenaEvent> {
    let mut events = Vec::new();
    for _ in 0..n {
        if !arena.is_running() {
            break;
        }
        events.extend(arena.tick());
    }
    events
}
