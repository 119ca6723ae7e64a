//! The arena session: owns the entity collection and drives ticks.

use crate::config::{clamp_speed, ArenaConfig};
use crate::events::ArenaEvent;
use crate::lifecycle;
use crate::snapshot::{ArenaSnapshot, EntitySnapshot};
use crate::systems::motion::{self, Bounds};
use crate::systems::placement::{self, Region, Selection};
use crate::systems::{collision, spawner};
use arena_data::{Entity, EntityRecord, Position, Species, SpeciesCounts};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Lifecycle state of an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Entities (possibly none) are set up but not moving.
    Idle,
    /// Manual mode: accepting placements, physics paused.
    Placing,
    /// Ticks advance the simulation.
    Running,
    /// One base species remains; ticking has halted.
    Finished,
}

/// A single simulation session.
///
/// Every mutation of the entity collection goes through `&mut self`, so a
/// host sharing an arena across threads must wrap it in one lock and apply
/// its changes between ticks.
pub struct Arena {
    config: ArenaConfig,
    bounds: Bounds,
    entities: Vec<Entity>,
    phase: Phase,
    rng: ChaCha8Rng,
    tick: u64,
    started_at: Option<Instant>,
    finished_after: Option<Duration>,
    winner: Option<Species>,
    counts: SpeciesCounts,
    selection: Option<Selection>,
    selected_species: Species,
}

impl Arena {
    /// Creates an empty, idle arena. Ranged settings are clamped first.
    pub fn new(config: ArenaConfig) -> anyhow::Result<Self> {
        let config = config.sanitized();
        config.validate()?;
        let rng = match config.arena.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            bounds: Bounds::new(config.arena.width, config.arena.height),
            config,
            entities: Vec::new(),
            phase: Phase::Idle,
            rng,
            tick: 0,
            started_at: None,
            finished_after: None,
            winner: None,
            counts: SpeciesCounts::default(),
            selection: None,
            selected_species: Species::Rock,
        })
    }

    /// Discards every entity and sets up a fresh round.
    ///
    /// Manual mode enters [`Phase::Placing`] with an empty arena; otherwise the
    /// configured base-species counts are scattered at random and the arena
    /// waits in [`Phase::Idle`] for [`Arena::start`].
    pub fn reset(&mut self) {
        self.entities.clear();
        self.tick = 0;
        self.started_at = None;
        self.finished_after = None;
        self.winner = None;
        self.selection = None;

        if self.config.features.manual_mode {
            self.phase = Phase::Placing;
        } else {
            let speed = self.config.motion.speed;
            for species in Species::BASE {
                for _ in 0..self.config.population.count(species) {
                    let entity =
                        lifecycle::spawn_anywhere(species, self.bounds, speed, &mut self.rng);
                    self.entities.push(entity);
                }
            }
            self.phase = Phase::Idle;
        }
        self.recount();
        tracing::info!(
            phase = ?self.phase,
            entities = self.entities.len(),
            "Arena reset"
        );
    }

    /// Begins ticking. Requires `Idle` or `Placing` with at least one base
    /// species entity; power-ups alone can never produce a winner.
    pub fn start(&mut self) -> bool {
        if !matches!(self.phase, Phase::Idle | Phase::Placing) || self.counts.base_total() == 0 {
            return false;
        }
        self.selection = None;
        self.phase = Phase::Running;
        self.started_at = Some(Instant::now());
        self.finished_after = None;
        tracing::info!(entities = self.entities.len(), "Arena started");
        true
    }

    /// [`Arena::reset`] followed by [`Arena::start`].
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    /// Halts ticking before the next tick; entities are kept.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
            tracing::info!(tick = self.tick, "Arena stopped");
        }
    }

    /// Runs one full tick and returns its events in occurrence order.
    ///
    /// Does nothing outside [`Phase::Running`]. Order: integrate every entity,
    /// resolve every pair `i < j` once, roll for a power-up, recount, then
    /// check for a winner.
    pub fn tick(&mut self) -> Vec<ArenaEvent> {
        if self.phase != Phase::Running {
            return Vec::new();
        }
        self.tick += 1;
        if self.config.arena.deterministic {
            let seed = self.config.arena.seed.unwrap_or(0);
            self.rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(self.tick).wrapping_add(0x5EED));
        }

        let mut events = Vec::new();
        for entity in &mut self.entities {
            if motion::advance(entity, self.bounds).is_some() {
                events.push(ArenaEvent::Border);
            }
        }

        collision::sweep(&mut self.entities, &mut self.rng, &mut events);

        if let Some(power_up) = spawner::maybe_spawn(
            self.config.features.power_ups,
            self.config.power_ups.spawn_chance,
            self.bounds,
            self.config.motion.speed,
            &mut self.rng,
        ) {
            tracing::debug!(species = %power_up.species, tick = self.tick, "Power-up spawned");
            self.entities.push(power_up);
        }

        self.recount();

        if let Some(winner) = self.counts.sole_base_survivor() {
            self.finish(winner);
            events.push(ArenaEvent::Victory);
        } else if self.counts.base_total() == 0 {
            tracing::error!(
                tick = self.tick,
                entities = self.entities.len(),
                "No base species left; win condition cannot resolve"
            );
        }
        events
    }

    fn finish(&mut self, winner: Species) {
        self.winner = Some(winner);
        self.finished_after = Some(self.started_at.map_or(Duration::ZERO, |t| t.elapsed()));
        self.phase = Phase::Finished;
        tracing::info!(
            winner = %winner,
            tick = self.tick,
            elapsed_secs = self.elapsed_secs(),
            "Arena finished"
        );
    }

    fn recount(&mut self) {
        self.counts = SpeciesCounts::tally(self.entities.iter().map(|e| e.species));
    }

    /// Applies a new global speed to every entity, keeping directions.
    pub fn set_speed(&mut self, speed: f64) {
        let speed = clamp_speed(speed);
        self.config.motion.speed = speed;
        for entity in &mut self.entities {
            motion::set_speed(entity, speed);
        }
    }

    pub fn set_power_ups(&mut self, enabled: bool) {
        self.config.features.power_ups = enabled;
    }

    pub fn set_trails(&mut self, enabled: bool) {
        self.config.features.trails = enabled;
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.config.features.sound = enabled;
    }

    /// Switching manual mode on starts a fresh placement round.
    pub fn set_manual_mode(&mut self, enabled: bool) {
        let was = self.config.features.manual_mode;
        self.config.features.manual_mode = enabled;
        if enabled && !was {
            self.reset();
        }
    }

    /// Species used by [`Arena::commit_selection`].
    pub fn select_species(&mut self, species: Species) {
        self.selected_species = species;
    }

    #[must_use]
    pub fn selected_species(&self) -> Species {
        self.selected_species
    }

    /// Spawns `max(1, floor(area / 2000))` entities of `species` inside the
    /// rectangle spanned by `a` and `b`, clipped to the arena. Ignored unless
    /// placing; returns how many were added.
    pub fn place_region(&mut self, a: Position, b: Position, species: Species) -> usize {
        if self.phase != Phase::Placing {
            return 0;
        }
        let region = Region::from_corners(a, b).clamped_to(self.bounds);
        let placed =
            placement::populate_region(region, species, self.config.motion.speed, &mut self.rng);
        let added = placed.len();
        self.entities.extend(placed);
        self.recount();
        tracing::debug!(species = %species, added, "Region placed");
        added
    }

    /// Starts a drag at `point`.
    pub fn begin_selection(&mut self, point: Position) {
        if self.phase == Phase::Placing {
            self.selection = Some(Selection {
                anchor: point,
                cursor: point,
            });
        }
    }

    pub fn update_selection(&mut self, point: Position) {
        if let Some(selection) = self.selection.as_mut() {
            selection.cursor = point;
        }
    }

    /// Ends the drag and places the selected species over it.
    pub fn commit_selection(&mut self) -> usize {
        match self.selection.take() {
            Some(selection) => {
                self.place_region(selection.anchor, selection.cursor, self.selected_species)
            }
            None => 0,
        }
    }

    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    #[must_use]
    pub fn export_state(&self) -> Vec<EntityRecord> {
        self.entities.iter().map(Entity::to_record).collect()
    }

    /// Replaces the whole collection with `records` and starts running. A
    /// collection without base species is loaded but left `Idle`.
    ///
    /// Any non-finite record rejects the import and leaves the arena as it
    /// was. Radius and power come from each record's species.
    pub fn import_state(&mut self, records: &[EntityRecord]) -> anyhow::Result<()> {
        if let Some(idx) = records.iter().position(|r| !r.is_finite()) {
            anyhow::bail!("Record {idx} has a non-finite position or velocity");
        }
        self.entities = records.iter().map(|r| r.into_entity()).collect();
        self.tick = 0;
        self.winner = None;
        self.selection = None;
        self.finished_after = None;
        self.recount();
        if self.counts.base_total() == 0 {
            self.started_at = None;
            self.phase = Phase::Idle;
            tracing::warn!(
                entities = self.entities.len(),
                "Imported state has no base species; not starting"
            );
        } else {
            self.started_at = Some(Instant::now());
            self.phase = Phase::Running;
            tracing::info!(entities = self.entities.len(), "Arena state imported");
        }
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> ArenaSnapshot {
        let trails = self.config.features.trails;
        ArenaSnapshot {
            tick: self.tick,
            phase: self.phase,
            width: self.bounds.width,
            height: self.bounds.height,
            entities: self
                .entities
                .iter()
                .map(|e| EntitySnapshot::from_entity(e, trails))
                .collect(),
            selection: self.selection,
            counts: self.counts,
            elapsed_secs: self.elapsed_secs(),
            winner: self.winner,
        }
    }

    #[must_use]
    pub fn counts(&self) -> SpeciesCounts {
        self.counts
    }

    /// Seconds since the run started, frozen once it finishes.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        match (self.finished_after, self.started_at) {
            (Some(total), _) => total.as_secs_f64(),
            (None, Some(start)) => start.elapsed().as_secs_f64(),
            (None, None) => 0.0,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Species> {
        self.winner
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }
}
