pub mod audio;
pub mod shutdown;
pub mod state;

pub use audio::AudioSystem;
pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use arena_core::{ArenaEvent, Phase};
use arena_data::{Species, SpeciesCounts};
use std::fmt;
use std::time::{Duration, Instant};

/// How [`App::run_headless`] paces itself.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub max_ticks: u64,
    /// Sleep between ticks to match `target_fps` instead of running flat out.
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_ticks: 100_000,
            realtime: false,
        }
    }
}

/// Outcome of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub winner: Option<Species>,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub counts: SpeciesCounts,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(species) => write!(f, "{} wins in {:.1}s", species, self.elapsed_secs),
            None => write!(
                f,
                "No winner after {} ticks (rock {}, paper {}, scissors {})",
                self.ticks, self.counts.rock, self.counts.paper, self.counts.scissors
            ),
        }
    }
}

impl App {
    /// Runs one frame: applies the arena's sound toggle to the audio queue,
    /// ticks, records metrics and voices the resulting events.
    pub async fn step(&mut self) -> Vec<ArenaEvent> {
        let sound = self.arena.config().features.sound;
        if sound != self.audio.enabled {
            if sound {
                self.audio.enable();
            } else {
                self.audio.disable();
            }
        }

        let started = Instant::now();
        let events = self.arena.tick();
        self.metrics.record_tick(started.elapsed(), &self.arena.counts());
        self.metrics.record_events(&events);
        for &event in &events {
            self.audio.queue_event(event);
        }
        self.audio.process_queue().await;
        events
    }

    /// Ticks until someone wins, the tick budget runs out, or Ctrl+C.
    pub async fn run_headless(&mut self, options: RunOptions) -> Result<RunSummary> {
        let shutdown = ShutdownManager::new();
        shutdown.listen_for_ctrl_c();

        if !self.arena.is_running() && !self.arena.start() {
            tracing::warn!(phase = ?self.arena.phase(), "Arena has nothing to run");
        }

        let mut interval = options.realtime.then(|| {
            let fps = self.arena.config().target_fps.max(1) as f64;
            tokio::time::interval(Duration::from_secs_f64(1.0 / fps))
        });

        while self.arena.is_running()
            && !shutdown.is_shutdown_requested()
            && self.arena.tick_count() < options.max_ticks
        {
            if let Some(interval) = interval.as_mut() {
                interval.tick().await;
            }

            self.step().await;

            if interval.is_none() && self.arena.tick_count() % 1024 == 0 {
                tokio::task::yield_now().await;
            }
        }

        shutdown.cleanup(self).await?;

        let summary = RunSummary {
            winner: self.arena.winner(),
            ticks: self.arena.tick_count(),
            elapsed_secs: self.arena.elapsed_secs(),
            counts: self.arena.counts(),
        };
        if self.arena.phase() != Phase::Finished {
            tracing::info!(ticks = summary.ticks, "Run ended without a winner");
        }
        Ok(summary)
    }
}
