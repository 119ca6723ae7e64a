//! # Arena Core
//!
//! The simulation engine for the rock-paper-scissors arena.
//!
//! This crate contains the tick logic, including:
//! - Motion integration with border reflection
//! - Pairwise collision resolution and the conversion rule table
//! - Bomb and shield power-ups
//! - Manual region placement
//! - Win detection and the session state machine
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use arena_core::{Arena, ArenaConfig, Phase};
//!
//! let mut config = ArenaConfig::default();
//! config.arena.seed = Some(42);
//! let mut arena = Arena::new(config).unwrap();
//! arena.reset();
//! assert!(arena.start());
//! arena.tick();
//! assert_eq!(arena.tick_count(), 1);
//! assert_eq!(arena.phase(), Phase::Running);
//! ```

/// Session state machine and tick scheduler
pub mod arena;
/// Configuration management for arena parameters
pub mod config;
/// Events emitted per tick and their tone recipes
pub mod events;
/// Entity creation helpers
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Render-facing views of the arena
pub mod snapshot;
/// Per-tick systems (motion, collision, rules, spawning, placement, audio)
pub mod systems;

pub use arena::{Arena, Phase};
pub use config::ArenaConfig;
pub use events::ArenaEvent;
pub use metrics::{init_logging, Metrics};
pub use snapshot::{ArenaSnapshot, EntitySnapshot};
