//! # Arena Data
//!
//! Plain data shared by the engine, persistence layer and host: species tags
//! and their profile table, entities, persisted records and population tallies.

pub mod data;

pub use data::entity::{Entity, EntityRecord, Position, Trail, Velocity, TRAIL_CAPACITY};
pub use data::species::{Species, SpeciesCounts, SpeciesProfile, MAX_RADIUS};
