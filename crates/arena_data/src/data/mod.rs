//! Core data structures for the arena simulation.

pub mod entity;
pub mod species;
