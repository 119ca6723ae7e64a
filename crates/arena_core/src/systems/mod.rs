//! Per-tick arena systems, leaves first.

pub mod audio;
pub mod collision;
pub mod motion;
pub mod placement;
pub mod rules;
pub mod spawner;
