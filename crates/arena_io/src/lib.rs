//! # Arena IO
//!
//! Persistence layer for the arena.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Serialization helpers (JSON, rkyv)
//! - Versioned, optionally gzip-compressed save files

/// Error types and result aliases for I/O operations
pub mod error;
/// Save file format and load/store entry points
pub mod persistence;
/// Validated serialization helpers for JSON and rkyv
pub mod serialization;

pub use error::{IoError, Result};
pub use persistence::{load_state, parse_save, save_state, SaveFile, CURRENT_SAVE_VERSION};
pub use serialization::{
    from_json, load_rkyv, read_json_file, save_rkyv, to_json, to_json_pretty, write_json_file,
};
