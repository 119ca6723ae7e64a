//! Serialization utilities with error handling.
//!
//! JSON helpers used by save files, plus validated rkyv snapshots of the
//! entity record list.

use crate::error::{IoError, Result};
use arena_data::EntityRecord;
use rkyv::de::deserializers::SharedDeserializeMap;
use rkyv::ser::serializers::AllocSerializer;
use rkyv::ser::Serializer;
use rkyv::{AlignedVec, Deserialize as RkyvDeserialize};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes data to JSON.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Deserializes data from a JSON string. Blank input is a validation error.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    std::fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path.as_ref()))
    })?;
    Ok(())
}

pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}

/// Writes the record list as an rkyv archive.
pub fn save_rkyv<P: AsRef<Path>>(records: &[EntityRecord], path: P) -> Result<()> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&records.to_vec())
        .map_err(|e| IoError::rkyv(format!("serialization failed: {:?}", e)))?;
    let bytes = serializer.into_serializer().into_inner();
    std::fs::write(&path, &bytes).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing archive to {:?}", path.as_ref()))
    })?;
    Ok(())
}

/// Reads a record list written by [`save_rkyv`], checking the archive bytes
/// before touching them.
pub fn load_rkyv<P: AsRef<Path>>(path: P) -> Result<Vec<EntityRecord>> {
    let bytes = std::fs::read(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading archive from {:?}", path.as_ref()))
    })?;
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(&bytes);
    let archived = rkyv::check_archived_root::<Vec<EntityRecord>>(&aligned)
        .map_err(|e| IoError::rkyv(format!("validation failed: {:?}", e)))?;
    let mut deserializer = SharedDeserializeMap::default();
    let records: Vec<EntityRecord> = archived
        .deserialize(&mut deserializer)
        .map_err(|e| IoError::rkyv(format!("deserialization failed: {:?}", e)))?;
    Ok(records)
}
