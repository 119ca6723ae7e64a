//! Versioned save files for arena state.

use crate::error::{IoError, Result};
use arena_data::EntityRecord;
use chrono::Utc;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use uuid::Uuid;

pub const CURRENT_SAVE_VERSION: u32 = 1;

/// On-disk save. Files written before versioning existed are a bare JSON
/// array of records and load as version 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub run_id: Uuid,
    pub saved_at: String,
    pub config_fingerprint: String,
    pub entities: Vec<EntityRecord>,
}

impl SaveFile {
    #[must_use]
    pub fn new(entities: Vec<EntityRecord>, config_fingerprint: impl Into<String>) -> Self {
        Self {
            version: CURRENT_SAVE_VERSION,
            run_id: Uuid::new_v4(),
            saved_at: Utc::now().to_rfc3339(),
            config_fingerprint: config_fingerprint.into(),
            entities,
        }
    }

    fn legacy(entities: Vec<EntityRecord>) -> Self {
        Self {
            version: 0,
            run_id: Uuid::nil(),
            saved_at: String::new(),
            config_fingerprint: String::new(),
            entities,
        }
    }

    /// Rejects records that carry non-finite numbers.
    pub fn validate(&self) -> Result<()> {
        match self.entities.iter().position(|r| !r.is_finite()) {
            Some(idx) => Err(IoError::validation(format!(
                "entity {idx} has a non-finite position or velocity"
            ))),
            None => Ok(()),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Writes `entities` as a new [`SaveFile`]. A `.gz` path is gzip-compressed.
pub fn save_state(
    path: impl AsRef<Path>,
    entities: &[EntityRecord],
    config_fingerprint: &str,
) -> Result<SaveFile> {
    let path = path.as_ref();
    let save = SaveFile::new(entities.to_vec(), config_fingerprint);
    save.validate()?;
    let json = serde_json::to_string_pretty(&save)?;

    let file = File::create(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", path)))?;
    if is_gzip(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(json.as_bytes())
            .map_err(|e| IoError::compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| IoError::compression(e.to_string()))?;
    } else {
        let mut file = file;
        file.write_all(json.as_bytes())?;
    }

    tracing::info!(
        path = %path.display(),
        entities = save.entities.len(),
        run_id = %save.run_id,
        "Arena state saved"
    );
    Ok(save)
}

/// Reads a save written by [`save_state`] or a legacy bare record array.
pub fn load_state(path: impl AsRef<Path>) -> Result<SaveFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::not_found(path.display().to_string()));
    }

    let mut content = String::new();
    let file = File::open(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("opening {:?}", path)))?;
    if is_gzip(path) {
        GzDecoder::new(file)
            .read_to_string(&mut content)
            .map_err(|e| IoError::compression(e.to_string()))?;
    } else {
        let mut file = file;
        file.read_to_string(&mut content)?;
    }

    let save = parse_save(&content).map_err(|e| e.with_context(format!("loading {:?}", path)))?;
    tracing::info!(
        path = %path.display(),
        version = save.version,
        entities = save.entities.len(),
        "Arena state loaded"
    );
    Ok(save)
}

/// Parses save content without touching the file system.
pub fn parse_save(content: &str) -> Result<SaveFile> {
    if content.trim().is_empty() {
        return Err(IoError::validation("Empty save file"));
    }
    let value: serde_json::Value = serde_json::from_str(content)?;

    let save = if value.is_array() {
        tracing::info!("Save has no version header, loading as legacy record list");
        SaveFile::legacy(serde_json::from_value(value)?)
    } else {
        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| IoError::validation("missing save version"))?;
        if version > u64::from(CURRENT_SAVE_VERSION) {
            return Err(IoError::UnsupportedVersion {
                found: u32::try_from(version).unwrap_or(u32::MAX),
                supported: CURRENT_SAVE_VERSION,
            });
        }
        serde_json::from_value(value)?
    };

    save.validate()?;
    Ok(save)
}
