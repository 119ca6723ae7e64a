use crate::app::audio::AudioSystem;
use anyhow::{Context, Result};
use arena_core::{Arena, ArenaConfig, Metrics};
use std::path::{Path, PathBuf};

/// Headless host around one [`Arena`].
pub struct App {
    pub arena: Arena,
    pub audio: AudioSystem,
    pub metrics: Metrics,
    /// Where [`App::save_state`] writes; `None` disables saving.
    pub save_path: Option<PathBuf>,
}

impl App {
    /// Reads `path`, falling back to defaults. A missing file is created
    /// with the defaults so it can be edited.
    pub fn load_config(path: impl AsRef<Path>) -> ArenaConfig {
        let path = path.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            match ArenaConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                }
            }
        }
        let default = ArenaConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = default.to_toml() {
                if std::fs::write(path, toml_str).is_ok() {
                    tracing::info!(path = %path.display(), "Wrote default config");
                }
            }
        }
        default
    }

    /// Builds the arena and populates it per `config`.
    pub fn new(config: ArenaConfig) -> Result<Self> {
        let mut arena = Arena::new(config).context("Invalid arena configuration")?;
        arena.reset();
        Ok(Self {
            audio: AudioSystem::with_tracing_driver(arena.config().features.sound),
            arena,
            metrics: Metrics::new(),
            save_path: None,
        })
    }

    /// Replaces the arena's entities with a save file's and starts running.
    pub fn load_state(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let save = arena_io::load_state(path)
            .with_context(|| format!("Failed to load save {}", path.display()))?;
        let fingerprint = self.arena.config().fingerprint();
        if !save.config_fingerprint.is_empty() && save.config_fingerprint != fingerprint {
            tracing::warn!(
                saved = %save.config_fingerprint,
                current = %fingerprint,
                "Save was written with a different configuration"
            );
        }
        self.arena.import_state(&save.entities)?;
        Ok(())
    }

    pub fn save_state(&mut self) -> Result<()> {
        let Some(path) = self.save_path.as_ref() else {
            return Ok(());
        };
        let fingerprint = self.arena.config().fingerprint();
        arena_io::save_state(path, &self.arena.export_state(), &fingerprint)
            .with_context(|| format!("Failed to write save {}", path.display()))?;
        Ok(())
    }
}
