//! Configuration management for arena parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Out-of-range values are clamped by [`ArenaConfig::sanitized`] rather
//! than rejected; only structurally unusable settings fail validation.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_fps = 60
//!
//! [arena]
//! width = 1280.0
//! height = 720.0
//! seed = 42
//! deterministic = true
//!
//! [population]
//! rock = 100
//! paper = 100
//! scissors = 100
//!
//! [motion]
//! speed = 1.0
//!
//! [features]
//! power_ups = true
//! trails = false
//! sound = true
//! manual_mode = false
//!
//! [power_ups]
//! spawn_chance = 0.02
//! ```

use arena_data::{Species, MAX_RADIUS};
use serde::{Deserialize, Serialize};

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 2.0;
pub const MAX_INITIAL_COUNT: i64 = 200;

/// Arena dimensions and random source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaSection {
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
    pub deterministic: bool,
}

impl Default for ArenaSection {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            seed: None,
            deterministic: false,
        }
    }
}

/// Initial base-species counts used by an automatic (non-manual) reset.
///
/// Signed so that negative values in a hand-edited file are clamped to zero
/// instead of failing to parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub rock: i64,
    pub paper: i64,
    pub scissors: i64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            rock: 100,
            paper: 100,
            scissors: 100,
        }
    }
}

impl PopulationConfig {
    #[must_use]
    pub fn count(&self, species: Species) -> usize {
        let raw = match species {
            Species::Rock => self.rock,
            Species::Paper => self.paper,
            Species::Scissors => self.scissors,
            Species::Bomb | Species::Shield => 0,
        };
        raw.clamp(0, MAX_INITIAL_COUNT) as usize
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Speed magnitude applied to every entity.
    pub speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FeatureToggles {
    pub power_ups: bool,
    pub trails: bool,
    pub sound: bool,
    pub manual_mode: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            power_ups: false,
            trails: false,
            sound: true,
            manual_mode: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PowerUpConfig {
    /// Per-tick probability of spawning one power-up while enabled.
    pub spawn_chance: f64,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self { spawn_chance: 0.02 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub target_fps: u64,
    pub arena: ArenaSection,
    pub population: PopulationConfig,
    pub motion: MotionConfig,
    pub features: FeatureToggles,
    pub power_ups: PowerUpConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            arena: ArenaSection::default(),
            population: PopulationConfig::default(),
            motion: MotionConfig::default(),
            features: FeatureToggles::default(),
            power_ups: PowerUpConfig::default(),
        }
    }
}

/// Clamps a requested speed into the supported range. NaN maps to the minimum.
#[must_use]
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        MIN_SPEED
    } else {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    }
}

impl ArenaConfig {
    /// Returns a copy with every ranged value clamped to its valid boundary.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        config.population.rock = config.population.rock.clamp(0, MAX_INITIAL_COUNT);
        config.population.paper = config.population.paper.clamp(0, MAX_INITIAL_COUNT);
        config.population.scissors = config.population.scissors.clamp(0, MAX_INITIAL_COUNT);
        config.motion.speed = clamp_speed(config.motion.speed);
        config.power_ups.spawn_chance = if config.power_ups.spawn_chance.is_nan() {
            0.0
        } else {
            config.power_ups.spawn_chance.clamp(0.0, 1.0)
        };
        config.target_fps = config.target_fps.clamp(1, 240);
        config
    }

    /// Validates settings that cannot be clamped into something meaningful.
    ///
    /// # Validation Rules
    /// - Arena dimensions must be finite and wide enough to hold the largest
    ///   entity (`2 * MAX_RADIUS`) on both axes
    /// - Speed and spawn chance must lie in their ranges (run `sanitized` first)
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.arena.width.is_finite() && self.arena.height.is_finite(),
            "Arena dimensions must be finite"
        );
        anyhow::ensure!(
            self.arena.width > 2.0 * MAX_RADIUS,
            "Arena width must exceed {}",
            2.0 * MAX_RADIUS
        );
        anyhow::ensure!(
            self.arena.height > 2.0 * MAX_RADIUS,
            "Arena height must exceed {}",
            2.0 * MAX_RADIUS
        );
        anyhow::ensure!(
            (MIN_SPEED..=MAX_SPEED).contains(&self.motion.speed),
            "Speed must be in [{MIN_SPEED}, {MAX_SPEED}]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.power_ups.spawn_chance),
            "Power-up spawn chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        Ok(())
    }

    /// Parses, clamps and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?.sanitized();
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// SHA-256 over the settings that shape simulation outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.arena).as_bytes());
        hasher.update(format!("{:?}", self.population).as_bytes());
        hasher.update(format!("{:?}", self.motion).as_bytes());
        hasher.update(format!("{:?}", self.power_ups).as_bytes());
        hasher.update([u8::from(self.features.power_ups)]);
        hex::encode(hasher.finalize())
    }
}
