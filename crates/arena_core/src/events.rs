//! Discrete occurrences reported by the engine for feedback collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One meaningful occurrence during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArenaEvent {
    /// An entity was clamped against an arena edge.
    Border,
    /// A bomb converted its partner.
    Bomb,
    /// A shield absorbed a collision.
    Shield,
    /// A base-species conversion happened.
    Convert,
    /// Two rocks collided.
    RockRock,
    /// Exactly one base species remains.
    Victory,
}

/// Oscillator shape used by a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single synthesized note: frequency sweeps from `start_hz` to `end_hz`
/// while gain decays exponentially over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub gain: f32,
    pub offset_ms: u32,
    pub duration_ms: u32,
}

impl Note {
    const fn steady(waveform: Waveform, hz: f32, gain: f32, duration_ms: u32) -> Self {
        Self {
            waveform,
            start_hz: hz,
            end_hz: hz,
            gain,
            offset_ms: 0,
            duration_ms,
        }
    }
}

const BORDER_TONE: [Note; 1] = [Note::steady(Waveform::Sine, 1000.0, 0.03, 50)];
const BOMB_TONE: [Note; 1] = [Note {
    waveform: Waveform::Sawtooth,
    start_hz: 1200.0,
    end_hz: 200.0,
    gain: 0.1,
    offset_ms: 0,
    duration_ms: 200,
}];
const SHIELD_TONE: [Note; 1] = [Note::steady(Waveform::Square, 800.0, 0.08, 150)];
const CONVERT_TONE: [Note; 1] = [Note::steady(Waveform::Triangle, 400.0, 0.06, 100)];
const ROCK_ROCK_TONE: [Note; 1] = [Note::steady(Waveform::Sine, 150.0, 0.2, 300)];
const VICTORY_TONE: [Note; 4] = [
    Note {
        offset_ms: 0,
        ..Note::steady(Waveform::Sine, 440.0, 0.1, 300)
    },
    Note {
        offset_ms: 150,
        ..Note::steady(Waveform::Sine, 554.0, 0.1, 300)
    },
    Note {
        offset_ms: 300,
        ..Note::steady(Waveform::Sine, 659.0, 0.1, 300)
    },
    Note {
        offset_ms: 450,
        ..Note::steady(Waveform::Sine, 880.0, 0.1, 300)
    },
];

impl ArenaEvent {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ArenaEvent::Border => "border",
            ArenaEvent::Bomb => "bomb",
            ArenaEvent::Shield => "shield",
            ArenaEvent::Convert => "convert",
            ArenaEvent::RockRock => "rock-rock",
            ArenaEvent::Victory => "victory",
        }
    }

    /// Synthesis recipe for audio drivers.
    #[must_use]
    pub fn tone(self) -> &'static [Note] {
        match self {
            ArenaEvent::Border => &BORDER_TONE,
            ArenaEvent::Bomb => &BOMB_TONE,
            ArenaEvent::Shield => &SHIELD_TONE,
            ArenaEvent::Convert => &CONVERT_TONE,
            ArenaEvent::RockRock => &ROCK_ROCK_TONE,
            ArenaEvent::Victory => &VICTORY_TONE,
        }
    }
}

impl fmt::Display for ArenaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
