//! Audio boundary for arena feedback.
//!
//! The engine only reports [`ArenaEvent`]s; drivers decide how (and whether)
//! to voice them, using [`ArenaEvent::tone`] for the synthesis recipe.

use crate::events::ArenaEvent;
use async_trait::async_trait;

/// Hardware-independent trait for audio drivers.
#[async_trait]
pub trait AudioDriver: Send + Sync {
    /// Plays a one-shot effect for `event`.
    async fn play_effect(&self, event: ArenaEvent);

    /// Sets the master volume (0.0 to 1.0).
    fn set_volume(&self, volume: f32);
}

/// Null audio driver that discards all commands.
pub struct NullAudioDriver;

#[async_trait]
impl AudioDriver for NullAudioDriver {
    async fn play_effect(&self, _event: ArenaEvent) {}
    fn set_volume(&self, _volume: f32) {}
}

/// Driver that logs each effect and its notes at debug level.
#[derive(Default)]
pub struct TracingAudioDriver;

#[async_trait]
impl AudioDriver for TracingAudioDriver {
    async fn play_effect(&self, event: ArenaEvent) {
        for note in event.tone() {
            tracing::debug!(
                event = event.tag(),
                waveform = ?note.waveform,
                start_hz = note.start_hz,
                end_hz = note.end_hz,
                offset_ms = note.offset_ms,
                duration_ms = note.duration_ms,
                "Audio effect"
            );
        }
    }

    fn set_volume(&self, volume: f32) {
        tracing::debug!(volume, "Audio volume");
    }
}
