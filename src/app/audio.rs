use arena_core::systems::audio::{AudioDriver, NullAudioDriver, TracingAudioDriver};
use arena_core::ArenaEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Minimum gap between two voiced effects.
pub const MIN_EFFECT_GAP: Duration = Duration::from_millis(10);

/// Host-side audio queue.
///
/// The engine reports every event; this is where they get thinned out. Any
/// effect requested within [`MIN_EFFECT_GAP`] of the previous one is dropped.
pub struct AudioSystem {
    pub enabled: bool,
    pub volume: f32,
    driver: Box<dyn AudioDriver>,
    event_queue: VecDeque<ArenaEvent>,
    last_played: Option<Instant>,
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 0.5,
            driver: Box::new(NullAudioDriver),
            event_queue: VecDeque::with_capacity(32),
            last_played: None,
        }
    }
}

impl AudioSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio system that logs effects instead of playing them.
    pub fn with_tracing_driver(enabled: bool) -> Self {
        Self {
            enabled,
            driver: Box::new(TracingAudioDriver),
            ..Self::default()
        }
    }

    pub fn with_driver(mut self, driver: Box<dyn AudioDriver>) -> Self {
        self.driver = driver;
        self
    }

    pub fn enable(&mut self) {
        self.enabled = true;
        tracing::info!("Audio enabled");
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.event_queue.clear();
        tracing::info!("Audio disabled");
    }

    pub fn toggle(&mut self) {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
    }

    /// Set volume (0.0 to 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.driver.set_volume(self.volume);
    }

    pub fn queue_event(&mut self, event: ArenaEvent) {
        if self.enabled {
            self.event_queue.push_back(event);
        }
    }

    pub fn pending(&self) -> usize {
        self.event_queue.len()
    }

    /// Drains the queue, returning how many effects were voiced.
    ///
    /// Call this once per frame.
    pub async fn process_queue(&mut self) -> usize {
        self.process_queue_at(Instant::now()).await
    }

    pub async fn process_queue_at(&mut self, now: Instant) -> usize {
        if !self.enabled {
            self.event_queue.clear();
            return 0;
        }

        let mut played = 0;
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(last) = self.last_played {
                if now.saturating_duration_since(last) < MIN_EFFECT_GAP {
                    continue;
                }
            }
            self.last_played = Some(now);
            self.driver.play_effect(event).await;
            played += 1;
        }
        played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_system_default() {
        let audio = AudioSystem::new();
        assert!(!audio.enabled);
        assert_eq!(audio.volume, 0.5);
    }

    #[test]
    fn test_audio_system_volume_clamping() {
        let mut audio = AudioSystem::new();

        audio.set_volume(1.5);
        assert_eq!(audio.volume, 1.0);

        audio.set_volume(-0.5);
        assert_eq!(audio.volume, 0.0);
    }

    #[test]
    fn test_disabled_audio_ignores_events() {
        let mut audio = AudioSystem::new();
        audio.queue_event(ArenaEvent::Convert);
        assert_eq!(audio.pending(), 0);
    }

    #[tokio::test]
    async fn test_effects_within_gap_are_dropped() {
        let mut audio = AudioSystem::with_tracing_driver(true);
        let t0 = Instant::now();

        audio.queue_event(ArenaEvent::Border);
        audio.queue_event(ArenaEvent::Convert);
        audio.queue_event(ArenaEvent::Bomb);
        assert_eq!(audio.process_queue_at(t0).await, 1);

        audio.queue_event(ArenaEvent::Shield);
        assert_eq!(audio.process_queue_at(t0 + Duration::from_millis(5)).await, 0);

        audio.queue_event(ArenaEvent::Victory);
        assert_eq!(audio.process_queue_at(t0 + Duration::from_millis(12)).await, 1);
        assert_eq!(audio.pending(), 0);
    }

    #[tokio::test]
    async fn test_toggle_clears_queue() {
        let mut audio = AudioSystem::with_tracing_driver(true);
        audio.queue_event(ArenaEvent::RockRock);
        audio.toggle();
        assert!(!audio.enabled);
        assert_eq!(audio.process_queue().await, 0);
    }
}
