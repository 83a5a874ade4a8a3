//! Sound cue dispatch
//!
//! The simulation emits `GameEvent`s; this maps them to sound cues and hands
//! them to a host backend (HTML audio elements on the web, a logger natively).
//! Backend failures never reach the simulation: they are logged and dropped.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Times a failed background music start is retried
pub const MAX_MUSIC_RETRIES: u32 = 3;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Looping background track, starts with the match
    Music,
    /// Collectible picked up
    Point,
    /// Hazard hit
    GameOver,
}

impl SoundEffect {
    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::Music)
    }
}

/// Playback failure reported by a backend (e.g. autoplay blocked)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("audio playback failed: {message}")]
pub struct AudioError {
    pub message: String,
}

impl AudioError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Host-side playback
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self) -> Result<(), AudioError>;
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Remaining attempts to start music after a failure
    music_retries: u32,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_retries: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Play a cue; returns false if it was silent or the backend failed
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return false;
        }
        match self.backend.play(effect, vol) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{:?}: {}", effect, e);
                false
            }
        }
    }

    /// React to the events drained from the simulation this frame
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Started => {
                    self.music_retries = 0;
                    let audible = self.effective_volume(SoundEffect::Music) > 0.0;
                    if audible && !self.play(SoundEffect::Music) {
                        self.music_retries = MAX_MUSIC_RETRIES;
                    }
                }
                GameEvent::Point { .. } => {
                    self.play(SoundEffect::Point);
                }
                GameEvent::Crash { .. } => {
                    self.music_retries = 0;
                    if let Err(e) = self.backend.stop_music() {
                        log::warn!("Stopping music: {}", e);
                    }
                    self.play(SoundEffect::GameOver);
                }
            }
        }
    }

    /// Retry a music start that failed (call periodically, e.g. every 200ms)
    pub fn poll(&mut self) {
        if self.music_retries == 0 {
            return;
        }
        self.music_retries -= 1;
        if self.play(SoundEffect::Music) {
            self.music_retries = 0;
        } else if self.music_retries == 0 {
            log::warn!("Giving up on background music");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records cues; fails the first `fail_music` music starts
    #[derive(Default)]
    struct Recorder {
        played: Vec<(SoundEffect, f32)>,
        stops: u32,
        fail_music: u32,
    }

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
            if effect.is_music() && self.fail_music > 0 {
                self.fail_music -= 1;
                return Err(AudioError::new("not ready"));
            }
            self.played.push((effect, volume));
            Ok(())
        }

        fn stop_music(&mut self) -> Result<(), AudioError> {
            self.stops += 1;
            Err(AudioError::new("no music element"))
        }
    }

    fn manager(fail_music: u32) -> AudioManager<Recorder> {
        let backend = Recorder {
            fail_music,
            ..Default::default()
        };
        AudioManager::new(backend, &Settings::default())
    }

    #[test]
    fn test_events_map_to_cues() {
        let mut audio = manager(0);
        audio.handle_events(&[
            GameEvent::Started,
            GameEvent::Point { score: 1 },
            GameEvent::Crash { score: 1 },
        ]);
        let cues: Vec<_> = audio.backend().played.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            cues,
            vec![SoundEffect::Music, SoundEffect::Point, SoundEffect::GameOver]
        );
        // stop_music failed but was swallowed
        assert_eq!(audio.backend().stops, 1);
    }

    #[test]
    fn test_channel_volumes() {
        let mut audio = manager(0);
        audio.handle_events(&[GameEvent::Started, GameEvent::Point { score: 1 }]);
        let played = &audio.backend().played;
        assert!((played[0].1 - 0.8 * 0.7).abs() < 1e-6);
        assert!((played[1].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = manager(0);
        audio.set_muted(true);
        audio.handle_events(&[GameEvent::Started, GameEvent::Point { score: 1 }]);
        audio.poll();
        assert!(audio.backend().played.is_empty());
    }

    #[test]
    fn test_music_retry() {
        let mut audio = manager(2);
        audio.handle_events(&[GameEvent::Started]);
        assert!(audio.backend().played.is_empty());
        audio.poll(); // second failure
        audio.poll(); // succeeds
        audio.poll(); // nothing left to retry
        assert_eq!(audio.backend().played.len(), 1);
        assert_eq!(audio.backend().played[0].0, SoundEffect::Music);
    }

    #[test]
    fn test_music_retry_gives_up() {
        let mut audio = manager(10);
        audio.handle_events(&[GameEvent::Started]);
        for _ in 0..10 {
            audio.poll();
        }
        assert!(audio.backend().played.is_empty());
        assert_eq!(audio.backend().fail_music, 10 - 1 - MAX_MUSIC_RETRIES);
    }

    #[test]
    fn test_audio_error_message() {
        let err = AudioError::new("autoplay blocked");
        assert_eq!(err.to_string(), "audio playback failed: autoplay blocked");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
