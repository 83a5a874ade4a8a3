//! Momo Dash entry point
//!
//! Native builds run a headless match: a manual clock steps at 60 Hz, the
//! autopilot plays, and the outcome is logged. The browser shell drives the
//! same `tick` from `requestAnimationFrame`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use momo_dash::audio::{AudioBackend, AudioError, AudioManager, SoundEffect};
    use momo_dash::platform::{Clock, ManualClock};
    use momo_dash::sim::{GameState, MatchPhase, TickInput, tick};
    use momo_dash::ui::{GameOverTier, ScoreDisplay};
    use momo_dash::Settings;

    /// 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop after ten simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    /// Music start retries run every 200ms
    const AUDIO_POLL_FRAMES: u64 = 12;

    /// Logs cues instead of playing them
    struct LogAudio;

    impl AudioBackend for LogAudio {
        fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
            log::debug!("play {:?} at {:.2}", effect, volume);
            Ok(())
        }

        fn stop_music(&mut self) -> Result<(), AudioError> {
            log::debug!("stop music");
            Ok(())
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Momo Dash (headless) starting...");

        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::load(Path::new(&path)),
            None => Settings::default(),
        };
        let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);
        log::info!(
            "Viewport {}x{} ({}), seed {}",
            settings.canvas_width,
            settings.canvas_height,
            settings.orientation.as_str(),
            seed
        );

        let clock = ManualClock::new(0.0);
        let mut audio = AudioManager::new(LogAudio, &settings);
        let mut hud = ScoreDisplay::new();
        let mut state = GameState::new(settings, seed);

        let mut input = TickInput {
            start: true,
            idle_mode: true,
            ..Default::default()
        };

        for frame in 0..MAX_FRAMES {
            clock.advance(FRAME_MS);
            let now = clock.now();
            tick(&mut state, &input, now);
            input.start = false;

            let events = state.drain_events();
            audio.handle_events(&events);
            if frame % AUDIO_POLL_FRAMES == 0 {
                audio.poll();
            }
            hud.apply(&events, now);

            if state.phase == MatchPhase::Over {
                break;
            }
        }

        let now = clock.now();
        match state.phase {
            MatchPhase::Over => log::info!(
                "Game over after {:.1}s: score {} ({})",
                now / 1000.0,
                hud.text,
                GameOverTier::from_score(state.score).asset_key()
            ),
            _ => log::info!("Time limit reached: score {}", hud.text),
        }

        match state.snapshot(now).to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds are driven by the host page
}
