//! Per-frame game loop
//!
//! One `tick` per animation frame. The host keeps calling it until the phase
//! reaches `Over`; paused frames only process input.

use super::collision;
use super::effect::EffectTimer;
use super::factory;
use super::pause::PauseController;
use super::physics;
use super::spawn::SpawnTimers;
use super::state::{Category, GameEvent, GameState, MatchPhase, Player};

/// Frames of travel ahead of the player the autopilot reacts to
const AUTOPILOT_LOOKAHEAD_FRAMES: f32 = 16.0;

/// One-shot inputs for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the match (overlay click / first key)
    pub start: bool,
    /// Jump (space, up arrow, click, tap)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot jumps over ground hazards
    pub idle_mode: bool,
}

impl GameState {
    /// Begin a match. Only valid from `NotStarted`.
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != MatchPhase::NotStarted {
            return false;
        }
        self.phase = MatchPhase::Running;
        self.score = 0;
        self.player = Player::new(&self.settings);
        self.entities.clear();
        self.effect = EffectTimer::default();
        self.pause = PauseController::default();
        self.timers = SpawnTimers::new(now);
        self.time_ticks = 0;
        log::info!("Match started (seed {})", self.seed);
        self.emit(GameEvent::Started);
        true
    }

    /// Jump if the match is running and budget remains
    pub fn do_jump(&mut self) -> bool {
        self.phase == MatchPhase::Running && physics::do_jump(&mut self.player)
    }

    /// Running <-> Paused. No-op in any other phase.
    pub fn toggle_pause(&mut self, now: f64) {
        match self.phase {
            MatchPhase::Running => {
                self.phase = MatchPhase::Paused;
                self.pause.begin(now);
                self.effect.freeze(now);
                log::info!("Paused");
            }
            MatchPhase::Paused => {
                let duration = self.pause.end(now);
                self.timers.shift(duration);
                self.effect.thaw(duration);
                self.phase = MatchPhase::Running;
                log::info!("Resumed after {:.0}ms", duration);
            }
            MatchPhase::NotStarted | MatchPhase::Over => {}
        }
    }
}

/// Advance the game by one frame at timestamp `now` (ms)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if input.start {
        state.start(now);
    }
    if input.pause {
        state.toggle_pause(now);
    }

    // Paused frames still render; nothing simulates
    if state.phase != MatchPhase::Running {
        return;
    }

    if input.jump || (input.idle_mode && autopilot_wants_jump(state)) {
        state.do_jump();
    }

    state.time_ticks += 1;

    let gravity = state.gravity();
    let ground = state.settings.ground_line();
    physics::integrate(&mut state.player, gravity, ground);
    physics::advance_entities(&mut state.entities);

    collision::resolve(state, now);

    if state.effect.expire_if_due(now) {
        log::debug!("Low gravity expired");
    }

    state.entities.remove_offscreen();

    if state.phase == MatchPhase::Running {
        spawn_due(state, now);
    }
}

/// Attempt a spawn for every category whose interval has elapsed
fn spawn_due(state: &mut GameState, now: f64) {
    for category in Category::ALL {
        if !state.timers.is_due(category, state.score, now) {
            continue;
        }

        let spawned = factory::spawn(
            category,
            state.score,
            &state.settings,
            &state.entities,
            &mut state.rng,
        );
        match spawned {
            Some(entity) => {
                log::debug!(
                    "{} spawn at x={:.0} y={:.0} speed={:.1}",
                    category.as_str(),
                    entity.pos.x,
                    entity.pos.y,
                    entity.speed
                );
                state.entities.push(entity);
            }
            None => log::debug!("{} spawn declined", category.as_str()),
        }

        // Declined attempts still consume the interval
        state.timers.mark(category, now);
    }
}

/// Grounded and a ground-level hazard is about to arrive
fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.player.is_grounded() {
        return false;
    }
    let front = state.player.pos.x + state.player.size.x;
    let ground = state.settings.ground_line();

    state.entities.hazards.iter().any(|hazard| {
        let gap = hazard.pos.x - front;
        let on_ground = hazard.pos.y + hazard.size.y >= ground - 1.0;
        on_ground && gap > 0.0 && gap < hazard.speed * AUTOPILOT_LOOKAHEAD_FRAMES
    })
}
