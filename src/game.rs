//! The game loop
//!
//! [`GameLoop`] owns the game state, the serve RNG, the drawing surface and
//! the display settings. The frame driver calls [`GameLoop::tick`] once per
//! display refresh; input handlers call [`GameLoop::pointer_moved`] in between.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::FpsCounter;
use crate::render::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{self, Arena, GameState, Side, TickReport};

pub struct GameLoop<S, R = Pcg32> {
    state: GameState,
    rng: R,
    surface: S,
    settings: Settings,
    fps: FpsCounter,
}

impl<S: Surface> GameLoop<S, Pcg32> {
    /// Start a new game with the opening serve in flight.
    ///
    /// Serves are seeded from `settings.seed` when set, else `fallback_seed`.
    pub fn new(arena: Arena, surface: S, settings: Settings, fallback_seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(fallback_seed);
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::with_opening_serve(arena, &mut rng);
        log::info!(
            "New game: arena {}x{}, seed {}",
            arena.width,
            arena.height,
            seed
        );
        Self::with_state(state, surface, settings, rng)
    }
}

impl<S: Surface, R: Rng> GameLoop<S, R> {
    /// Resume from an arbitrary state with a caller-supplied RNG
    pub fn with_state(state: GameState, surface: S, settings: Settings, rng: R) -> Self {
        Self {
            state,
            rng,
            surface,
            settings,
            fps: FpsCounter::new(),
        }
    }

    /// Advance the simulation one frame without drawing
    pub fn update(&mut self) -> TickReport {
        let report = sim::tick(&mut self.state, &mut self.rng);
        if let Some(scorer) = report.goal {
            let score = self.state.score;
            log::info!(
                "{} scores ({} - {})",
                match scorer {
                    Side::Player => "Player",
                    Side::Ai => "AI",
                },
                score.player,
                score.ai
            );
        }
        report
    }

    /// Draw the current state
    pub fn render(&mut self) -> Result<(), S::Error> {
        draw_frame(&self.state, &self.settings, &mut self.surface)
    }

    /// One full frame: simulate, then draw.
    ///
    /// The simulation step always succeeds; only the surface can fail.
    pub fn tick(&mut self) -> Result<TickReport, S::Error> {
        let report = self.update();
        self.render()?;
        Ok(report)
    }

    /// Pointer moved to `y` (surface coordinates). Moves the player paddle
    /// immediately, clamped to the arena. NaN is ignored.
    pub fn pointer_moved(&mut self, y: f32) {
        if y.is_nan() {
            return;
        }
        let arena = self.state.arena;
        self.state.player.follow_pointer(y, &arena);
    }

    /// Note a frame timestamp (milliseconds) for FPS tracking
    pub fn record_frame_time(&mut self, time_ms: f64) {
        if let Some(fps) = self.fps.record(time_ms) {
            log::debug!("{} fps at tick {}", fps, self.state.time_ticks);
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
