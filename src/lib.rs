//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (ball physics, paddle collisions, scoring, AI)
//! - `render`: Drawing surface abstraction and per-frame draw order
//! - `platform`: Frame scheduling and the loop driver
//! - `game`: The game loop tying state, RNG and surface together
//! - `settings`: Presentation settings (colors, fonts, seed)

pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default arena size (matches the canvas element's intrinsic size)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal distance between each paddle and its side wall
    pub const PADDLE_INSET: f32 = 30.0;

    /// Ball is drawn and collided as a square
    pub const BALL_SIZE: f32 = 16.0;
    /// Serve speed, per frame. Also bounds the random vertical serve component.
    pub const BALL_SPEED: f32 = 6.0;

    /// AI paddle speed, per frame
    pub const AI_SPEED: f32 = 4.0;
    /// AI holds still while the ball center is within this distance of its own
    pub const AI_DEAD_BAND: f32 = 10.0;

    /// Vertical velocity added per unit of hit offset from the paddle center
    pub const SPIN_FACTOR: f32 = 0.15;
}
