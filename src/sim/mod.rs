//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Fixed per-frame step, no delta time
//! - Randomness only through an injected `rand::Rng`
//! - All state in one `GameState`

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::AiMove;
pub use collision::{Rect, ball_hits_paddle, rebound, spin};
pub use state::{Arena, Ball, GameState, Paddle, ScoreBoard, Side};
pub use tick::{TickReport, tick};
