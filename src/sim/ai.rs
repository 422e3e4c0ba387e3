//! Computer opponent
//!
//! A dead-band tracker: chase the ball's center at a fixed speed, but hold
//! still while it is close enough. Fixed speed plus the dead band is what
//! keeps the AI beatable.

use super::state::{Arena, Ball, Paddle};
use crate::consts::{AI_DEAD_BAND, AI_SPEED};

/// What the AI paddle does this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMove {
    Up,
    Down,
    Hold,
}

impl AiMove {
    /// Vertical displacement for this move (screen y grows downward)
    pub fn delta(self) -> f32 {
        match self {
            AiMove::Up => -AI_SPEED,
            AiMove::Down => AI_SPEED,
            AiMove::Hold => 0.0,
        }
    }
}

/// Choose a move from the paddle and ball centers
pub fn decide(paddle_center: f32, ball_center: f32) -> AiMove {
    if paddle_center < ball_center - AI_DEAD_BAND {
        AiMove::Down
    } else if paddle_center > ball_center + AI_DEAD_BAND {
        AiMove::Up
    } else {
        AiMove::Hold
    }
}

/// Move `paddle` one step toward `ball`, staying inside the arena
pub fn track(paddle: &mut Paddle, ball: &Ball, arena: &Arena) -> AiMove {
    let step = decide(paddle.center_y(), ball.center().y);
    paddle.y += step.delta();
    paddle.clamp_to(arena);
    step
}
