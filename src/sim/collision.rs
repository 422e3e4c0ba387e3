//! Axis-aligned collision tests between the ball and paddles
//!
//! Every overlap test is strict: touching edges do not count as contact.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::{BALL_SPEED, SPIN_FACTOR};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Vertical extents overlap (strictly)
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }

    /// `x` lies strictly inside the horizontal band of this rectangle
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }
}

/// Check whether the ball is striking `paddle` this tick.
///
/// Only the ball's leading edge is tested against the paddle band: the left
/// edge for the player paddle, the right edge for the AI paddle. A ball that
/// has slipped fully behind a paddle no longer registers.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let ball_rect = ball.rect();
    let paddle_rect = paddle.rect();
    let leading_edge = match paddle.side {
        Side::Player => ball_rect.left(),
        Side::Ai => ball_rect.right(),
    };
    paddle_rect.spans_x(leading_edge) && ball_rect.overlaps_vertically(&paddle_rect)
}

/// Vertical velocity added when the ball strikes `paddle`.
///
/// Proportional to how far the ball center sits from the paddle center, so
/// edge hits leave at steeper angles.
pub fn spin(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center().y - paddle.center_y()) * SPIN_FACTOR
}

/// Rebound the ball off `paddle`: send it back toward the opponent and add spin.
///
/// Forcing the sign (rather than negating) means a ball still overlapping the
/// paddle next tick cannot be bounced back into it. A ball with no horizontal
/// speed leaves at serve speed.
pub fn rebound(ball: &mut Ball, paddle: &Paddle) {
    let speed = if ball.vel.x == 0.0 {
        BALL_SPEED
    } else {
        ball.vel.x.abs()
    };
    ball.vel.x = speed * paddle.side.opponent().heading();
    ball.vel.y += spin(ball, paddle);
}
