//! Game state and core simulation types
//!
//! Everything the loop mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::*;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left side, pointer-controlled
    Player,
    /// Right side, computer-controlled
    Ai,
}

impl Side {
    /// Horizontal sign of a ball travelling toward this side
    #[inline]
    pub fn heading(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Ai => 1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Playing field dimensions, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A vertical paddle pinned to one side of the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (never changes after construction)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a paddle on `side`, vertically centered
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::Player => PADDLE_INSET,
            Side::Ai => arena.width - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: arena.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Lowest legal value for `y`
    #[inline]
    pub fn max_y(&self, arena: &Arena) -> f32 {
        (arena.height - self.height).max(0.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Pull `y` back inside `[0, H - height]`
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = self.y.clamp(0.0, self.max_y(arena));
    }

    /// Center the paddle on a pointer's y coordinate, clamped to the arena
    pub fn follow_pointer(&mut self, pointer_y: f32, arena: &Arena) {
        self.y = pointer_y - self.height / 2.0;
        self.clamp_to(arena);
    }
}

/// The ball, an axis-aligned square
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// A motionless ball in the middle of the arena
    pub fn centered(arena: &Arena) -> Self {
        Self {
            pos: Self::center_spot(arena, BALL_SIZE),
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }

    fn center_spot(arena: &Arena, size: f32) -> Vec2 {
        arena.center() - Vec2::splat(size / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Put the ball back at center, heading toward `toward` at serve speed.
    ///
    /// `vy_unit` scales the vertical component and is expected in `[-1, 1]`.
    pub fn serve(&mut self, arena: &Arena, toward: Side, vy_unit: f32) {
        self.pos = Self::center_spot(arena, self.size);
        self.vel = Vec2::new(
            BALL_SPEED * toward.heading(),
            BALL_SPEED * vy_unit.clamp(-1.0, 1.0),
        );
    }

    /// Serve with a random vertical component, uniform in `±BALL_SPEED`
    pub fn serve_random<R: Rng + ?Sized>(&mut self, arena: &Arena, toward: Side, rng: &mut R) {
        let vy_unit: f32 = rng.random_range(-1.0..1.0);
        self.serve(arena, toward, vy_unit);
    }
}

/// Running score. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player: u32,
    pub ai: u32,
}

impl ScoreBoard {
    /// Credit one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub arena: Arena,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: ScoreBoard,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game with centered paddles and a stationary ball
    pub fn new(arena: Arena) -> Self {
        Self {
            player: Paddle::new(Side::Player, &arena),
            ai: Paddle::new(Side::Ai, &arena),
            ball: Ball::centered(&arena),
            score: ScoreBoard::default(),
            time_ticks: 0,
            arena,
        }
    }

    /// Fresh game with the opening serve already in flight toward a random side
    pub fn with_opening_serve<R: Rng + ?Sized>(arena: Arena, rng: &mut R) -> Self {
        let mut state = Self::new(arena);
        let toward = if rng.random_bool(0.5) { Side::Ai } else { Side::Player };
        state.ball.serve_random(&arena, toward, rng);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }
}
