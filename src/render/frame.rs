//! Per-frame draw order

use glam::Vec2;

use super::Surface;
use crate::settings::Settings;
use crate::sim::{GameState, Rect, Side};

/// Draw one complete frame of `state`.
///
/// Order is fixed: clear, center line, player paddle, AI paddle, ball,
/// player score, AI score.
pub fn draw_frame<S: Surface + ?Sized>(
    state: &GameState,
    settings: &Settings,
    surface: &mut S,
) -> Result<(), S::Error> {
    let arena = &state.arena;
    surface.clear(Rect::new(0.0, 0.0, arena.width, arena.height))?;

    let mid_x = arena.width / 2.0;
    surface.stroke_dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, arena.height),
        &settings.center_line_dash,
        &settings.center_line_color,
    )?;

    surface.fill_rect(state.player.rect(), settings.color(Side::Player))?;
    surface.fill_rect(state.ai.rect(), settings.color(Side::Ai))?;
    surface.fill_rect(state.ball.rect(), &settings.ball_color)?;

    for side in [Side::Player, Side::Ai] {
        let at = Vec2::new(mid_x, 0.0) + settings.score_offset(side);
        surface.fill_text(
            &state.score.get(side).to_string(),
            at,
            &settings.score_font,
            settings.color(side),
        )?;
    }
    Ok(())
}
