//! In-memory drawing surface
//!
//! Keeps the commands of the most recent frame and a running frame count.
//! Used by the native headless runner and by tests.

use std::convert::Infallible;

use glam::Vec2;

use super::Surface;
use crate::sim::Rect;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: Vec<f32>,
        color: String,
    },
    FillRect {
        rect: Rect,
        color: String,
    },
    FillText {
        text: String,
        at: Vec2,
        font: String,
        color: String,
    },
}

/// A [`Surface`] that never fails and remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen, i.e. frames started
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Text of every `FillText` in the current frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for CommandRecorder {
    type Error = Infallible;

    fn clear(&mut self, area: Rect) -> Result<(), Self::Error> {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear(area));
        Ok(())
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash: dash.to_vec(),
            color: color.to_owned(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_owned(),
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Vec2,
        font: &str,
        color: &str,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            at,
            font: font.to_owned(),
            color: color.to_owned(),
        });
        Ok(())
    }
}
