//! Rendering module
//!
//! The game draws through the [`Surface`] trait: a handful of 2D canvas
//! primitives. The browser implementation wraps a `CanvasRenderingContext2d`;
//! [`CommandRecorder`] keeps the commands in memory for headless runs and tests.

pub mod frame;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::draw_frame;
pub use recorder::{CommandRecorder, DrawCommand};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::Rect;

/// A 2D drawing target.
///
/// Colors and fonts are CSS strings (`"#0f8"`, `"40px Arial"`). Errors come
/// from the underlying context and are not retried.
pub trait Surface {
    type Error;

    /// Erase `area` to transparent
    fn clear(&mut self, area: Rect) -> Result<(), Self::Error>;

    /// Stroke a straight line with the given on/off dash pattern
    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: &[f32],
        color: &str,
    ) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), Self::Error>;

    /// Draw `text` with its baseline-left anchor at `at`
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: &str)
    -> Result<(), Self::Error>;
}
