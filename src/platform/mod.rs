//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (`requestAnimationFrame` on web, a manual queue natively)
//! - Pointer input (web)
//!
//! [`run`] is the loop driver: it arms one frame, ticks the game when it
//! fires, and re-arms itself for as long as ticks succeed.

pub mod fps;
pub mod manual;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use fps::FpsCounter;
pub use manual::ManualFrames;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use rand::Rng;

use crate::game::GameLoop;
use crate::render::Surface;

/// Callback run before the next frame is presented, given a timestamp in ms
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that can run a callback once, before the next display refresh.
///
/// Each request schedules exactly one invocation.
pub trait FrameSource {
    fn request_frame(&self, callback: FrameCallback);
}

/// Drive `game` from `frames` until a frame fails to render.
///
/// A render error is logged and ends the loop; it is not retried.
pub fn run<S, R, F>(game: Rc<RefCell<GameLoop<S, R>>>, frames: Rc<F>)
where
    S: Surface + 'static,
    S::Error: Debug,
    R: Rng + 'static,
    F: FrameSource + ?Sized + 'static,
{
    let source = Rc::clone(&frames);
    frames.request_frame(Box::new(move |time: f64| {
        let result = {
            let mut g = game.borrow_mut();
            g.record_frame_time(time);
            g.tick()
        };
        match result {
            Ok(_) => run(game, source),
            Err(e) => log::error!("Render failed, stopping game loop: {:?}", e),
        }
    }));
}
