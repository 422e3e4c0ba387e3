//! Browser glue: `requestAnimationFrame` scheduling and pointer input

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

use super::{FrameCallback, FrameSource};
use crate::game::GameLoop;
use crate::render::Surface;

/// Frame source backed by `window.requestAnimationFrame`
pub struct AnimationFrames {
    window: web_sys::Window,
}

impl AnimationFrames {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl FrameSource for AnimationFrames {
    fn request_frame(&self, callback: FrameCallback) {
        let closure = Closure::once(move |time: f64| callback(time));
        if let Err(e) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }
}

/// Pointer y relative to the top of the canvas
fn canvas_y(canvas: &HtmlCanvasElement, client_y: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (client_y as f64 - rect.top()) as f32
}

/// Feed mouse and touch movement over `canvas` into the player paddle
pub fn attach_pointer_input<S, R>(canvas: &HtmlCanvasElement, game: Rc<RefCell<GameLoop<S, R>>>)
where
    S: Surface + 'static,
    R: Rng + 'static,
{
    // Mouse move
    {
        let game = game.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let y = canvas_y(&canvas_clone, event.client_y());
            game.borrow_mut().pointer_moved(y);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch move
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let y = canvas_y(&canvas_clone, touch.client_y());
                game.borrow_mut().pointer_moved(y);
            }
        });
        let _ = canvas
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
