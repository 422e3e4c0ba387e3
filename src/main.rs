//! Canvas Pong entry point
//!
//! On the web: binds the `#pong` canvas, mouse/touch input and
//! `requestAnimationFrame`, then hands control to the loop driver.
//! Natively: plays a headless demo match and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use canvas_pong::platform::{self, web::AnimationFrames, web::attach_pointer_input};
    use canvas_pong::render::CanvasSurface;
    use canvas_pong::sim::Arena;
    use canvas_pong::{GameLoop, Settings};

    /// Element id of the game canvas
    const CANVAS_ID: &str = "pong";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Arena is the canvas' drawing-buffer size, fixed from here on
        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
        let surface = CanvasSurface::from_canvas(&canvas)?;
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(GameLoop::new(arena, surface, settings, seed)));

        attach_pointer_input(&canvas, game.clone());

        // Start game loop
        platform::run(game, Rc::new(AnimationFrames::new(window)));

        log::info!("Canvas Pong running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    println!("\nPlaying a headless demo match...");
    demo_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// One minute of play at 60 Hz, with the "player" chasing the ball
#[cfg(not(target_arch = "wasm32"))]
fn demo_match() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvas_pong::platform::{self, ManualFrames};
    use canvas_pong::render::CommandRecorder;
    use canvas_pong::sim::Arena;
    use canvas_pong::{GameLoop, Settings};

    const FRAMES: usize = 60 * 60;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let game = Rc::new(RefCell::new(GameLoop::new(
        Arena::default(),
        CommandRecorder::new(),
        settings,
        0x5eed,
    )));
    let frames = Rc::new(ManualFrames::new(FRAME_MS));
    platform::run(game.clone(), frames.clone());

    for _ in 0..FRAMES {
        let ball_y = game.borrow().state().ball.center().y;
        game.borrow_mut().pointer_moved(ball_y);
        if !frames.pump() {
            break;
        }
    }

    let g = game.borrow();
    let score = g.state().score;
    println!(
        "After {} frames: player {} - {} AI",
        g.state().time_ticks,
        score.player,
        score.ai
    );
    println!("Last frame drew {} commands", g.surface().last_frame().len());
    println!("Average {} fps (simulated clock)", g.fps());
}
