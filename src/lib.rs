// ==================== Imports ====================
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[macro_use]
pub mod browser;
pub mod assets;
pub mod engine;
pub mod game;
pub mod sprite;

use engine::GameLoop;
use game::SpaceShooter;

// ==================== Main Functions ====================
/// Main entry for Webassembly module
/// - stretches the canvas to the physical screen
/// - paints the backdrop and registers the spaceship asset
/// - starts the per-frame draw loop
#[wasm_bindgen]
pub fn main_js() -> Result<(), JsValue> {
    // setup better panic messages for debugging
    console_error_panic_hook::set_once();

    let canvas = browser::canvas().expect("canvas element should be present");
    let (width, height) = browser::screen_size().expect("screen dimensions should be readable");
    canvas.set_width(width);
    canvas.set_height(height);

    // spawns a new asynchronous task in local thread, for web assembly
    // environment, using wasm_bindgen_futures
    browser::spawn_local(async move {
        if let Err(err) = GameLoop::start(SpaceShooter::new()).await {
            error!("Could not start game loop : {:#?}", err);
        }
    });

    Ok(())
}
