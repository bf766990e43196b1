//! WASM exports for the find-the-gift game.
//!
//! JS drives the core through these free functions: init once, tick every
//! frame, forward clicks, settle the asset fetch, and render from the JSON
//! snapshot. Generations guard the fetch: `game_init`/`game_reset` return
//! the generation JS must pass back with each settle call, so results from
//! a superseded fetch are dropped instead of corrupting the new round.

pub mod runner;

pub use runner::SessionRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

/// Initialize the game. `seed` of 0 means "seed from the clock", which is
/// what the page does so every load hides the prize somewhere new.
/// Returns the first fetch generation.
#[wasm_bindgen]
pub fn game_init(seed: f64) -> f64 {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = if seed == 0.0 {
        js_sys::Date::now().to_bits()
    } else {
        seed.to_bits()
    };
    let runner = SessionRunner::new(seed);
    let generation = runner.generation();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("gift-hunt: initialized");
    generation as f64
}

/// Advance the game clock. Call once per animation frame with seconds.
#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Forward a click on the gift with the given id.
#[wasm_bindgen]
pub fn game_click(id: u32) {
    with_runner(|r| r.click(id));
}

/// Discard the current round and start loading a fresh one.
/// Returns the new fetch generation.
#[wasm_bindgen]
pub fn game_reset() -> f64 {
    with_runner(|r| r.reset()) as f64
}

/// Settle the background image of the fetch for `generation`.
#[wasm_bindgen]
pub fn game_background_ready(generation: f64, url: String) {
    with_runner(|r| r.background_ready(generation as u64, url));
}

/// Settle the prize image of the fetch for `generation`.
#[wasm_bindgen]
pub fn game_prize_ready(generation: f64, url: String) {
    with_runner(|r| r.prize_ready(generation as u64, url));
}

/// Fail the fetch for `generation` with a message shown to the player.
#[wasm_bindgen]
pub fn game_assets_failed(generation: f64, message: String) {
    with_runner(|r| r.fetch_failed(generation as u64, message));
}

/// JSON snapshot of the whole session for rendering.
#[wasm_bindgen]
pub fn game_snapshot() -> String {
    with_runner(|r| r.snapshot_json())
}

/// Whether the celebratory modal should be visible.
#[wasm_bindgen]
pub fn game_win_announced() -> bool {
    with_runner(|r| r.win_announced())
}

/// Hide the celebratory modal.
#[wasm_bindgen]
pub fn game_dismiss_win() {
    with_runner(|r| r.dismiss_win());
}

/// Sound event ids from the most recent tick, for JS to replay.
#[wasm_bindgen]
pub fn game_sound_events() -> Vec<u32> {
    with_runner(|r| r.sound_events().to_vec())
}
