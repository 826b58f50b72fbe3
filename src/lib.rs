use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod models;
pub mod network;
pub mod participants;
pub mod ui;

#[cfg(test)]
mod tests;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    ui::setup::create_base_ui(&document)?;

    let api = network::HttpActivitiesApi::default();
    let board = components::board::ActivityBoard::mount(&document, api)?;

    // Initial load; renders the failure message itself if the API is down.
    spawn_local(async move {
        board.load_activities().await;
    });

    Ok(())
}
