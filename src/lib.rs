use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod constants;
pub mod controller;
pub mod dom_utils;
pub mod error;
pub mod models;
pub mod network;
pub mod ui;
pub mod view;

#[cfg(test)]
mod testing;

pub use controller::{ActionState, ConsoleController};
pub use error::ConsoleError;
pub use network::{ApiClient, ConsoleBackend};
pub use view::ConsoleView;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Compile-time API_BASE_URL wins; otherwise same-origin until the page
    // calls init_api_config_js().
    if let Err(e) = network::init_api_config() {
        debug_log!("API config not set at compile time ({}), using same origin", e);
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount_console(&doc) {
                web_sys::console::error_1(&e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount_console(&document)
}

/// Bind the console page: resolve its elements, build the controller and
/// wire the two action buttons.
fn mount_console(document: &Document) -> Result<(), JsValue> {
    let view = ui::DomConsole::mount(document)?;
    let controller = Rc::new(ConsoleController::new(view, ApiClient::new()));
    ui::events::setup_console_handlers(controller)?;
    debug_log!("console bound");
    Ok(())
}
