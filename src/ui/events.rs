//! Click bindings for the two console actions.
//!
//! Each click spawns one controller future on the browser event loop; the
//! controller itself decides whether the click does anything.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, MouseEvent};

use super::DomConsole;
use crate::controller::ConsoleController;
use crate::network::ConsoleBackend;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attach the click handlers. Call once after the console was mounted.
pub fn setup_console_handlers<B>(controller: Rc<ConsoleController<DomConsole, B>>) -> Result<(), JsValue>
where
    B: ConsoleBackend + 'static,
{
    let view = controller.view();

    let ctrl = Rc::clone(&controller);
    on_click(view.run_button(), move || {
        let ctrl = Rc::clone(&ctrl);
        spawn_local(async move { ctrl.run_workflow().await });
    })?;

    let ctrl = Rc::clone(&controller);
    on_click(view.rag_button(), move || {
        let ctrl = Rc::clone(&ctrl);
        spawn_local(async move { ctrl.send_rag_query().await });
    })?;

    Ok(())
}

// Listeners live for the page lifetime, so the closure is leaked.
fn on_click(target: &EventTarget, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| handler()));
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
