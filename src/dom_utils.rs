//! dom_utils.rs – thin helper layer for repetitive DOM operations.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Look up an element by id and cast it to the requested type.
/// `None` when the id is absent or the element has a different type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Keep the newest content of a scrolling container in view.
pub fn scroll_to_bottom(el: &HtmlElement) {
    el.set_scroll_top(el.scroll_height());
}

/// Text entry control: the page may use either `<input>` or `<textarea>`.
#[derive(Debug, Clone)]
pub enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    pub fn by_id(document: &Document, id: &str) -> Option<Self> {
        let el = document.get_element_by_id(id)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    #[allow(dead_code)] // used by the browser tests
    pub fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::TextArea(area) => area.set_value(value),
        }
    }
}
