use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::constants::{
    ACTIVITY_FEED_ID, ACTIVITY_TIME_LABEL, IMAGE_PATH_INPUT_ID, OUTPUT_CONSOLE_ID, RAG_QUERY_INPUT_ID,
    RAG_RESPONSE_ID, RUN_WORKFLOW_BUTTON_ID, SEND_RAG_BUTTON_ID,
};
use crate::dom_utils::{element_by_id, scroll_to_bottom, TextField};
use crate::models::{ActivityEntry, LogEntry};
use crate::view::ConsoleView;

/// The console page, bound to its fixed set of elements.
pub struct DomConsole {
    document: Document,
    output_console: HtmlElement,
    activity_feed: Element,
    run_button: HtmlButtonElement,
    rag_button: HtmlButtonElement,
    image_input: TextField,
    rag_input: TextField,
    rag_response: HtmlElement,
}

impl DomConsole {
    /// Resolve every element of the page contract. Fails with a single
    /// error naming all ids that are missing or of the wrong type.
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let output_console = element_by_id::<HtmlElement>(document, OUTPUT_CONSOLE_ID);
        let activity_feed = element_by_id::<Element>(document, ACTIVITY_FEED_ID);
        let run_button = element_by_id::<HtmlButtonElement>(document, RUN_WORKFLOW_BUTTON_ID);
        let rag_button = element_by_id::<HtmlButtonElement>(document, SEND_RAG_BUTTON_ID);
        let image_input = TextField::by_id(document, IMAGE_PATH_INPUT_ID);
        let rag_input = TextField::by_id(document, RAG_QUERY_INPUT_ID);
        let rag_response = element_by_id::<HtmlElement>(document, RAG_RESPONSE_ID);

        match (
            output_console,
            activity_feed,
            run_button,
            rag_button,
            image_input,
            rag_input,
            rag_response,
        ) {
            (
                Some(output_console),
                Some(activity_feed),
                Some(run_button),
                Some(rag_button),
                Some(image_input),
                Some(rag_input),
                Some(rag_response),
            ) => Ok(Self {
                document: document.clone(),
                output_console,
                activity_feed,
                run_button,
                rag_button,
                image_input,
                rag_input,
                rag_response,
            }),
            (a, b, c, d, e, f, g) => {
                let missing: Vec<&str> = [
                    (a.is_none(), OUTPUT_CONSOLE_ID),
                    (b.is_none(), ACTIVITY_FEED_ID),
                    (c.is_none(), RUN_WORKFLOW_BUTTON_ID),
                    (d.is_none(), SEND_RAG_BUTTON_ID),
                    (e.is_none(), IMAGE_PATH_INPUT_ID),
                    (f.is_none(), RAG_QUERY_INPUT_ID),
                    (g.is_none(), RAG_RESPONSE_ID),
                ]
                .into_iter()
                .filter_map(|(absent, id)| absent.then_some(id))
                .collect();
                Err(JsValue::from_str(&format!(
                    "console page is missing elements: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    pub fn run_button(&self) -> &HtmlButtonElement {
        &self.run_button
    }

    pub fn rag_button(&self) -> &HtmlButtonElement {
        &self.rag_button
    }

    fn try_append_log(&self, entry: &LogEntry) -> Result<(), JsValue> {
        let line = self.document.create_element("div")?;
        line.set_class_name(&entry.css_class_name());
        line.set_text_content(Some(&entry.display_line()));
        self.output_console.append_child(&line)?;
        scroll_to_bottom(&self.output_console);
        Ok(())
    }

    fn try_prepend_activity(&self, entry: &ActivityEntry) -> Result<(), JsValue> {
        let item = self.document.create_element("li")?;
        item.set_class_name("activity-item active");

        let time = self.document.create_element("div")?;
        time.set_class_name("activity-time");
        time.set_text_content(Some(ACTIVITY_TIME_LABEL));

        let text = self.document.create_element("div")?;
        text.set_class_name("activity-text");
        text.set_text_content(Some(&entry.text));

        item.append_child(&time)?;
        item.append_child(&text)?;
        self.activity_feed.prepend_with_node_1(&item)?;
        Ok(())
    }
}

impl ConsoleView for DomConsole {
    fn image_path(&self) -> String {
        self.image_input.value()
    }

    fn rag_query(&self) -> String {
        self.rag_input.value()
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn append_log(&self, entry: &LogEntry) {
        if let Err(e) = self.try_append_log(entry) {
            crate::warn_log!("Failed to append log line: {:?}", e);
        }
    }

    fn prepend_activity(&self, entry: &ActivityEntry) {
        if let Err(e) = self.try_prepend_activity(entry) {
            crate::warn_log!("Failed to add activity entry: {:?}", e);
        }
    }

    fn set_workflow_trigger(&self, enabled: bool, label: &str) {
        self.run_button.set_disabled(!enabled);
        self.run_button.set_inner_text(label);
    }

    fn set_rag_response(&self, text: &str) {
        self.rag_response.set_inner_text(text);
    }
}
