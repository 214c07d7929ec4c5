//! [`PageTree`] over the live browser document.

use common::error::{PageError, Result};
use common::{on_submit, Marker, PageTree, SubmitVerdict};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement};

use crate::bindings;

/// Renders a thrown JavaScript value as a message.
pub fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return error.message().into();
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// An event whose default action and propagation can be cancelled.
pub trait Cancelable {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl Cancelable for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

/// Cancels `event` when the verdict blocks the submission. Returns whether it did.
pub fn apply_verdict<E: Cancelable>(verdict: SubmitVerdict, event: &E) -> bool {
    if verdict.blocks() {
        log::debug!("Blocking submission of invalid form");
        event.prevent_default();
        event.stop_propagation();
    }
    verdict.blocks()
}

pub struct DocumentTree {
    document: Document,
}

impl DocumentTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageTree for DocumentTree {
    type Node = Element;

    fn select(&self, marker: Marker) -> Result<Vec<Element>> {
        let selector = marker.selector();
        let list = self
            .document
            .query_selector_all(&selector)
            .map_err(|e| PageError::Query {
                selector: selector.clone(),
                message: describe(&e),
            })?;

        Ok((0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn add_class(&mut self, node: &Element, class: &str) -> Result<()> {
        node.class_list()
            .add_1(class)
            .map_err(|e| PageError::Dom(describe(&e)))
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value)
            .map_err(|e| PageError::Dom(describe(&e)))
    }

    fn attach_tooltip(&mut self, node: &Element) -> Result<()> {
        bindings::tooltip_get_or_create_instance(node)
            .map(|_| ())
            .map_err(|e| PageError::Tooltip(describe(&e)))
    }

    fn guard_submit(&mut self, form: &Element) -> Result<()> {
        let form_element = form
            .clone()
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::FormGuard(format!("<{}> is not a form", form.tag_name())))?;
        let document = self.document.clone();

        let callback_fn = Closure::wrap(Box::new(move |event: Event| {
            let valid = form_element.check_validity();
            let form_node: &Element = form_element.as_ref();
            let mut page = DocumentTree::new(document.clone());
            let verdict = on_submit(&mut page, form_node, valid).unwrap_or_else(|err| {
                log::error!("Failed to mark form as validated: {}", err);
                SubmitVerdict::from_validity(valid)
            });
            apply_verdict(verdict, &event);
        }) as Box<dyn FnMut(Event)>);

        form.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())
            .map_err(|e| PageError::FormGuard(describe(&e)))?;
        callback_fn.forget();
        Ok(())
    }
}
