//! Thin helpers over web-sys for the behaviors.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, Window};

use crate::error::{LandingError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(LandingError::NoDocument)
}

/// All elements matching `selector`, in document order. Non-HTML nodes are skipped.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(LandingError::js("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element matching `selector`, if any.
pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    let element = document
        .query_selector(selector)
        .map_err(LandingError::js("querySelector"))?;
    Ok(element.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Attach `handler` for `event` on `target`. The closure lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(LandingError::js("addEventListener"))?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`] but registered passive, for scroll handlers.
pub fn listen_passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(LandingError::js("addEventListener"))?;
    closure.forget();
    Ok(())
}
