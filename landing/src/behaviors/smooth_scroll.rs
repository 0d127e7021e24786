//! In-page anchor navigation with header offset.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;
use crate::motion::MotionPreference;

/// Element id referenced by an in-page href, `None` for anything that is not
/// `#<id>` (including a bare `#`).
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `offset_top` just below the fixed header.
pub fn scroll_target_top(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

pub fn scroll_behavior(motion: MotionPreference) -> ScrollBehavior {
    if motion.reduced() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Take over clicks on every `a[href^="#"]`. Unknown targets are ignored.
pub fn attach(config: &PageConfig, motion: MotionPreference) -> Result<()> {
    let document = dom::document()?;
    let anchors = dom::query_all(&document, config.anchor_selector)?;
    let header_offset = config.header_offset;

    for anchor in &anchors {
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            scroll_to_fragment(&href, header_offset, motion);
        })?;
    }

    tracing::debug!(anchors = anchors.len(), "smooth scrolling bound");
    Ok(())
}

fn scroll_to_fragment(href: &str, header_offset: f64, motion: MotionPreference) {
    let Some(id) = fragment_id(href) else {
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        tracing::debug!(href, "anchor target missing");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(f64::from(target.offset_top()), header_offset));
    options.set_behavior(scroll_behavior(motion));
    window.scroll_to_with_scroll_to_options(&options);
}
