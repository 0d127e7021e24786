//! Browser tests for the DOM-facing behaviors.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use touchlearn_landing::behaviors::counter::{self, CounterPhase, MarketNumbers};
use touchlearn_landing::behaviors::splash::{self, SplashPhase};
use touchlearn_landing::behaviors::{keyframes, micro, scroll_watch, smooth_scroll};
use touchlearn_landing::config::PageConfig;
use touchlearn_landing::motion::MotionPreference;
use touchlearn_landing::state::PageState;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn element(tag: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn fire(target: &HtmlElement, name: &str) {
    target.dispatch_event(&Event::new(name).unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn anchor_to_missing_target_is_ignored() {
    let anchor = element("a");
    anchor.set_attribute("href", "#does-not-exist").unwrap();

    let window = web_sys::window().unwrap();
    let before = window.scroll_y().unwrap();
    smooth_scroll::attach(&PageConfig::default(), MotionPreference::new(true)).unwrap();
    anchor.click();

    assert_eq!(window.scroll_y().unwrap(), before);
    anchor.remove();
}

#[wasm_bindgen_test]
fn button_pressed_state_follows_pointer() {
    let button = element("button");
    micro::bind_button(&button).unwrap();

    fire(&button, "mousedown");
    assert!(button.class_list().contains(micro::PRESSED_CLASS));
    fire(&button, "mouseup");
    assert!(!button.class_list().contains(micro::PRESSED_CLASS));

    fire(&button, "mousedown");
    fire(&button, "mouseleave");
    assert!(!button.class_list().contains(micro::PRESSED_CLASS));
    button.remove();
}

#[wasm_bindgen_test]
fn card_lifts_on_hover_and_settles_after() {
    let card = element("div");
    card.set_class_name("market-card");
    micro::bind_card(&card).unwrap();

    fire(&card, "mouseenter");
    let shadow = card.style().get_property_value("box-shadow").unwrap();
    assert_eq!(shadow, micro::CARD_LIFTED.box_shadow);

    fire(&card, "mouseleave");
    let shadow = card.style().get_property_value("box-shadow").unwrap();
    assert_eq!(shadow, micro::CARD_RESTING.box_shadow);
    card.remove();
}

#[wasm_bindgen_test]
fn keyframes_are_injected_once() {
    keyframes::inject().unwrap();
    keyframes::inject().unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let blocks = document
        .query_selector_all(&format!("style#{}", keyframes::STYLE_ID))
        .unwrap();
    assert_eq!(blocks.length(), 1);
}

#[wasm_bindgen_test]
fn headless_browser_has_no_motion_preference() {
    assert!(!MotionPreference::detect().reduced());
}

#[wasm_bindgen_test]
fn counter_without_market_section_stays_idle() {
    let owner = Owner::new();
    owner.with(|| {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(document.get_element_by_id("market").is_none());

        let state = PageState::new();
        counter::attach(state, &PageConfig::default(), MotionPreference::new(false)).unwrap();

        assert_eq!(state.counter_phase.get_untracked(), CounterPhase::Idle);
        assert_eq!(state.market.get_untracked(), MarketNumbers::ZERO);
    });
}

#[wasm_bindgen_test]
fn progress_at_top_of_page_is_zero() {
    let owner = Owner::new();
    owner.with(|| {
        let window = web_sys::window().unwrap();
        window.scroll_to_with_x_and_y(0.0, 0.0);

        let state = PageState::new();
        state.progress.set(50.0);
        scroll_watch::attach_progress(state).unwrap();

        let progress = state.progress.get_untracked();
        assert!(progress.is_finite());
        assert_eq!(progress, 0.0);
    });
}

#[wasm_bindgen_test]
fn splash_stays_hidden_under_reduced_motion() {
    let owner = Owner::new();
    owner.with(|| {
        let state = PageState::new();
        splash::attach(state, &PageConfig::default(), MotionPreference::new(true)).unwrap();
        assert_eq!(state.splash.get_untracked(), SplashPhase::Hidden);
    });
}

#[wasm_bindgen_test]
fn pressed_class_toggles_directly() {
    let button = element("button");
    micro::set_pressed(&button, true).unwrap();
    assert!(button.class_list().contains(micro::PRESSED_CLASS));
    micro::set_pressed(&button, false).unwrap();
    assert!(!button.class_list().contains(micro::PRESSED_CLASS));
    button.remove();
}
