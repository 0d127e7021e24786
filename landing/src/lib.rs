//! # touchlearn-landing
//!
//! Client-side rendered landing page for Touch Learn, built on Leptos 0.8.
//!
//! The page markup lives in [`sections`]. On top of it, [`behaviors`] wires the
//! interaction layer: smooth anchor scrolling, the market counter animation,
//! button/card micro-interactions, the scroll progress bar, nav highlighting
//! and the load splash. Behaviors only write [`state::PageState`] signals or
//! touch the elements they were bound to; views render from the signals.
//!
//! Developed by the Touch Learn web team (c)2025

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod motion;
pub mod sections;
pub mod state;

use leptos::prelude::*;

use config::PageConfig;
use motion::MotionPreference;
use sections::*;
use state::PageState;

pub use error::{LandingError, Result};

/// Install panic hook + logging and mount the page into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::default();
    let motion = MotionPreference::detect();
    let state = PageState::new();

    provide_context(config.clone());
    provide_context(motion);
    provide_context(state);

    // Runs once after the view is in the DOM.
    Effect::new(move || {
        behaviors::attach_all(state, &config, motion);
    });

    view! {
        <ScrollProgressBar />
        <LoadSplash />
        <Nav />
        <main>
            <Hero />
            <Problem />
            <Personas />
            <Market />
            <Team />
        </main>
        <Footer />
    }
}
