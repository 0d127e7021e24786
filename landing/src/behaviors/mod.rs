// Interaction layer for the landing page
// Developed by the Touch Learn web team (c)2025

pub mod counter;
pub mod keyframes;
pub mod micro;
pub mod scroll_watch;
pub mod smooth_scroll;
pub mod splash;

use crate::config::PageConfig;
use crate::error::Result;
use crate::motion::MotionPreference;
use crate::state::PageState;

/// Wire every behavior onto the mounted page.
///
/// Each one is attached on its own: a failure is logged and the rest still
/// attach. Scroll-driven wiring goes first, the load splash last.
pub fn attach_all(state: PageState, config: &PageConfig, motion: MotionPreference) {
    isolated("keyframes", keyframes::inject);
    isolated("smooth-scroll", || smooth_scroll::attach(config, motion));
    isolated("counter", || counter::attach(state, config, motion));
    isolated("micro-interactions", || micro::attach(config));
    isolated("scroll-progress", || scroll_watch::attach_progress(state));
    isolated("nav-highlight", || scroll_watch::attach_highlighter(state, config));
    isolated("splash", || splash::attach(state, config, motion));
}

fn isolated(name: &'static str, attach: impl FnOnce() -> Result<()>) {
    match attach() {
        Ok(()) => tracing::debug!(behavior = name, "attached"),
        Err(err) => tracing::warn!(behavior = name, %err, "behavior not attached"),
    }
}
