//! Page-wide constants for the interaction layer.

use std::time::Duration;

/// Card categories that receive the hover lift.
pub const CARD_SELECTORS: &[&str] = &[".problem-card", ".persona-card", ".team-card", ".market-card"];

/// Tunables shared by every behavior. There is no file or env override; the
/// values match the page's CSS (header height, section spacing).
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Space reserved for the fixed header when scrolling to an anchor.
    pub header_offset: f64,
    /// How far below the current scroll position a section may start and
    /// still count as the active one.
    pub nav_lookahead: f64,
    pub counter_duration: Duration,
    pub counter_steps: u32,
    /// Fraction of `#market` that must be visible before counting starts.
    pub visibility_threshold: f64,
    pub splash_hold: Duration,
    pub splash_fade: Duration,
    pub anchor_selector: &'static str,
    pub market_selector: &'static str,
    pub button_selector: &'static str,
    pub section_selector: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            nav_lookahead: 200.0,
            counter_duration: Duration::from_millis(2000),
            counter_steps: 60,
            visibility_threshold: 0.5,
            splash_hold: Duration::from_millis(1000),
            splash_fade: Duration::from_millis(500),
            anchor_selector: "a[href^=\"#\"]",
            market_selector: "#market",
            button_selector: ".btn",
            section_selector: "section[id]",
        }
    }
}

impl PageConfig {
    /// Total counter run time in milliseconds.
    pub fn counter_duration_ms(&self) -> f64 {
        self.counter_duration.as_secs_f64() * 1000.0
    }

    /// Comma-joined selector matching every card category.
    pub fn card_selector(&self) -> String {
        CARD_SELECTORS.join(", ")
    }
}
