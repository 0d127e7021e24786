//! Reactive page state shared between behaviors (writers) and views (readers).

use leptos::prelude::*;

use crate::behaviors::counter::{CounterPhase, MarketNumbers};
use crate::behaviors::splash::SplashPhase;

/// Signals owned by the page root and handed out through context.
#[derive(Clone, Copy, Debug)]
pub struct PageState {
    /// Written only by the counter animator.
    pub market: RwSignal<MarketNumbers>,
    pub counter_phase: RwSignal<CounterPhase>,
    /// Scroll progress in percent, always within `0.0..=100.0`.
    pub progress: RwSignal<f64>,
    /// Id of the section whose nav link is highlighted.
    pub active_section: RwSignal<Option<String>>,
    pub splash: RwSignal<SplashPhase>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            market: RwSignal::new(MarketNumbers::ZERO),
            counter_phase: RwSignal::new(CounterPhase::Idle),
            progress: RwSignal::new(0.0),
            active_section: RwSignal::new(None),
            splash: RwSignal::new(SplashPhase::Hidden),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Page state from context. Only valid below `App`.
pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}
