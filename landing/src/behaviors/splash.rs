//! Load splash: hold the overlay briefly after `load`, fade it, drop it.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;
use crate::motion::MotionPreference;
use crate::state::PageState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    /// Not shown yet (or never, under reduced motion).
    #[default]
    Hidden,
    Showing,
    Fading,
    /// Out of the DOM for good.
    Removed,
}

impl SplashPhase {
    /// Whether the overlay element is in the DOM.
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Showing | Self::Fading)
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::Showing => 1.0,
            _ => 0.0,
        }
    }

    /// Next phase in the show -> fade -> remove sequence. `Hidden` only moves
    /// on through [`SplashPhase::start`].
    pub fn next(self) -> Self {
        match self {
            Self::Showing => Self::Fading,
            Self::Fading | Self::Removed => Self::Removed,
            Self::Hidden => Self::Hidden,
        }
    }

    /// Phase to enter once the page has loaded.
    pub fn start(motion: MotionPreference) -> Self {
        if motion.reduced() {
            Self::Hidden
        } else {
            Self::Showing
        }
    }
}

/// `document.readyState` once every subresource has loaded.
pub fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Run the splash on `load`, or right away if the page already loaded before
/// the wasm module booted.
pub fn attach(state: PageState, config: &PageConfig, motion: MotionPreference) -> Result<()> {
    if motion.reduced() {
        tracing::debug!("reduced motion, splash skipped");
        return Ok(());
    }

    let window = dom::window()?;
    let document = dom::document()?;
    let hold = config.splash_hold;
    let fade = config.splash_fade;

    if is_loaded(&document.ready_state()) {
        run(state, motion, hold, fade);
    } else {
        dom::listen(&window, "load", move |_| run(state, motion, hold, fade))?;
    }
    Ok(())
}

fn run(
    state: PageState,
    motion: MotionPreference,
    hold: std::time::Duration,
    fade: std::time::Duration,
) {
    let phase = SplashPhase::start(motion);
    if !phase.is_mounted() {
        return;
    }
    state.splash.set(phase);
    tracing::info!("splash shown");

    let advance = move || state.splash.update(|phase| *phase = phase.next());
    set_timeout(
        move || {
            advance();
            set_timeout(
                move || {
                    advance();
                    tracing::debug!("splash removed");
                },
                fade,
            );
        },
        hold,
    );
}
