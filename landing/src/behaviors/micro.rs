//! Button press state and card hover lift.

use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::dom;
use crate::error::{LandingError, Result};

pub const PRESSED_CLASS: &str = "pressed";

/// Inline transform/shadow pair for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPose {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

pub const CARD_LIFTED: CardPose = CardPose {
    transform: "translateY(-10px) scale(1.02)",
    box_shadow: "var(--elev-2)",
};

pub const CARD_RESTING: CardPose = CardPose {
    transform: "translateY(0) scale(1)",
    box_shadow: "var(--shadow-light)",
};

pub fn attach(config: &PageConfig) -> Result<()> {
    let document = dom::document()?;

    let buttons = dom::query_all(&document, config.button_selector)?;
    for button in &buttons {
        bind_button(button)?;
    }

    let cards = dom::query_all(&document, &config.card_selector())?;
    for card in &cards {
        bind_card(card)?;
    }

    tracing::debug!(buttons = buttons.len(), cards = cards.len(), "micro-interactions bound");
    Ok(())
}

/// `pressed` on mousedown, cleared on mouseup or when the pointer leaves.
pub fn bind_button(button: &HtmlElement) -> Result<()> {
    for (event, pressed) in [("mousedown", true), ("mouseup", false), ("mouseleave", false)] {
        let target = button.clone();
        dom::listen(button, event, move |_| {
            if let Err(err) = set_pressed(&target, pressed) {
                tracing::warn!(%err, "pressed state not toggled");
            }
        })?;
    }
    Ok(())
}

pub fn set_pressed(element: &HtmlElement, pressed: bool) -> Result<()> {
    let classes = element.class_list();
    if pressed {
        classes
            .add_1(PRESSED_CLASS)
            .map_err(LandingError::js("classList.add"))
    } else {
        classes
            .remove_1(PRESSED_CLASS)
            .map_err(LandingError::js("classList.remove"))
    }
}

pub fn bind_card(card: &HtmlElement) -> Result<()> {
    for (event, pose) in [("mouseenter", CARD_LIFTED), ("mouseleave", CARD_RESTING)] {
        let target = card.clone();
        dom::listen(card, event, move |_| {
            if let Err(err) = apply_pose(&target, pose) {
                tracing::warn!(%err, "card pose not applied");
            }
        })?;
    }
    Ok(())
}

pub fn apply_pose(element: &HtmlElement, pose: CardPose) -> Result<()> {
    let style = element.style();
    style
        .set_property("transform", pose.transform)
        .map_err(LandingError::js("style.transform"))?;
    style
        .set_property("box-shadow", pose.box_shadow)
        .map_err(LandingError::js("style.boxShadow"))?;
    Ok(())
}
