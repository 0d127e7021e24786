//! Keyframe block appended to `<head>` at startup.
//!
//! `floatParticle` has no consumer on the current page; the block stays so
//! particle decorations can be switched back on from CSS alone.

use crate::dom;
use crate::error::{LandingError, Result};

pub const STYLE_ID: &str = "landing-keyframes";

pub const FLOAT_PARTICLE_KEYFRAMES: &str = r#"
    @keyframes floatParticle {
        0% { transform: translateY(0px) rotate(0deg); opacity: 0; }
        10% { opacity: 1; }
        90% { opacity: 1; }
        100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; }
    }
"#;

/// Append the style block once; later calls find it by id and return.
pub fn inject() -> Result<()> {
    let document = dom::document()?;
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(LandingError::MissingHead)?;
    let style = document
        .create_element("style")
        .map_err(LandingError::js("createElement"))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(FLOAT_PARTICLE_KEYFRAMES));
    head.append_child(&style)
        .map_err(LandingError::js("appendChild"))?;
    Ok(())
}
