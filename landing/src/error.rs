//! Error type for wiring the interaction layer.
//!
//! Nothing here is fatal: every behavior reports its failure to the wiring
//! layer, which logs it and carries on with the rest of the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no <head>")]
    MissingHead,

    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LandingError>;

impl LandingError {
    /// Adapter for `map_err` on web-sys calls that fail with a `JsValue`.
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> Self {
        move |value| Self::Js {
            context,
            message: value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        }
    }
}
