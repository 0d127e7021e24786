//! Reduced-motion preference, read once per page load.

/// Media query the browser uses to signal the accessibility preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the visitor asked for minimal animation. Immutable for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub const fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    /// Query the host environment. Anything that fails (no window, unsupported
    /// `matchMedia`) counts as "no preference".
    pub fn detect() -> Self {
        let reduced = web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        tracing::debug!(reduced, "motion preference detected");
        Self { reduced }
    }

    pub const fn reduced(self) -> bool {
        self.reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_motion() {
        assert!(!MotionPreference::default().reduced());
    }

    #[test]
    fn explicit_preference_is_kept() {
        assert!(MotionPreference::new(true).reduced());
    }
}
