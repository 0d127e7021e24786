use leptos::prelude::*;

use crate::state::use_page_state;

const BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: linear-gradient(90deg, var(--accent-orange), var(--light-blue)); \
    z-index: 9999; transition: width 0.1s ease;";

/// Inline style for the bar at `percent` scrolled.
pub fn bar_style(percent: f64) -> String {
    format!("{BAR_STYLE} width: {percent:.2}%;")
}

/// Fixed 3px bar across the top whose width follows the scroll position.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let state = use_page_state();

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", state.progress.get())
            style=move || bar_style(state.progress.get())
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_percent() {
        assert!(bar_style(0.0).ends_with("width: 0.00%;"));
        assert!(bar_style(37.5).ends_with("width: 37.50%;"));
    }
}
