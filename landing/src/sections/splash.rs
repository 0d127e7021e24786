use leptos::prelude::*;

use crate::state::use_page_state;

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: var(--dark-blue); display: flex; justify-content: center; align-items: center; \
    z-index: 10000; transition: opacity 0.5s var(--ease-out);";

/// Full-screen loading overlay, mounted only while the splash is showing or fading.
#[component]
pub fn LoadSplash() -> impl IntoView {
    let state = use_page_state();

    view! {
        <Show when=move || state.splash.get().is_mounted()>
            <div
                class="load-splash"
                role="status"
                style=move || format!("{OVERLAY_STYLE} opacity: {};", state.splash.get().opacity())
            >
                <div style="text-align: center;">
                    <div style="font-size: 3rem; color: var(--accent-orange); margin-bottom: 1rem;">
                        <i class="fas fa-book-open"></i>
                    </div>
                    <div style="color: var(--text-white); font-size: 1.5rem; font-weight: 600;">
                        "Touch Learn"
                    </div>
                    <div style="color: var(--text-light); margin-top: 0.5rem;">"Loading..."</div>
                </div>
            </div>
        </Show>
    }
}
