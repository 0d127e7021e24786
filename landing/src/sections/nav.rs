use leptos::prelude::*;

use crate::behaviors::scroll_watch::nav_href;
use crate::state::use_page_state;

const LINKS: &[(&str, &str)] = &[
    ("problem", "Problem"),
    ("personas", "Who it's for"),
    ("market", "Market"),
    ("team", "Team"),
    ("contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="#hero" class="navbar-brand">
                    <i class="fas fa-book-open"></i>
                    <span class="navbar-title">"Touch Learn"</span>
                </a>
                <button
                    class="navbar-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "Close" } else { "Menu" }}
                </button>
                <ul class=move || if menu_open.get() { "navbar-nav open" } else { "navbar-nav" }>
                    {LINKS
                        .iter()
                        .map(|(section, label)| view! { <NavLink section=*section label=*label /> })
                        .collect::<Vec<_>>()}
                </ul>
                <a href="#contact" class="btn btn-primary navbar-cta">"Request a demo"</a>
            </div>
        </nav>
    }
}

/// Nav entry that turns `active` while its section is the current one.
#[component]
fn NavLink(section: &'static str, label: &'static str) -> impl IntoView {
    let state = use_page_state();
    let is_active = move || {
        state
            .active_section
            .with(|current| current.as_deref() == Some(section))
    };

    view! {
        <li class="nav-item">
            <a
                href=nav_href(section)
                class=move || if is_active() { "nav-link active" } else { "nav-link" }
            >
                {label}
            </a>
        </li>
    }
}
