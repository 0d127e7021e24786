use leptos::prelude::*;

use crate::behaviors::counter::{CounterPhase, MarketNumbers, format_figure};
use crate::state::use_page_state;

/// The `#market` section. Figures count up from zero once it scrolls into view.
#[component]
pub fn Market() -> impl IntoView {
    let state = use_page_state();
    let figure = move |pick: fn(&MarketNumbers) -> f64| {
        Signal::derive(move || state.market.with(|numbers| format_figure(pick(numbers))))
    };
    let counting = move || (state.counter_phase.get() == CounterPhase::Running).to_string();

    view! {
        <section id="market" class="market">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Market"</p>
                    <h2 class="section-title">"A large, underserved market."</h2>
                </div>
                <div class="market-grid" aria-busy=counting>
                    <MarketCard
                        figure=figure(|n| n.tam)
                        label="Global assistive education market"
                    />
                    <MarketCard
                        figure=figure(|n| n.india)
                        label="India assistive learning spend"
                    />
                    <MarketCard
                        figure=figure(|n| n.serviceable)
                        label="Serviceable market for tactile curricula"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn MarketCard(figure: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <article class="market-card">
            <div class="market-value">"$" {move || figure.get()} "B"</div>
            <p class="market-label">{label}</p>
        </article>
    }
}
