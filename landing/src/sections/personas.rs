use leptos::prelude::*;

#[component]
pub fn Personas() -> impl IntoView {
    view! {
        <section id="personas" class="personas">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Who it's for"</p>
                    <h2 class="section-title">"Built with the people who use it."</h2>
                </div>
                <div class="persona-grid">
                    <PersonaCard
                        name="Students"
                        quote="I want to study the same chapter as my classmates, the same week."
                    />
                    <PersonaCard
                        name="Teachers"
                        quote="I need material I can hand out without re-drawing every diagram."
                    />
                    <PersonaCard
                        name="Schools & NGOs"
                        quote="We need something that scales across districts on a fixed budget."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn PersonaCard(name: &'static str, quote: &'static str) -> impl IntoView {
    view! {
        <article class="persona-card">
            <h3 class="card-title">{name}</h3>
            <blockquote class="persona-quote">{quote}</blockquote>
        </article>
    }
}
