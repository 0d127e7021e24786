use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Tactile learning for visually impaired students"
                    </div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"Learning you can touch."</span>
                        <br />
                        "Textbooks that speak, diagrams you can feel."
                    </h1>
                    <p class="hero-description">
                        "Touch Learn pairs low-cost tactile overlays with an audio companion app, "
                        "so every chapter of the school curriculum is accessible from day one."
                    </p>
                    <div class="hero-actions">
                        <a href="#market" class="btn btn-primary">"See the opportunity"</a>
                        <a href="#contact" class="btn btn-secondary">"Talk to us"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
