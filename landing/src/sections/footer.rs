use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Bring Touch Learn to your school."</h2>
                <p class="section-description">
                    "We are running pilots with schools for the blind across Karnataka and Maharashtra."
                </p>
                <a href="mailto:hello@touchlearn.in" class="btn btn-primary">"hello@touchlearn.in"</a>
            </div>
        </section>
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <i class="fas fa-book-open"></i>
                    <span class="footer-title">"Touch Learn"</span>
                </div>
                <div class="footer-links">
                    <a href="#problem" class="footer-link">"Problem"</a>
                    <a href="#market" class="footer-link">"Market"</a>
                    <a href="#team" class="footer-link">"Team"</a>
                    <a href="#hero" class="footer-link">"Back to top"</a>
                </div>
                <p class="footer-copyright">"(c)2025 Touch Learn"</p>
            </div>
        </footer>
    }
}
