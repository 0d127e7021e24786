use leptos::prelude::*;

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id="problem" class="problem">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"The problem"</p>
                    <h2 class="section-title">"Braille books arrive late, if at all."</h2>
                </div>
                <div class="problem-grid">
                    <ProblemCard
                        icon="fa-hourglass-half"
                        title="Months of delay"
                        description="Braille transcriptions of new syllabi reach schools long after term starts."
                    />
                    <ProblemCard
                        icon="fa-shapes"
                        title="Diagrams left out"
                        description="Maps, graphs and geometry are skipped because they are expensive to emboss."
                    />
                    <ProblemCard
                        icon="fa-chalkboard-teacher"
                        title="Too few specialist teachers"
                        description="Most mainstream classrooms have no one trained to adapt material on the fly."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProblemCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="problem-card">
            <div class="card-icon"><i class=format!("fas {icon}")></i></div>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
        </article>
    }
}
