use leptos::prelude::*;

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Team"</p>
                    <h2 class="section-title">"Educators, engineers, and advocates."</h2>
                </div>
                <div class="team-grid">
                    <TeamCard name="Ananya Rao" role="Co-founder, Special educator" />
                    <TeamCard name="Vikram Shah" role="Co-founder, Hardware" />
                    <TeamCard name="Meera Iyer" role="Accessibility research" />
                    <TeamCard name="Rohit Menon" role="Mobile & audio" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TeamCard(name: &'static str, role: &'static str) -> impl IntoView {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect();

    view! {
        <article class="team-card">
            <div class="team-avatar" aria-hidden="true">{initials}</div>
            <h3 class="card-title">{name}</h3>
            <p class="team-role">{role}</p>
        </article>
    }
}
