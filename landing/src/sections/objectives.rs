use fest_core::content::{OBJECTIVES, Objective};
use leptos::prelude::*;

use crate::icons::Icon;
use crate::widgets::Reveal;

#[component]
pub fn Objectives() -> impl IntoView {
    view! {
        <section id="about" class="container section objectives">
            <Reveal class="section-header centered">
                <h2 class="section-title">"Objectives of Fest"</h2>
                <p class="section-description">
                    "Exploring the intersection of Islamic thought and scientific innovation. "
                    "Join us for a transformative journey through the rich legacy of Islamic science "
                    "and its relevance to the contemporary world."
                </p>
            </Reveal>
            <div class="objectives-grid">
                {OBJECTIVES
                    .iter()
                    .map(|objective| view! { <ObjectiveCard objective=*objective /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ObjectiveCard(objective: Objective) -> impl IntoView {
    view! {
        <Reveal class="pro-card objective-card">
            <div class=format!("objective-icon {}", objective.accent.class())>
                <Icon path=objective.icon size="28" />
            </div>
            <h3 class="card-title">{objective.title}</h3>
            <p class="card-text">{objective.description}</p>
        </Reveal>
    }
}
