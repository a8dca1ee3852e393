use fest_core::content::{SPEAKERS, SpeakerEntry};
use leptos::prelude::*;
use tracing::debug;

use crate::use_assets;
use crate::widgets::{Reveal, ResponsiveList};

#[component]
pub fn Speakers() -> impl IntoView {
    let speakers = Signal::stored(SPEAKERS.iter().collect::<Vec<_>>());
    view! {
        <section id="speakers" class="container section speakers">
            <Reveal class="section-header centered">
                <h2 class="section-title">"Speakers"</h2>
                <p class="section-description">
                    "Learn from industry leaders and renowned researchers shaping the future of science."
                </p>
            </Reveal>
            <ResponsiveList
                items=speakers
                render=speaker_card
                label="Speakers"
                grid_class="speakers-grid"
            />
        </section>
    }
}

fn speaker_card(speaker: &'static SpeakerEntry) -> AnyView {
    view! { <SpeakerCard speaker=speaker /> }.into_any()
}

/// Portrait card; a portrait that fails to load becomes an initials badge.
#[component]
pub fn SpeakerCard(speaker: &'static SpeakerEntry) -> impl IntoView {
    let failed = RwSignal::new(false);
    let (from, to) = speaker.gradient;
    let initials = move || {
        view! {
            <div
                class="speaker-initials"
                style=format!("background: linear-gradient(135deg, {from}, {to})")
                aria-hidden="true"
            >
                {speaker.initials}
            </div>
        }
    };

    use_assets().resolve(speaker.image).map(|portrait| {
        view! {
            <Reveal class="pro-card speaker-card">
                <div class="speaker-portrait">
                    <Show when=move || !failed.get() fallback=initials>
                        <img
                            src=portrait.clone()
                            alt=speaker.name
                            loading="lazy"
                            on:error=move |_| {
                                debug!(speaker = speaker.name, "portrait failed, showing initials");
                                failed.set(true);
                            }
                        />
                    </Show>
                </div>
                <h4 class="speaker-name">{speaker.name}</h4>
                <p class="speaker-affiliation">{speaker.affiliation}</p>
                <p class="card-text">{speaker.description}</p>
            </Reveal>
        }
    })
}
