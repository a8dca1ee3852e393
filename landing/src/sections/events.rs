use fest_core::content::{EventEntry, EventFilter, filter_events};
use leptos::prelude::*;
use tracing::debug;

use crate::icons::{ICON_CALENDAR, ICON_LOCATION, Icon};
use crate::widgets::{Reveal, ResponsiveList};

#[component]
pub fn Events() -> impl IntoView {
    let filter = RwSignal::new(EventFilter::All);
    // Derived rather than memoised: two filters with equal results must
    // still send the carousel back to its first card.
    let events = Signal::derive(move || filter_events(filter.get()));

    view! {
        <section id="events" class="container section">
            <Reveal class="section-header">
                <h2 class="section-title">"Featured Events"</h2>
                <p class="section-description">
                    "Engage with thought-provoking discussions, workshops, and exhibitions that explore "
                    "the intersection of Islamic thought and scientific inquiry, challenging conventional "
                    "paradigms and inspiring ethical innovation."
                </p>
            </Reveal>

            <div class="filter-bar" role="group" aria-label="Filter events">
                {EventFilter::ALL
                    .into_iter()
                    .map(|option| {
                        let selected = move || filter.get() == option;
                        view! {
                            <button
                                type="button"
                                class="filter-btn"
                                class:active=selected
                                aria-pressed=move || selected().to_string()
                                on:click=move |_| {
                                    if filter.get_untracked() != option {
                                        debug!(filter = option.label(), "event filter changed");
                                        filter.set(option);
                                    }
                                }
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ResponsiveList
                items=events
                render=event_card
                label="Featured events"
                grid_class="events-grid"
            />
            <Show when=move || events.with(Vec::is_empty)>
                <p class="empty-state">"No events in this category yet."</p>
            </Show>
        </section>
    }
}

fn event_card(event: &'static EventEntry) -> AnyView {
    view! { <EventCard event=event /> }.into_any()
}

/// Type and level badges, title, speakers, then date, place and duration.
#[component]
pub fn EventCard(event: &'static EventEntry) -> impl IntoView {
    view! {
        <Reveal class="pro-card event-card">
            <div class="event-card-header">
                <div class="event-badges">
                    <span class="badge badge-accent">{event.kind}</span>
                    <span class="badge">{event.level}</span>
                </div>
                <h3 class="event-title">{event.title}</h3>
            </div>
            <div class="event-card-body">
                {(!event.speakers.is_empty())
                    .then(|| {
                        view! {
                            <ul class="event-speakers">
                                {event
                                    .speakers
                                    .iter()
                                    .map(|speaker| view! { <li>{*speaker}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                <div class="divider"></div>
                <div class="event-meta">
                    <Icon path=ICON_CALENDAR size="16" />
                    <time datetime=event.date>{event.date}</time>
                </div>
                <div class="event-meta">
                    <Icon path=ICON_LOCATION size="16" />
                    <span>{event.location}</span>
                </div>
                {event
                    .duration
                    .map(|duration| {
                        view! {
                            <div class="divider"></div>
                            <p class="event-duration">{duration}</p>
                        }
                    })}
            </div>
        </Reveal>
    }
}
