use fest_core::content::{ACTIVITIES, ActivityEntry};
use leptos::prelude::*;

use crate::icons::{ICON_CALENDAR, ICON_LOCATION, Icon};
use crate::use_assets;
use crate::widgets::{Reveal, ResponsiveList};

#[component]
pub fn RecentActivity() -> impl IntoView {
    let activities = Signal::stored(ACTIVITIES.iter().collect::<Vec<_>>());
    view! {
        <section id="recent-activity" class="container section">
            <Reveal class="activity">
                <h2 class="activity-title">"What we've been up to lately"</h2>
            </Reveal>
            <ResponsiveList
                items=activities
                render=activity_card
                label="Recent activity"
                grid_class="activity-grid"
            />
        </section>
    }
}

fn activity_card(activity: &'static ActivityEntry) -> AnyView {
    view! { <ActivityCard activity=activity /> }.into_any()
}

#[component]
fn ActivityCard(activity: &'static ActivityEntry) -> impl IntoView {
    use_assets().resolve(activity.image).map(|image| {
        view! {
            <article class="pro-card activity-card">
                <div class="activity-image">
                    <img src=image alt=activity.title loading="lazy" decoding="async" />
                    <span class="activity-month">{activity.month}</span>
                </div>
                <div class="activity-body">
                    <h4 class="activity-card-title">{activity.title}</h4>
                    <div class="event-meta">
                        <Icon path=ICON_CALENDAR size="14" />
                        <span>{activity.date}</span>
                    </div>
                    <div class="event-meta">
                        <Icon path=ICON_LOCATION size="14" />
                        <span>{activity.location}</span>
                    </div>
                </div>
            </article>
        }
    })
}
