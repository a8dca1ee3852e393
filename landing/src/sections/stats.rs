use fest_core::content::{STATS, Stat};
use leptos::prelude::*;

use crate::widgets::Reveal;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="container stats" aria-label="Event statistics">
            <Reveal class="stats-grid">
                {STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
            </Reveal>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="pro-card stat-card">
            <p class="stat-value" aria-label=stat.value>{stat.value}</p>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}
