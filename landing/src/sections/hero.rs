use fest_core::content::{BROCHURE_PATH, HERO_BADGE, HERO_MISSION, HERO_QUOTE};
use fest_core::nav::REGISTER_URL;
use leptos::prelude::*;

use crate::icons::{ICON_LOCATION, Icon};
use crate::use_assets;
use crate::widgets::{HeroCube, Reveal};

#[component]
pub fn Hero() -> impl IntoView {
    use_assets().resolve(BROCHURE_PATH).map(|brochure| {
        view! {
            <header id="home" class="hero">
                <div class="container hero-grid">
                    <Reveal delay_ms=100>
                        <div class="hero-badge">
                            <Icon path=ICON_LOCATION size="14" />
                            <span>{HERO_BADGE}</span>
                        </div>
                        <h1 class="hero-title">
                            "Science and "
                            <br />
                            <span class="gradient-text">"Technology Fest"</span>
                        </h1>
                        <p class="hero-mission">{HERO_MISSION}</p>
                        <div class="hero-actions">
                            <a
                                href=REGISTER_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-primary"
                                aria-label="Register for UFUQ 2026"
                            >
                                "Register Now"
                            </a>
                            <a
                                href=brochure
                                target="_blank"
                                rel="noopener"
                                class="btn btn-secondary"
                                aria-label="View event brochure"
                            >
                                "View Brochure"
                            </a>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=300 class="hero-aside">
                        <div class="hero-glow" aria-hidden="true"></div>
                        <QuoteCard />
                        <HeroCube />
                    </Reveal>
                </div>
            </header>
        }
    })
}

#[component]
fn QuoteCard() -> impl IntoView {
    view! {
        <figure class="pro-card quote-card">
            <blockquote class="quote-arabic" dir="rtl" lang="ar">
                {format!("\"{}\"", HERO_QUOTE.arabic)}
            </blockquote>
            <figcaption class="quote-translation">
                {format!("\"{}\" ({})", HERO_QUOTE.translation, HERO_QUOTE.reference)}
            </figcaption>
            <div class="divider"></div>
            <p class="quote-commentary">{HERO_QUOTE.commentary}</p>
        </figure>
    }
}
