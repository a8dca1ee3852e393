//! # fest-landing
//!
//! Leptos (CSR) front-end of the UFUQ 2026 Science and Technology Fest page.
//!
//! The page is a single scrolling document: navigation, hero with the
//! rotating cube, stats, objectives, events, speakers, recent activity and
//! the footer. All state machines live in `fest_core`; this crate owns the
//! DOM, browser events and styling.
//!
//! ## Layout
//!
//! - [`dom`] - window queries, smooth scroll, image loading, rAF throttle
//! - [`widgets`] - reveal wrapper, carousel and hero cube
//! - [`sections`] - one component per page section
//! - [`logging`] - `tracing` subscriber writing to the browser console
//! - [`styles`] - the inline stylesheet
//!
//! ---
//!
//! Developed by the UFUQ Web Team (c)2025

pub mod dom;
pub mod icons;
pub mod logging;
pub mod sections;
pub mod styles;
pub mod widgets;

use fest_core::Result;
use fest_core::assets::AssetPaths;
use fest_core::config::SiteConfig;
use leptos::prelude::*;
use tracing::{error, info};

use sections::{
    Events, Footer, Hero, Nav, Objectives, RecentActivity, RecoveryScreen, Speakers, Stats,
};
use styles::FEST_CSS;

/// `fest.json`, compiled in.
pub const EMBEDDED_CONFIG: &str = include_str!("../fest.json");

/// Parse `raw` and apply a build-time base URL override.
pub fn load_config(raw: &str, base_url: Option<&str>) -> Result<SiteConfig> {
    let config = SiteConfig::from_json(raw)?.with_base_url(base_url);
    config.validate()?;
    Ok(config)
}

/// Site configuration from context, or the defaults outside of [`App`].
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Asset resolver from context.
pub fn use_assets() -> AssetPaths {
    use_context::<AssetPaths>().unwrap_or_default()
}

/// Browser entry point.
pub fn run() {
    console_error_panic_hook::set_once();

    let loaded = load_config(EMBEDDED_CONFIG, option_env!("FEST_BASE_URL"));
    let level = loaded.as_ref().ok().and_then(|config| config.log_level.clone());
    logging::init(level.as_deref());

    let config = loaded.unwrap_or_else(|err| {
        error!(%err, "using default configuration");
        SiteConfig::default()
    });
    info!(
        version = fest_core::VERSION,
        base_url = %config.base_url,
        "{} landing starting",
        fest_core::FEST_NAME
    );
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Whole page.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(AssetPaths::new(&config.base_url));
    provide_context(config);

    view! {
        <style>{FEST_CSS}</style>
        <a href="#main-content" class="skip-to-content">"Skip to main content"</a>
        <div class="bg-glow" aria-hidden="true"></div>
        <ErrorBoundary fallback=|errors| view! { <RecoveryScreen errors=errors /> }>
            <Nav />
            <main id="main-content">
                <Hero />
                <Stats />
                <Objectives />
                <Events />
                <Speakers />
                <RecentActivity />
            </main>
            <Footer />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fest_core::FestError;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = load_config(EMBEDDED_CONFIG, None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn build_override_replaces_base_url() {
        let config = load_config(EMBEDDED_CONFIG, Some("/ufuq/")).unwrap();
        assert_eq!(config.base_url, "/ufuq/");
        let assets = AssetPaths::new(&config.base_url);
        assert_eq!(
            assets.resolve("/icons/ufuq-logo.webp").unwrap(),
            "/ufuq/icons/ufuq-logo.webp"
        );

        let config = load_config(EMBEDDED_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.base_url, "/");
    }

    #[test]
    fn broken_config_is_reported() {
        assert!(matches!(load_config("{ nope", None), Err(FestError::Config(_))));
        assert!(matches!(
            load_config(r#"{ "cube": { "total_frames": 0 } }"#, None),
            Err(FestError::Config(_))
        ));
    }

    #[test]
    fn context_helpers_default_outside_the_app() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_config(), SiteConfig::default());
            assert_eq!(use_assets().base_url(), "/");
        });
    }
}
