use fest_core::content::LOGO_PATH;
use fest_core::nav::{MobileMenu, NAV_LINKS, REGISTER_URL, SECTIONS, ScrollSpy};
use leptos::ev;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::dom::{passive_window_listener, scroll_y, section_bounds, smooth_scroll_to};
use crate::{use_assets, use_config};

/// Sticky navigation: desktop bar, mobile bar and the slide-out menu.
#[component]
pub fn Nav() -> impl IntoView {
    let config = use_config();
    let nav_offset = config.nav_scroll_offset;
    let spy = StoredValue::new(ScrollSpy::new(&SECTIONS, config.scroll_spy_offset));
    let active = RwSignal::new(spy.with_value(ScrollSpy::active));
    let menu = RwSignal::new(MobileMenu::default());

    let refresh = move || {
        let changed = spy
            .try_update_value(|spy| spy.update(scroll_y(), section_bounds))
            .unwrap_or(false);
        if changed {
            let section = spy.with_value(ScrollSpy::active);
            debug!(section, "active section");
            active.set(section);
        }
    };
    Effect::new(move || refresh());

    match passive_window_listener("scroll", move |_| refresh()) {
        Ok(listener) => {
            let listener = SendWrapper::new(listener);
            on_cleanup(move || drop(listener));
        }
        Err(err) => warn!(%err, "scroll-spy disabled"),
    }

    let escape = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        let key = ev.key();
        menu.try_update(|menu| menu.on_key(&key));
    });
    let outside = window_event_listener(ev::click, move |ev: MouseEvent| {
        if !menu.with_untracked(MobileMenu::is_open) {
            return;
        }
        let inside_nav = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("nav").ok().flatten())
            .is_some();
        menu.try_update(|menu| menu.on_document_click(inside_nav));
    });
    on_cleanup(move || {
        escape.remove();
        outside.remove();
    });

    let follow = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        menu.update(MobileMenu::on_link);
        if let Err(err) = smooth_scroll_to(id, nav_offset) {
            warn!(%err, "navigation skipped");
        }
    };
    let is_open = move || menu.with(MobileMenu::is_open);

    use_assets().resolve(LOGO_PATH).map(|logo| {
        view! {
            <nav class="nav nav-desktop" role="navigation" aria-label="Main navigation">
                <div class="nav-inner">
                    <Brand logo=logo.clone() follow=follow />
                    <div class="nav-links">
                        <NavLinks active=active follow=follow link_class="nav-link" />
                    </div>
                    <RegisterLink class="btn-primary nav-register" />
                </div>
            </nav>

            <nav class="nav nav-mobile" role="navigation" aria-label="Mobile navigation">
                <div class="nav-inner">
                    <Brand logo=logo follow=follow />
                    <button
                        type="button"
                        class="burger"
                        class:active=is_open
                        aria-label=move || if is_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
                <div
                    class="menu-overlay"
                    class:open=is_open
                    aria-hidden="true"
                    on:click=move |_| {
                        menu.update(|menu| {
                            menu.close();
                        })
                    }
                ></div>
                <div class="menu-panel" class:open=is_open>
                    <NavLinks active=active follow=follow link_class="menu-link" />
                    <RegisterLink class="btn-primary menu-register" />
                </div>
            </nav>
        }
    })
}

#[component]
fn Brand<F>(logo: String, follow: F) -> impl IntoView
where
    F: Fn(MouseEvent, &'static str) + Copy + Send + Sync + 'static,
{
    view! {
        <a
            href="#home"
            class="nav-brand"
            aria-label="Go to home section"
            on:click=move |ev| follow(ev, "home")
        >
            <img src=logo alt="UFUQ Logo" class="nav-logo" />
        </a>
    }
}

/// The same links for both bars; the active one carries `aria-current`.
#[component]
fn NavLinks<F>(
    active: RwSignal<&'static str>,
    follow: F,
    link_class: &'static str,
) -> impl IntoView
where
    F: Fn(MouseEvent, &'static str) + Copy + Send + Sync + 'static,
{
    NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            let current = move || active.get() == id;
            view! {
                <a
                    href=format!("#{id}")
                    class=link_class
                    class:current=current
                    aria-current=move || current().then_some("page")
                    on:click=move |ev| follow(ev, id)
                >
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

#[component]
fn RegisterLink(class: &'static str) -> impl IntoView {
    view! {
        <a
            href=REGISTER_URL
            target="_blank"
            rel="noopener noreferrer"
            class=class
            aria-label="Register for UFUQ 2026"
        >
            "Register Now"
        </a>
    }
}
