//! Reveal-on-scroll wrapper.

use fest_core::reveal::{REVEAL_CLASS, RevealAction, RevealOptions, RevealState};
use fest_core::{FestError, Result};
use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::use_config;

/// Fades its children in the first time they scroll into view.
///
/// With `continuous` set the content fades out again when it leaves.
#[component]
pub fn Reveal(
    /// Extra classes on the wrapper
    #[prop(default = "")]
    class: &'static str,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Re-hide when scrolled out of view
    #[prop(optional)]
    continuous: bool,
    children: Children,
) -> impl IntoView {
    let mut options = use_config().reveal;
    if continuous {
        options = options.continuous();
    }
    let node = NodeRef::<Div>::new();
    let revealed = RwSignal::new(false);

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        match Observation::start(&element, &options, revealed) {
            Ok(observation) => {
                let observation = SendWrapper::new(observation);
                on_cleanup(move || drop(observation));
            }
            Err(err) => warn!(%err, "reveal disabled"),
        }
    });

    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));
    view! {
        <div
            node_ref=node
            class=move || {
                if revealed.get() {
                    format!("reveal {class} {REVEAL_CLASS}")
                } else {
                    format!("reveal {class}")
                }
            }
            style=style
        >
            {children()}
        </div>
    }
}

/// A live observer; disconnects when dropped.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    fn start(target: &Element, options: &RevealOptions, revealed: RwSignal<bool>) -> Result<Self> {
        let state = Rc::new(RefCell::new(RevealState::new(options)));
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let action = state.borrow_mut().on_intersection(entry.is_intersecting());
                    match action {
                        RevealAction::Reveal => {
                            revealed.try_set(true);
                        }
                        RevealAction::RevealAndStop => {
                            revealed.try_set(true);
                            observer.unobserve(&entry.target());
                        }
                        RevealAction::Conceal => {
                            revealed.try_set(false);
                        }
                        RevealAction::Ignore => {}
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| FestError::Unavailable("IntersectionObserver".into()))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
