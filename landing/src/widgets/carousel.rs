//! Drag/swipe carousel with spring transitions.

use fest_core::carousel::Carousel as Paginator;
use fest_core::motion::{Spring, SpringParams, SpringStep};
use leptos::ev;
use leptos::html::Div;
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, PointerEvent};

use crate::dom::{RafThrottle, is_on_screen, now_ms, viewport_width};
use crate::icons::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon};
use crate::use_config;

/// Same items as a carousel on narrow screens and a grid on wide ones.
#[component]
pub fn ResponsiveList<T>(
    /// Items in display order
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Card renderer
    render: fn(T) -> AnyView,
    /// Accessible name of the carousel region
    label: &'static str,
    /// Extra classes on the desktop grid
    #[prop(default = "")]
    grid_class: &'static str,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <div class="only-mobile">
            <Carousel items=items render=render label=label />
        </div>
        <div class=format!("only-desktop card-grid {grid_class}")>
            {move || items.get().into_iter().map(render).collect_view()}
        </div>
    }
}

/// Spring-driven track position, shared by every handler of one carousel.
#[derive(Clone, Copy)]
struct Motion {
    state: RwSignal<Paginator>,
    offset: RwSignal<f64>,
    spring: StoredValue<Spring>,
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
}

impl Motion {
    /// Spring towards the resting offset of the current position.
    fn animate(self) {
        let Some(target) = self.state.try_with_untracked(Paginator::track_offset) else {
            return;
        };
        self.spring.update_value(|spring| spring.set_target(target));
        if self.frame.with_value(Option::is_some) {
            return;
        }
        self.state.update(Paginator::animation_started);
        self.schedule(now_ms());
    }

    /// Hand the track back to the spring after a drag ended at `offset`.
    fn release_from(self, offset: f64) {
        self.spring.update_value(|spring| spring.jump(offset, 0.0));
        self.animate();
    }

    fn schedule(self, last_ms: f64) {
        match request_animation_frame_with_handle(move || self.tick(last_ms)) {
            Ok(handle) => self.frame.set_value(Some(handle)),
            Err(_) => self.snap(),
        }
    }

    fn tick(self, last_ms: f64) {
        if self.frame.try_update_value(|frame| *frame = None).is_none() {
            return;
        }
        let now = now_ms();
        let Some(step) = self
            .spring
            .try_update_value(|spring| spring.step((now - last_ms) / 1000.0))
        else {
            return;
        };
        match step {
            SpringStep::Moving(value) => {
                self.offset.set(value);
                self.schedule(now);
            }
            SpringStep::Settled(value) => {
                self.offset.set(value);
                self.state.update(Paginator::animation_finished);
            }
        }
    }

    /// Jump to the resting offset without animating.
    fn snap(self) {
        self.stop();
        let Some(target) = self.state.try_with_untracked(Paginator::track_offset) else {
            return;
        };
        self.spring.update_value(|spring| spring.reset(target));
        self.offset.set(target);
        self.state.update(Paginator::animation_finished);
    }

    fn stop(self) {
        if let Some(Some(handle)) = self.frame.try_get_value() {
            handle.cancel();
        }
        self.frame.try_update_value(|frame| *frame = None);
    }

    fn replace_items(self, len: usize) {
        self.state.update(|carousel| carousel.set_items(len));
        self.snap();
    }
}

/// Swipeable, keyboard accessible carousel. Renders nothing without items.
#[component]
pub fn Carousel<T>(
    /// Items in display order
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Card renderer
    render: fn(T) -> AnyView,
    /// Accessible name of the region
    label: &'static str,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let config = use_config().carousel;
    let gap = config.gap;
    let state = RwSignal::new(Paginator::new(0, config));
    let motion = Motion {
        state,
        offset: RwSignal::new(0.0),
        spring: StoredValue::new(Spring::new(0.0, SpringParams::from(&config))),
        frame: StoredValue::new(None),
    };
    let offset = motion.offset;
    let viewport = NodeRef::<Div>::new();

    // A new item set (e.g. another filter) always starts at the first card.
    Effect::new(move || {
        let len = items.with(Vec::len);
        motion.replace_items(len);
    });

    let measure = move || {
        if let Some(element) = viewport.get_untracked() {
            let width = f64::from(element.offset_width());
            state.update(|carousel| carousel.resize(width));
            motion.snap();
        }
    };
    Effect::new(move || {
        if viewport.get().is_some() {
            measure();
        }
    });

    let throttle = RafThrottle::new(move |()| measure());
    let resize = {
        let throttle = throttle.clone();
        window_event_listener(ev::resize, move |_| throttle.call(()))
    };
    let keydown = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if viewport_width() >= config.breakpoint {
            return;
        }
        let Some(element) = viewport.get_untracked() else {
            return;
        };
        if !is_on_screen(&element) {
            return;
        }
        let key = ev.key();
        if state.try_update(|carousel| carousel.handle_key(&key)) == Some(true) {
            ev.prevent_default();
            motion.animate();
        }
    });
    let throttle = SendWrapper::new(throttle);
    on_cleanup(move || {
        resize.remove();
        keydown.remove();
        throttle.cancel();
        motion.stop();
    });

    let go = move |index: usize| {
        if state.try_update(|carousel| carousel.go_to(index)) == Some(true) {
            motion.animate();
        }
    };

    view! {
        <Show when=move || !items.with(Vec::is_empty)>
            <div class="carousel" role="region" aria-roledescription="carousel" aria-label=label>
                <div
                    class="carousel-viewport"
                    node_ref=viewport
                    on:pointerdown=move |ev: PointerEvent| {
                        let x = f64::from(ev.client_x());
                        let started = state.try_update(|carousel| carousel.begin_drag(x, now_ms()));
                        if started == Some(true) {
                            motion.stop();
                            if let Some(target) = ev
                                .current_target()
                                .and_then(|target| target.dyn_into::<Element>().ok())
                            {
                                let _ = target.set_pointer_capture(ev.pointer_id());
                            }
                        }
                    }
                    on:pointermove=move |ev: PointerEvent| {
                        if !state.with_untracked(Paginator::is_dragging) {
                            return;
                        }
                        let x = f64::from(ev.client_x());
                        state.update_untracked(|carousel| carousel.drag_to(x, now_ms()));
                        offset.set(state.with_untracked(Paginator::dragged_offset));
                    }
                    on:pointerup=move |ev: PointerEvent| {
                        if !state.with_untracked(Paginator::is_dragging) {
                            return;
                        }
                        let released_at = offset.get_untracked();
                        let x = f64::from(ev.client_x());
                        state.update(|carousel| {
                            carousel.end_drag(x, now_ms());
                        });
                        motion.release_from(released_at);
                    }
                    on:pointercancel=move |_| {
                        if state.with_untracked(Paginator::is_dragging) {
                            let released_at = offset.get_untracked();
                            state.update(Paginator::cancel_drag);
                            motion.release_from(released_at);
                        }
                    }
                >
                    <div
                        class="carousel-track"
                        style=move || {
                            format!("transform: translate3d({:.2}px, 0, 0); gap: {gap}px;", offset.get())
                        }
                    >
                        {move || {
                            let width = state.with(Paginator::item_width);
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="carousel-item" style=format!("width: {width:.0}px")>
                                            {render(item)}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="carousel-controls">
                    <button
                        class="carousel-btn"
                        aria-label="Previous item"
                        disabled=move || !state.with(Paginator::can_prev)
                        on:click=move |_| {
                            if state.try_update(Paginator::prev) == Some(true) {
                                motion.animate();
                            }
                        }
                    >
                        <Icon path=ICON_CHEVRON_LEFT />
                    </button>
                    <Show when=move || { state.with(Paginator::len) > 1 }>
                        <div class="carousel-dots">
                            {move || {
                                (0..state.with(Paginator::len))
                                    .map(|index| {
                                        let current = move || state.with(Paginator::position) == index;
                                        view! {
                                            <button
                                                class=move || if current() { "carousel-dot active" } else { "carousel-dot" }
                                                aria-label=format!("Go to item {}", index + 1)
                                                aria-current=move || current().then_some("true")
                                                on:click=move |_| go(index)
                                                on:keydown=move |ev: KeyboardEvent| {
                                                    let key = ev.key();
                                                    if key == "Enter" || key == " " {
                                                        ev.prevent_default();
                                                        go(index);
                                                    }
                                                }
                                            ></button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                    <button
                        class="carousel-btn"
                        aria-label="Next item"
                        disabled=move || !state.with(Paginator::can_next)
                        on:click=move |_| {
                            if state.try_update(Paginator::next) == Some(true) {
                                motion.animate();
                            }
                        }
                    >
                        <Icon path=ICON_CHEVRON_RIGHT />
                    </button>
                </div>

                <div class="sr-only" aria-live="polite" aria-atomic="true">
                    {move || state.with(Paginator::announcement)}
                </div>
            </div>
        </Show>
    }
}
