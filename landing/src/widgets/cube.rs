//! Hero cube widget.
//!
//! Wires [`CubeAnimation`] to the page: a click starts the download, a
//! detached future preloads the sequence, and window mouse moves pick the
//! frame once everything is in. Two stacked `<img>` elements crossfade
//! between frames.

use std::rc::Rc;
use std::time::Duration;

use fest_core::cube::{
    BufferSlot, CubeAnimation, CubePhase, FrameFetcher, FrameSet, ImageCache, preload_sequential,
};
use futures::future::{AbortHandle, abortable};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use tracing::{debug, info, warn};
use web_sys::MouseEvent;

use crate::dom::{DomImageSource, RafThrottle, device_profile, viewport_width};
use crate::icons::{ICON_CURSOR, Icon};
use crate::{use_assets, use_config};

type DomFetcher = FrameFetcher<DomImageSource>;

/// Reactive handles shared by the click, preload and pointer paths.
#[derive(Clone, Copy)]
struct CubeView {
    state: RwSignal<CubeAnimation>,
    src_a: RwSignal<Option<String>>,
    src_b: RwSignal<Option<String>>,
    /// Slot currently faded in.
    visible: RwSignal<BufferSlot>,
    fetcher: StoredValue<SendWrapper<Rc<DomFetcher>>>,
    crossfade_ms: u64,
}

impl CubeView {
    fn slot(self, slot: BufferSlot) -> RwSignal<Option<String>> {
        match slot {
            BufferSlot::A => self.src_a,
            BufferSlot::B => self.src_b,
        }
    }

    fn fetcher(self) -> Option<Rc<DomFetcher>> {
        self.fetcher.try_with_value(|fetcher| Rc::clone(&**fetcher))
    }

    /// Swap the visible image without a crossfade (seed and progress cues).
    fn show_now(self, src: String) {
        if let Some(slot) = self.visible.try_get_untracked() {
            self.slot(slot).try_set(Some(src));
        }
    }

    /// Load `index` into the secondary slot and fade it in.
    fn transition_to(self, index: usize) {
        let Some(fetcher) = self.fetcher() else {
            return;
        };
        spawn_local(async move {
            match fetcher.fetch(index).await {
                Ok(frame) => {
                    let Some(slot) = self.state.try_with_untracked(CubeAnimation::secondary) else {
                        return;
                    };
                    self.slot(slot).try_set(Some(frame.src));
                    self.visible.try_set(slot);
                    set_timeout(
                        move || self.crossfade_finished(),
                        Duration::from_millis(self.crossfade_ms),
                    );
                }
                Err(err) => {
                    debug!(%err, frame = index, "cube transition failed");
                    let next = self.state.try_update(CubeAnimation::transition_aborted);
                    if let Some(Some(next)) = next {
                        self.transition_to(next);
                    }
                }
            }
        });
    }

    fn crossfade_finished(self) {
        if let Some(Some(next)) = self.state.try_update(CubeAnimation::crossfade_complete) {
            self.transition_to(next);
        }
    }

    /// Seed frame, then every frame in order.
    async fn preload(self, fetcher: Rc<DomFetcher>, seed: usize) {
        let seeded = match fetcher.fetch(seed).await {
            Ok(frame) => {
                self.show_now(frame.src);
                true
            }
            Err(err) => {
                warn!(%err, "cube seed frame failed");
                false
            }
        };
        self.state.try_update(|cube| cube.seed_settled(seeded));

        let total = fetcher.frames().total();
        let loaded = preload_sequential(Rc::clone(&fetcher), |progress| {
            let src = progress.loaded.as_ref().map(|frame| frame.src.clone());
            let cue = self
                .state
                .try_update(|cube| cube.record_progress(&progress))
                .flatten();
            if let (Some(_), Some(src)) = (cue, src) {
                self.show_now(src);
            }
        })
        .await;
        info!(loaded, total, "cube frames preloaded");
    }
}

/// The rotating cube beside the hero quote.
///
/// Constrained devices only ever see the placeholder.
#[component]
pub fn HeroCube() -> impl IntoView {
    let cube_config = use_config().cube;
    let assets = use_assets();
    let device = device_profile().classify(cube_config.desktop_min_width);
    let placeholder = assets.resolve(&cube_config.placeholder);
    let frames = FrameSet::new(assets, &cube_config);
    debug!(?device, total = frames.total(), "cube mounted");

    let fetcher = Rc::new(FrameFetcher::new(Rc::new(ImageCache::new(DomImageSource)), frames));
    let widget = CubeView {
        state: RwSignal::new(CubeAnimation::new(fetcher.frames().total(), device)),
        src_a: RwSignal::new(None),
        src_b: RwSignal::new(None),
        visible: RwSignal::new(BufferSlot::A),
        fetcher: StoredValue::new(SendWrapper::new(fetcher)),
        crossfade_ms: cube_config.crossfade_ms,
    };
    let state = widget.state;
    let preload_task = StoredValue::new(None::<AbortHandle>);

    let activate = move |_: MouseEvent| {
        let Some(Some(seed)) = state.try_update(CubeAnimation::activate) else {
            return;
        };
        let Some(fetcher) = widget.fetcher() else {
            return;
        };
        let (task, handle) = abortable(widget.preload(fetcher, seed));
        preload_task.set_value(Some(handle));
        spawn_local(async move {
            if task.await.is_err() {
                debug!("cube preload aborted");
            }
        });
    };

    let throttle = RafThrottle::new(move |x: f64| {
        let width = viewport_width();
        if let Some(Some(index)) = state.try_update(|cube| cube.pointer_moved(x, width)) {
            widget.transition_to(index);
        }
    });
    // Constrained devices never get a pointer listener.
    let pointer = state.with_untracked(CubeAnimation::tracks_pointer).then(|| {
        let throttle = throttle.clone();
        window_event_listener(ev::mousemove, move |ev: MouseEvent| {
            if state.with_untracked(|cube| cube.phase() == CubePhase::Interactive) {
                throttle.call(f64::from(ev.client_x()));
            }
        })
    });
    let throttle = SendWrapper::new(throttle);
    on_cleanup(move || {
        if let Some(Some(handle)) = preload_task.try_get_value() {
            handle.abort();
        }
        if let Some(pointer) = pointer {
            pointer.remove();
        }
        throttle.cancel();
    });

    let fade = format!("transition-duration: {}ms", cube_config.crossfade_ms);
    let phase = move || state.with(CubeAnimation::phase);
    let frame_class = move |slot: BufferSlot| {
        move || {
            if widget.visible.get() == slot {
                "cube-frame visible"
            } else {
                "cube-frame"
            }
        }
    };

    let placeholder = match placeholder {
        Ok(src) => view! {
            <img
                class="cube-placeholder"
                class:hidden=move || !state.with(CubeAnimation::shows_placeholder)
                src=src
                alt="Rotating cube"
                draggable="false"
            />
        }
        .into_any(),
        Err(err) => {
            warn!(%err, "cube placeholder unavailable");
            ().into_any()
        }
    };

    view! {
        <div
            class="hero-cube"
            class:interactive=move || phase() == CubePhase::Interactive
            class:clickable=move || device.is_desktop() && phase() == CubePhase::Dormant
            on:click=activate
        >
            {placeholder}
            <img
                class=frame_class(BufferSlot::A)
                style=fade.clone()
                src=move || widget.src_a.get()
                alt=""
                aria-hidden="true"
                draggable="false"
            />
            <img
                class=frame_class(BufferSlot::B)
                style=fade
                src=move || widget.src_b.get()
                alt=""
                aria-hidden="true"
                draggable="false"
            />
            <Show when=move || {
                matches!(phase(), CubePhase::InitialLoading | CubePhase::SequentialPreloading)
            }>
                <div class="cube-progress" role="progressbar" aria-valuemin="0" aria-valuemax="100"
                    aria-valuenow=move || state.with(CubeAnimation::progress).to_string()
                >
                    <div
                        class="cube-progress-bar"
                        style=move || format!("width: {}%", state.with(CubeAnimation::progress))
                    ></div>
                    <span>{move || format!("Loading {}%", state.with(CubeAnimation::progress))}</span>
                </div>
            </Show>
            <Show when=move || device.is_desktop() && phase() == CubePhase::Dormant>
                <div class="cube-hint">
                    <Icon path=ICON_CURSOR size="16" />
                    <span>"Click to explore"</span>
                </div>
            </Show>
            <Show when=move || phase() == CubePhase::Interactive>
                <div class="cube-hint subtle">"Move your cursor to rotate"</div>
            </Show>
        </div>
    }
}
