//! Browser glue: window queries, smooth scrolling, image loading and the
//! animation-frame throttle.
//!
//! Every fallible browser call is mapped into [`FestError::Unavailable`] here
//! so widgets only ever see `fest_core` errors.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fest_core::cube::ImageSource;
use fest_core::device::DeviceProfile;
use fest_core::nav::{SectionAnchor, SectionBounds, scroll_destination};
use fest_core::schedule::FrameCoalescer;
use fest_core::{FestError, Result};
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Element, Event, HtmlElement, HtmlImageElement, ScrollBehavior,
    ScrollToOptions, Window,
};

fn unavailable(what: &str) -> FestError {
    FestError::Unavailable(what.to_string())
}

/// The global `window`.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| unavailable("window"))
}

/// High resolution clock in milliseconds, falling back to wall time.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// `window.innerWidth`, or 0 when it cannot be read.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// `window.innerHeight`, or 0 when it cannot be read.
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current document scroll, `window.scrollY`.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether any part of `element` is inside the viewport.
pub fn is_on_screen(element: &Element) -> bool {
    let rect = element.get_bounding_client_rect();
    rect.bottom() > 0.0 && rect.top() < viewport_height()
}

/// Vertical extent of the section with id `id`.
pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

/// Smoothly scroll so the section `anchor` sits `offset` px below the top.
///
/// The anchor is validated before any DOM lookup.
pub fn smooth_scroll_to(anchor: &str, offset: f64) -> Result<()> {
    let anchor = SectionAnchor::parse(anchor)?;
    let window = window()?;
    let element = window
        .document()
        .ok_or_else(|| unavailable("document"))?
        .get_element_by_id(anchor.as_str())
        .ok_or_else(|| unavailable(&format!("section #{}", anchor.as_str())))?;

    let rect = element.get_bounding_client_rect();
    let top = scroll_destination(rect.top(), scroll_y(), offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// What the browser says about this device.
pub fn device_profile() -> DeviceProfile {
    let Some(window) = web_sys::window() else {
        return DeviceProfile::default();
    };
    let navigator = window.navigator();
    DeviceProfile {
        viewport_width: viewport_width(),
        max_touch_points: u32::try_from(navigator.max_touch_points()).unwrap_or(0),
        user_agent: navigator.user_agent().unwrap_or_default(),
    }
}

/// Reload the page, used by the recovery screen.
pub fn reload() -> Result<()> {
    window()?
        .location()
        .reload()
        .map_err(|_| unavailable("location.reload"))
}

/// A passive window listener, removed when dropped.
pub struct PassiveListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for PassiveListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let callback = self.callback.as_ref().unchecked_ref();
            let _ = window.remove_event_listener_with_callback(self.event, callback);
        }
    }
}

/// Listen for `event` on the window without blocking scrolling.
pub fn passive_window_listener(
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<PassiveListener> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window()?
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|_| unavailable(event))?;
    Ok(PassiveListener { event, callback })
}

/// Loads images through detached `<img>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomImageSource;

impl ImageSource for DomImageSource {
    type Image = HtmlImageElement;

    fn fetch(&self, src: &str) -> LocalBoxFuture<'static, Result<HtmlImageElement>> {
        let src = src.to_string();
        async move { load_image(&src).await }.boxed_local()
    }
}

/// An `<img>` waiting for `load` or `error`; detaches its handlers when
/// dropped, including when the waiting future is aborted.
struct PendingImage {
    image: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for PendingImage {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

async fn load_image(src: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new().map_err(|_| unavailable("HtmlImageElement"))?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let settle = |loaded: bool| {
        let tx = Rc::clone(&tx);
        Closure::once(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let pending = PendingImage {
        image: image.clone(),
        _on_load: settle(true),
        _on_error: settle(false),
    };
    image.set_onload(Some(pending._on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(pending._on_error.as_ref().unchecked_ref()));
    image.set_src(src);

    let loaded = rx.await.unwrap_or(false);
    drop(pending);
    if loaded {
        Ok(image)
    } else {
        Err(FestError::ImageLoad {
            path: src.to_string(),
        })
    }
}

struct RafState<T> {
    pending: RefCell<FrameCoalescer<T>>,
    handle: Cell<Option<AnimationFrameRequestHandle>>,
    run: Box<dyn Fn(T)>,
}

/// Runs a handler at most once per animation frame with the latest
/// arguments it was called with.
pub struct RafThrottle<T: 'static> {
    state: Rc<RafState<T>>,
}

impl<T: 'static> Clone for RafThrottle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: 'static> RafThrottle<T> {
    /// Throttle `run`.
    pub fn new(run: impl Fn(T) + 'static) -> Self {
        Self {
            state: Rc::new(RafState {
                pending: RefCell::new(FrameCoalescer::new()),
                handle: Cell::new(None),
                run: Box::new(run),
            }),
        }
    }

    /// Record `args`; the handler runs on the next animation frame.
    pub fn call(&self, args: T) {
        if !self.state.pending.borrow_mut().offer(args) {
            return;
        }
        let state = Rc::clone(&self.state);
        let scheduled = request_animation_frame_with_handle(move || {
            state.handle.set(None);
            let args = state.pending.borrow_mut().fire();
            if let Some(args) = args {
                (state.run)(args);
            }
        });
        match scheduled {
            Ok(handle) => self.state.handle.set(Some(handle)),
            Err(_) => {
                let args = self.state.pending.borrow_mut().fire();
                if let Some(args) = args {
                    (self.state.run)(args);
                }
            }
        }
    }

    /// Drop pending arguments and the scheduled frame.
    pub fn cancel(&self) {
        if let Some(handle) = self.state.handle.take() {
            handle.cancel();
        }
        self.state.pending.borrow_mut().cancel();
    }
}
