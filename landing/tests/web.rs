//! Browser tests for the DOM glue. Run with `wasm-pack test --headless --chrome landing`.

#![cfg(target_arch = "wasm32")]

use fest_core::FestError;
use fest_core::cube::ImageSource;
use fest_landing::dom::{self, DomImageSource};
use fest_landing::sections::{Nav, RecentActivity};
use fest_landing::widgets::Carousel;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn inject_section(id: &str, height: u32) -> HtmlElement {
    let document = dom::window().unwrap().document().unwrap();
    let section: HtmlElement = document.create_element("section").unwrap().unchecked_into();
    section.set_id(id);
    section
        .style()
        .set_property("height", &format!("{height}px"))
        .unwrap();
    document.body().unwrap().append_child(&section).unwrap();
    section
}

#[wasm_bindgen_test]
fn invalid_anchor_is_rejected_before_lookup() {
    assert!(matches!(
        dom::smooth_scroll_to("#speakers", 80.0),
        Err(FestError::InvalidAnchor(_))
    ));
    assert!(matches!(
        dom::smooth_scroll_to("", 80.0),
        Err(FestError::InvalidAnchor(_))
    ));
}

#[wasm_bindgen_test]
fn missing_section_is_reported() {
    assert!(matches!(
        dom::smooth_scroll_to("no-such-section", 80.0),
        Err(FestError::Unavailable(_))
    ));
}

#[wasm_bindgen_test]
fn existing_section_scrolls() {
    let section = inject_section("web-test-scroll", 400);
    assert!(dom::smooth_scroll_to("web-test-scroll", -5.0).is_ok());
    section.remove();
}

#[wasm_bindgen_test]
fn section_bounds_reads_layout() {
    let section = inject_section("web-test-bounds", 250);
    let bounds = dom::section_bounds("web-test-bounds").unwrap();
    assert_eq!(bounds.height, 250.0);
    assert!(bounds.contains(bounds.top));
    assert!(!bounds.contains(bounds.top + 250.0));
    assert!(dom::section_bounds("web-test-absent").is_none());
    section.remove();
}

#[wasm_bindgen_test]
async fn missing_image_fails_with_its_path() {
    let result = DomImageSource.fetch("/definitely/missing/frame_000.webp").await;
    match result {
        Err(FestError::ImageLoad { path }) => assert!(path.ends_with("frame_000.webp")),
        other => panic!("expected an image load error, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn device_profile_reads_the_browser() {
    let profile = dom::device_profile();
    assert!(profile.viewport_width > 0.0);
    assert!(!profile.user_agent.is_empty());
}

fn host() -> HtmlElement {
    let document = dom::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

/// Let queued effects run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 30)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_name().split_whitespace().any(|name| name == class)
}

fn click(target: &Element) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    dom::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn nav_link_click_prevents_the_jump() {
    let section = inject_section("speakers", 600);
    let root = host();
    let _mounted = mount_to(root.clone(), || view! { <Nav /> });
    settle().await;

    let hash_before = dom::window().unwrap().location().hash().unwrap();
    let event = click(&find(&root, "a[href=\"#speakers\"]"));
    assert!(event.default_prevented());
    assert_eq!(dom::window().unwrap().location().hash().unwrap(), hash_before);

    root.remove();
    section.remove();
}

#[wasm_bindgen_test]
async fn mobile_menu_closes_on_escape_outside_click_overlay_and_link() {
    let root = host();
    let _mounted = mount_to(root.clone(), || view! { <Nav /> });
    settle().await;
    let panel = find(&root, ".menu-panel");
    let burger = find(&root, ".burger");
    let body: Element = dom::window().unwrap().document().unwrap().body().unwrap().into();

    click(&burger);
    settle().await;
    assert!(has_class(&panel, "open"));
    press_escape();
    settle().await;
    assert!(!has_class(&panel, "open"));

    click(&burger);
    settle().await;
    assert!(has_class(&panel, "open"));
    click(&body);
    settle().await;
    assert!(!has_class(&panel, "open"));

    click(&burger);
    settle().await;
    click(&find(&root, ".menu-overlay"));
    settle().await;
    assert!(!has_class(&panel, "open"));

    click(&burger);
    settle().await;
    let link = click(&find(&root, ".menu-panel a[href=\"#about\"]"));
    settle().await;
    assert!(link.default_prevented());
    assert!(!has_class(&panel, "open"));

    root.remove();
}

fn plain(text: &'static str) -> AnyView {
    view! { <p class="plain-card">{text}</p> }.into_any()
}

#[wasm_bindgen_test]
async fn single_item_carousel_has_no_indicators() {
    let root = host();
    let _mounted = mount_to(root.clone(), || {
        view! { <Carousel items=Signal::stored(vec!["solo"]) render=plain label="Solo" /> }
    });
    settle().await;
    assert!(root.query_selector(".carousel").unwrap().is_some());
    assert!(root.query_selector(".carousel-dots").unwrap().is_none());
    root.remove();

    let root = host();
    let _mounted = mount_to(root.clone(), || {
        view! { <Carousel items=Signal::stored(vec!["a", "b", "c"]) render=plain label="Three" /> }
    });
    settle().await;
    assert_eq!(find(&root, ".carousel-dots").child_element_count(), 3);
    root.remove();
}

#[wasm_bindgen_test]
async fn recent_activity_uses_the_carousel_on_mobile() {
    let root = host();
    let _mounted = mount_to(root.clone(), || view! { <RecentActivity /> });
    settle().await;
    let mobile = find(&root, "#recent-activity .only-mobile");
    assert!(mobile.query_selector(".carousel").unwrap().is_some());
    let grid = find(&root, "#recent-activity .only-desktop.activity-grid");
    assert_eq!(grid.child_element_count(), 4);
    root.remove();
}
