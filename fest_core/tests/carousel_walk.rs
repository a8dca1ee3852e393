use fest_core::carousel::{Carousel, DragRelease};
use fest_core::config::CarouselConfig;
use fest_core::content::{EventFilter, filter_events};
use fest_core::motion::{Spring, SpringParams, SpringStep};
use fest_core::nav::{MobileMenu, ScrollSpy, SectionBounds};

#[test]
fn swipe_through_every_card_and_bounce_off_the_end() {
    let config = CarouselConfig::default();
    let mut carousel = Carousel::new(4, config);
    carousel.resize(390.0);
    let mut spring = Spring::new(0.0, SpringParams::from(&config));

    for expected in 1..4 {
        carousel.begin_drag(300.0, 0.0);
        carousel.drag_to(240.0, 40.0);
        assert_eq!(carousel.end_drag(200.0, 80.0), Some(expected));

        carousel.animation_started();
        assert!(!carousel.begin_drag(300.0, 100.0), "drag refused mid-animation");
        spring.set_target(carousel.track_offset());
        let mut frames = 0;
        while let SpringStep::Moving(_) = spring.step(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        carousel.animation_finished();
        assert_eq!(spring.value(), carousel.track_offset());
    }

    // Past the last card the drag is elastic and the release snaps back.
    carousel.begin_drag(300.0, 1_000.0);
    carousel.drag_to(100.0, 1_050.0);
    let overscroll = carousel.dragged_offset() - carousel.track_offset();
    assert!(overscroll < 0.0 && overscroll > -200.0);
    assert_eq!(carousel.end_drag(100.0, 1_100.0), None);
    assert_eq!(carousel.position(), 3);
    assert_eq!(carousel.announcement(), "Item 4 of 4");
}

#[test]
fn filter_change_returns_to_first_card() {
    let all = filter_events(EventFilter::All).len();
    let mut carousel = Carousel::new(all, CarouselConfig::default());
    carousel.release(DragRelease { offset: -80.0, velocity: 0.0 });
    carousel.release(DragRelease { offset: 0.0, velocity: -900.0 });
    assert_eq!(carousel.position(), 2);

    carousel.set_items(filter_events(EventFilter::Keynote).len());
    assert_eq!(carousel.position(), 0);
    assert!(carousel.is_empty());
    assert_eq!(carousel.announcement(), "");
    assert!(!carousel.handle_key("ArrowRight"));
}

#[test]
fn keyboard_walk_clamps_at_both_ends() {
    let mut carousel = Carousel::new(3, CarouselConfig::default());
    assert!(!carousel.handle_key("ArrowLeft"));
    assert!(carousel.handle_key("ArrowRight"));
    assert!(carousel.handle_key("ArrowRight"));
    assert!(!carousel.handle_key("ArrowRight"));
    assert_eq!(carousel.position(), 2);
    assert!(!carousel.handle_key("Enter"));
}

#[test]
fn menu_link_then_scroll_spy_follows() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    menu.on_link();
    assert!(!menu.is_open());

    let layout = [
        ("home", 0.0, 900.0),
        ("about", 900.0, 1200.0),
        ("events", 2100.0, 1000.0),
        ("speakers", 3100.0, 900.0),
        ("recent-activity", 4000.0, 700.0),
        ("contact", 4700.0, 500.0),
    ];
    let mut spy = ScrollSpy::for_page(100.0);
    let changed = spy.update(3000.0, |id| {
        layout
            .iter()
            .find(|(name, _, _)| *name == id)
            .map(|&(_, top, height)| SectionBounds { top, height })
    });
    assert!(changed);
    assert_eq!(spy.active(), "speakers");
}
