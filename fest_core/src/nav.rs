//! Section anchors, scroll-spy and the mobile menu.

use crate::error::{FestError, Result};

/// Offset used when a caller passes an unusable scroll offset.
pub const DEFAULT_SCROLL_OFFSET: f64 = 80.0;

/// Page sections in scroll-spy priority order.
pub const SECTIONS: [&str; 6] = [
    "home",
    "about",
    "events",
    "speakers",
    "recent-activity",
    "contact",
];

/// A navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Target section id.
    pub id: &'static str,
    /// Visible label.
    pub label: &'static str,
}

/// Links rendered by both the desktop and the mobile navigation.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { id: "home", label: "Home" },
    NavLink { id: "about", label: "About" },
    NavLink { id: "events", label: "Events" },
    NavLink { id: "speakers", label: "Speakers" },
    NavLink { id: "recent-activity", label: "Past Events" },
    NavLink { id: "contact", label: "Contact" },
];

/// External registration page.
pub const REGISTER_URL: &str = "https://ufuqstfsiokerala.eventhex.ai/#tickets";

/// A validated element id, safe to look up and scroll to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor(String);

impl SectionAnchor {
    /// Accept ids made of ASCII letters, digits, `-` and `_`.
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(FestError::InvalidAnchor(raw.to_string()))
        }
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replace negative or non-finite offsets with [`DEFAULT_SCROLL_OFFSET`].
pub fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() && offset >= 0.0 {
        offset
    } else {
        DEFAULT_SCROLL_OFFSET
    }
}

/// Document scroll position that puts an element `offset` px below the top.
///
/// `viewport_top` is the element's bounding rect top, `page_y` the current
/// document scroll.
pub fn scroll_destination(viewport_top: f64, page_y: f64, offset: f64) -> f64 {
    viewport_top + page_y - sanitize_offset(offset)
}

/// Vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// `offsetTop` of the section.
    pub top: f64,
    /// `offsetHeight` of the section.
    pub height: f64,
}

impl SectionBounds {
    /// Whether document coordinate `y` falls inside `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Tracks which section the reader is looking at.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    order: Vec<&'static str>,
    offset: f64,
    active: &'static str,
}

impl ScrollSpy {
    /// Spy over `order`, starting on its first entry.
    pub fn new(order: &[&'static str], offset: f64) -> Self {
        Self {
            order: order.to_vec(),
            offset,
            active: order.first().copied().unwrap_or_default(),
        }
    }

    /// Spy over [`SECTIONS`].
    pub fn for_page(offset: f64) -> Self {
        Self::new(&SECTIONS, offset)
    }

    /// Currently highlighted section id.
    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Re-evaluate for `scroll_y`.
    ///
    /// The first section (in priority order) containing `scroll_y + offset`
    /// wins. When none does, the previous choice is kept. Returns `true` when
    /// the active section changed.
    pub fn update<F>(&mut self, scroll_y: f64, mut bounds: F) -> bool
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        let probe = scroll_y + self.offset;
        let hit = self
            .order
            .iter()
            .copied()
            .find(|id| bounds(id).is_some_and(|b| b.contains(probe)));
        match hit {
            Some(id) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }
}

/// Open/closed state of the mobile slide-out menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the panel is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Burger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close unconditionally; returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Keyboard input; Escape closes.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Document click; clicks outside the navigation close the menu.
    pub fn on_document_click(&mut self, inside_nav: bool) -> bool {
        !inside_nav && self.close()
    }

    /// A navigation link was followed.
    pub fn on_link(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(id: &str) -> Option<SectionBounds> {
        let (top, height) = match id {
            "home" => (0.0, 900.0),
            "about" => (900.0, 700.0),
            "events" => (1600.0, 1100.0),
            "speakers" => (2700.0, 1000.0),
            "recent-activity" => (3700.0, 600.0),
            "contact" => (4300.0, 800.0),
            _ => return None,
        };
        Some(SectionBounds { top, height })
    }

    #[test]
    fn anchors_accept_plain_ids() {
        assert_eq!(SectionAnchor::parse("recent-activity").unwrap().as_str(), "recent-activity");
        assert!(SectionAnchor::parse("main_content2").is_ok());
    }

    #[test]
    fn anchors_reject_selectors_and_empty() {
        for raw in ["", "#home", "home section", "a>b", "speakers'"] {
            assert_eq!(
                SectionAnchor::parse(raw),
                Err(FestError::InvalidAnchor(raw.to_string()))
            );
        }
    }

    #[test]
    fn offsets_fall_back_to_default() {
        assert_eq!(sanitize_offset(-4.0), 80.0);
        assert_eq!(sanitize_offset(f64::NAN), 80.0);
        assert_eq!(sanitize_offset(0.0), 0.0);
        assert_eq!(scroll_destination(250.0, 1000.0, 80.0), 1170.0);
    }

    #[test]
    fn spy_activates_speakers_exactly_at_offset_top() {
        let mut spy = ScrollSpy::for_page(100.0);
        assert!(spy.update(2600.0, layout));
        assert_eq!(spy.active(), "speakers");
    }

    #[test]
    fn spy_upper_bound_is_exclusive() {
        let mut spy = ScrollSpy::for_page(100.0);
        spy.update(1500.0, layout);
        assert_eq!(spy.active(), "events");
        spy.update(1499.0, layout);
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn spy_keeps_previous_when_nothing_matches() {
        let mut spy = ScrollSpy::for_page(100.0);
        spy.update(3000.0, layout);
        assert!(!spy.update(9000.0, layout));
        assert_eq!(spy.active(), "speakers");
    }

    #[test]
    fn spy_prefers_earlier_sections_on_overlap() {
        let overlapping = |id: &str| match id {
            "home" => Some(SectionBounds { top: 0.0, height: 1000.0 }),
            "about" => Some(SectionBounds { top: 500.0, height: 1000.0 }),
            _ => None,
        };
        let mut spy = ScrollSpy::for_page(100.0);
        spy.update(600.0, overlapping);
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn spy_skips_missing_sections() {
        let sparse = |id: &str| match id {
            "contact" => Some(SectionBounds { top: 0.0, height: 500.0 }),
            _ => None,
        };
        let mut spy = ScrollSpy::for_page(100.0);
        assert!(spy.update(0.0, sparse));
        assert_eq!(spy.active(), "contact");
    }

    #[test]
    fn menu_closes_on_escape() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
        assert!(!menu.on_key("Escape"));
    }

    #[test]
    fn menu_closes_on_outside_click_only() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.on_document_click(true));
        assert!(menu.is_open());
        assert!(menu.on_document_click(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_closes_on_link() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.on_link();
        assert!(!menu.is_open());
    }

    #[test]
    fn nav_links_cover_every_section() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.id).collect();
        assert_eq!(ids, SECTIONS.to_vec());
    }
}
