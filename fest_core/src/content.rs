//! Static page content.
//!
//! Everything the sections render lives here as `'static` data so the
//! browser crate stays presentation only. Image paths are site-relative and
//! go through [`AssetPaths`](crate::assets::AssetPaths) at render time.

use serde::Serialize;

/// One event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    /// Category shown on the badge and matched by the filters.
    pub kind: &'static str,
    /// Audience level.
    pub level: &'static str,
    /// Event title.
    pub title: &'static str,
    /// Speaker names; may be empty.
    pub speakers: &'static [&'static str],
    /// Human readable date or range.
    pub date: &'static str,
    /// Venue.
    pub location: &'static str,
    /// Length, when announced.
    pub duration: Option<&'static str>,
}

/// Filter buttons above the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventFilter {
    /// Everything.
    All,
    /// Events held before the fest.
    PreEvent,
    /// Panel discussions.
    PanelDiscussion,
    /// Keynote talks.
    Keynote,
}

impl EventFilter {
    /// Every filter in button order.
    pub const ALL: [EventFilter; 4] = [
        EventFilter::All,
        EventFilter::PreEvent,
        EventFilter::PanelDiscussion,
        EventFilter::Keynote,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            EventFilter::All => "All Event",
            EventFilter::PreEvent => "Pre Event",
            EventFilter::PanelDiscussion => "Panel Discussion",
            EventFilter::Keynote => "Keynote",
        }
    }

    /// Whether `event` is listed under this filter.
    pub fn matches(self, event: &EventEntry) -> bool {
        match self {
            EventFilter::All => true,
            other => event.kind == other.label(),
        }
    }
}

/// Events listed under `filter`, in page order.
pub fn filter_events(filter: EventFilter) -> Vec<&'static EventEntry> {
    EVENTS.iter().filter(|event| filter.matches(event)).collect()
}

/// Featured events.
pub const EVENTS: &[EventEntry] = &[
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Exploring Intersections of Science, Technology, Society & Theology - Summer School",
        speakers: &[
            "Dr. Abdussalam Ahmad",
            "Dr. Arun Ashokan",
            "Dr. Sunandan KN",
            "Dr. Sadiq Mampad",
            "Dr. Badeeuzzaman",
            "Wafa Razak",
            "TP Muhammad Shameem",
        ],
        date: "27, 28, 29 May 2025",
        location: "Al Jamia Al Islamia Santhapuram",
        duration: Some("03 Days"),
    },
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Workshop on Aqeeda, Philosophy and Science: Navigating Technology in the Modern Era",
        speakers: &["Thafasal Ijyas", "Shuhaib C", "Shameer Ali Hudawi"],
        date: "03 August 2025",
        location: "Unity Centre, Kannur",
        duration: Some("01 Day"),
    },
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Science and Technology Fest Declaration Ceremony",
        speakers: &[
            "Dr. Syed Mustafa Ali",
            "Dr. Nahas Mala",
            "Shameer Ali Hudawi",
            "T Ismail",
            "Adv. Abdul Vahid",
            "Sahel Bas",
        ],
        date: "17 August 2025",
        location: "Ernakulam Town Hall",
        duration: None,
    },
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Let's Ai It! AI Orientation Workshop",
        speakers: &["Amjad Ali EM", "Ameen Ahsan"],
        date: "24 August 2025",
        location: "Kozhikode",
        duration: None,
    },
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Workshop on Thinking Technology: Exploring Heideggerian Idea of Technology",
        speakers: &["Dr. Muhammed Shareef", "Dr. Salih Malol"],
        date: "27 September 2025",
        location: "Vidyarthi Bhavanam Hall, Kozhikode",
        duration: Some("01 Day"),
    },
    EventEntry {
        kind: "Pre Event",
        level: "All Level",
        title: "Hackathon for Social Good",
        speakers: &[],
        date: "September 29 - November 02, 2025",
        location: "Online",
        duration: Some("04 Days"),
    },
];

/// A speaker card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeakerEntry {
    /// Shown when the portrait fails to load.
    pub initials: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Institution.
    pub affiliation: &'static str,
    /// Short bio.
    pub description: &'static str,
    /// Start and end colour of the initials badge.
    pub gradient: (&'static str, &'static str),
    /// Site-relative portrait path.
    pub image: &'static str,
}

/// Fest speakers.
pub const SPEAKERS: &[SpeakerEntry] = &[
    SpeakerEntry {
        initials: "SK",
        name: "Sunandan K N",
        affiliation: "Azim Premji University",
        description: "Researches the history and sociology of caste, knowledge production, and science; holds advanced degrees in sociology and science policy.",
        gradient: ("#6366f1", "#9333ea"),
        image: "/images/speakers/sunandan-k-n.webp",
    },
    SpeakerEntry {
        initials: "SM",
        name: "Dr. Salih M",
        affiliation: "Govt. Arts & Science College",
        description: "Completed his MPhil and PhD at Jawaharlal Nehru University, Delhi. His research interests focus on the relationship between technology and art.",
        gradient: ("#a855f7", "#db2777"),
        image: "/images/speakers/dr-salih-m.webp",
    },
    SpeakerEntry {
        initials: "WR",
        name: "Wafa Razak",
        affiliation: "PhD Candidate, JNU",
        description: "Explores how biomedical knowledge is created and practiced in everyday settings, focusing on the interplay between science and society.",
        gradient: ("#10b981", "#0d9488"),
        image: "/images/speakers/wafa-razak.webp",
    },
    SpeakerEntry {
        initials: "AA",
        name: "Dr. Arun Ashokan",
        affiliation: "ETH Zurich (Former)",
        description: "Works on the history of vernacular mathematics in medieval South India. Completed postdoctoral research at ETH Zurich.",
        gradient: ("#3b82f6", "#4f46e5"),
        image: "/images/speakers/dr-arun-ashokan.webp",
    },
    SpeakerEntry {
        initials: "SH",
        name: "Shameerali Hudawi",
        affiliation: "Darul Huda Islamic University",
        description: "Former Head of the Department of Civilizational Studies. He has expertise in philosophy of science and civilizational studies.",
        gradient: ("#f97316", "#dc2626"),
        image: "/images/speakers/shameerali-hudawi.webp",
    },
    SpeakerEntry {
        initials: "MS",
        name: "Dr. Muhammed Shareef",
        affiliation: "IIT Palakkad (Former)",
        description: "Holds a Master's degree in Philosophy from the University of Hyderabad. Research interests lie in the field of philosophy.",
        gradient: ("#06b6d4", "#2563eb"),
        image: "/images/speakers/dr-muhammed-shareef.webp",
    },
];

/// A past event with a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// Month badge.
    pub month: &'static str,
    /// Title.
    pub title: &'static str,
    /// Date line.
    pub date: &'static str,
    /// Venue.
    pub location: &'static str,
    /// Site-relative photo path.
    pub image: &'static str,
}

/// Recent activity cards.
pub const ACTIVITIES: &[ActivityEntry] = &[
    ActivityEntry {
        month: "May 2025",
        title: "Exploring Intersections of Science, Technology, Society & Theology - Summer School",
        date: "27, 28, 29 May 2025",
        location: "Al Jamia Al Islamiya, Santhapuram",
        image: "/images/events/jamia-summer-school.webp",
    },
    ActivityEntry {
        month: "Aug 2025",
        title: "Workshop on Aqeeda, Philosophy and Science: Navigating Technology in the Modern Era",
        date: "03 August 2025",
        location: "Unity Center, Kannur",
        image: "/images/events/unity-center-workshop.webp",
    },
    ActivityEntry {
        month: "Aug 2025",
        title: "Science and Technology Fest Declaration Ceremony",
        date: "17 August 2025",
        location: "Ernakulam Town Hall",
        image: "/images/events/ern-declaration-ceremony.webp",
    },
    ActivityEntry {
        month: "Aug 2025",
        title: "Let's Ai It! AI Orientation Workshop",
        date: "24 August 2025",
        location: "Hira Centre Auditorium, Kozhikode",
        image: "/images/events/hira-clct-ai-workshop.webp",
    },
];

/// A headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Display value, already formatted.
    pub value: &'static str,
    /// Caption.
    pub label: &'static str,
}

/// Headline numbers under the hero.
pub const STATS: &[Stat] = &[
    Stat { value: "2,000+", label: "Delegates" },
    Stat { value: "50+", label: "Guests" },
    Stat { value: "20+", label: "Sessions" },
    Stat { value: "05+", label: "Stages" },
];

/// Accent colour of an objective card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Indigo.
    Indigo,
    /// Purple.
    Purple,
    /// Emerald.
    Emerald,
    /// Amber.
    Amber,
}

impl Accent {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            Accent::Indigo => "accent-indigo",
            Accent::Purple => "accent-purple",
            Accent::Emerald => "accent-emerald",
            Accent::Amber => "accent-amber",
        }
    }
}

/// One fest objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Objective {
    /// SVG path data on a 24 unit stroke grid.
    pub icon: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Card accent.
    pub accent: Accent,
}

/// Objectives of the fest, shown in the about section.
pub const OBJECTIVES: &[Objective] = &[
    Objective {
        icon: "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
        title: "Philosophy of Science",
        description: "To critically explore the genealogy and conceptual foundations of scientific rationality, examining its societal function as embodying a particular dynamic of knowledge, power and reality.",
        accent: Accent::Indigo,
    },
    Objective {
        icon: "M19.428 15.428a2 2 0 00-1.022-.547l-2.384-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z",
        title: "Interdisciplinary Method",
        description: "To pave the way for interdisciplinary and transdisciplinary dialogue that ensures the sustenance of values in the further development of science and technology.",
        accent: Accent::Purple,
    },
    Objective {
        icon: "M3 6l3 1m0 0l-3 9a5.002 5.002 0 006.001 0M6 7l3 9M6 7l6-2m6 2l3-1m-3 1l-3 9a5.002 5.002 0 006.001 0M18 7l3 9m-3-9l-6-2m0-2v2m0 16V5m0 16H9m3 0h3",
        title: "Politics of Science",
        description: "To critically engage with the sociopolitical implications of science and technology, challenging the myth of their neutrality and highlighting their roles in reinforcing ideologies and systems of control.",
        accent: Accent::Emerald,
    },
    Objective {
        icon: "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
        title: "Islamic Civilizational Imagination",
        description: "To envision the possibility of engaging with science and technology from within an Islamic civilizational imagination, with the aim of fostering a just and prosperous world order.",
        accent: Accent::Amber,
    },
];

/// Location and date badge above the hero title.
pub const HERO_BADGE: &str = "Kozhikode, Kerala • 25-26 Jan 2026";

/// Mission statement under the hero title.
pub const HERO_MISSION: &str = "Resisting both uncritical acceptance and blanket refusal of advances in science and technology, SIO seeks to critically engage with them -- questioning, redefining, and reshaping their course, while remaining grounded in the foundations of Islam.";

/// The verse on the hero quote card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Arabic text, rendered right to left.
    pub arabic: &'static str,
    /// English translation.
    pub translation: &'static str,
    /// Surah and verse.
    pub reference: &'static str,
    /// Short commentary below the divider.
    pub commentary: &'static str,
}

/// Fussilat 41:53.
pub const HERO_QUOTE: Quote = Quote {
    arabic: "سَنُرِيهِمْ آيَاتِنَا فِي الْآفَاقِ وَفِي أَنفُسِهِمْ حَتَّى يَتَبَيَّنَ لَهُمْ أَنَّهُ الْحَقُّ",
    translation: "We will show them Our signs in the horizons and within themselves until it becomes clear to them that it is the Truth",
    reference: "41:53",
    commentary: "This verse embodies the idea that every pursuit of knowledge, whether through the vast horizons of the universe or the depths of the human self, is ultimately a journey towards recognizing the ultimate reality: Allah.",
};

/// Site logo used by the navigation bars.
pub const LOGO_PATH: &str = "/icons/ufuq-logo.webp";

/// Brochure download, relative to the base URL.
pub const BROCHURE_PATH: &str = "/docs/ufuq-brochure.pdf";

/// Footer slogan, one line per entry.
pub const SLOGAN: &[&str] = &["Join Us. Enjoy.", "Create. Succeed.", "Shape Your Future."];

/// A text link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Visible text.
    pub label: &'static str,
    /// Target.
    pub href: &'static str,
}

/// Footer "Company" column.
pub const COMPANY_LINKS: &[Link] = &[
    Link { label: "About Us", href: "#about" },
    Link { label: "Career Guides", href: "#" },
    Link { label: "Licensing & Certification", href: "#" },
    Link { label: "Backers", href: "#" },
    Link { label: "Contact", href: "#contact" },
];

/// Postal address, one line per entry.
pub const ADDRESS: &[&str] = &[
    "Vidyarthi Bhavanam, UK Sankunni Rd,",
    "near KSRTC, Kozhikode,",
    "Kerala 673001",
];

/// Contact mailbox.
pub const CONTACT_EMAIL: &str = "ufuqsciencetechnologyfest@gmail.com";

/// Contact numbers: display form and `tel:` form.
pub const PHONES: &[Link] = &[
    Link { label: "+91 90613 90155", href: "tel:+919061390155" },
    Link { label: "+91 80780 82546", href: "tel:+918078082546" },
    Link { label: "+91 97451 40174", href: "tel:+919745140174" },
];

/// Legal links in the footer's bottom row.
pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Terms & Conditions", href: "#" },
    Link { label: "Privacy Policy", href: "#" },
];

/// Social profiles, in footer order.
pub const SOCIALS: &[Link] = &[
    Link { label: "Facebook", href: "#" },
    Link { label: "LinkedIn", href: "#" },
    Link { label: "Instagram", href: "#" },
    Link { label: "Twitter", href: "#" },
];

/// Copyright line.
pub const COPYRIGHT: &str = "© Go campus 2025 - Copyright";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetPaths;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_filter_lists_every_event() {
        assert_eq!(filter_events(EventFilter::All).len(), EVENTS.len());
        assert_eq!(filter_events(EventFilter::PreEvent).len(), 6);
    }

    #[test]
    fn empty_categories_yield_nothing() {
        assert!(filter_events(EventFilter::Keynote).is_empty());
        assert!(filter_events(EventFilter::PanelDiscussion).is_empty());
    }

    #[test]
    fn labels_follow_button_order() {
        let labels: Vec<_> = EventFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All Event", "Pre Event", "Panel Discussion", "Keynote"]);
    }

    #[test]
    fn events_differ_by_title_or_date() {
        let mut keys: Vec<_> = EVENTS.iter().map(|event| (event.title, event.date)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), EVENTS.len());
    }

    #[test]
    fn every_image_path_resolves() {
        let assets = AssetPaths::new("/fest");
        for path in SPEAKERS
            .iter()
            .map(|s| s.image)
            .chain(ACTIVITIES.iter().map(|a| a.image))
        {
            assert!(assets.resolve(path).unwrap().starts_with("/fest/images/"));
        }
        assert_eq!(assets.resolve(LOGO_PATH).unwrap(), "/fest/icons/ufuq-logo.webp");
        assert_eq!(assets.resolve(BROCHURE_PATH).unwrap(), "/fest/docs/ufuq-brochure.pdf");
    }

    #[test]
    fn initials_are_two_letters() {
        assert!(SPEAKERS.iter().all(|s| s.initials.chars().count() == 2));
    }

    #[test]
    fn phone_links_dial_the_displayed_number() {
        for phone in PHONES {
            let dialled = phone.href.trim_start_matches("tel:");
            let shown: String = phone.label.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(dialled, shown);
        }
    }

    #[test]
    fn content_serializes_for_inspection() {
        let json = serde_json::to_value(STATS[0]).unwrap();
        assert_eq!(json["value"], "2,000+");
        let accent = serde_json::to_value(Accent::Emerald).unwrap();
        assert_eq!(accent, "emerald");
    }
}
