//! Page sections, in document order.

mod events;
mod footer;
mod hero;
mod nav;
mod objectives;
mod recent_activity;
mod recovery;
mod speakers;
mod stats;

pub use events::{EventCard, Events};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use objectives::Objectives;
pub use recent_activity::RecentActivity;
pub use recovery::RecoveryScreen;
pub use speakers::{SpeakerCard, Speakers};
pub use stats::Stats;
