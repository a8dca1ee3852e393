//! Reveal-on-scroll state.
//!
//! An element starts hidden and gets the `active` class the first time it
//! intersects the viewport. In the default one-shot mode it then stops being
//! observed; in continuous mode it is concealed again when it leaves.

use serde::{Deserialize, Serialize};

/// Class toggled on revealed elements.
pub const REVEAL_CLASS: &str = "active";

/// Observer options for a reveal target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// CSS margin applied to the root (viewport) box.
    pub root_margin: String,
    /// Reveal once and stop observing.
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".into(),
            once: true,
        }
    }
}

impl RevealOptions {
    /// Continuous mode: conceal again when the element leaves the viewport.
    pub fn continuous(mut self) -> Self {
        self.once = false;
        self
    }
}

/// What the DOM layer should do after an intersection notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the reveal class.
    Reveal,
    /// Add the reveal class and unobserve the element.
    RevealAndStop,
    /// Remove the reveal class.
    Conceal,
    /// Nothing changes.
    Ignore,
}

/// Per-element reveal state.
#[derive(Debug, Clone)]
pub struct RevealState {
    once: bool,
    revealed: bool,
    observing: bool,
}

impl RevealState {
    /// Fresh, hidden, observed element.
    pub fn new(options: &RevealOptions) -> Self {
        Self {
            once: options.once,
            revealed: false,
            observing: true,
        }
    }

    /// Whether the element currently carries the reveal class.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the element still needs intersection notifications.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed one intersection notification.
    pub fn on_intersection(&mut self, intersecting: bool) -> RevealAction {
        if !self.observing {
            return RevealAction::Ignore;
        }
        match (intersecting, self.once) {
            (true, true) => {
                self.revealed = true;
                self.observing = false;
                RevealAction::RevealAndStop
            }
            (true, false) if !self.revealed => {
                self.revealed = true;
                RevealAction::Reveal
            }
            (false, false) if self.revealed => {
                self.revealed = false;
                RevealAction::Conceal
            }
            _ => RevealAction::Ignore,
        }
    }

    /// Observation ended by teardown.
    pub fn detach(&mut self) {
        self.observing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_shot_reveals_once_and_never_reverts() {
        let mut state = RevealState::new(&RevealOptions::default());
        assert_eq!(state.on_intersection(false), RevealAction::Ignore);
        assert_eq!(state.on_intersection(true), RevealAction::RevealAndStop);
        assert!(state.is_revealed());
        assert!(!state.is_observing());

        assert_eq!(state.on_intersection(false), RevealAction::Ignore);
        assert!(state.is_revealed());
    }

    #[test]
    fn continuous_mode_toggles() {
        let mut state = RevealState::new(&RevealOptions::default().continuous());
        assert_eq!(state.on_intersection(true), RevealAction::Reveal);
        assert_eq!(state.on_intersection(true), RevealAction::Ignore);
        assert_eq!(state.on_intersection(false), RevealAction::Conceal);
        assert!(!state.is_revealed());
        assert_eq!(state.on_intersection(true), RevealAction::Reveal);
    }

    #[test]
    fn detached_element_ignores_late_notifications() {
        let mut state = RevealState::new(&RevealOptions::default());
        state.detach();
        assert_eq!(state.on_intersection(true), RevealAction::Ignore);
        assert!(!state.is_revealed());
    }

    #[test]
    fn default_threshold_is_ten_percent() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
        assert!(options.once);
    }
}
