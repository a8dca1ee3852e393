//! Device classification for the hero cube.
//!
//! The frame sequence is a heavy download, so it only runs on devices that
//! look like desktops: a wide viewport, no touch points and no mobile token
//! in the user agent. Everything else gets the static placeholder.

/// User agent fragments that identify phones and tablets (lowercase).
const MOBILE_TOKENS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "mobile",
    "blackberry",
    "iemobile",
    "opera mini",
    "silk",
    "kindle",
];

/// What the browser reports about the device.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceProfile {
    /// `window.innerWidth` in CSS px.
    pub viewport_width: f64,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: u32,
    /// `navigator.userAgent`.
    pub user_agent: String,
}

/// Outcome of classifying a [`DeviceProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Pointer-driven, wide screen: full animation.
    Desktop,
    /// Narrow, touch or mobile: placeholder only.
    Constrained,
}

impl DeviceClass {
    /// Whether heavy pointer animations should run.
    pub fn is_desktop(self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }
}

impl DeviceProfile {
    /// Whether the user agent names a mobile platform.
    pub fn has_mobile_user_agent(&self) -> bool {
        let ua = self.user_agent.to_ascii_lowercase();
        MOBILE_TOKENS.iter().any(|token| ua.contains(token))
    }

    /// Classify against the narrowest desktop width.
    pub fn classify(&self, desktop_min_width: f64) -> DeviceClass {
        let narrow = self.viewport_width < desktop_min_width;
        let touch = self.max_touch_points > 0;
        if narrow || touch || self.has_mobile_user_agent() {
            DeviceClass::Constrained
        } else {
            DeviceClass::Desktop
        }
    }
}
