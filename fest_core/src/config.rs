//! Site configuration.
//!
//! The landing page embeds a JSON file and lets the build override the base
//! URL, the same way a bundler injects its public path. Every field has a
//! default, so an empty object `{}` is a valid configuration.
//!
//! ```rust
//! use fest_core::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "base_url": "/fest/", "cube": { "total_frames": 60 } }"#)?;
//! assert_eq!(config.base_url, "/fest/");
//! assert_eq!(config.cube.total_frames, 60);
//! assert_eq!(config.cube.crossfade_ms, 110);
//! # Ok::<(), fest_core::FestError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FestError, Result};
use crate::reveal::RevealOptions;

/// Resolved configuration for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for every static asset; the site may be served from a sub-path.
    pub base_url: String,
    /// Optional tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: Option<String>,
    /// Distance below the viewport top used by scroll-spy.
    pub scroll_spy_offset: f64,
    /// Distance kept above a section when a nav link scrolls to it.
    pub nav_scroll_offset: f64,
    /// Defaults for every reveal-on-scroll element.
    pub reveal: RevealOptions,
    /// Carousel gesture thresholds and spring constants.
    pub carousel: CarouselConfig,
    /// Hero cube frame sequence.
    pub cube: CubeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/".into(),
            log_level: None,
            scroll_spy_offset: 100.0,
            nav_scroll_offset: 80.0,
            reveal: RevealOptions::default(),
            carousel: CarouselConfig::default(),
            cube: CubeConfig::default(),
        }
    }
}

/// Carousel tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Viewport width below which carousels replace grids.
    pub breakpoint: f64,
    /// Minimum drag distance (px) that changes the page.
    pub drag_buffer: f64,
    /// Minimum release velocity (px/s) that changes the page.
    pub velocity_threshold: f64,
    /// Space between two cards.
    pub gap: f64,
    /// Horizontal padding subtracted from the container to size a card.
    pub container_padding: f64,
    /// Fraction of an overscroll drag that still moves the track.
    pub elasticity: f64,
    /// Spring stiffness for position transitions.
    pub stiffness: f64,
    /// Spring damping for position transitions.
    pub damping: f64,
    /// Spring mass for position transitions.
    pub mass: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            drag_buffer: 50.0,
            velocity_threshold: 500.0,
            gap: 16.0,
            container_padding: 48.0,
            elasticity: 0.1,
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

/// Hero cube frame sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Number of frames in the sequence.
    pub total_frames: usize,
    /// Directory holding the frames, relative to the base URL.
    pub frame_dir: String,
    /// File name prefix before the zero padded index.
    pub frame_prefix: String,
    /// Zero padding width of the frame index.
    pub index_digits: usize,
    /// Static image shown before activation and on constrained devices.
    pub placeholder: String,
    /// Duration of one crossfade in milliseconds.
    pub crossfade_ms: u64,
    /// Narrowest viewport treated as a desktop.
    pub desktop_min_width: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            total_frames: 142,
            frame_dir: "images/cube".into(),
            frame_prefix: "frame_".into(),
            index_digits: 3,
            placeholder: "images/cube/placeholder.webp".into(),
            crossfade_ms: 110,
            desktop_min_width: 1024.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL, typically with a value injected at build time.
    ///
    /// Blank overrides are ignored.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            self.base_url = base.to_string();
        }
        self
    }

    /// Reject values that would break the widgets at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(FestError::Config("base_url must not be empty".into()));
        }
        if self.cube.total_frames == 0 {
            return Err(FestError::Config("cube.total_frames must be at least 1".into()));
        }
        if self.cube.crossfade_ms == 0 {
            return Err(FestError::Config("cube.crossfade_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FestError::Config(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.carousel.breakpoint <= 0.0 || self.cube.desktop_min_width <= 0.0 {
            return Err(FestError::Config("breakpoints must be positive".into()));
        }
        self.carousel.validate()
    }
}

impl CarouselConfig {
    /// Thresholds must be positive, otherwise a release without movement
    /// would still change the page.
    fn validate(&self) -> Result<()> {
        let positive = [
            ("drag_buffer", self.drag_buffer),
            ("velocity_threshold", self.velocity_threshold),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FestError::Config(format!(
                    "carousel.{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("gap", self.gap),
            ("container_padding", self.container_padding),
            ("damping", self.damping),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FestError::Config(format!(
                    "carousel.{name} must not be negative, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.elasticity) {
            return Err(FestError::Config(format!(
                "carousel.elasticity must be within [0, 1], got {}",
                self.elasticity
            )));
        }
        Ok(())
    }
}
