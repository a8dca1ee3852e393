//! # fest-core
//!
//! Browser-independent core of the Science and Technology Fest landing page.
//!
//! Everything here is plain Rust: the static content shown on the page and
//! the state machines behind its interactive widgets. The Leptos front-end
//! (`fest-landing`) owns the DOM and feeds browser events into these types,
//! which keeps the interesting behavior testable on a native target.
//!
//! ## Architecture
//!
//! - [`content`] - events, speakers, activities, stats and objectives
//! - [`carousel`] - drag/snap paginator with clamped positions
//! - [`motion`] - spring integrator used for carousel transitions
//! - [`reveal`] - one-shot or continuous scroll reveal state
//! - [`nav`] - section anchors, scroll-spy and the mobile menu
//! - [`cube`] - hero frame-sequence controller, image cache and preloader
//! - [`schedule`] - "latest args wins" animation-frame coalescer
//! - [`device`] - desktop vs constrained device classification
//! - [`assets`] - base URL aware asset path resolution
//! - [`config`] - site configuration loaded from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use fest_core::carousel::{Carousel, DragRelease};
//! use fest_core::config::CarouselConfig;
//!
//! let mut carousel = Carousel::new(6, CarouselConfig::default());
//! carousel.resize(390.0);
//!
//! // A short, slow drag snaps back.
//! assert_eq!(carousel.release(DragRelease { offset: -20.0, velocity: -80.0 }), None);
//!
//! // A decisive swipe to the left advances one card.
//! assert_eq!(carousel.release(DragRelease { offset: -120.0, velocity: 0.0 }), Some(1));
//! ```
//!
//! ---
//!
//! Developed by the UFUQ Web Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod carousel;
pub mod config;
pub mod content;
pub mod cube;
pub mod device;
pub mod error;
pub mod motion;
pub mod nav;
pub mod reveal;
pub mod schedule;

pub use error::{FestError, Result};

/// Display name of the fest, used in titles and aria labels.
pub const FEST_NAME: &str = "UFUQ 2026";

/// Version string shown in the footer and console banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
