//! # ladja-core
//!
//! Page logic behind the Ladja landing page, kept free of any DOM access so
//! every rule can be exercised with plain `cargo test`.
//!
//! The browser crate (`ladja-landing`) feeds events in and renders whatever
//! [`PageState`] says:
//!
//! ```text
//! scroll event ──► ScrollTracker ──┐
//! impact visible ─► VisibilityTrigger ─► PageState ──► re-render
//! animation frame ─► CounterAnimator ──┘
//! ```
//!
//! ## Modules
//!
//! - [`section`] - the fixed set of section identifiers
//! - [`viewport`] - geometry seam between the tracker and a live document
//! - [`scroll`] - `isScrolled` and active-section detection
//! - [`trigger`] - one-shot visibility trigger for the stats panel
//! - [`counter`] - stats counter animation
//! - [`state`] - the single page state container
//! - [`navigation`] - smooth-scroll navigation contract
//! - [`content`] - static copy rendered by the page
//! - [`config`] - `site.toml` parsing and validation
//!
//! ## Example
//!
//! ```rust
//! use ladja_core::{PageState, ScrollTracker, SectionId};
//! use ladja_core::viewport::StackedLayout;
//!
//! let layout = StackedLayout::uniform(800.0).scrolled_to(2450.0);
//! let mut state = PageState::default();
//! state.apply_scroll(&ScrollTracker::default(), &layout);
//!
//! assert!(state.is_scrolled());
//! assert_eq!(state.active_section(), SectionId::Impact);
//! ```
//!
//! ---
//!
//! Developed with 💀 by The Ladja Team (c)2025

#![warn(missing_docs)]

pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod navigation;
pub mod scroll;
pub mod section;
pub mod state;
pub mod trigger;
pub mod viewport;

pub use config::SiteConfig;
pub use counter::{CounterAnimator, Statistic, StatsSnapshot};
pub use error::{ConfigError, UnknownSection};
pub use navigation::{NavOutcome, Navigator};
pub use scroll::{ScrollSample, ScrollTracker};
pub use section::SectionId;
pub use state::PageState;
pub use trigger::{TriggerState, VisibilityTrigger};
pub use viewport::{Bounds, ViewportQuery};
