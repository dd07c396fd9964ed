//! Reactive wrapper around [`PageState`].
//!
//! One `PageStore` exists per page view. It is `Copy`, so components and
//! event handlers take it by value. All writes go through the methods here;
//! views read the memos, which only notify when their slice actually changes.

use ladja_core::counter::StatsSnapshot;
use ladja_core::{NavOutcome, PageState, ScrollTracker, SectionId, SiteConfig};
use leptos::prelude::*;

use crate::browser::DomViewport;

#[derive(Clone, Copy)]
pub struct PageStore {
    state: RwSignal<PageState>,
    tracker: ScrollTracker,
    pub is_scrolled: Memo<bool>,
    pub active_section: Memo<SectionId>,
    pub menu_open: Memo<bool>,
    pub stats: Memo<StatsSnapshot>,
}

impl PageStore {
    pub fn new(config: &SiteConfig) -> Self {
        let state = RwSignal::new(config.page_state());
        Self {
            state,
            tracker: config.scroll_tracker(),
            is_scrolled: Memo::new(move |_| state.with(PageState::is_scrolled)),
            active_section: Memo::new(move |_| state.with(PageState::active_section)),
            menu_open: Memo::new(move |_| state.with(PageState::mobile_menu_open)),
            stats: Memo::new(move |_| state.with(PageState::stats)),
        }
    }

    /// Re-sample the viewport. Called on every scroll event and once on mount.
    pub fn sync_scroll(&self) {
        let Some(viewport) = DomViewport::current() else {
            return;
        };
        let tracker = self.tracker;
        self.state
            .try_maybe_update(|state| (state.apply_scroll(&tracker, &viewport), ()));
    }

    /// Smooth-scroll to `target` and collapse the mobile menu.
    pub fn navigate(&self, target: &str) {
        let Some(viewport) = DomViewport::current() else {
            self.state.update(|state| {
                state.close_mobile_menu();
            });
            return;
        };
        let outcome = self.state.try_update(|state| state.navigate(target, &viewport));
        if let Some(NavOutcome::Scrolled(section)) = outcome {
            log::debug!("[ladja][nav] scrolling to #{section}");
        }
    }

    pub fn toggle_menu(&self) {
        self.state.update(PageState::toggle_mobile_menu);
    }

    pub fn has_animated_stats(&self) -> bool {
        self.state.with_untracked(PageState::has_animated_stats)
    }

    /// Report the stats panel's visible fraction. Returns `true` when this
    /// observation started the animation.
    pub fn observe_stats(&self, visible_ratio: f64) -> bool {
        self.state
            .try_maybe_update(|state| {
                let started = state.observe_stats(visible_ratio);
                (started, started)
            })
            .unwrap_or(false)
    }

    /// Advance the counters one frame. Returns `true` while more frames are
    /// needed; `false` once complete or after the page was torn down.
    pub fn advance_stats(&self) -> bool {
        self.state
            .try_maybe_update(|state| {
                let before = state.stats();
                let more = state.advance_stats();
                (state.stats() != before, more)
            })
            .unwrap_or(false)
    }
}
