//! The page state container.
//!
//! `PageState` owns every piece of transient UI state. The render layer only
//! reads it; browser events go through the methods below, each of which
//! reports whether anything observable changed.

use tracing::{debug, trace};

use crate::counter::{CounterAnimator, StatsSnapshot};
use crate::navigation::{NavOutcome, Navigator};
use crate::scroll::ScrollTracker;
use crate::section::SectionId;
use crate::trigger::VisibilityTrigger;
use crate::viewport::ViewportQuery;

/// Transient state of one page view.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    is_scrolled: bool,
    active_section: SectionId,
    mobile_menu_open: bool,
    stats_trigger: VisibilityTrigger,
    animator: CounterAnimator,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(VisibilityTrigger::default(), CounterAnimator::default())
    }
}

impl PageState {
    /// Fresh page view: top of the page, menu closed, counters at zero.
    pub fn new(stats_trigger: VisibilityTrigger, animator: CounterAnimator) -> Self {
        Self {
            is_scrolled: false,
            active_section: SectionId::Hero,
            mobile_menu_open: false,
            stats_trigger,
            animator,
        }
    }

    /// Whether the page is scrolled past the navigation threshold.
    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Section highlighted in the navigation bar.
    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    /// Whether the collapsed navigation menu is expanded.
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Whether the one-time stats animation has started.
    pub fn has_animated_stats(&self) -> bool {
        self.stats_trigger.has_fired()
    }

    /// Whether every counter has reached its target.
    pub fn stats_complete(&self) -> bool {
        self.animator.is_complete()
    }

    /// Currently displayed stat values.
    pub fn stats(&self) -> StatsSnapshot {
        self.animator.snapshot()
    }

    /// Re-read the viewport after a scroll event (or on mount).
    ///
    /// When no section straddles the anchor line the previous active section
    /// is kept. Returns `true` if anything changed.
    pub fn apply_scroll(&mut self, tracker: &ScrollTracker, query: &impl ViewportQuery) -> bool {
        let sample = tracker.sample(query);
        let mut changed = false;

        if sample.is_scrolled != self.is_scrolled {
            self.is_scrolled = sample.is_scrolled;
            changed = true;
        }
        match sample.section {
            Some(section) if section != self.active_section => {
                debug!(from = %self.active_section, to = %section, "active section changed");
                self.active_section = section;
                changed = true;
            }
            _ => {}
        }
        changed
    }

    /// Flip the mobile menu.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Collapse the mobile menu. Returns `true` if it was open.
    pub fn close_mobile_menu(&mut self) -> bool {
        std::mem::replace(&mut self.mobile_menu_open, false)
    }

    /// Feed one visibility observation of the stats panel. Returns `true`
    /// only when this call started the animation.
    pub fn observe_stats(&mut self, visible_ratio: f64) -> bool {
        self.stats_trigger.observe(visible_ratio)
    }

    /// Advance the counters by one frame. Does nothing before the trigger
    /// fired or after completion. Returns `true` while more frames are needed.
    pub fn advance_stats(&mut self) -> bool {
        if !self.stats_trigger.has_fired() {
            trace!("stats frame before trigger, ignoring");
            return false;
        }
        self.animator.tick()
    }

    /// Resolve a navigation target and scroll to it. The mobile menu closes
    /// in every case; unknown targets and absent sections are no-ops.
    pub fn navigate(&mut self, target: &str, navigator: &impl Navigator) -> NavOutcome {
        self.close_mobile_menu();

        let Ok(section) = target.parse::<SectionId>() else {
            debug!(requested = target, "ignoring navigation to unknown section");
            return NavOutcome::Unknown;
        };
        if navigator.scroll_to(section) {
            NavOutcome::Scrolled(section)
        } else {
            debug!(%section, "navigation target not in document");
            NavOutcome::Missing(section)
        }
    }
}
