//! Scroll tracking: navigation translucency and active-section detection.

use crate::section::SectionId;
use crate::viewport::ViewportQuery;

/// Scroll offset past which the navigation bar switches to its solid look.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Distance from the viewport top of the line a section must straddle to
/// count as the current one.
pub const DEFAULT_ANCHOR_PX: f64 = 100.0;

/// Result of reading the viewport once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// `offset > threshold`
    pub is_scrolled: bool,
    /// First section straddling the anchor line, if any
    pub section: Option<SectionId>,
}

/// Scroll tracker parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    /// Offset (exclusive) past which the page counts as scrolled
    pub threshold_px: f64,
    /// Anchor line, measured from the viewport top
    pub anchor_px: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            anchor_px: DEFAULT_ANCHOR_PX,
        }
    }
}

impl ScrollTracker {
    /// Tracker with custom threshold and anchor.
    pub const fn new(threshold_px: f64, anchor_px: f64) -> Self {
        Self {
            threshold_px,
            anchor_px,
        }
    }

    /// Whether the page is scrolled past the threshold.
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.threshold_px
    }

    /// Scan sections in priority order and return the first one whose box
    /// straddles the anchor line. Absent elements are skipped.
    pub fn locate(&self, query: &impl ViewportQuery) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| {
            query
                .section_bounds(*id)
                .is_some_and(|bounds| bounds.contains_line(self.anchor_px))
        })
    }

    /// Read offset and active section in one pass.
    pub fn sample(&self, query: &impl ViewportQuery) -> ScrollSample {
        ScrollSample {
            is_scrolled: self.is_scrolled(query.scroll_offset()),
            section: self.locate(query),
        }
    }
}
