//! Viewport geometry seam.
//!
//! The scroll tracker never touches a document directly. It asks a
//! [`ViewportQuery`] for the scroll offset and for each section's bounding box;
//! the browser crate answers from the live DOM, tests answer from the fixtures
//! in this module.

use std::collections::HashMap;

use crate::section::SectionId;

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Distance from the viewport top to the element's top edge
    pub top: f64,
    /// Distance from the viewport top to the element's bottom edge
    pub bottom: f64,
}

impl Bounds {
    /// Create bounds from the two edges.
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the horizontal line `y` falls within the box, edges included.
    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Read-only view of the page geometry.
pub trait ViewportQuery {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Bounding box of a section, or `None` when its element is not present.
    fn section_bounds(&self, id: SectionId) -> Option<Bounds>;
}

/// Map-backed viewport: whatever was inserted is what gets reported.
#[derive(Debug, Clone, Default)]
pub struct StaticViewport {
    offset: f64,
    bounds: HashMap<SectionId, Bounds>,
}

impl StaticViewport {
    /// Empty viewport scrolled to `offset`.
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            bounds: HashMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, id: SectionId, top: f64, bottom: f64) -> Self {
        self.bounds.insert(id, Bounds::new(top, bottom));
        self
    }
}

impl ViewportQuery for StaticViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        self.bounds.get(&id).copied()
    }
}

/// Sections laid out top to bottom with fixed heights, as the real page is.
///
/// Reports the bounds each section would have at the current scroll offset,
/// which makes "user scrolls N pixels" scenarios easy to express.
#[derive(Debug, Clone)]
pub struct StackedLayout {
    heights: [f64; 6],
    missing: Vec<SectionId>,
    offset: f64,
}

impl StackedLayout {
    /// Heights in [`SectionId::ALL`] order.
    pub fn new(heights: [f64; 6]) -> Self {
        Self {
            heights,
            missing: Vec::new(),
            offset: 0.0,
        }
    }

    /// Every section with the same height.
    pub fn uniform(height: f64) -> Self {
        Self::new([height; 6])
    }

    /// Same layout at another scroll offset.
    pub fn scrolled_to(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Treat a section as not (yet) mounted. Space is still reserved for it.
    pub fn without(mut self, id: SectionId) -> Self {
        self.missing.push(id);
        self
    }

    /// Total document height.
    pub fn document_height(&self) -> f64 {
        self.heights.iter().sum()
    }

    /// Offset from the document top to the section's top edge.
    pub fn document_top(&self, id: SectionId) -> f64 {
        SectionId::ALL
            .iter()
            .zip(self.heights)
            .take_while(|(section, _)| **section != id)
            .map(|(_, height)| height)
            .sum()
    }

    fn height(&self, id: SectionId) -> f64 {
        SectionId::ALL
            .iter()
            .position(|section| *section == id)
            .map_or(0.0, |idx| self.heights[idx])
    }
}

impl ViewportQuery for StackedLayout {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        if self.missing.contains(&id) {
            return None;
        }
        let top = self.document_top(id) - self.offset;
        Some(Bounds::new(top, top + self.height(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn contains_line_includes_edges() {
        let b = Bounds::new(100.0, 300.0);
        assert!(b.contains_line(100.0));
        assert!(b.contains_line(300.0));
        assert!(b.contains_line(200.0));
        assert!(!b.contains_line(99.5));
        assert!(!b.contains_line(300.5));
    }

    #[test]
    fn stacked_layout_moves_with_scroll() {
        let layout = StackedLayout::new([900.0, 600.0, 700.0, 800.0, 500.0, 400.0]);
        assert_eq!(layout.document_height(), 3900.0);
        assert_eq!(layout.document_top(SectionId::Impact), 2200.0);

        let scrolled = layout.scrolled_to(2150.0);
        assert_eq!(
            scrolled.section_bounds(SectionId::Impact),
            Some(Bounds::new(50.0, 850.0))
        );
        assert_eq!(scrolled.scroll_offset(), 2150.0);
    }

    #[test]
    fn missing_sections_report_nothing() {
        let layout = StackedLayout::uniform(500.0).without(SectionId::About);
        assert_eq!(layout.section_bounds(SectionId::About), None);
        // later sections keep their place in the flow
        assert_eq!(
            layout.section_bounds(SectionId::Divisions),
            Some(Bounds::new(1000.0, 1500.0))
        );
    }

    #[test]
    fn static_viewport_reports_inserted_bounds() {
        let vp = StaticViewport::new(42.0).with(SectionId::Partners, -10.0, 400.0);
        assert_eq!(vp.scroll_offset(), 42.0);
        assert_eq!(
            vp.section_bounds(SectionId::Partners),
            Some(Bounds::new(-10.0, 400.0))
        );
        assert_eq!(vp.section_bounds(SectionId::Hero), None);
    }
}
