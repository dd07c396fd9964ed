//! End-to-end page scenarios driven through the public API only.

use std::cell::RefCell;

use ladja_core::content::HERO;
use ladja_core::viewport::StackedLayout;
use ladja_core::{
    NavOutcome, Navigator, PageState, ScrollTracker, SectionId, SiteConfig, Statistic,
    ViewportQuery,
};
use pretty_assertions::assert_eq;

// hero, about, divisions, impact, partners, contact
const HEIGHTS: [f64; 6] = [900.0, 700.0, 900.0, 800.0, 600.0, 500.0];

/// Scrolls a simulated document and remembers where it ended up.
struct FakeDocument {
    layout: RefCell<StackedLayout>,
    mounted: Vec<SectionId>,
}

impl FakeDocument {
    fn new() -> Self {
        Self {
            layout: RefCell::new(StackedLayout::new(HEIGHTS)),
            mounted: SectionId::ALL.to_vec(),
        }
    }

    fn scroll(&self, offset: f64) -> StackedLayout {
        let layout = self.layout.borrow().clone().scrolled_to(offset);
        *self.layout.borrow_mut() = layout.clone();
        layout
    }
}

impl Navigator for FakeDocument {
    fn scroll_to(&self, id: SectionId) -> bool {
        if !self.mounted.contains(&id) {
            return false;
        }
        let top = self.layout.borrow().document_top(id);
        self.scroll(top);
        true
    }
}

#[test]
fn scrolling_3000px_lands_on_impact() {
    let doc = FakeDocument::new();
    let tracker = ScrollTracker::default();
    let mut state = PageState::default();

    // mount-time sample
    state.apply_scroll(&tracker, &doc.scroll(0.0));
    assert_eq!(state.active_section(), SectionId::Hero);
    assert!(!state.is_scrolled());

    let layout = doc.scroll(3000.0);
    assert!(state.apply_scroll(&tracker, &layout));
    assert_eq!(state.active_section(), SectionId::Impact);
    assert!(state.is_scrolled());
}

#[test]
fn active_section_follows_every_offset() {
    let doc = FakeDocument::new();
    let tracker = ScrollTracker::default();
    let mut state = PageState::default();
    let layout = StackedLayout::new(HEIGHTS);

    let mut offset = 0.0;
    while offset < layout.document_height() - tracker.anchor_px {
        state.apply_scroll(&tracker, &doc.scroll(offset));
        let line = offset + tracker.anchor_px;
        let expected = SectionId::ALL
            .into_iter()
            .find(|id| {
                let top = layout.document_top(*id);
                let bottom = top + HEIGHTS[SectionId::ALL.iter().position(|s| s == id).unwrap()];
                top <= line && bottom >= line
            })
            .unwrap();
        assert_eq!(state.active_section(), expected, "offset {offset}");
        assert_eq!(state.is_scrolled(), offset > 50.0, "offset {offset}");
        offset += 25.0;
    }
}

#[test]
fn stats_animation_runs_once_to_exact_targets() {
    let mut state = SiteConfig::default().page_state();

    assert!(!state.observe_stats(0.3));
    assert!(state.observe_stats(0.5));
    assert!(state.has_animated_stats());

    let mut history = vec![state.stats()];
    let mut frames = 0;
    loop {
        // the observer may keep reporting while the animation runs
        assert!(!state.observe_stats(1.0));
        let more = state.advance_stats();
        history.push(state.stats());
        frames += 1;
        if !more {
            break;
        }
    }
    assert_eq!(frames, 100);
    assert!(state.stats_complete());

    for pair in history.windows(2) {
        for stat in Statistic::ALL {
            assert!(pair[1].get(stat) >= pair[0].get(stat));
            assert!(pair[1].get(stat) <= stat.target());
        }
    }

    let last = state.stats();
    assert_eq!(last.get(Statistic::JobsCreated), 100_000.0);
    assert_eq!(last.get(Statistic::GdpContribution), 50.0);
    assert_eq!(last.get(Statistic::ContainersMoved), 80_000.0);

    // later frames and visibility changes leave the numbers alone
    assert!(!state.advance_stats());
    assert!(!state.observe_stats(0.9));
    assert_eq!(state.stats(), last);
}

#[test]
fn invest_with_us_scrolls_to_contact_and_closes_menu() {
    let doc = FakeDocument::new();
    let tracker = ScrollTracker::default();
    let mut state = PageState::default();
    state.toggle_mobile_menu();

    let invest = HERO.actions[1];
    assert_eq!(invest.label, "Invest With Us");
    let outcome = state.navigate(invest.target.as_str(), &doc);

    assert_eq!(outcome, NavOutcome::Scrolled(SectionId::Contact));
    assert!(!state.mobile_menu_open());

    // the contact section's top is now at the viewport top
    let layout = doc.layout.borrow().clone();
    let bounds = layout.section_bounds(SectionId::Contact).unwrap();
    assert_eq!(bounds.top, 0.0);

    state.apply_scroll(&tracker, &layout);
    assert_eq!(state.active_section(), SectionId::Contact);
}

#[test]
fn unknown_nav_target_does_nothing() {
    let doc = FakeDocument::new();
    doc.scroll(1234.0);
    let mut state = PageState::default();

    assert_eq!(state.navigate("investors", &doc), NavOutcome::Unknown);
    assert_eq!(doc.layout.borrow().scroll_offset(), 1234.0);
}

#[test]
fn missing_section_element_is_a_silent_no_op() {
    let mut doc = FakeDocument::new();
    doc.mounted.retain(|id| *id != SectionId::Partners);
    let mut state = PageState::default();

    let outcome = state.navigate("partners", &doc);
    assert_eq!(outcome, NavOutcome::Missing(SectionId::Partners));
    assert!(!outcome.scrolled());
}
