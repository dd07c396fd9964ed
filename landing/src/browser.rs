//! Browser adapters: everything that talks to `window` and `document`.
//!
//! Listeners and observers are acquired when the page mounts and released
//! when its owner is disposed, whether or not the stats animation finished.

use js_sys::Array;
use ladja_core::{Bounds, Navigator, SectionId, ViewportQuery};
use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::store::PageStore;

/// Live document geometry.
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    /// `None` outside a browser document.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, id: SectionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }
}

impl ViewportQuery for DomViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        let rect = self.element(id)?.get_bounding_client_rect();
        Some(Bounds::new(rect.top(), rect.bottom()))
    }
}

impl Navigator for DomViewport {
    fn scroll_to(&self, id: SectionId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Keep `isScrolled` / active section in sync with the window scroll.
pub fn track_scroll(store: PageStore) {
    let handle = window_event_listener(ev::scroll, move |_| store.sync_scroll());
    on_cleanup(move || handle.remove());

    // initial sample once the sections are in the document
    Effect::new(move || store.sync_scroll());
}

/// Intersection observer on the stats panel.
///
/// Disconnects itself after the callback reports a start, and again on drop.
pub struct StatsObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl StatsObserver {
    /// Observe `target`; `on_ratio` gets the visible fraction of every
    /// intersecting entry and returns `true` once it no longer needs them.
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() && on_ratio(entry.intersection_ratio()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for StatsObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Start the counter animation the first time the panel is visible enough.
///
/// The observer lives as the effect's value, so disposing the page drops it.
pub fn watch_stats_panel(store: PageStore, panel: NodeRef<Section>, threshold: f64) {
    Effect::new(move |existing: Option<Option<StatsObserver>>| {
        if let Some(Some(observer)) = existing {
            return Some(observer);
        }
        let element = panel.get()?;
        if store.has_animated_stats() {
            return None;
        }
        let on_ratio = move |ratio: f64| {
            let started = store.observe_stats(ratio);
            if started {
                log::debug!("[ladja][stats] panel {:.0}% visible, animating", ratio * 100.0);
                animate_stats(store);
            }
            started
        };
        match StatsObserver::observe(&element, threshold, on_ratio) {
            Ok(observer) => Some(observer),
            Err(err) => {
                log::warn!("[ladja][stats] IntersectionObserver unavailable: {err:?}");
                None
            }
        }
    });
}

/// One counter step per animation frame until every counter is done.
pub fn animate_stats(store: PageStore) {
    request_animation_frame(move || {
        if store.advance_stats() {
            animate_stats(store);
        }
    });
}
