//! Scroll-triggered visibility tracking.
//!
//! Sections that should fade in on first view carry the [`REVEAL_ATTR`]
//! marker. A [`VisibilitySource`] watches those elements and reports each
//! id once it intersects the viewport; ids accumulate in a grow-only
//! [`RevealSet`], so entrance transitions play once and stay in their end
//! state.
//!
//! The source is a trait so non-browser harnesses can substitute
//! [`InertSource`] for the `IntersectionObserver`-backed one.

use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Marker attribute for observed elements.
pub const REVEAL_ATTR: &str = "data-reveal";
/// Fraction of an element that must be visible before it counts.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Grow-only record of element ids that have entered the viewport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet(HashSet<String>);

impl RevealSet {
    pub fn mark(&mut self, id: &str) {
        self.0.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Something that can report marked elements becoming visible.
pub trait VisibilitySource {
    /// Begins watching. `notify` receives an element id the first time
    /// that element intersects the viewport.
    fn watch(&mut self, notify: Rc<dyn Fn(&str)>);

    /// Stops watching and drops any registered callbacks.
    fn unwatch(&mut self);
}

/// No-op source for harnesses without a DOM. Never notifies.
#[derive(Default)]
pub struct InertSource;

impl VisibilitySource for InertSource {
    fn watch(&mut self, _notify: Rc<dyn Fn(&str)>) {}

    fn unwatch(&mut self) {}
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `IntersectionObserver`-backed source over all `[data-reveal]` elements.
///
/// If the document or the observer is unavailable, watching silently does
/// nothing and no animation ever triggers; the page stays functional.
#[derive(Default)]
pub struct IntersectionSource {
    observer: Option<web_sys::IntersectionObserver>,
    // Held so the JS callback stays alive until unwatch.
    callback: Option<ObserverCallback>,
}

impl IntersectionSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilitySource for IntersectionSource {
    fn watch(&mut self, notify: Rc<dyn Fn(&str)>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        notify(&entry.target().id());
                    }
                }
            },
        ));

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };

        let selector = format!("[{REVEAL_ATTR}]");
        if let Ok(nodes) = document.query_selector_all(&selector) {
            for i in 0..nodes.length() {
                if let Some(element) = nodes
                    .item(i)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    observer.observe(&element);
                }
            }
        }

        self.observer = Some(observer);
        self.callback = Some(callback);
    }

    fn unwatch(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

// ---------------------------------------------------------------------------
// Leptos glue: the reveal set as shared reactive state.
// ---------------------------------------------------------------------------

use leptos::prelude::*;

/// Shared handle to the page's [`RevealSet`] signal.
#[derive(Clone, Copy)]
pub struct RevealContext(pub RwSignal<RevealSet>);

impl RevealContext {
    pub fn is_visible(&self, id: &str) -> bool {
        self.0.with(|set| set.contains(id))
    }

    pub fn mark(&self, id: &str) {
        self.0.update(|set| set.mark(id));
    }
}

/// Creates the reveal set and puts it into context. Called once from `App`.
pub fn provide_reveal() -> RevealContext {
    let reveal = RevealContext(RwSignal::new(RevealSet::default()));
    provide_context(reveal);
    reveal
}

pub fn use_reveal() -> RevealContext {
    expect_context::<RevealContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn reveal_set_only_grows() {
        let mut set = RevealSet::default();
        assert!(set.is_empty());
        set.mark("features-header");
        set.mark("pricing-header");
        assert_eq!(set.len(), 2);
        assert!(set.contains("features-header"));
        // Scrolling away and back re-reports the id; the set is unchanged.
        set.mark("features-header");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn unknown_ids_are_not_visible() {
        let set = RevealSet::default();
        assert!(!set.contains("hero"));
    }

    #[test]
    fn inert_source_never_notifies() {
        let fired = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&fired);
        let mut source = InertSource;
        source.watch(Rc::new(move |id: &str| sink.borrow_mut().push(id.into())));
        source.unwatch();
        assert_eq!(fired.borrow().len(), 0);
    }
}
