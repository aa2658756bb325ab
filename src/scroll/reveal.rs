//! Reveal-on-scroll for `.scroll-reveal` elements.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config;

const SIDE_CLASSES: [&str; 3] = [
    "scroll-reveal--from-left",
    "scroll-reveal--from-right",
    "scroll-reveal--fade",
];
const IN_VIEW_CLASS: &str = "scroll-reveal--in-view";
const READY_CLASS: &str = "scroll-reveal--ready";

/// Slide-in side for the n-th element without an explicit direction.
pub fn default_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        SIDE_CLASSES[0]
    } else {
        SIDE_CLASSES[1]
    }
}

/// True when the box overlaps the band between 15% and 85% of the viewport.
pub fn in_reveal_band(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * config::REVEAL_BAND_BOTTOM && bottom > viewport_height * config::REVEAL_BAND_TOP
}

/// Which elements have been revealed. Reveal is one-way.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Returns true the first time `index` is seen inside the band.
    pub fn observe(&mut self, index: usize, in_view: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if in_view && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }
}

pub struct ScrollReveal {
    elements: Vec<Element>,
    tracker: RevealTracker,
}

impl ScrollReveal {
    /// Collects the marked elements and gives each one a slide-in side.
    pub fn collect(document: &Document) -> Self {
        let mut elements = Vec::new();
        if let Ok(list) = document.query_selector_all(".scroll-reveal") {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    elements.push(el);
                }
            }
        }
        for (i, el) in elements.iter().enumerate() {
            let classes = el.class_list();
            if !SIDE_CLASSES.iter().any(|c| classes.contains(c)) {
                let _ = classes.add_1(default_side(i));
            }
        }
        let tracker = RevealTracker::new(elements.len());
        Self { elements, tracker }
    }

    pub fn update(&mut self, viewport_height: f64) {
        for (i, el) in self.elements.iter().enumerate() {
            let rect = el.get_bounding_client_rect();
            if self.tracker.observe(i, in_reveal_band(rect.top(), rect.bottom(), viewport_height)) {
                let _ = el.class_list().add_1(IN_VIEW_CLASS);
                let el = el.clone();
                Timeout::new(config::REVEAL_READY_DELAY_MS, move || {
                    let _ = el.class_list().add_1(READY_CLASS);
                })
                .forget();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_alternate() {
        assert_eq!(default_side(0), "scroll-reveal--from-left");
        assert_eq!(default_side(1), "scroll-reveal--from-right");
        assert_eq!(default_side(4), "scroll-reveal--from-left");
    }

    #[test]
    fn band_is_between_fifteen_and_eighty_five_percent() {
        assert!(in_reveal_band(600.0, 900.0, 800.0));
        assert!(!in_reveal_band(700.0, 900.0, 800.0));
        assert!(!in_reveal_band(-300.0, 100.0, 800.0));
        assert!(in_reveal_band(-300.0, 130.0, 800.0));
    }

    #[test]
    fn reveal_happens_once_and_sticks() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(1, true));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(3, true));
        assert!(tracker.observe(0, true));
    }
}
