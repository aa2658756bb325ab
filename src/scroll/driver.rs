//! Binds `ScrollSnapController` to the landing page DOM.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, WheelEvent,
    Window,
};
use yew::Callback;

use super::controller::{Frame, GestureOutcome, GestureSource, ScrollSnapController};
use super::metrics::{IntroSections, Layout};
use super::reveal::ScrollReveal;
use super::visual::VisualState;

pub const CONTAINER_ID: &str = "scrollContainer";
const HERO_SELECTOR: &str = ".hero";
const SERVICES_SELECTOR: &str = ".services-section";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// True for elements whose native touch handling must be left alone: form
/// widgets, and only while they sit inside a `<form>`.
pub fn is_form_control_tag(tag: &str, role: Option<&str>, in_form: bool) -> bool {
    if !in_form {
        return false;
    }
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select" | "button"
    ) || matches!(role, Some("textbox") | Some("combobox"))
}

fn is_form_control(target: Option<EventTarget>) -> bool {
    let Some(el) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let in_form = matches!(el.closest("form"), Ok(Some(_)));
    is_form_control_tag(&el.tag_name(), el.get_attribute("role").as_deref(), in_form)
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new<E, F>(target: &EventTarget, kind: &'static str, passive: bool, mut handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            handler(event.unchecked_into::<E>());
        }) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                callback,
            }),
            Err(_) => {
                warn!("could not listen for {}", kind);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

struct DriverInner {
    window: Window,
    document: Document,
    container: HtmlElement,
    controller: RefCell<ScrollSnapController>,
    reveal: RefCell<ScrollReveal>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    frame_id: Cell<Option<i32>>,
    unlock: RefCell<Option<Timeout>>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
    on_visual: Callback<VisualState>,
}

impl DriverInner {
    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn section_height(&self, selector: &str) -> Option<f64> {
        let el = self.document.query_selector(selector).ok().flatten()?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(el.offset_height() as f64)
    }

    fn measure(&self) -> Layout {
        let sections = match (self.section_height(HERO_SELECTOR), self.section_height(SERVICES_SELECTOR)) {
            (Some(hero), Some(services)) => Some(IntroSections { hero, services }),
            _ => None,
        };
        Layout {
            container_height: self.container.offset_height() as f64,
            viewport_height: self.viewport_height(),
            viewport_width: self.viewport_width(),
            sections,
        }
    }

    fn refresh_layout(&self) {
        let layout = self.measure();
        self.controller.borrow_mut().apply_layout(&layout);
        self.render();
    }

    /// Applies the offset to the container and updates everything that
    /// depends on it.
    fn render(&self) {
        let offset = self.controller.borrow().offset();
        let _ = self
            .container
            .style()
            .set_property("transform", &format!("translate3d(0, {}px, 0)", -offset));
        self.reveal.borrow_mut().update(self.viewport_height());
        self.on_visual.emit(VisualState::for_offset(offset));
    }

    fn request_frame(&self) {
        if let Some(callback) = self.frame.borrow().as_ref() {
            match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.frame_id.set(Some(id)),
                Err(_) => warn!("requestAnimationFrame failed"),
            }
        }
    }

    fn cancel_frame(&self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }

    /// DOM side of a snap animation the controller has just started.
    fn begin_animation(&self, on_complete: Option<Box<dyn FnOnce()>>) {
        self.cancel_frame();
        // Dropping the pending timeout cancels the previous unlock.
        self.unlock.borrow_mut().take();
        *self.on_complete.borrow_mut() = on_complete;
        self.request_frame();
    }

    fn animate_to(&self, target: f64, on_complete: Option<Box<dyn FnOnce()>>) {
        let now = self.now();
        self.controller.borrow_mut().animate_to(target, now);
        self.begin_animation(on_complete);
    }

    fn scroll_to_top(&self) {
        let now = self.now();
        self.controller.borrow_mut().scroll_to_top(now);
        self.begin_animation(None);
    }

    fn scroll_to_element(&self, el: &Element) {
        let now = self.now();
        let rect_top = el.get_bounding_client_rect().top();
        let target = self.controller.borrow_mut().scroll_to_anchor(rect_top, now);
        debug!("anchor scroll to {}", target);
        self.begin_animation(None);
    }

    fn on_frame(self: &Rc<Self>, now: f64) {
        self.frame_id.set(None);
        let frame = self.controller.borrow_mut().tick(now);
        self.render();
        match frame {
            Frame::Moving => self.request_frame(),
            Frame::Settled { token, lock_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(lock_ms, move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.controller.borrow_mut().release_lock(token);
                    }
                });
                *self.unlock.borrow_mut() = Some(timeout);
                let done = self.on_complete.borrow_mut().take();
                if let Some(done) = done {
                    done();
                }
            }
            Frame::Idle => {}
        }
    }

    fn after_gesture(&self, outcome: GestureOutcome, source: GestureSource, event: &Event) {
        if outcome.suppresses_default(source) {
            event.prevent_default();
        }
        match outcome {
            GestureOutcome::Snap { .. } => self.begin_animation(None),
            GestureOutcome::Track { .. } => self.render(),
            _ => {}
        }
    }

    fn on_wheel(&self, event: WheelEvent) {
        let now = self.now();
        let outcome = self.controller.borrow_mut().wheel(event.delta_y(), now);
        self.after_gesture(outcome, GestureSource::Wheel, &event);
    }

    fn first_touch_y(event: &TouchEvent) -> Option<f64> {
        event.touches().get(0).map(|t| t.client_y() as f64)
    }

    fn on_touch_start(&self, event: TouchEvent) {
        if let Some(y) = Self::first_touch_y(&event) {
            self.controller.borrow_mut().touch_start(y);
        }
    }

    fn on_touch_move(&self, event: TouchEvent) {
        let Some(y) = Self::first_touch_y(&event) else {
            return;
        };
        let locked = self.controller.borrow().is_locked();
        if !locked && is_form_control(event.target()) {
            // Re-anchor so leaving the widget mid-swipe does not replay the
            // distance travelled over it.
            self.controller.borrow_mut().touch_start(y);
            return;
        }
        let now = self.now();
        let outcome = self.controller.borrow_mut().touch_move(y, now);
        self.after_gesture(outcome, GestureSource::Touch, &event);
    }

    fn on_anchor_click(&self, event: MouseEvent) {
        let link = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten());
        let Some(href) = link.and_then(|l| l.get_attribute("href")) else {
            return;
        };
        if href == "#" {
            return;
        }
        if let Some(target) = self.document.query_selector(&href).ok().flatten() {
            event.prevent_default();
            self.scroll_to_element(&target);
        }
    }
}

/// Cheap handle for components that need to move the landing page.
#[derive(Clone)]
pub struct ScrollHandle(Weak<DriverInner>);

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }
}

impl ScrollHandle {
    pub fn scroll_to_top(&self) {
        if let Some(inner) = self.0.upgrade() {
            inner.scroll_to_top();
        }
    }

    pub fn scroll_to_element(&self, el: &Element) {
        if let Some(inner) = self.0.upgrade() {
            inner.scroll_to_element(el);
        }
    }

    /// Runs `on_complete` once the animation settles. A superseded
    /// animation never runs its callback.
    pub fn animate_to(&self, target: f64, on_complete: impl FnOnce() + 'static) {
        if let Some(inner) = self.0.upgrade() {
            inner.animate_to(target, Some(Box::new(on_complete)));
        }
    }
}

/// Owns the listeners; custom scrolling stops when this is dropped.
pub struct ScrollDriver {
    inner: Rc<DriverInner>,
    _listeners: Vec<Listener>,
}

impl ScrollDriver {
    /// Activates custom scrolling. Returns `None` when the page has no
    /// scroll container, leaving native scrolling in place.
    pub fn attach(on_visual: Callback<VisualState>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let container = document
            .get_element_by_id(CONTAINER_ID)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let reveal = ScrollReveal::collect(&document);
        let inner = Rc::new(DriverInner {
            window: window.clone(),
            document: document.clone(),
            container: container.clone(),
            controller: RefCell::new(ScrollSnapController::new()),
            reveal: RefCell::new(reveal),
            frame: RefCell::new(None),
            frame_id: Cell::new(None),
            unlock: RefCell::new(None),
            on_complete: RefCell::new(None),
            on_visual,
        });

        let weak = Rc::downgrade(&inner);
        *inner.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(now);
            }
        }) as Box<dyn FnMut(f64)>));

        let window_target: &EventTarget = window.as_ref();
        let container_target: &EventTarget = container.as_ref();
        let document_target: &EventTarget = document.as_ref();

        let listeners: Vec<Listener> = [
            {
                let inner = inner.clone();
                Listener::new(window_target, "wheel", false, move |e: WheelEvent| inner.on_wheel(e))
            },
            {
                let inner = inner.clone();
                Listener::new(container_target, "touchstart", true, move |e: TouchEvent| {
                    inner.on_touch_start(e)
                })
            },
            {
                let inner = inner.clone();
                Listener::new(container_target, "touchmove", false, move |e: TouchEvent| {
                    inner.on_touch_move(e)
                })
            },
            {
                let inner = inner.clone();
                Listener::new(window_target, "resize", true, move |_: Event| inner.refresh_layout())
            },
            {
                let inner = inner.clone();
                Listener::new(window_target, "load", true, move |_: Event| inner.refresh_layout())
            },
            {
                let inner = inner.clone();
                Listener::new(document_target, "click", false, move |e: MouseEvent| {
                    inner.on_anchor_click(e)
                })
            },
        ]
        .into_iter()
        .flatten()
        .collect();

        inner.refresh_layout();
        info!("custom scrolling active");

        Some(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn handle(&self) -> ScrollHandle {
        ScrollHandle(Rc::downgrade(&self.inner))
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.inner.cancel_frame();
        self.inner.unlock.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_form_widgets_are_left_alone() {
        for tag in ["INPUT", "TEXTAREA", "SELECT", "BUTTON", "input"] {
            assert!(is_form_control_tag(tag, None, true), "{}", tag);
        }
        assert!(is_form_control_tag("DIV", Some("textbox"), true));
        assert!(is_form_control_tag("DIV", Some("combobox"), true));
    }

    #[test]
    fn other_elements_are_scrolled() {
        assert!(!is_form_control_tag("LABEL", None, true));
        assert!(!is_form_control_tag("DIV", Some("button"), true));
        assert!(!is_form_control_tag("SPAN", Some("listbox"), true));
    }

    #[test]
    fn widgets_outside_a_form_are_scrolled() {
        assert!(!is_form_control_tag("INPUT", None, false));
        assert!(!is_form_control_tag("DIV", Some("textbox"), false));
        assert!(!is_form_control_tag("BUTTON", None, false));
    }
}
