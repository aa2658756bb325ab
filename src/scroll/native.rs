//! Page chrome state for pages without the custom scroll container.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::visual::VisualState;

fn window_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Follows `window.scrollY` for the header and back-to-top button.
#[hook]
pub fn use_native_visual_state() -> VisualState {
    let visual = use_state_eq(|| VisualState::for_offset(window_scroll_y()));

    {
        let visual = visual.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    visual.set(VisualState::for_offset(window_scroll_y()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *visual
}
