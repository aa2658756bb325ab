use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Smooth native scroll to the top, for pages without the custom container.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Hands keyboard focus back to the top of the page.
pub fn focus_header_logo() {
    let logo = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".header__logo").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(logo) = logo {
        let _ = logo.focus();
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_click.emit(());
        })
    };

    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", props.visible.then(|| "is-visible"))}
            aria-hidden={(!props.visible).to_string()}
            aria-label="Inapoi sus"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
