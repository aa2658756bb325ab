use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_to_top::{scroll_window_to_top, BackToTop};
use crate::components::header::Header;
use crate::price_list::{self, CATALOG};
use crate::scroll::native::use_native_visual_state;
use crate::Route;

fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Price list with category tabs and a diacritics-insensitive search.
#[function_component(Prices)]
pub fn prices() -> Html {
    let visual = use_native_visual_state();
    let tabs = use_state(price_list::tab_keys);
    let tab_refs = use_state(|| tabs.iter().map(|_| NodeRef::default()).collect::<Vec<_>>());
    let active = use_state_eq(|| price_list::tab_from_hash(&tabs, &location_hash()).unwrap_or(0));
    let query = use_state_eq(String::new);

    // Links into the list (`/preturi#ortodontie`) select their tab.
    {
        let tabs = tabs.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let hash_callback = Closure::wrap(Box::new(move || {
                    if let Some(index) = price_list::tab_from_hash(&tabs, &location_hash()) {
                        info!("price tab {} selected from hash", tabs[index]);
                        active.set(index);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("hashchange", hash_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            hash_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let result = price_list::filter(CATALOG, tabs[*active], &query);

    let tab_buttons = tabs.iter().enumerate().map(|(i, key)| {
        let selected = *active == i;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(i))
        };
        let onkeydown = {
            let active = active.clone();
            let tab_refs = tab_refs.clone();
            Callback::from(move |e: KeyboardEvent| {
                let Some(next) = price_list::next_tab(i, tab_refs.len(), &e.key()) else {
                    return;
                };
                e.prevent_default();
                if let Some(tab) = tab_refs[next].cast::<HtmlElement>() {
                    let _ = tab.focus();
                }
                active.set(next);
            })
        };
        let label = CATALOG
            .iter()
            .find(|c| c.key == *key)
            .map_or("Toate", |c| c.title);
        html! {
            <button
                ref={tab_refs[i].clone()}
                type="button"
                role="tab"
                class={classes!("prices-tab", selected.then(|| "is-active"))}
                data-category={*key}
                aria-selected={selected.to_string()}
                tabindex={if selected { "0" } else { "-1" }}
                {onclick}
                {onkeydown}
            >
                {label}
            </button>
        }
    });

    html! {
        <>
            <Header state={visual.header} section_base="/" />
            <main class="prices-page">
                <section class="prices-page__intro">
                    <h1>{"Preturi"}</h1>
                    <p>{"Tarifele sunt orientative; planul exact il stabilim dupa consultatie."}</p>
                </section>
                <div class="prices-page__controls">
                    <input
                        id="priceSearch"
                        type="search"
                        class="prices-search"
                        placeholder="Cauta un tratament..."
                        aria-label="Cauta in lista de preturi"
                        value={(*query).clone()}
                        {oninput}
                    />
                    <div class="prices-tabs" role="tablist">
                        { for tab_buttons }
                    </div>
                </div>
                <div class="prices-list">
                    {
                        for CATALOG.iter().enumerate().map(|(c, category)| html! {
                            <section
                                class={classes!("price-category", result.category_hidden(c).then(|| "is-hidden"))}
                                data-category={category.key}
                                id={category.key}
                            >
                                <h2 class="price-category__title">{category.title}</h2>
                                <ul class="price-category__rows">
                                    {
                                        for category.rows.iter().enumerate().map(|(r, row)| html! {
                                            <li class="price-row" hidden={!result.row_visible(c, r)}>
                                                <span class="price-row__name">{row.name}</span>
                                                <span class="price-row__value">{row.value}</span>
                                            </li>
                                        })
                                    }
                                </ul>
                            </section>
                        })
                    }
                </div>
                <p id="pricesEmpty" class="prices-empty" hidden={result.empty_message_hidden()}>
                    {"Nu am gasit niciun tratament pentru cautarea ta."}
                </p>
                <div class="prices-page__cta">
                    <Link<Route> to={Route::Schedule} classes="button button--primary">
                        {"Programeaza o consultatie"}
                    </Link<Route>>
                </div>
            </main>
            <BackToTop
                visible={visual.back_to_top_visible}
                on_click={Callback::from(|_: ()| scroll_window_to_top())}
            />
        </>
    }
}
