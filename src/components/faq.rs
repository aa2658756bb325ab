use gloo_timers::callback::Timeout;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config;
use crate::scroll::ScrollHandle;

/// Only one answer is open at a time; clicking the open one closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    scroll: Option<ScrollHandle>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let scroll = props.scroll.clone();
        use_effect_with_deps(
            move |open| {
                let pending = open.then(|| {
                    Timeout::new(config::FAQ_SCROLL_DELAY_MS, move || {
                        let Some(item) = node.cast::<Element>() else {
                            return;
                        };
                        match scroll {
                            Some(scroll) => scroll.scroll_to_element(&item),
                            None => {
                                let options = ScrollIntoViewOptions::new();
                                options.set_behavior(ScrollBehavior::Smooth);
                                options.set_block(ScrollLogicalPosition::Nearest);
                                item.scroll_into_view_with_scroll_into_view_options(&options);
                            }
                        }
                    })
                });
                move || drop(pending)
            },
            props.open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div ref={node} class={classes!("faq-item", props.open.then(|| "is-open"))}>
            <button class="faq-item__question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="faq-item__text">{&props.question}</span>
                <span class="faq-item__icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-item__answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [(&'static str, &'static str)],
    /// Custom scroller of the page, if it has one.
    #[prop_or_default]
    pub scroll: Option<ScrollHandle>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-section__list">
            {
                for props.items.iter().enumerate().map(|(i, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_| open.set(toggle_open(*open, i)))
                    };
                    html! {
                        <FaqItem
                            key={i.to_string()}
                            question={*question}
                            answer={*answer}
                            open={*open == Some(i)}
                            {on_toggle}
                            scroll={props.scroll.clone()}
                        />
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_other() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }
}
