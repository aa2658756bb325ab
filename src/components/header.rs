use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::toggle_open;
use crate::config;
use crate::price_list::CATALOG;
use crate::scroll::HeaderState;
use crate::Route;

enum NavTarget {
    /// Anchor on the landing page.
    Section(&'static str),
    /// Tab of the price list.
    PriceTab(&'static str),
}

impl NavTarget {
    fn href(&self, section_base: &str) -> String {
        match self {
            NavTarget::Section(id) => format!("{}#{}", section_base, id),
            NavTarget::PriceTab(key) => format!("/preturi#{}", key),
        }
    }
}

struct Submenu {
    label: &'static str,
    toggle_class: &'static str,
    links: Vec<(&'static str, NavTarget)>,
}

fn submenus() -> Vec<Submenu> {
    vec![
        Submenu {
            label: "Servicii",
            toggle_class: "header__link--services-toggle",
            links: vec![
                ("Toate serviciile", NavTarget::Section("servicii")),
                ("Consultatie", NavTarget::Section("consultatie")),
                ("Igienizare", NavTarget::Section("igienizare")),
                ("Estetica dentara", NavTarget::Section("estetica")),
                ("Ortodontie", NavTarget::Section("ortodontie")),
            ],
        },
        Submenu {
            label: "Preturi",
            toggle_class: "header__link--prices-toggle",
            links: std::iter::once(("Toate preturile", NavTarget::PriceTab("all")))
                .chain(CATALOG.iter().map(|c| (c.title, NavTarget::PriceTab(c.key))))
                .collect(),
        },
    ]
}

const SECTIONS: [(&str, &str); 2] = [("despre", "Despre noi"), ("intrebari", "Intrebari")];

/// Open/closed state of the mobile menu and its submenus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub submenu: Option<usize>,
}

impl NavState {
    pub fn toggle_menu(self) -> Self {
        if self.menu_open {
            self.close()
        } else {
            Self {
                menu_open: true,
                ..self
            }
        }
    }

    /// Opening one submenu closes the others.
    pub fn toggle_submenu(self, index: usize) -> Self {
        Self {
            submenu: toggle_open(self.submenu, index),
            ..self
        }
    }

    /// Closing the menu folds every submenu as well.
    pub fn close(self) -> Self {
        Self::default()
    }

    pub fn after_resize(self, viewport_width: f64) -> Self {
        if viewport_width >= config::MENU_COLLAPSE_WIDTH {
            self.close()
        } else {
            self
        }
    }

    pub fn submenu_open(self, index: usize) -> bool {
        self.submenu == Some(index)
    }
}

pub enum NavAction {
    ToggleMenu,
    ToggleSubmenu(usize),
    Close,
    Resized(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let next = match action {
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::ToggleSubmenu(index) => self.toggle_submenu(index),
            NavAction::Close => self.close(),
            NavAction::Resized(width) => self.after_resize(width),
        };
        Rc::new(next)
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub state: HeaderState,
    /// Prepended to section anchors; empty on the landing page itself.
    #[prop_or_default]
    pub section_base: AttrValue,
    /// Replaces the logo's navigation when set.
    #[prop_or_default]
    pub on_logo: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = use_reducer_eq(NavState::default);

    // The page behind an open menu must not scroll.
    use_effect_with_deps(
        |open| {
            set_body_overflow(if *open { "hidden" } else { "" });
            || ()
        },
        nav.menu_open,
    );

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    nav.dispatch(NavAction::Resized(width));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                    set_body_overflow("");
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Close))
    };

    let on_logo = props.on_logo.clone().map(|on_logo| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_logo.emit(());
        })
    });

    let submenu_items = submenus().into_iter().enumerate().map(|(i, submenu)| {
        let open = nav.submenu_open(i);
        let on_toggle = {
            let nav = nav.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                nav.dispatch(NavAction::ToggleSubmenu(i));
            })
        };
        html! {
            <div class={classes!("header__nav-item", open.then(|| "is-open"))}>
                <button
                    type="button"
                    class={classes!("header__link", "header__link--toggle", submenu.toggle_class)}
                    aria-expanded={open.to_string()}
                    onclick={on_toggle}
                >
                    {submenu.label}
                </button>
                <div class="header__submenu">
                    {
                        for submenu.links.iter().map(|(label, target)| html! {
                            <a
                                href={target.href(&props.section_base)}
                                class="header__submenu-link"
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        })
                    }
                </div>
            </div>
        }
    });

    html! {
        <header
            id="header"
            class={classes!("header", props.state.class(), nav.menu_open.then(|| "is-menu-open"))}
        >
            <div class="header__inner">
                <a href="/" class="header__logo" onclick={on_logo}>
                    {"anca&raluca "}<span class="header__logo-accent">{"smyle"}</span>
                </a>
                <button
                    id="menuToggle"
                    class="header__toggle"
                    aria-expanded={nav.menu_open.to_string()}
                    aria-controls="headerNav"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="headerNav" class={classes!("header__nav", nav.menu_open.then(|| "is-open"))}>
                    { for submenu_items }
                    {
                        for SECTIONS.iter().map(|(id, label)| html! {
                            <a
                                href={format!("{}#{}", props.section_base, id)}
                                class="header__link"
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        })
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Schedule} classes="header__link header__link--cta">
                            {"Programeaza-te"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
    }
}
