use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod price_list;
mod scroll {
    pub mod controller;
    pub mod driver;
    pub mod metrics;
    pub mod native;
    pub mod reveal;
    pub mod snap;
    pub mod tween;
    pub mod visual;

    pub use driver::{ScrollDriver, ScrollHandle};
    pub use visual::{HeaderState, VisualState};
}
mod components {
    pub mod back_to_top;
    pub mod booking_form;
    pub mod faq;
    pub mod header;
    pub mod hero_title;
}
mod pages {
    pub mod landing;
    pub mod prices;
    pub mod schedule;
}

use pages::{landing::Landing, prices::Prices, schedule::Schedule};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/preturi")]
    Prices,
    #[at("/programare")]
    Schedule,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Prices => {
            info!("Rendering Prices page");
            html! { <Prices /> }
        }
        Route::Schedule => {
            info!("Rendering Schedule page");
            html! { <Schedule /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
