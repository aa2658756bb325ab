use yew::prelude::*;

use crate::components::back_to_top::{scroll_window_to_top, BackToTop};
use crate::components::booking_form::BookingForm;
use crate::components::header::Header;
use crate::scroll::native::use_native_visual_state;

/// Scheduling page. It scrolls natively, so the header and back-to-top
/// button follow `window.scrollY`.
#[function_component(Schedule)]
pub fn schedule() -> Html {
    let visual = use_native_visual_state();

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Header state={visual.header} section_base="/" />
            <main class="schedule-page">
                <section class="schedule-page__intro">
                    <h1>{"Programeaza o vizita"}</h1>
                    <p>
                        {"Lasa-ne datele tale si intervalul preferat. Te sunam in aceeasi zi lucratoare \
                          pentru a confirma ora."}
                    </p>
                </section>
                <section class="schedule-page__form">
                    <BookingForm />
                </section>
                <aside class="schedule-page__contact">
                    <h2>{"Preferi sa suni?"}</h2>
                    <p>{"Luni - Vineri, 09:00 - 19:00"}</p>
                </aside>
            </main>
            <BackToTop
                visible={visual.back_to_top_visible}
                on_click={Callback::from(|_: ()| scroll_window_to_top())}
            />
        </>
    }
}
