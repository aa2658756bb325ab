use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_to_top::{focus_header_logo, scroll_window_to_top, BackToTop};
use crate::components::booking_form::BookingForm;
use crate::components::faq::FaqList;
use crate::components::header::Header;
use crate::components::hero_title::AnimatedText;
use crate::config;
use crate::scroll::driver::CONTAINER_ID;
use crate::scroll::{ScrollDriver, ScrollHandle, VisualState};
use crate::Route;

const SERVICES: [(&str, &str, &str); 4] = [
    ("consultatie", "Consultatie si plan de tratament", "Evaluare completa, radiografie digitala si un plan clar, explicat pe intelesul tau."),
    ("igienizare", "Igienizare profesionala", "Detartraj, periaj profesional si airflow pentru un zambet curat si gingii sanatoase."),
    ("estetica", "Estetica dentara", "Albire, fatete si restaurari care arata natural si rezista in timp."),
    ("ortodontie", "Ortodontie", "Aparate fixe si gutiere transparente pentru copii si adulti."),
];

const FAQ: &[(&str, &str)] = &[
    (
        "Cat dureaza prima consultatie?",
        "In jur de 45 de minute: discutam, facem investigatiile necesare si stabilim impreuna pasii urmatori.",
    ),
    (
        "Tratamentele sunt dureroase?",
        "Lucram cu anestezie locala moderna si ne oprim oricand ai nevoie de o pauza.",
    ),
    (
        "Pot plati in rate?",
        "Da, pentru planurile de tratament mai ample oferim plata esalonata fara dobanda.",
    ),
    (
        "Cum fac o programare?",
        "Completeaza formularul de programare sau suna-ne direct; revenim cu o confirmare in aceeasi zi.",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let visual = use_state_eq(VisualState::default);
    let scroll = use_state(|| None::<ScrollHandle>);

    {
        let visual = visual.clone();
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let on_visual = Callback::from(move |state: VisualState| visual.set(state));
                let driver = ScrollDriver::attach(on_visual);
                match &driver {
                    Some(driver) => scroll.set(Some(driver.handle())),
                    None => warn!("#{} missing, falling back to native scrolling", CONTAINER_ID),
                }
                move || drop(driver)
            },
            (),
        );
    }

    let on_logo = scroll.is_some().then(|| {
        let scroll = scroll.clone();
        Callback::from(move |_: ()| {
            if let Some(handle) = scroll.as_ref() {
                handle.scroll_to_top();
            }
        })
    });

    let on_back_to_top = {
        let scroll = scroll.clone();
        Callback::from(move |_: ()| match scroll.as_ref() {
            Some(handle) => handle.animate_to(0.0, focus_header_logo),
            None => scroll_window_to_top(),
        })
    };

    html! {
        <>
            <Header state={visual.header} {on_logo} />
            <div id={CONTAINER_ID} class="scroll-container">
                <section class="hero" id="acasa">
                    <div class="hero__content">
                        <AnimatedText
                            tag="h1"
                            class="hero__title"
                            lines={vec![AttrValue::from("Zambete sanatoase,"), AttrValue::from("ingrijite cu drag")]}
                            step={config::TITLE_LETTER_STEP}
                        />
                        <AnimatedText
                            class="hero__subtitle"
                            lines={vec![AttrValue::from("Stomatologie moderna, explicata simplu, intr-un cabinet in care te simti ca acasa.")]}
                            base={config::SUBTITLE_START}
                            step={config::SUBTITLE_LETTER_STEP}
                        />
                        <div class="hero__actions">
                            <Link<Route> to={Route::Schedule} classes="button button--primary">
                                {"Programeaza-te"}
                            </Link<Route>>
                            <a href="#servicii" class="button button--ghost">{"Vezi serviciile"}</a>
                        </div>
                    </div>
                </section>

                <section class="services-section" id="servicii">
                    <h2 class="section-title scroll-reveal scroll-reveal--fade">{"Servicii"}</h2>
                    <div class="services-section__grid">
                        {
                            for SERVICES.iter().map(|(id, title, text)| html! {
                                <article class="service-card scroll-reveal" id={*id}>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </article>
                            })
                        }
                    </div>
                </section>

                <section class="about-section" id="despre">
                    <div class="about-section__text scroll-reveal">
                        <h2 class="section-title">{"Despre noi"}</h2>
                        <p>
                            {"Anca si Raluca au deschis smyle cu un gand simplu: un cabinet in care nimeni nu se grabeste, \
                              in care fiecare pas al tratamentului este explicat si in care vii cu drag la control."}
                        </p>
                    </div>
                    <ul class="about-section__facts scroll-reveal">
                        <li><strong>{"12+"}</strong>{" ani de experienta"}</li>
                        <li><strong>{"3000+"}</strong>{" pacienti multumiti"}</li>
                        <li><strong>{"2"}</strong>{" medici dedicati"}</li>
                    </ul>
                </section>

                <section class="faq-section" id="intrebari">
                    <h2 class="section-title scroll-reveal scroll-reveal--fade">{"Intrebari frecvente"}</h2>
                    <FaqList items={FAQ} scroll={(*scroll).clone()} />
                </section>

                <section class="schedule-section" id="programare">
                    <div class="schedule-section__intro scroll-reveal">
                        <h2 class="section-title">{"Hai sa ne cunoastem"}</h2>
                        <p>{"Luni - Vineri, 09:00 - 19:00"}</p>
                        <p>{"Lasa-ne datele tale aici sau pe "}
                            <Link<Route> to={Route::Schedule}>{"pagina de programari"}</Link<Route>>
                            {"."}
                        </p>
                    </div>
                    <BookingForm />
                </section>

                <footer class="footer">
                    <span>{"© anca&raluca smyle"}</span>
                </footer>
            </div>
            <BackToTop visible={visual.back_to_top_visible} on_click={on_back_to_top} />
        </>
    }
}
