//! Appointment request form, delivered through the third-party form relay.

use std::collections::BTreeMap;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{self, Array};
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::config;

pub const SUBMIT_LABEL: &str = "Trimite programarea";
pub const SENDING_LABEL: &str = "Se trimite...";
pub const FAILURE_ALERT: &str = "A aparut o eroare. Te rugam sa incerci din nou sau sa ne suni direct.";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("form relay request failed: {0}")]
    Relay(#[from] gloo_net::Error),
    #[error("form relay reply is not JSON: {0}")]
    Reply(#[from] serde_json::Error),
}

/// Form fields as a flat JSON object. A repeated field keeps its last value.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BookingPayload(BTreeMap<String, String>);

impl BookingPayload {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Reads every text entry of the form. File inputs are skipped.
    pub fn from_form(form: &HtmlFormElement) -> Self {
        let mut payload = Self::default();
        let Ok(data) = FormData::new_with_form(form) else {
            return payload;
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return payload;
        };
        for entry in entries.flatten() {
            let Ok(pair) = entry.dyn_into::<Array>() else {
                continue;
            };
            if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                payload.insert(key, value);
            }
        }
        payload
    }
}

/// Lifecycle of a single submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Ready,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// `None` while a submission is already running or done.
    pub fn begin(self) -> Option<Self> {
        (self == SubmitPhase::Ready).then_some(SubmitPhase::Sending)
    }

    pub fn finish<E>(self, result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => SubmitPhase::Sent,
            Err(_) => SubmitPhase::Ready,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Sending => SENDING_LABEL,
            SubmitPhase::Ready | SubmitPhase::Sent => SUBMIT_LABEL,
        }
    }

    pub fn button_disabled(self) -> bool {
        self != SubmitPhase::Ready
    }

    pub fn form_hidden(self) -> bool {
        self == SubmitPhase::Sent
    }

    pub fn success_hidden(self) -> bool {
        self != SubmitPhase::Sent
    }
}

/// Any JSON reply counts as delivered, whatever the HTTP status.
pub fn parse_relay_reply(body: &str) -> Result<(), BookingError> {
    serde_json::from_str::<serde_json::Value>(body)?;
    Ok(())
}

pub async fn submit_booking(payload: &BookingPayload) -> Result<(), BookingError> {
    let response = Request::post(config::get_form_relay_url())
        .header("Accept", "application/json")
        .json(payload)?
        .send()
        .await?;
    let body = response.text().await?;
    parse_relay_reply(&body)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

const SERVICES: [&str; 6] = [
    "Consultatie",
    "Igienizare profesionala",
    "Albire dentara",
    "Tratament carie",
    "Ortodontie",
    "Implantologie",
];

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let phase = use_state_eq(|| SubmitPhase::Ready);
    let form_ref = use_node_ref();

    let onsubmit = {
        let phase = phase.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(next) = phase.begin() else {
                return;
            };
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let payload = BookingPayload::from_form(&form);
            phase.set(next);

            let phase = phase.clone();
            spawn_local(async move {
                let result = submit_booking(&payload).await;
                match &result {
                    Ok(()) => info!("booking request delivered"),
                    Err(e) => warn!("booking request failed: {}", e),
                }
                phase.set(next.finish(&result));
                if result.is_err() {
                    alert(FAILURE_ALERT);
                }
            });
        })
    };

    html! {
        <div class="booking">
            <form
                id="bookingForm"
                class="booking__form"
                ref={form_ref}
                hidden={phase.form_hidden()}
                {onsubmit}
            >
                <input type="hidden" name="_subject" value="Programare noua de pe site" />
                <input type="hidden" name="_template" value="table" />
                <label class="booking__field">
                    <span>{"Nume si prenume"}</span>
                    <input type="text" name="nume" required={true} autocomplete="name" />
                </label>
                <label class="booking__field">
                    <span>{"Telefon"}</span>
                    <input type="tel" name="telefon" required={true} autocomplete="tel" />
                </label>
                <label class="booking__field">
                    <span>{"Email"}</span>
                    <input type="email" name="email" autocomplete="email" />
                </label>
                <label class="booking__field">
                    <span>{"Serviciu"}</span>
                    <select name="serviciu">
                        { for SERVICES.iter().map(|s| html! { <option value={*s}>{*s}</option> }) }
                    </select>
                </label>
                <label class="booking__field">
                    <span>{"Data preferata"}</span>
                    <input type="date" name="data" />
                </label>
                <label class="booking__field booking__field--wide">
                    <span>{"Mesaj"}</span>
                    <textarea name="mesaj" rows="4"></textarea>
                </label>
                <button
                    id="bookingSubmitBtn"
                    type="submit"
                    class="booking__submit"
                    disabled={phase.button_disabled()}
                >
                    {phase.button_label()}
                </button>
            </form>
            <div id="bookingSuccess" class="booking__success" hidden={phase.success_hidden()}>
                <h3>{"Multumim!"}</h3>
                <p>{"Am primit cererea ta. Te contactam in cel mai scurt timp pentru confirmare."}</p>
            </div>
        </div>
    }
}
