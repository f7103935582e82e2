//! Contact form submission to the external form endpoint.
//!
//! Incomplete input never leaves the page; the submit control is restored
//! after every attempt, whatever the outcome.

use crate::{dom, ui};
use gloo_net::http::Request;
use site_core::constants::FORM_ENDPOINT;
use site_core::content::{ContactMessage, SubmissionRejection};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

enum Outcome {
    Sent,
    Rejected(String),
    Unreachable,
}

pub fn init(document: &web::Document) {
    let Some(form) = document
        .query_selector(".contact-form")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };

    let form_ref = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = form_ref.clone();
        let Ok(data) = web::FormData::new_with_form(&form) else {
            return;
        };
        let message = ContactMessage {
            name: field(&data, "name"),
            email: field(&data, "email"),
            message: field(&data, "message"),
        };
        if !message.is_complete() {
            return;
        }

        let submit = form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<web::HtmlButtonElement>().ok());
        let original_label = submit.as_ref().map(|b| b.inner_html());
        if let Some(button) = &submit {
            button.set_disabled(true);
            button.set_inner_html(SENDING_LABEL);
        }

        spawn_local(async move {
            match submit_form(&data).await {
                Outcome::Sent => {
                    ui::notify(
                        "Message sent! I will get back to you soon.",
                        ui::NotificationKind::Success,
                    );
                    form.reset();
                }
                Outcome::Rejected(message) => {
                    ui::notify(&format!("Error: {message}"), ui::NotificationKind::Error);
                }
                Outcome::Unreachable => {
                    ui::notify(
                        "Could not connect to the server. Please try again later.",
                        ui::NotificationKind::Error,
                    );
                }
            }
            // Restore the control regardless of outcome.
            if let (Some(button), Some(label)) = (submit, original_label) {
                button.set_disabled(false);
                button.set_inner_html(&label);
            }
        });
    });
}

async fn submit_form(data: &web::FormData) -> Outcome {
    let request = match Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .body(data.clone())
    {
        Ok(request) => request,
        Err(e) => {
            log::error!("building form request failed: {e}");
            return Outcome::Unreachable;
        }
    };
    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("form submission unreachable: {e}");
            return Outcome::Unreachable;
        }
    };
    if resp.ok() {
        return Outcome::Sent;
    }
    let message = match resp.json::<SubmissionRejection>().await {
        Ok(body) => body.message(),
        Err(_) => "Submission failed.".to_string(),
    };
    Outcome::Rejected(message)
}

fn field(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}
