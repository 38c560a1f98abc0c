//! Sends a `SubmissionPayload` to the webhook.
//!
//! The request is a multipart `FormData` POST bound to an `AbortController`.
//! A timer aborts it once the configured deadline passes; the resulting fetch
//! rejection is reported as a timeout. Only the response status is read.

use std::cell::Cell;
use std::rc::Rc;

use common::config::FormConfig;
use common::model::attachment::AttachmentFile;
use common::model::field::Field;
use common::requests::SubmissionPayload;
use common::submission::{check_status, SubmissionError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, FormData};

use super::state::SelectedFile;

const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

pub async fn send_justification(
    config: &FormConfig,
    payload: &SubmissionPayload<SelectedFile>,
) -> Result<(), SubmissionError> {
    let form_data = build_form_data(payload).map_err(js_failure)?;
    let controller = AbortController::new().map_err(js_failure)?;

    let timed_out = Rc::new(Cell::new(false));
    let deadline = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(config.timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let request = Request::post(&config.endpoint)
        .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
        .abort_signal(Some(&controller.signal()))
        .body(form_data)
        .map_err(|err| SubmissionError::NetworkFailure(err.to_string()))?;

    let response = request.send().await;
    // Dropping the timer cancels it if it has not fired yet.
    drop(deadline);

    match response {
        Ok(response) => check_status(response.status()),
        Err(_) if timed_out.get() => Err(SubmissionError::Timeout),
        Err(err) => Err(SubmissionError::NetworkFailure(err.to_string())),
    }
}

fn build_form_data(payload: &SubmissionPayload<SelectedFile>) -> Result<FormData, JsValue> {
    let form_data = FormData::new()?;
    for (label, value) in &payload.text_parts {
        form_data.append_with_str(label, value)?;
    }
    if let Some(attachment) = &payload.attachment {
        form_data.append_with_blob_and_filename(
            Field::Attachment.part_label(),
            attachment.file(),
            &attachment.name(),
        )?;
    }
    Ok(form_data)
}

fn js_failure(value: JsValue) -> SubmissionError {
    let message = match value.dyn_into::<js_sys::Error>() {
        Ok(error) => String::from(error.message()),
        Err(value) => format!("{value:?}"),
    };
    SubmissionError::NetworkFailure(message)
}
