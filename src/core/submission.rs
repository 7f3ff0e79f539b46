// Contact form submission flow.
//
// One call to [`submit`] drives a single submission from the moment the
// default navigation has been suppressed until the submit control is usable
// again. The DOM and the network are reached only through [`FormView`] and
// [`Transport`], which keeps the state machine testable off the browser.
//
// Nothing here serialises submissions: a second call may start while an
// earlier one is still awaiting its reply. Each call schedules its own status
// clear, so the last timer to fire wins.

use crate::constants::{
    DEFAULT_FORM_METHOD, MSG_GENERIC_FAILURE, MSG_SENDING, MSG_SENT, MSG_UNREACHABLE,
    STATUS_CLEAR_DELAY_MS,
};
use serde_json::Value;

/// User-visible status texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessages {
    pub sending: String,
    pub sent: String,
    pub generic_failure: String,
    pub unreachable: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            sending: MSG_SENDING.to_string(),
            sent: MSG_SENT.to_string(),
            generic_failure: MSG_GENERIC_FAILURE.to_string(),
            unreachable: MSG_UNREACHABLE.to_string(),
        }
    }
}

/// Method and target of the outbound request. The body is the transport's
/// business since only it can read the live form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub method: String,
    pub url: String,
}

impl SubmitRequest {
    pub fn new(declared_method: Option<&str>, action: &str) -> Self {
        Self {
            method: resolve_method(declared_method),
            url: action.to_string(),
        }
    }
}

/// Uppercased declared method, or `POST` when none is declared.
pub fn resolve_method(declared: Option<&str>) -> String {
    match declared.map(str::trim) {
        Some(m) if !m.is_empty() => m.to_ascii_uppercase(),
        _ => DEFAULT_FORM_METHOD.to_string(),
    }
}

/// What came back from the endpoint, if anything did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportReply {
    Response { status: u16, body: String },
    /// No response could be obtained.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    #[error("endpoint rejected submission (status {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("no response from endpoint: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(SubmitFailure),
}

/// DOM side of a submission.
pub trait FormView {
    fn set_status(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    /// Clear every field of the form.
    fn reset_fields(&self);
    /// Empty the status text after `delay_ms`, independently of later calls.
    fn schedule_status_clear(&self, delay_ms: i32);
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &SubmitRequest) -> TransportReply;
}

#[inline]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Display text for a scalar `error` value; falsy and structured values have none.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Message carried by a JSON error body, if it has a usable one.
///
/// `{"error": ...}` wins whenever it holds a usable value, whatever shape the
/// rest of the body has. Otherwise the list form
/// `{"errors": [{"message": "..."}]}` is joined with `", "`. Anything
/// unparseable or empty yields `None`.
pub fn server_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    if let Some(error) = parsed.get("error").and_then(error_text) {
        return Some(error);
    }
    let joined = parsed
        .get("errors")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|e| e.get("message").and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}

pub async fn submit<V: FormView, T: Transport>(
    view: &V,
    transport: &T,
    request: &SubmitRequest,
    messages: &FormMessages,
) -> SubmitOutcome {
    view.set_status(&messages.sending);
    view.set_submit_enabled(false);

    let outcome = match transport.send(request).await {
        TransportReply::Response { status, .. } if is_success(status) => {
            view.set_status(&messages.sent);
            view.reset_fields();
            SubmitOutcome::Sent
        }
        TransportReply::Response { status, body } => {
            let message =
                server_error_message(&body).unwrap_or_else(|| messages.generic_failure.clone());
            view.set_status(&message);
            SubmitOutcome::Failed(SubmitFailure::Rejected { status, message })
        }
        TransportReply::Failed(reason) => {
            view.set_status(&messages.unreachable);
            SubmitOutcome::Failed(SubmitFailure::Transport(reason))
        }
    };

    view.set_submit_enabled(true);
    view.schedule_status_clear(STATUS_CLEAR_DELAY_MS);

    match &outcome {
        SubmitOutcome::Sent => log::info!("[contact] {} {} sent", request.method, request.url),
        SubmitOutcome::Failed(e) => log::warn!("[contact] {}", e),
    }
    outcome
}
