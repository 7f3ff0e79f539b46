// Host-side tests for the contact form submission flow.
// The main crate is wasm-only, so we include the pure-Rust modules directly and
// drive the async flow with a blocking executor, a mock endpoint and a
// simulated clock for the status clear timers.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod submission {
    include!("../src/core/submission.rs");
}

use constants::*;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use submission::*;

#[derive(Default)]
struct FakeForm {
    status: RefCell<String>,
    submit_enabled: Cell<bool>,
    fields: RefCell<Vec<String>>,
    now_ms: Cell<i32>,
    timers: RefCell<Vec<i32>>,
}

impl FakeForm {
    fn filled() -> Self {
        let form = Self::default();
        form.submit_enabled.set(true);
        *form.fields.borrow_mut() = vec!["Ada".into(), "ada@example.com".into(), "Hi!".into()];
        form
    }

    /// Move the clock forward, firing every timer that comes due.
    fn advance(&self, ms: i32) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        let mut timers = self.timers.borrow_mut();
        let due = timers.iter().filter(|&&at| at <= now).count();
        timers.retain(|&at| at > now);
        if due > 0 {
            self.status.borrow_mut().clear();
        }
    }

    fn status(&self) -> String {
        self.status.borrow().clone()
    }
}

impl FormView for FakeForm {
    fn set_status(&self, text: &str) {
        *self.status.borrow_mut() = text.to_string();
    }
    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }
    fn reset_fields(&self) {
        for f in self.fields.borrow_mut().iter_mut() {
            f.clear();
        }
    }
    fn schedule_status_clear(&self, delay_ms: i32) {
        self.timers.borrow_mut().push(self.now_ms.get() + delay_ms);
    }
}

/// Endpoint stub; records what the form looked like while the request was in flight.
struct MockEndpoint<'a> {
    form: &'a FakeForm,
    reply: TransportReply,
    seen: RefCell<Vec<(SubmitRequest, String, bool)>>,
}

impl<'a> MockEndpoint<'a> {
    fn new(form: &'a FakeForm, reply: TransportReply) -> Self {
        Self {
            form,
            reply,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MockEndpoint<'_> {
    async fn send(&self, request: &SubmitRequest) -> TransportReply {
        self.seen.borrow_mut().push((
            request.clone(),
            self.form.status(),
            self.form.submit_enabled.get(),
        ));
        self.reply.clone()
    }
}

fn post() -> SubmitRequest {
    SubmitRequest::new(Some("post"), "https://forms.example.com/f/abc")
}

fn reply(status: u16, body: &str) -> TransportReply {
    TransportReply::Response {
        status,
        body: body.to_string(),
    }
}

#[test]
fn success_sets_message_resets_fields_and_clears_later() {
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(200, ""));
    let outcome = block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert!(form.status().contains("Thanks"));
    assert!(form.fields.borrow().iter().all(|f| f.is_empty()));
    assert!(form.submit_enabled.get());

    form.advance(5999);
    assert_eq!(form.status(), MSG_SENT);
    form.advance(1);
    assert_eq!(form.status(), "");
}

#[test]
fn request_is_in_progress_and_disabled_while_pending() {
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(204, ""));
    block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));

    let seen = endpoint.seen.borrow();
    assert_eq!(seen.len(), 1);
    let (request, status, enabled) = &seen[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "https://forms.example.com/f/abc");
    assert_eq!(status, MSG_SENDING);
    assert!(!enabled);
}

#[test]
fn rejection_shows_server_error() {
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(422, r#"{"error":"Invalid email"}"#));
    let outcome = block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));

    assert_eq!(form.status(), "Invalid email");
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SubmitFailure::Rejected {
            status: 422,
            message: "Invalid email".into()
        })
    );
    // fields survive a failed submission
    assert_eq!(form.fields.borrow()[1], "ada@example.com");
    assert!(form.submit_enabled.get());
    form.advance(STATUS_CLEAR_DELAY_MS);
    assert_eq!(form.status(), "");
}

#[test]
fn rejection_without_usable_body_falls_back_to_generic() {
    for body in [
        "",
        "<html>oops</html>",
        "{}",
        "[]",
        r#"{"error":""}"#,
        r#"{"error":null}"#,
        r#"{"error":0}"#,
        r#"{"error":{"code":1}}"#,
    ] {
        let form = FakeForm::filled();
        let endpoint = MockEndpoint::new(&form, reply(500, body));
        block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));
        assert_eq!(form.status(), MSG_GENERIC_FAILURE, "body {body:?}");
        assert!(form.submit_enabled.get());
    }
}

#[test]
fn transport_failure_reports_connectivity() {
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, TransportReply::Failed("TypeError: Failed to fetch".into()));
    let outcome = block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));

    assert!(form.status().contains("connection"));
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(SubmitFailure::Transport(_))
    ));
    assert!(form.submit_enabled.get());
    assert_eq!(form.fields.borrow()[0], "Ada");
    form.advance(6000);
    assert_eq!(form.status(), "");
}

#[test]
fn overlapping_submissions_keep_independent_clear_timers() {
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(200, ""));
    block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));
    form.advance(3000);
    block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));
    assert_eq!(form.timers.borrow().len(), 2);

    // the first timer still fires on its own schedule
    form.advance(3000);
    assert_eq!(form.status(), "");
    assert_eq!(form.timers.borrow().len(), 1);
    form.advance(3000);
    assert!(form.timers.borrow().is_empty());
}

#[test]
fn custom_messages_are_used() {
    let messages = FormMessages {
        sent: "Grazie!".into(),
        ..FormMessages::default()
    };
    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(201, ""));
    block_on(submit(&form, &endpoint, &post(), &messages));
    assert_eq!(form.status(), "Grazie!");
}

#[test]
fn method_defaults_to_post() {
    assert_eq!(resolve_method(None), "POST");
    assert_eq!(resolve_method(Some("")), "POST");
    assert_eq!(resolve_method(Some("  ")), "POST");
    assert_eq!(resolve_method(Some("get")), "GET");
    assert_eq!(resolve_method(Some("Put")), "PUT");
}

#[test]
fn success_range_is_2xx() {
    assert!(is_success(200));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(302));
    assert!(!is_success(422));
}

#[test]
fn error_list_bodies_are_joined() {
    let body = r#"{"errors":[{"message":"email is required"},{"message":"message is too short"}]}"#;
    assert_eq!(
        server_error_message(body).as_deref(),
        Some("email is required, message is too short")
    );
    assert_eq!(server_error_message(r#"{"errors":[]}"#), None);
    // a plain error wins over the list
    assert_eq!(
        server_error_message(r#"{"error":"nope","errors":[{"message":"x"}]}"#).as_deref(),
        Some("nope")
    );
}

#[test]
fn error_field_survives_malformed_error_list() {
    for body in [
        r#"{"error":"Invalid email","errors":null}"#,
        r#"{"error":"Invalid email","errors":"bad"}"#,
        r#"{"error":"Invalid email","errors":[{"message":3}]}"#,
        r#"{"error":"Invalid email","errors":{"message":"x"}}"#,
    ] {
        assert_eq!(
            server_error_message(body).as_deref(),
            Some("Invalid email"),
            "body {body}"
        );
    }
}

#[test]
fn error_list_skips_entries_without_text() {
    let body = r#"{"errors":[{"message":1},{"code":"x"},{"message":"email is required"}]}"#;
    assert_eq!(
        server_error_message(body).as_deref(),
        Some("email is required")
    );
}

#[test]
fn scalar_error_values_are_shown() {
    assert_eq!(server_error_message(r#"{"error":7}"#).as_deref(), Some("7"));
    assert_eq!(server_error_message(r#"{"error":true}"#).as_deref(), Some("true"));
    assert_eq!(server_error_message(r#"{"error":false}"#), None);

    let form = FakeForm::filled();
    let endpoint = MockEndpoint::new(&form, reply(400, r#"{"error":7}"#));
    block_on(submit(&form, &endpoint, &post(), &FormMessages::default()));
    assert_eq!(form.status(), "7");
}

#[test]
fn failure_display_is_loggable() {
    let e = SubmitFailure::Rejected {
        status: 422,
        message: "Invalid email".into(),
    };
    assert_eq!(
        e.to_string(),
        "endpoint rejected submission (status 422): Invalid email"
    );
}
