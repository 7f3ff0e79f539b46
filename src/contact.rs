use crate::constants::{CONTACT_FORM_ID, FORM_STATUS_ID, SUBMIT_SELECTOR};
use crate::core::submission::{self, FormMessages, FormView, SubmitRequest, Transport, TransportReply};
use crate::dom;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct DomFormView {
    form: web::HtmlFormElement,
    status: web::Element,
    submit: Option<web::Element>,
}

impl FormView for DomFormView {
    fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(btn) = &self.submit {
            _ = if enabled {
                btn.remove_attribute("disabled")
            } else {
                btn.set_attribute("disabled", "")
            };
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn schedule_status_clear(&self, delay_ms: i32) {
        let status = self.status.clone();
        dom::set_timeout(delay_ms, move || status.set_text_content(Some("")));
    }
}

/// `fetch` carrying the live form fields as multipart form data.
struct FetchTransport {
    form: web::HtmlFormElement,
}

impl FetchTransport {
    async fn fetch(&self, request: &SubmitRequest) -> Result<TransportReply, JsValue> {
        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let body = web::FormData::new_with_form(&self.form)?;
        let headers = web::Headers::new()?;
        headers.set("Accept", "application/json")?;

        let init = web::RequestInit::new();
        init.set_method(&request.method);
        init.set_body(&body);
        init.set_headers(&headers);
        // Throws for e.g. a GET with a body; surfaces as a transport failure.
        let req = web::Request::new_with_str_and_init(&request.url, &init)?;

        let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
            .await?
            .dyn_into()?;
        let status = resp.status();
        let body = if resp.ok() {
            String::new()
        } else {
            read_text(&resp).await
        };
        Ok(TransportReply::Response { status, body })
    }
}

async fn read_text(resp: &web::Response) -> String {
    let Ok(promise) = resp.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

impl Transport for FetchTransport {
    async fn send(&self, request: &SubmitRequest) -> TransportReply {
        self.fetch(request)
            .await
            .unwrap_or_else(|e| TransportReply::Failed(format!("{:?}", e)))
    }
}

/// Take over the contact form's submit action, if the page has one.
pub fn init_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(form_el) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::info!("[contact] no #{}; form submitter disabled", CONTACT_FORM_ID);
        return Ok(());
    };
    let form: web::HtmlFormElement = form_el
        .dyn_into()
        .map_err(|e| anyhow!("#{} is not a form: {:?}", CONTACT_FORM_ID, e))?;
    let status = document
        .get_element_by_id(FORM_STATUS_ID)
        .ok_or_else(|| anyhow!("missing #{}", FORM_STATUS_ID))?;
    let submit = form.query_selector(SUBMIT_SELECTOR).ok().flatten();
    if submit.is_none() {
        log::warn!("[contact] no {} inside the form", SUBMIT_SELECTOR);
    }

    let view = Rc::new(DomFormView {
        form: form.clone(),
        status,
        submit,
    });
    let transport = Rc::new(FetchTransport { form: form.clone() });
    let messages = Rc::new(FormMessages::default());

    let handler_form = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let declared = handler_form.get_attribute("method");
        let request = SubmitRequest::new(declared.as_deref(), &handler_form.action());
        let (view, transport, messages) = (view.clone(), transport.clone(), messages.clone());
        spawn_local(async move {
            submission::submit(&*view, &*transport, &request, &messages).await;
        });
    }) as Box<dyn FnMut(web::Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("{:?}", e))?;
    closure.forget();

    log::info!("[contact] submitter wired");
    Ok(())
}
