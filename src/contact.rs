use std::sync::LazyLock;

use dioxus::prelude::*;
use regex::Regex;

use crate::api::{error_message, ApiClient, ContactPayload, Reply};
use crate::dom;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const SUCCESS_TEXT: &str = "Thanks for your message. We'll get back to you soon!";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try again.";
pub const TRANSPORT_FAILURE_TEXT: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn dom_id(&self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name if self.name.trim().is_empty() => Some("Name is required."),
            Field::Email if self.email.trim().is_empty() => Some("Email is required."),
            Field::Email if !is_valid_email(&self.email) => Some("Email is not valid."),
            Field::Message if self.message.trim().is_empty() => Some("Message cannot be empty."),
            _ => None,
        }
    }

    /// One entry per invalid field, in form order.
    pub fn validate(&self) -> Vec<(Field, &'static str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|message| (field, message)))
            .collect()
    }

    /// Fields go out exactly as typed; trimming only applies to validation.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

pub fn outcome_from_reply(reply: &Reply) -> StatusMessage {
    if reply.ok() {
        StatusMessage::Success(SUCCESS_TEXT.to_string())
    } else {
        StatusMessage::Error(error_message(&reply.body).unwrap_or_else(|| FAILURE_TEXT.to_string()))
    }
}

/// Form values plus which fields the user has touched and the last send result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    touched: [bool; 3],
    pub status: Option<StatusMessage>,
    pub sending: bool,
}

impl ContactFormState {
    fn slot(field: Field) -> usize {
        match field {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[Self::slot(field)]
    }

    pub fn edit(&mut self, field: Field, value: String) {
        *self.form.value_mut(field) = value;
        self.touched[Self::slot(field)] = true;
        self.status = None;
    }

    /// Error shown under `field`: only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.form.error(field)
        } else {
            None
        }
    }

    /// Validates everything. On failure every invalid field becomes touched
    /// and the first one is returned for focusing; the input is kept as typed.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, Field> {
        self.status = None;
        let errors = self.form.validate();
        if let Some((first, _)) = errors.first() {
            for (field, _) in &errors {
                self.touched[Self::slot(*field)] = true;
            }
            return Err(*first);
        }
        self.sending = true;
        Ok(self.form.payload())
    }

    pub fn finish_submit(&mut self, status: StatusMessage) {
        self.sending = false;
        if !status.is_error() {
            self.form = ContactForm::default();
            self.touched = [false; 3];
        }
        self.status = Some(status);
    }
}

#[component]
pub fn ContactSection() -> Element {
    let api = use_context::<ApiClient>();
    let mut state = use_signal(ContactFormState::default);

    let current = state();
    let sending = current.sending;
    let (status_class, status_role) = match &current.status {
        Some(status) if status.is_error() => ("form-status error-box", "alert"),
        _ => ("form-status success-box", "status"),
    };

    rsx! {
        section { class: "contact-page", aria_labelledby: "contact-heading",
            h1 { id: "contact-heading", class: "tab-heading", "Contact Us" }
            p { class: "tab-desc",
                "We'd love to hear from you! Reach out with questions, feedback, or collaboration ideas."
            }
            form {
                class: "contact-form",
                novalidate: true,
                onsubmit: move |event| {
                    event.prevent_default();
                    let payload = match state.write().begin_submit() {
                        Ok(payload) => payload,
                        Err(field) => {
                            tracing::debug!(field = field.dom_id(), "contact.invalid");
                            dom::focus_element(field.dom_id());
                            return;
                        }
                    };
                    let api = api.clone();
                    spawn(async move {
                        let status = match api.send_contact(&payload).await {
                            Ok(reply) => outcome_from_reply(&reply),
                            Err(err) => {
                                tracing::error!(error = %err, "contact.send_failed");
                                StatusMessage::Error(TRANSPORT_FAILURE_TEXT.to_string())
                            }
                        };
                        tracing::info!(ok = !status.is_error(), "contact.submitted");
                        state.write().finish_submit(status);
                    });
                },
                if let Some(status) = current.status.clone() {
                    div {
                        id: "form-status",
                        class: status_class,
                        role: status_role,
                        "{status.text()}"
                    }
                }
                ContactField { state, field: Field::Name, label: "Name", kind: "text", disabled: sending }
                ContactField { state, field: Field::Email, label: "Email", kind: "email", disabled: sending }
                ContactField { state, field: Field::Message, label: "Message", kind: "textarea", disabled: sending }
                button { r#type: "submit", class: "primary-button", disabled: sending,
                    if sending { "Sending..." } else { "Send Message" }
                }
            }
        }
    }
}

#[component]
fn ContactField(
    mut state: Signal<ContactFormState>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    disabled: bool,
) -> Element {
    let id = field.dom_id();
    let value = state.read().form.value(field).to_string();
    let error = state.read().visible_error(field);
    let error_id = format!("{id}-error");

    rsx! {
        div { class: "form-group",
            label { r#for: id, "{label}" span { aria_hidden: "true", "*" } }
            if kind == "textarea" {
                textarea {
                    id,
                    name: id,
                    rows: "5",
                    value: "{value}",
                    disabled,
                    aria_invalid: error.is_some(),
                    oninput: move |event| state.write().edit(field, event.value()),
                }
            } else {
                input {
                    id,
                    name: id,
                    r#type: kind,
                    value: "{value}",
                    disabled,
                    aria_invalid: error.is_some(),
                    oninput: move |event| state.write().edit(field, event.value()),
                }
            }
            if let Some(message) = error {
                small { class: "error", id: "{error_id}", aria_live: "polite", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, name.to_string());
        state.edit(Field::Email, email.to_string());
        state.edit(Field::Message, message.to_string());
        state
    }

    #[test]
    fn email_pattern_needs_a_dot_after_the_at() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("club@chips.bytes.edu"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn each_invalid_field_gets_exactly_one_error() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: "a@b".to_string(),
            message: String::new(),
        };
        assert_eq!(
            form.validate(),
            vec![
                (Field::Name, "Name is required."),
                (Field::Email, "Email is not valid."),
                (Field::Message, "Message cannot be empty."),
            ]
        );
        let missing = ContactForm::default();
        assert_eq!(missing.error(Field::Email), Some("Email is required."));
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut state = ContactFormState::default();
        assert_eq!(state.visible_error(Field::Name), None);
        state.edit(Field::Name, String::new());
        assert_eq!(state.visible_error(Field::Name), Some("Name is required."));
        assert_eq!(state.visible_error(Field::Email), None);
    }

    #[test]
    fn invalid_submit_blocks_and_focuses_first_invalid_field() {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, "Ada".to_string());
        state.edit(Field::Email, "ada@".to_string());

        assert_eq!(state.begin_submit(), Err(Field::Email));
        assert!(!state.sending);
        assert_eq!(state.form.email, "ada@");
        assert_eq!(state.visible_error(Field::Message), Some("Message cannot be empty."));
    }

    #[test]
    fn successful_send_clears_form_and_shows_success() {
        let mut state = filled("A", "a@b.com", "hi");
        let payload = state.begin_submit().unwrap();
        assert_eq!(
            payload,
            ContactPayload {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            }
        );
        assert!(state.sending);

        let reply = Reply {
            status: 200,
            body: "{}".to_string(),
        };
        state.finish_submit(outcome_from_reply(&reply));

        assert_eq!(state.form, ContactForm::default());
        assert!(!state.sending);
        assert!(!state.is_touched(Field::Name));
        assert_eq!(state.status, Some(StatusMessage::Success(SUCCESS_TEXT.to_string())));
    }

    #[test]
    fn payload_keeps_fields_as_typed() {
        let mut state = filled(" Ada ", "ada@chips.dev ", "line one\n\n  indented\n");
        assert_eq!(
            state.begin_submit(),
            Ok(ContactPayload {
                name: " Ada ".to_string(),
                email: "ada@chips.dev ".to_string(),
                message: "line one\n\n  indented\n".to_string(),
            })
        );
    }

    #[test]
    fn failed_send_keeps_the_input() {
        let mut state = filled("A", "a@b.com", "hi");
        state.begin_submit().unwrap();
        let reply = Reply {
            status: 500,
            body: r#"{"error":"Mailer offline"}"#.to_string(),
        };
        state.finish_submit(outcome_from_reply(&reply));
        assert_eq!(state.form.message, "hi");
        assert_eq!(state.status, Some(StatusMessage::Error("Mailer offline".to_string())));

        let bare = Reply {
            status: 502,
            body: String::new(),
        };
        assert_eq!(outcome_from_reply(&bare), StatusMessage::Error(FAILURE_TEXT.to_string()));
    }

    #[test]
    fn editing_clears_the_previous_status() {
        let mut state = filled("A", "a@b.com", "hi");
        state.begin_submit().unwrap();
        state.finish_submit(StatusMessage::Error(TRANSPORT_FAILURE_TEXT.to_string()));
        state.edit(Field::Message, "hello".to_string());
        assert_eq!(state.status, None);
    }
}
