//! Contact form handling.
//!
//! Messages are not delivered anywhere. [`SimulatedSender`] waits for the
//! configured delay and reports success; the failure path is kept so a real
//! sender can be plugged in behind [`MessageSender`].
//!
//! ```text
//! POST /contact ──► ContactForm::parse ──► validate ──► MessageSender::send
//!                                                            │
//!                         303 /contact?sent=ok  ◄── Ok ──────┤
//!                         303 /contact?sent=failed ◄── Err ──┘
//! ```

use crate::{log, route::parse_pairs};
use std::{thread, time::Duration};
use thiserror::Error;

/// Contact submission errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid email address `{0}`")]
    InvalidEmail(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Feedback shown on the Contact page after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    /// Parse the `sent` query value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ok" => Some(Self::Sent),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Value of the `sent` query parameter.
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Sent => "ok",
            Self::Failed => "failed",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully!",
            Self::Failed => "Failed to send message",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sent => "Thank you for reaching out. I'll get back to you soon.",
            Self::Failed => "Please try again later or contact me directly via email.",
        }
    }

    /// Where to redirect after a submission.
    pub fn location(self) -> String {
        format!("/contact?sent={}", self.query_value())
    }
}

/// A submitted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown keys are ignored.
    pub fn parse(body: &str) -> Self {
        let mut form = Self::default();
        for (key, value) in parse_pairs(body) {
            match key.as_str() {
                "name" => form.name = value,
                "email" => form.email = value,
                "message" => form.message = value,
                _ => {}
            }
        }
        form
    }

    /// Trim fields and check they are usable.
    pub fn validate(mut self) -> Result<Self, ContactError> {
        self.name = self.name.trim().to_owned();
        self.email = self.email.trim().to_owned();
        self.message = self.message.trim().to_owned();

        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !is_plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email));
        }
        Ok(self)
    }
}

/// One `@`, something on both sides, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Delivers contact messages.
pub trait MessageSender {
    fn send(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Pretends to send: sleeps for `delay`, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MessageSender for SimulatedSender {
    fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        log!("contact"; "message from {} <{}> ({} chars)", form.name, form.email, form.message.chars().count());
        Ok(())
    }
}

/// Parse, validate and send a form body, returning the notice to display.
pub fn submit(body: &str, sender: &impl MessageSender) -> Notice {
    let result = ContactForm::parse(body)
        .validate()
        .and_then(|form| sender.send(&form));

    match result {
        Ok(()) => Notice::Sent,
        Err(err) => {
            log!("contact"; "{err}");
            Notice::Failed
        }
    }
}
