//! Contact form core: validation, the delivery seam and the submit flow.
//!
//! The form component only renders [`FormPhase`]; everything it does on submit goes
//! through [`run_submission`] so the flow can be driven natively in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("could not deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims and validates the raw field values.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;
        if !is_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

// what <input type="email"> accepts, roughly
fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Delivers a contact message somewhere.
#[async_trait(?Send)]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Something that can wait.
#[async_trait(?Send)]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Pretends to deliver: waits a fixed delay, then succeeds.
pub struct SimulatedSink<T> {
    timer: T,
    delay: Duration,
}

impl<T: Timer> SimulatedSink<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

#[async_trait(?Send)]
impl<T: Timer> SubmissionSink for SimulatedSink<T> {
    async fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        log::debug!("simulating delivery of message from {}", message.email);
        self.timer.sleep(self.delay).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

impl FormPhase {
    pub fn is_submitting(self) -> bool {
        self == FormPhase::Submitting
    }
}

/// Hands `message` to `sink`, reporting `Submitting` before and `Idle` after. The
/// form always ends up `Idle`, whatever the sink returns.
pub async fn run_submission<S>(
    sink: &S,
    message: &ContactMessage,
    mut on_phase: impl FnMut(FormPhase),
) -> Result<(), ContactError>
where
    S: SubmissionSink + ?Sized,
{
    on_phase(FormPhase::Submitting);
    let res = sink.submit(message).await;
    if let Err(e) = &res {
        log::warn!("contact submission failed: {e}");
    }
    on_phase(FormPhase::Idle);
    res
}
