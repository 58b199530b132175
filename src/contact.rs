use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::timer::{Scheduler, Sleep, TimerError, TimerGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("message could not be sent: {0}")]
    SubmissionFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|&field| self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    phase: SubmitPhase,
    focused: Option<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.phase == SubmitPhase::Success
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(ContactError::MissingField(field));
        }
        self.phase = SubmitPhase::Submitting;
        Ok(self.fields.clone())
    }

    /// Applies the backend's answer. Returns `true` when the form moved to
    /// `Success`, which is the caller's cue to schedule the dismissal.
    pub fn finish_submit(&mut self, result: Result<(), ContactError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Success;
                self.fields = ContactMessage::default();
                true
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.phase = SubmitPhase::Failed(e.to_string());
                false
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        if self.phase == SubmitPhase::Success {
            self.phase = SubmitPhase::Idle;
        }
    }
}

pub trait ContactBackend {
    fn submit(&self, message: ContactMessage) -> impl Future<Output = Result<(), ContactError>>;
}

#[derive(Debug, Clone)]
pub struct SimulatedBackend<S> {
    sleeper: S,
    delay: Duration,
}

impl<S: Sleep> SimulatedBackend<S> {
    pub fn new(sleeper: S, delay: Duration) -> Self {
        Self { sleeper, delay }
    }
}

impl<S: Sleep> ContactBackend for SimulatedBackend<S> {
    async fn submit(&self, message: ContactMessage) -> Result<(), ContactError> {
        match serde_json::to_string(&message) {
            Ok(payload) => log::info!("simulated contact submission: {payload}"),
            Err(e) => log::warn!("couldn't encode contact payload: {e}"),
        }
        self.sleeper.sleep(self.delay).await;
        Ok(())
    }
}

/// `update` returns `None` once the owning component is gone, and the result
/// is then dropped.
pub async fn submit_with<B, U>(backend: &B, mut update: U) -> Option<bool>
where
    B: ContactBackend,
    U: FnMut(&mut dyn FnMut(&mut ContactForm) -> bool) -> Option<bool>,
{
    let mut message = None;
    update(&mut |form: &mut ContactForm| match form.begin_submit() {
        Ok(m) => {
            message = Some(m);
            true
        }
        Err(e) => {
            log::debug!("submit ignored: {e}");
            false
        }
    })?;
    let message = message?;
    let result = backend.submit(message).await;
    update(&mut |form: &mut ContactForm| form.finish_submit(result.clone()))
}

pub fn schedule_dismissal<S, U>(
    scheduler: &S,
    delay: Duration,
    update: U,
) -> Result<TimerGuard<S::Handle>, TimerError>
where
    S: Scheduler,
    U: FnOnce(&mut dyn FnMut(&mut ContactForm) -> bool) -> Option<bool> + 'static,
{
    scheduler.after_guarded(delay, move || {
        update(&mut |form: &mut ContactForm| {
            form.dismiss_success();
            true
        });
    })
}
