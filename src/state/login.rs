//! Login form state: credentials plus the in-flight loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `LoginController`. Credentials are transient and cleared after
//! every settled submit, whatever the outcome.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;
use std::str::FromStr;

pub const SUBMIT_LABEL_IDLE: &str = "Log In";
pub const SUBMIT_LABEL_BUSY: &str = "Logging in...";

/// Email and password as typed into the form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Both fields are required; no other validation is applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Form input addressed by its `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
}

impl FormField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// Form state for one login page instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub credentials: Credentials,
    pub loading: bool,
}

impl FormState {
    /// Replace one field's value, leaving the other untouched.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Email => self.credentials.email = value,
            FormField::Password => self.credentials.password = value,
        }
    }

    /// The submit action is disabled while a request is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL_IDLE }
    }

    /// End-of-submit reset: loading off, both fields blank.
    pub fn settle(&mut self) {
        self.loading = false;
        self.credentials = Credentials::default();
    }
}
