//! Request descriptions and the network error type.
//!
//! ERROR HANDLING
//! ==============
//! `NetworkError` is the only error a user ever hears about. The adapter
//! toasts it (unless told to stay silent) and hands it back so the calling
//! flow stops where it is and leaves the UI as it was.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use thiserror::Error;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_FETCH: &str = "fetch";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Name/value pairs collected from a `<form>`.
pub type FormFields = Vec<(String, String)>;

/// Everything needed to issue one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub form: Option<FormFields>,
    pub headers: Vec<(&'static str, String)>,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), form: None, headers: Vec::new() }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), form: None, headers: Vec::new() }
    }

    #[must_use]
    pub fn with_form(mut self, fields: FormFields) -> Self {
        self.form = Some(fields);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Add-to-cart posts are marked so the server answers without a redirect.
    #[must_use]
    pub fn from_fetch(self) -> Self {
        self.with_header(REQUESTED_WITH_HEADER, REQUESTED_WITH_FETCH)
    }
}

/// Status-checked response with its body read as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextResponse {
    pub content_type: Option<String>,
    pub body: String,
}

/// Whether a failed request shows the generic error toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorReport {
    #[default]
    Toast,
    Silent,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request to {url} returned {status} {status_text}")]
    Status { url: String, status: u16, status_text: String },
}

impl NetworkError {
    /// Check an HTTP status, failing outside `200..=299`.
    pub fn check_status(url: &str, status: u16, status_text: &str) -> Result<(), Self> {
        if (200..=299).contains(&status) {
            Ok(())
        } else {
            Err(NetworkError::Status { url: url.to_owned(), status, status_text: status_text.to_owned() })
        }
    }

    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        NetworkError::Transport { url: url.to_owned(), message: err.to_string() }
    }
}
