//! What the form shows, derived from a single tagged state.
//!
//! Render precedence: a validation or connectivity message replaces the
//! result panel entirely; loading hides both; a stored response renders
//! either its verdict or its server-reported error.

use crate::transport::TransportError;
use crate::types::{Decision, PredictionResponse};
use crate::validate::ValidationError;

/// Fixed message shown when no usable response was obtained.
pub const CONNECTIVITY_MESSAGE: &str = "Could not connect to backend.";

/// Visible state of one prediction form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet, or the form was reset.
    #[default]
    Idle,
    /// Local validation refused the last submit.
    Invalid(ValidationError),
    /// A request is in flight.
    Loading,
    /// The service answered with a verdict or an application error.
    Result(PredictionResponse),
    /// No usable response. The cause is kept for logs only.
    Failed(TransportError),
}

impl ViewState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message for the form's inline error line, if any.
    #[must_use]
    pub fn form_message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.to_string()),
            Self::Failed(_) => Some(CONNECTIVITY_MESSAGE.to_owned()),
            Self::Idle | Self::Loading | Self::Result(_) => None,
        }
    }

    /// Stored response, if one is visible.
    #[must_use]
    pub fn result(&self) -> Option<&PredictionResponse> {
        match self {
            Self::Result(resp) => Some(resp),
            _ => None,
        }
    }

    /// Verdict panel contents, if the visible response is a verdict.
    #[must_use]
    pub fn decision(&self) -> Option<DecisionView<'_>> {
        match self.result()? {
            PredictionResponse::Decision { status, confidence, reason } => Some(DecisionView {
                status: *status,
                confidence: confidence.map(Confidence::new),
                reason: reason.as_deref(),
            }),
            PredictionResponse::Error { .. } => None,
        }
    }

    /// Server-reported error string, if the visible response is one.
    #[must_use]
    pub fn server_error(&self) -> Option<&str> {
        self.result().and_then(PredictionResponse::error)
    }
}

/// Verdict panel contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionView<'a> {
    pub status: Decision,
    pub confidence: Option<Confidence>,
    pub reason: Option<&'a str>,
}

/// Probability-like score in `[0, 1]` attached to a verdict.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confidence(f64);

impl Confidence {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentage label with one decimal, e.g. `"87.0%"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:.1}%", self.0 * 100.0)
    }

    /// Bar fill in percent, clamped to `0..=100`.
    #[must_use]
    pub fn bar_percent(self) -> f64 {
        (self.0 * 100.0).clamp(0.0, 100.0)
    }

    /// CSS width for the bar fill.
    #[must_use]
    pub fn bar_width(self) -> String {
        format!("{:.1}%", self.bar_percent())
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
