//! Prediction form controller.
//!
//! DESIGN
//! ======
//! Submission is split into two synchronous halves around the single await:
//! [`PredictionForm::begin_submit`] validates and hands out a snapshot plus
//! a [`Ticket`], and [`PredictionForm::finish_submit`] applies the outcome.
//! Reactive UIs keep the controller inside a signal and cannot hold a
//! mutable borrow across the request, so they call the halves directly.
//! [`PredictionForm::submit`] runs both around one transport call.
//!
//! A submit while a request is in flight is refused, and a completion is
//! applied only if its ticket is the latest one issued, so a late response
//! can never overwrite a newer state.

use crate::transport::{PredictTransport, TransportError};
use crate::types::{FormEdit, FormState, PredictionResponse};
use crate::validate::{ValidationError, validate};
use crate::view::ViewState;

/// Identifies one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A validated snapshot ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub form: FormState,
}

/// Why a submit did not dispatch a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a prediction request is already in flight")]
    Busy,
}

/// Form contents plus the visible state of one prediction form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionForm {
    form: FormState,
    view: ViewState,
    generation: u64,
}

impl PredictionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Apply a field edit. The visible state is left as is, so a shown
    /// validation message stays until the next submit.
    pub fn update(&mut self, edit: FormEdit) {
        self.form.apply(edit);
    }

    /// Validate the form and, if it passes, enter loading.
    ///
    /// Every outcome replaces the previous view, which clears any earlier
    /// validation message or result.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Busy`] if a request is in flight (nothing changes),
    /// or [`SubmitError::Invalid`] after showing the validation message.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.view.is_loading() {
            tracing::debug!("submit ignored while a prediction is in flight");
            return Err(SubmitError::Busy);
        }

        if let Err(err) = validate(&self.form) {
            tracing::debug!(%err, "form rejected locally");
            self.view = ViewState::Invalid(err);
            return Err(err.into());
        }

        self.generation += 1;
        self.view = ViewState::Loading;
        tracing::debug!(ticket = self.generation, "dispatching prediction request");
        Ok(Submission { ticket: Ticket(self.generation), form: self.form.clone() })
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is not
    /// the one currently loading.
    pub fn finish_submit(&mut self, ticket: Ticket, outcome: Result<PredictionResponse, TransportError>) -> bool {
        if ticket.0 != self.generation || !self.view.is_loading() {
            tracing::debug!(ticket = ticket.0, current = self.generation, "dropping stale prediction outcome");
            return false;
        }

        self.view = match outcome {
            Ok(resp) => {
                match &resp {
                    PredictionResponse::Decision { status, confidence, .. } => {
                        tracing::info!(%status, ?confidence, "prediction received");
                    }
                    PredictionResponse::Error { error } => {
                        tracing::info!(%error, "prediction service reported an error");
                    }
                }
                ViewState::Result(resp)
            }
            Err(err) => {
                tracing::warn!(error = %err, "prediction request failed");
                ViewState::Failed(err)
            }
        };
        true
    }

    /// Restore the default form and idle view. Any in-flight request is
    /// orphaned and its outcome will be dropped.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.form = FormState::default();
        self.view = ViewState::Idle;
    }

    /// Run one full submission through `transport`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::begin_submit`]; transport failures are not errors here
    /// and show up as [`ViewState::Failed`].
    pub async fn submit<T>(&mut self, transport: &T) -> Result<&ViewState, SubmitError>
    where
        T: PredictTransport + ?Sized,
    {
        let Submission { ticket, form } = self.begin_submit()?;
        let outcome = transport.predict(&form).await;
        self.finish_submit(ticket, outcome);
        Ok(&self.view)
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
