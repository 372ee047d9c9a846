//! Seam between the controller and an HTTP stack.
//!
//! The browser build implements this with `gloo-net`, the CLI with
//! `reqwest`. Futures are not required to be `Send` so the browser
//! implementation can hold JS handles across the await.

use async_trait::async_trait;

use crate::types::{FormState, PredictionResponse};

/// Failure to obtain a usable `/predict` response.
///
/// Any HTTP status with a well-formed body is a success at this layer; the
/// controller stores whatever shape the service sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),
    /// A response arrived but its body is not a prediction response.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Sends one form to the prediction service.
#[async_trait(?Send)]
pub trait PredictTransport {
    /// POST `form` as JSON to the service's `/predict` path.
    async fn predict(&self, form: &FormState) -> Result<PredictionResponse, TransportError>;
}
