//! HTTP transport to the prediction service.
//!
//! Client-side (hydrate): real `POST {base}/predict` via `gloo-net`.
//! Server-side (SSR): the page never submits during rendering, so the
//! transport reports itself unavailable.
//!
//! The base address is baked in at build time from `PREDICT_API_URL`,
//! falling back to the local development service.

use async_trait::async_trait;
use predict::{FormState, PredictTransport, PredictionResponse, TransportError, predict_url, resolve_base_url};

/// `PredictTransport` backed by the browser's fetch.
#[derive(Clone, Debug)]
pub struct ApiTransport {
    url: String,
}

impl ApiTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { url: predict_url(base_url) }
    }

    /// Transport for the base address configured at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(&resolve_base_url(option_env!("PREDICT_API_URL")))
    }

    /// Full `/predict` URL requests are sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl PredictTransport for ApiTransport {
    async fn predict(&self, form: &FormState) -> Result<PredictionResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let result = send(&self.url, form).await;
            if let Err(err) = &result {
                log::warn!("predict request to {} failed: {err}", self.url);
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(TransportError::Request("predictions are only requested from the browser".to_owned()))
        }
    }
}

/// Any status is accepted as long as the body is a prediction response.
#[cfg(feature = "hydrate")]
async fn send(url: &str, form: &FormState) -> Result<PredictionResponse, TransportError> {
    let resp = gloo_net::http::Request::post(url)
        .header("Content-Type", "application/json")
        .json(form)
        .map_err(|e| TransportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;
    let body = resp.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
    PredictionResponse::from_json(&body).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
