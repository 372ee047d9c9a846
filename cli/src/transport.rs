//! `reqwest` implementation of the prediction transport.

use async_trait::async_trait;
use predict::{FormState, PredictTransport, PredictionResponse, TransportError, predict_url};

pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), url: predict_url(base_url) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl PredictTransport for HttpTransport {
    async fn predict(&self, form: &FormState) -> Result<PredictionResponse, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        // Non-2xx bodies carry the same shapes, so the status is only logged.
        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Request(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "predict response");

        PredictionResponse::from_json(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
