//! Client for a hosted model `:predict` endpoint.
//!
//! The request carries a single base64-encoded serialized example; the
//! response carries one prediction object per instance.

use crate::domain::PredictionResult;
use crate::error::AppError;
use crate::port::Predictor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MlEngineConfig {
    pub endpoint: String,
    pub project: String,
    pub model: String,
    pub version: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl MlEngineConfig {
    pub fn predict_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/models/{}/versions/{}:predict",
            self.endpoint.trim_end_matches('/'),
            self.project,
            self.model,
            self.version
        )
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<EncodedInstance>,
}

#[derive(Debug, Serialize)]
struct EncodedInstance {
    b64: String,
}

#[derive(Debug, Clone)]
pub struct MlEngineClient {
    client: Client,
    url: String,
    access_token: Option<String>,
}

impl MlEngineClient {
    /// # Errors
    /// `Config` if the HTTP client cannot be built.
    pub fn new(config: MlEngineConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build prediction client: {e}")))?;

        Ok(Self {
            client,
            url: config.predict_url(),
            access_token: config.access_token,
        })
    }

    async fn call(&self, example: Vec<u8>) -> Result<PredictionResult, AppError> {
        let body = PredictRequest {
            instances: vec![EncodedInstance {
                b64: BASE64.encode(&example),
            }],
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(ref token) = self.access_token {
            request = request.bearer_auth(token);
        }

        debug!(url = %self.url, example_bytes = example.len(), "sending prediction request");
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Prediction(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Prediction(format!(
                "endpoint returned status {status}: {error_body}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Prediction(format!("failed to read response body: {e}")))?;
        let result = decode_response(&text)?;
        info!(
            video_id = %result.subject_id,
            classes = result.len(),
            "received prediction"
        );
        Ok(result)
    }
}

/// Take the first element of the `predictions` array.
fn decode_response(body: &str) -> Result<PredictionResult, AppError> {
    let mut value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AppError::Format(format!("prediction response is not JSON: {e}")))?;

    let first = value
        .get_mut("predictions")
        .and_then(|p| p.as_array_mut())
        .filter(|p| !p.is_empty())
        .map(|p| p.swap_remove(0))
        .ok_or_else(|| AppError::Format("prediction response has no predictions".to_string()))?;

    PredictionResult::from_json(first)
}

impl Predictor for MlEngineClient {
    fn predict(
        &self,
        example: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, AppError>> + Send + '_>> {
        Box::pin(self.call(example))
    }
}
