use std::time::Duration;
use thiserror::Error;

/// Port probed when `HTTP_PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 8080;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
#[error("Healthcheck failed: {0}")]
pub struct HealthcheckError(String);

/// Perform a health check against a specific port on localhost
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|e| HealthcheckError(format!("Failed to create HTTP client: {e}")))?;

    let url = format!("http://127.0.0.1:{port}/v1/health");

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| HealthcheckError(format!("Request failed: {e}")))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError(format!(
            "Health endpoint returned status: {}",
            resp.status()
        )))
    }
}
