pub mod error;

pub use error::{Result, StatusClientError};

use std::time::Duration;

use sftpwatch_common::Instance;

/// Relative path polled by the status console.
const TEST_PATH: &str = "api/test";

/// Relative path listing registered service instances.
const INSTANCES_PATH: &str = "api/instances";

pub struct StatusClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the opaque status text from the management `api/test` endpoint.
    ///
    /// Resolves exactly once per call: the body on 2xx, an explicit error
    /// otherwise. The body is returned verbatim.
    pub async fn test(&self) -> Result<String> {
        let endpoint = format!("{}/{}", self.base_url, TEST_PATH);
        tracing::debug!(endpoint = %endpoint, "Requesting status text");

        let resp = self.client.get(&endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StatusClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.text().await?)
    }

    /// Fetch the registered service instances from the management API.
    pub async fn instances(&self) -> Result<Vec<Instance>> {
        let endpoint = format!("{}/{}", self.base_url, INSTANCES_PATH);
        tracing::debug!(endpoint = %endpoint, "Requesting instance list");

        let resp = self.client.get(&endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StatusClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let instances: Vec<Instance> = resp.json().await?;
        tracing::debug!(count = instances.len(), "Fetched instances");

        Ok(instances)
    }
}
