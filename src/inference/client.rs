use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::interface::{InferenceBackend, InferenceRequest, UpstreamReply};
use crate::config::SystemConfig;
use crate::error::InferenceError;

/// HTTP client for the hosted inference API
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    pub fn from_config(system_config: &SystemConfig) -> Self {
        Self::new(&system_config.api_base_url, &system_config.api_token)
    }

    /// The model path is appended to the base url as-is
    pub fn endpoint(&self, model_path: &str) -> String {
        format!("{}{}", self.base_url, model_path)
    }
}

#[async_trait]
impl InferenceBackend for InferenceClient {
    async fn infer(&self, request: InferenceRequest) -> Result<UpstreamReply, InferenceError> {
        let url = self.endpoint(&request.model_path);
        debug!("Requesting inference from: {}", url);
        debug!(
            "Payload: {}",
            serde_json::to_string(&request.payload).unwrap_or_default()
        );

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .timeout(request.timeout)
            .json(&request.payload);
        if request.bypass_cache {
            builder = builder.header("x-use-cache", "false");
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        let raw = response.text().await?;
        Ok(UpstreamReply::from_text(status, raw))
    }
}
