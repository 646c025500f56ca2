use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::payload::InferencePayload;
use crate::error::InferenceError;

/// Which kind of generation a call performs; selects the result field and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceTask {
    Translation,
    Summarization,
}

impl InferenceTask {
    /// Field the task-specific pipeline returns, checked before `generated_text`
    pub fn result_field(&self) -> &'static str {
        match self {
            InferenceTask::Translation => "translation_text",
            InferenceTask::Summarization => "summary_text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InferenceTask::Translation => "Translation",
            InferenceTask::Summarization => "Summarization",
        }
    }
}

/// One outbound call to the inference API
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    pub model_path: String,
    pub payload: InferencePayload,
    pub timeout: Duration,
    /// Ask the API to skip its own response cache
    pub bypass_cache: bool,
}

/// Raw upstream answer: status, JSON body if it parsed, and the body text
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Option<Value>,
    pub raw: String,
}

impl UpstreamReply {
    pub fn from_text(status: u16, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let body = serde_json::from_str(&raw).ok();
        Self { status, body, raw }
    }
}

/// Inference backend interface, implemented over HTTP by `InferenceClient`
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Send one request; non-2xx statuses are replies, not errors
    async fn infer(&self, request: InferenceRequest) -> Result<UpstreamReply, InferenceError>;
}
