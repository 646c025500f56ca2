use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::{ModelRegistry, SummaryFormat, SummaryLength, SummaryLengths};
use crate::inference::payload::summarization_payload;
use crate::inference::response::{is_error_message, normalize_outcome};
use crate::inference::{InferenceBackend, InferenceRequest, InferenceTask};
use crate::utils::sentence_divider::to_bullets;
use crate::utils::text::truncate;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub model_id: String,
}

pub struct SummarizationService {
    backend: Arc<dyn InferenceBackend>,
    models: ModelRegistry,
    lengths: SummaryLengths,
    timeout: Duration,
}

impl SummarizationService {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        models: ModelRegistry,
        lengths: SummaryLengths,
        timeout: Duration,
    ) -> Self {
        Self {
            backend,
            models,
            lengths,
            timeout,
        }
    }

    pub async fn summarize(
        &self,
        text: &str,
        model_id: &str,
        length: SummaryLength,
        format: SummaryFormat,
    ) -> Summary {
        let model = self.models.resolve(model_id);
        let profile = self.lengths.profile(length);
        info!(
            "Summarizing with {} ({}), length {:?}, format {:?}",
            model.id, model.backend_path, length, format
        );
        debug!("Text: {}", truncate(text, 100));

        let request = InferenceRequest {
            model_path: model.backend_path.clone(),
            payload: summarization_payload(text, profile),
            timeout: self.timeout,
            bypass_cache: false,
        };

        let mut summary =
            normalize_outcome(InferenceTask::Summarization, self.backend.infer(request).await);
        if format == SummaryFormat::Bullets && !is_error_message(&summary) {
            summary = to_bullets(&summary);
        }
        debug!("Summary result: {}", truncate(&summary, 100));

        Summary {
            text: summary,
            model_id: model.id.clone(),
        }
    }
}
