use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::language_codes::ModelFamily;
use crate::catalog::ModelRegistry;
use crate::inference::payload::translation_payload;
use crate::inference::response::normalize_outcome;
use crate::inference::{InferenceBackend, InferenceRequest, InferenceTask};
use crate::utils::text::truncate;

/// Result of a translation call; `text` may be a user-facing failure message
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub model_id: String,
}

/// Formats translation requests and parses the replies
pub struct TranslationService {
    backend: Arc<dyn InferenceBackend>,
    models: ModelRegistry,
    timeout: Duration,
}

impl TranslationService {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        models: ModelRegistry,
        timeout: Duration,
    ) -> Self {
        Self {
            backend,
            models,
            timeout,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        model_id: &str,
    ) -> Translation {
        let model = self.models.resolve(model_id);
        let family = ModelFamily::for_model(&model.id);
        info!(
            "Translating with {} ({}): {} -> {}",
            model.id, model.backend_path, source, target
        );
        debug!("Text: {}", truncate(text, 100));

        let request = InferenceRequest {
            model_path: model.backend_path.clone(),
            payload: translation_payload(text, family, source, target),
            timeout: self.timeout,
            bypass_cache: true,
        };

        let outcome = self.backend.infer(request).await;
        let translated = normalize_outcome(InferenceTask::Translation, outcome);
        debug!("Translation result: {}", truncate(&translated, 100));

        Translation {
            text: translated,
            model_id: model.id.clone(),
        }
    }
}
