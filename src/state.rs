use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::ConfigError;
use crate::inference::{InferenceBackend, InferenceClient};
use crate::summarize::SummarizationService;
use crate::translate::TranslationService;

/// Shared, read-only state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub translator: Arc<TranslationService>,
    pub summarizer: Arc<SummarizationService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let backend = Arc::new(InferenceClient::from_config(&config.system_config));
        Self::with_backend(config, backend)
    }

    /// Build state around any inference backend
    pub fn with_backend(
        config: Config,
        backend: Arc<dyn InferenceBackend>,
    ) -> Result<Self, ConfigError> {
        let catalog = Catalog::from_config(&config)?;
        let system_config = &config.system_config;

        let translator = TranslationService::new(
            backend.clone(),
            catalog.translation_models.clone(),
            system_config.translation_timeout(),
        );
        let summarizer = SummarizationService::new(
            backend,
            catalog.summarization_models.clone(),
            catalog.summary_lengths,
            system_config.request_timeout(),
        );

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            translator: Arc::new(translator),
            summarizer: Arc::new(summarizer),
        })
    }
}
