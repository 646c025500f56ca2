use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ConfigError;

/// A language offered to the frontend picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native: String,
}

/// Static description of a hosted model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,

    #[serde(rename = "name")]
    pub display_name: String,

    /// Path appended to the inference API base url
    #[serde(rename = "model_path")]
    pub backend_path: String,

    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthProfile {
    pub max_length: u32,
    pub min_length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryLengths {
    pub short: LengthProfile,
    pub medium: LengthProfile,
    pub long: LengthProfile,
}

impl SummaryLengths {
    pub fn profile(&self, length: SummaryLength) -> LengthProfile {
        match length {
            SummaryLength::Short => self.short,
            SummaryLength::Medium => self.medium,
            SummaryLength::Long => self.long,
        }
    }
}

impl Default for SummaryLengths {
    fn default() -> Self {
        Self {
            short: LengthProfile {
                max_length: 130,
                min_length: 30,
            },
            medium: LengthProfile {
                max_length: 250,
                min_length: 100,
            },
            long: LengthProfile {
                max_length: 400,
                min_length: 200,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    /// Unknown keys fall back to `Short`
    pub fn from_key(key: &str) -> Self {
        match key {
            "medium" => SummaryLength::Medium,
            "long" => SummaryLength::Long,
            _ => SummaryLength::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Paragraph,
    Bullets,
}

impl SummaryFormat {
    pub fn from_key(key: &str) -> Self {
        match key {
            "bullets" => SummaryFormat::Bullets,
            _ => SummaryFormat::Paragraph,
        }
    }
}

/// Model table with a guaranteed default entry
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
    default_index: usize,
}

impl ModelRegistry {
    pub fn new(models: Vec<ModelDescriptor>, default_id: &str) -> Result<Self, ConfigError> {
        let default_index = models
            .iter()
            .position(|m| m.id == default_id)
            .ok_or_else(|| ConfigError::UnknownDefaultModel(default_id.to_string()))?;
        Ok(Self {
            models,
            default_index,
        })
    }

    /// Look up a model by id, falling back to the default model
    pub fn resolve(&self, id: &str) -> &ModelDescriptor {
        self.models
            .iter()
            .find(|m| m.id == id)
            .unwrap_or(&self.models[self.default_index])
    }

    pub fn default_model(&self) -> &ModelDescriptor {
        &self.models[self.default_index]
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }
}

/// Read-only tables built once at startup and shared by every request
#[derive(Debug, Clone)]
pub struct Catalog {
    pub languages: Vec<Language>,
    pub translation_models: ModelRegistry,
    pub summarization_models: ModelRegistry,
    pub summary_lengths: SummaryLengths,
}

impl Catalog {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let models = &config.model_config;
        Ok(Self {
            languages: config.languages.clone(),
            translation_models: ModelRegistry::new(
                models.translation_models.clone(),
                &models.default_translation_model,
            )?,
            summarization_models: ModelRegistry::new(
                models.summarization_models.clone(),
                &models.default_summarization_model,
            )?,
            summary_lengths: config.summary_lengths,
        })
    }
}

fn model(id: &str, display_name: &str, backend_path: &str, recommended: bool) -> ModelDescriptor {
    ModelDescriptor {
        id: id.to_string(),
        display_name: display_name.to_string(),
        backend_path: backend_path.to_string(),
        recommended,
    }
}

pub fn default_translation_models() -> Vec<ModelDescriptor> {
    vec![
        model(
            "nllb",
            "NLLB-200 Distilled (Best for Indian Languages)",
            "facebook/nllb-200-distilled-600M",
            true,
        ),
        model("opus", "Helsinki-NLP OPUS (Fast)", "Helsinki-NLP/opus-mt-en-mul", false),
        model(
            "mbart",
            "mBART-50 (Multilingual)",
            "facebook/mbart-large-50-one-to-many-mmt",
            false,
        ),
    ]
}

pub fn default_summarization_models() -> Vec<ModelDescriptor> {
    vec![
        model("bart", "BART-large-CNN (Best Quality)", "facebook/bart-large-cnn", true),
        model("distilbart", "DistilBART (Faster)", "sshleifer/distilbart-cnn-12-6", false),
        model("t5", "T5-base (Balanced)", "t5-base", false),
        model("mbart", "mBART-50 (Multilingual)", "facebook/mbart-large-50", false),
    ]
}

pub fn default_languages() -> Vec<Language> {
    [
        ("auto", "Auto-detect", "Auto-detect"),
        ("en", "English", "English"),
        ("hi", "Hindi", "हिन्दी"),
        ("bn", "Bengali", "বাংলা"),
        ("te", "Telugu", "తెలుగు"),
        ("mr", "Marathi", "मराठी"),
        ("ta", "Tamil", "தமிழ்"),
        ("gu", "Gujarati", "ગુજરાતી"),
        ("ur", "Urdu", "اردو"),
        ("kn", "Kannada", "ಕನ್ನಡ"),
        ("ml", "Malayalam", "മലയാളം"),
        ("pa", "Punjabi", "ਪੰਜਾਬੀ"),
        ("or", "Odia", "ଓଡ଼ିଆ"),
        ("as", "Assamese", "অসমীয়া"),
        ("es", "Spanish", "Español"),
        ("fr", "French", "Français"),
        ("de", "German", "Deutsch"),
        ("zh", "Chinese", "中文"),
        ("ar", "Arabic", "العربية"),
        ("ja", "Japanese", "日本語"),
        ("ko", "Korean", "한국어"),
        ("pt", "Portuguese", "Português"),
        ("ru", "Russian", "Русский"),
        ("it", "Italian", "Italiano"),
        ("nl", "Dutch", "Nederlands"),
        ("tr", "Turkish", "Türkçe"),
        ("pl", "Polish", "Polski"),
        ("vi", "Vietnamese", "Tiếng Việt"),
        ("th", "Thai", "ไทย"),
        ("id", "Indonesian", "Bahasa Indonesia"),
    ]
    .into_iter()
    .map(|(code, name, native)| Language {
        code: code.to_string(),
        name: name.to_string(),
        native: native.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_model() {
        let registry = ModelRegistry::new(default_translation_models(), "nllb").unwrap();
        assert_eq!(registry.resolve("opus").backend_path, "Helsinki-NLP/opus-mt-en-mul");
    }

    #[test]
    fn test_resolve_unknown_model_falls_back_to_default() {
        let registry = ModelRegistry::new(default_summarization_models(), "bart").unwrap();
        assert_eq!(registry.resolve("gpt-99").id, "bart");
        assert_eq!(registry.resolve("").id, "bart");
    }

    #[test]
    fn test_registry_rejects_missing_default() {
        let err = ModelRegistry::new(default_translation_models(), "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_length_profile_fallback() {
        let lengths = SummaryLengths::default();
        assert_eq!(lengths.profile(SummaryLength::from_key("long")).max_length, 400);
        assert_eq!(lengths.profile(SummaryLength::from_key("medium")).min_length, 100);
        assert_eq!(
            lengths.profile(SummaryLength::from_key("enormous")),
            lengths.short
        );
    }

    #[test]
    fn test_summary_format_from_key() {
        assert_eq!(SummaryFormat::from_key("bullets"), SummaryFormat::Bullets);
        assert_eq!(SummaryFormat::from_key("paragraph"), SummaryFormat::Paragraph);
        assert_eq!(SummaryFormat::from_key("Bullets"), SummaryFormat::Paragraph);
    }

    #[test]
    fn test_model_descriptor_wire_names() {
        let value = serde_json::to_value(&default_translation_models()[0]).unwrap();
        assert_eq!(value["name"], "NLLB-200 Distilled (Best for Indian Languages)");
        assert_eq!(value["model_path"], "facebook/nllb-200-distilled-600M");
        assert_eq!(value["recommended"], true);
    }

    #[test]
    fn test_default_languages_start_with_auto() {
        let languages = default_languages();
        assert_eq!(languages.len(), 30);
        assert_eq!(languages[0].code, "auto");
        assert!(languages.iter().any(|l| l.code == "hi" && l.native == "हिन्दी"));
    }
}
