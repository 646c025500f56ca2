use serde::{Deserialize, Serialize};

/// Body of `POST /translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_source() -> String {
    "auto".to_string()
}

fn default_target() -> String {
    "en".to_string()
}

fn default_model() -> String {
    "nllb".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub model_used: String,
    pub processing_time: f64,
}
