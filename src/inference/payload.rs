use serde::Serialize;

use crate::catalog::LengthProfile;
use crate::translate::language_codes::{to_backend_code, ModelFamily};

/// Request body accepted by the hosted inference API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferencePayload {
    pub inputs: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameters {
    Translation {
        src_lang: String,
        tgt_lang: String,
    },
    Summarization {
        max_length: u32,
        min_length: u32,
        do_sample: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Options {
    pub wait_for_model: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,
}

pub fn translation_payload(
    text: &str,
    family: ModelFamily,
    source: &str,
    target: &str,
) -> InferencePayload {
    match family {
        ModelFamily::Nllb => InferencePayload {
            inputs: text.to_string(),
            parameters: Some(Parameters::Translation {
                src_lang: to_backend_code(source, family),
                tgt_lang: to_backend_code(target, family),
            }),
            options: Some(Options {
                wait_for_model: true,
                use_cache: Some(false),
            }),
        },
        ModelFamily::Generic => InferencePayload {
            inputs: text.to_string(),
            parameters: None,
            options: Some(Options {
                wait_for_model: true,
                use_cache: None,
            }),
        },
    }
}

pub fn summarization_payload(text: &str, profile: LengthProfile) -> InferencePayload {
    InferencePayload {
        inputs: text.to_string(),
        parameters: Some(Parameters::Summarization {
            max_length: profile.max_length,
            min_length: profile.min_length,
            do_sample: false,
        }),
        options: None,
    }
}
