/// Model families that differ in how they expect language information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// NLLB-200: needs script-tagged `src_lang` / `tgt_lang` parameters
    Nllb,
    /// Everything else takes bare input text
    Generic,
}

impl ModelFamily {
    pub fn for_model(model_id: &str) -> Self {
        match model_id {
            "nllb" => ModelFamily::Nllb,
            _ => ModelFamily::Generic,
        }
    }
}

const NLLB_FALLBACK: &str = "eng_Latn";

fn nllb_code(code: &str) -> Option<&'static str> {
    let mapped = match code {
        "en" => "eng_Latn",
        "hi" => "hin_Deva",
        "bn" => "ben_Beng",
        "te" => "tel_Telu",
        "mr" => "mar_Deva",
        "ta" => "tam_Taml",
        "gu" => "guj_Gujr",
        "ur" => "urd_Arab",
        "kn" => "kan_Knda",
        "ml" => "mal_Mlym",
        "pa" => "pan_Guru",
        "or" => "ory_Orya",
        "as" => "asm_Beng",
        "es" => "spa_Latn",
        "fr" => "fra_Latn",
        "de" => "deu_Latn",
        "zh" => "zho_Hans",
        "ar" => "arb_Arab",
        "ja" => "jpn_Jpan",
        "ko" => "kor_Hang",
        "pt" => "por_Latn",
        "ru" => "rus_Cyrl",
        "it" => "ita_Latn",
        "nl" => "nld_Latn",
        "tr" => "tur_Latn",
        "pl" => "pol_Latn",
        "vi" => "vie_Latn",
        "th" => "tha_Thai",
        "id" => "ind_Latn",
        _ => return None,
    };
    Some(mapped)
}

/// Convert a 2-letter code into the code scheme the model family expects
pub fn to_backend_code(code: &str, family: ModelFamily) -> String {
    match family {
        ModelFamily::Nllb => nllb_code(code).unwrap_or(NLLB_FALLBACK).to_string(),
        ModelFamily::Generic => code.to_string(),
    }
}
