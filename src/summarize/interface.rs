use serde::{Deserialize, Serialize};

use crate::utils::text::count_words;

/// Body of `POST /summarize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_model() -> String {
    "bart".to_string()
}

fn default_length() -> String {
    "short".to_string()
}

fn default_format() -> String {
    "paragraph".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub model_used: String,
    pub length: String,
    pub format: String,
    pub processing_time: f64,
    pub stats: SummaryStats,
}

/// Word counts before and after summarization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    /// Percent of words removed, one decimal place
    pub compression_ratio: f64,
}

impl SummaryStats {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = count_words(original);
        let summary_words = count_words(summary);
        let compression_ratio = if original_words > 0 {
            let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
            (ratio * 10.0).round() / 10.0
        } else {
            0.0
        };
        Self {
            original_words,
            summary_words,
            compression_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: SummarizeRequest = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert_eq!(request.model, "bart");
        assert_eq!(request.length, "short");
        assert_eq!(request.format, "paragraph");
    }

    #[test]
    fn test_stats() {
        let stats = SummaryStats::compute("one two three four five six", "one two");
        assert_eq!(stats.original_words, 6);
        assert_eq!(stats.summary_words, 2);
        assert_eq!(stats.compression_ratio, 66.7);
    }

    #[test]
    fn test_stats_empty_original() {
        assert_eq!(SummaryStats::compute("", "anything").compression_ratio, 0.0);
    }
}
