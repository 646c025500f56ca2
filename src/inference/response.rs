use serde_json::{Map, Value};
use tracing::{error, warn};

use super::interface::{InferenceTask, UpstreamReply};
use crate::error::InferenceError;
use crate::utils::text::prefix;

const ERROR_PREFIX: &str = "Error";

/// Characters of upstream error detail kept in the generic failure message
const MAX_ERROR_DETAIL: usize = 200;

/// Shapes the inference API is known to answer with
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    Sequence(Vec<Value>),
    Record(Map<String, Value>),
    Other(Value),
}

impl From<Value> for ResponseShape {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => ResponseShape::Sequence(items),
            Value::Object(fields) => ResponseShape::Record(fields),
            other => ResponseShape::Other(other),
        }
    }
}

/// Text under the task's own field, else `generated_text`; empty strings do not count
fn record_text(task: InferenceTask, fields: &Map<String, Value>) -> Option<String> {
    [task.result_field(), "generated_text"]
        .into_iter()
        .filter_map(|key| fields.get(key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Pull the generated text out of a successful response body
pub fn extract_text(task: InferenceTask, body: &Value) -> Option<String> {
    match ResponseShape::from(body.clone()) {
        ResponseShape::Sequence(items) => match items.first() {
            Some(Value::Object(fields)) => record_text(task, fields),
            _ => None,
        },
        ResponseShape::Record(fields) => record_text(task, &fields),
        ResponseShape::Other(_) => None,
    }
}

/// Turn an upstream status and body into the text shown to the user. Never fails.
pub fn normalize(task: InferenceTask, status: u16, body: Option<&Value>, raw: &str) -> String {
    match status {
        200 => match body {
            Some(body) => extract_text(task, body).unwrap_or_else(|| {
                warn!("Unrecognised {} response shape, returning body verbatim", task.label());
                if raw.is_empty() {
                    body.to_string()
                } else {
                    raw.to_string()
                }
            }),
            None => describe_failure(
                task,
                &InferenceError::Decode("response body is not JSON".to_string()),
            ),
        },
        503 => loading_message(task).to_string(),
        410 => {
            warn!("{} endpoint no longer available (410): {}", task.label(), raw);
            "Error: The inference API endpoint has been deprecated or is no longer available. \
             Please update the API configuration or try a different model."
                .to_string()
        }
        404 => {
            warn!("{} model not found (404): {}", task.label(), raw);
            format!(
                "Error: {} model not found. The model may have been moved or is temporarily \
                 unavailable. Please try a different model.",
                task.label()
            )
        }
        code => {
            let detail = body.map(Value::to_string).unwrap_or_else(|| raw.to_string());
            error!("{} failed with status {}: {}", task.label(), code, detail);
            format!(
                "Error: {} failed (Status {}). {}",
                task.label(),
                code,
                prefix(&detail, MAX_ERROR_DETAIL)
            )
            .trim_end()
            .to_string()
        }
    }
}

/// Display text for a call that produced no usable reply
pub fn describe_failure(task: InferenceTask, err: &InferenceError) -> String {
    match err {
        InferenceError::Timeout => match task {
            InferenceTask::Translation => {
                "Error: Request timed out. The model might be loading - please try again in a moment."
                    .to_string()
            }
            InferenceTask::Summarization => {
                "Error: Request timed out. Please try again.".to_string()
            }
        },
        InferenceError::Connection(detail) => format!("Error: Connection failed - {}", detail),
        InferenceError::Decode(detail) => format!(
            "Error: {} failed - the inference API returned an unreadable response ({})",
            task.label(),
            detail
        ),
        InferenceError::Unexpected(detail) => {
            format!("Error: {} failed - {}", task.label(), detail)
        }
    }
}

pub fn normalize_outcome(
    task: InferenceTask,
    outcome: Result<UpstreamReply, InferenceError>,
) -> String {
    match outcome {
        Ok(reply) => normalize(task, reply.status, reply.body.as_ref(), &reply.raw),
        Err(err) => {
            error!("{} request failed: {}", task.label(), err);
            describe_failure(task, &err)
        }
    }
}

fn loading_message(task: InferenceTask) -> &'static str {
    match task {
        InferenceTask::Translation => {
            "⏳ Model is loading, please wait 20-30 seconds and try again..."
        }
        InferenceTask::Summarization => "⏳ Model is loading, please wait a moment and try again...",
    }
}

/// Whether a normalized result is a failure message rather than generated text
pub fn is_error_message(text: &str) -> bool {
    text.starts_with(ERROR_PREFIX)
}
