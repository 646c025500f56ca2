pub mod client;
pub mod interface;
pub mod payload;
pub mod response;

pub use client::InferenceClient;
pub use interface::{InferenceBackend, InferenceRequest, InferenceTask, UpstreamReply};
