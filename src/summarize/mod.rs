pub mod interface;
pub mod service;

pub use service::SummarizationService;
