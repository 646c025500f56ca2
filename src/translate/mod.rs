pub mod interface;
pub mod language_codes;
pub mod service;

pub use service::TranslationService;
