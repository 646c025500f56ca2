pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod routes;
pub mod state;
pub mod summarize;
pub mod translate;
pub mod utils;
