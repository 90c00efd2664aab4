pub mod config;
pub mod error;
pub mod lifecycle;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod summarizer;

pub use error::{Error, Result};
