//! genrelay - credential-shielding relay for a hosted generative-text API
//!
//! This library provides the core functionality for the genrelay server:
//! configuration, the HTTP surface, and the ranked-model fallback loop that
//! retries generation against alternative model identifiers.

pub mod config;
pub mod error;
pub mod relay;

pub use config::Config;
pub use error::{Error, Result};
