//! HTTP relay module.
//!
//! This module provides the single-endpoint HTTP API that accepts a prompt,
//! forwards it to the upstream generative-text API with a server-held
//! credential, and falls back over ranked model candidates.

pub mod fallback;
mod handlers;
mod server;
pub mod types;

pub use server::{create_router, run_server, AppState};

/// Upstream model identifiers, ranked by preference. The relay tries each
/// in order and returns the first usable result.
pub const MODEL_CANDIDATES: [&str; 3] =
    ["gemini-1.5-flash", "gemini-1.5-flash-8b", "gemini-1.5-pro"];
