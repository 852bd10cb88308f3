//! Request and response wire types.
//!
//! The outbound types follow the upstream generateContent shapes. Upstream
//! response fields are defaulted on deserialize so a shape mismatch reads as
//! a missing field, not a parse failure.

use serde::{Deserialize, Serialize};

/// Fixed generation parameters. These are constants of the design, not
/// configurable per-request.
const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Inbound relay request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Client-supplied credential. Accepted for wire compatibility and
    /// always ignored: the relay only ever uses the server-held key.
    /// Honoring it would hand the trust decision to the browser.
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

/// Successful relay response.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub script: String,
}

/// Upstream generateContent request body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build the upstream body for a prompt with the fixed generation parameters.
    pub fn new(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

/// A content block of ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Upstream generation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// Upstream generateContent success body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

/// One generated candidate in the upstream response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseCandidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Extract the first generated text, if present and non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .filter(|text| !text.is_empty())
    }
}

/// Upstream error body: `{ "error": { "message": "..." } }` with every
/// level optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    pub error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorDetail {
    pub message: Option<String>,
}

impl UpstreamErrorBody {
    /// The upstream-supplied error message, if one was present.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}
