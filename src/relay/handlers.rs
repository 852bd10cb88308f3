//! HTTP request handlers.

use axum::{extract::State, response::IntoResponse, Json};

use super::server::AppState;
use super::types::{
    GenerateContentRequest, GenerateContentResponse, GenerateRequest, GenerateResponse,
    UpstreamErrorBody,
};
use super::{fallback, MODEL_CANDIDATES};
use crate::config::ApiKey;
use crate::error::Error;

/// Handle POST /api/generate-script
///
/// Checks the server-held credential, then walks the ranked model candidates
/// until one produces usable text. Only the terminal outcome is surfaced.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, Error> {
    // Trust boundary: the relay only ever uses the server-held key.
    if request.api_key.is_some() {
        tracing::debug!("Ignoring client-supplied apiKey field");
    }

    let api_key = state
        .config
        .api_key
        .as_ref()
        .ok_or(Error::MissingCredential)?;

    tracing::info!(
        prompt_len = request.prompt.len(),
        "Received generation request"
    );

    let script = fallback::first_success(&MODEL_CANDIDATES, |model| {
        attempt_model(&state, model, api_key, &request.prompt)
    })
    .await
    .map_err(|exhausted| Error::Exhausted {
        last_error: exhausted.last_error,
    })?;

    Ok(Json(GenerateResponse { script }))
}

/// Issue one generateContent call against a single model candidate.
///
/// Any failure mode (transport error, non-success status, malformed body,
/// empty text) collapses into an `Err(message)` for the fallback loop.
async fn attempt_model(
    state: &AppState,
    model: &str,
    api_key: &ApiKey,
    prompt: &str,
) -> Result<String, String> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        state.config.upstream_base.trim_end_matches('/'),
        model
    );

    let response = state
        .http_client
        .post(&url)
        .query(&[("key", api_key.expose_secret())])
        .json(&GenerateContentRequest::new(prompt))
        .send()
        .await
        .map_err(|e| format!("Failed to reach upstream: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        // Prefer the upstream-supplied message; fall back to the bare status.
        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message().map(str::to_string))
            .unwrap_or_else(|| format!("status {}", status.as_u16()));
        return Err(message);
    }

    let body: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse upstream response: {}", e))?;

    match body.first_text() {
        Some(text) => Ok(text.to_string()),
        // A success status with no usable text still fails this candidate.
        None => Err("empty response".to_string()),
    }
}

/// Handle GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "genrelay"
    }))
}
