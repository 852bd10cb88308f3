//! First-success fallback over ranked model candidates.
//!
//! This module encapsulates the fallback algorithm:
//! - Candidates are attempted strictly in list order, one at a time
//! - The first success wins; no further candidates are tried
//! - Each failure is logged and recorded as the most recent error
//! - Attempts are back-to-back with no delay between candidates

use std::future::Future;

/// Outcome of exhausting every candidate without a success.
///
/// Carries only the most recent failure message; earlier failures survive
/// only in the logs.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhausted {
    pub last_error: Option<String>,
}

/// Attempt `send` against each candidate in order, returning the first success.
///
/// `send` yields `Ok(value)` for a usable result or `Err(message)` for any
/// per-candidate failure (bad status, transport error, malformed body, empty
/// text). Failures are logged with the candidate identifier and the loop
/// continues; an empty candidate list exhausts immediately with no error
/// message.
///
/// Generic over the success type so the loop can be tested without touching
/// handler or HTTP types.
pub async fn first_success<'a, T, F, Fut>(
    candidates: &'a [&'a str],
    send: F,
) -> Result<T, Exhausted>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let mut last_error: Option<String> = None;

    for &candidate in candidates {
        match send(candidate).await {
            Ok(value) => {
                tracing::info!(model = %candidate, "Model attempt succeeded");
                return Ok(value);
            }
            Err(message) => {
                tracing::warn!(model = %candidate, error = %message, "Model attempt failed");
                last_error = Some(message);
            }
        }
    }

    Err(Exhausted { last_error })
}
