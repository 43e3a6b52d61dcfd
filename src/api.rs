#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use futures::FutureExt;
use gloo_net::http::Request;

use crate::config::Config;
use crate::models::{AskRequest, AskResponse};
use crate::state::Transport;

/// Failure of a single exchange with the answering endpoint.
///
/// Every way a call can go wrong is converted into one of these at this
/// boundary; nothing propagates to the store as a panic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Shape(String),
}

/// Resolves the ask endpoint against a base URL. An empty base yields an
/// origin-relative path.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}/api/ask", base_url.trim_end_matches('/'))
}

/// Performs exactly one exchange with the answering endpoint. No retries,
/// no timeout beyond what the browser's fetch applies.
pub async fn ask(endpoint: &str, question: &str) -> Result<AskResponse, TransportError> {
    let body = AskRequest {
        question: question.to_owned(),
    };

    let resp = Request::post(endpoint)
        .json(&body)
        .map_err(|e| TransportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(TransportError::Status(resp.status()));
    }

    resp.json::<AskResponse>()
        .await
        .map_err(|e| TransportError::Shape(e.to_string()))
}

/// The production transport: `ask` against the configured endpoint.
pub fn http_transport(config: &Config) -> Transport {
    let endpoint = endpoint_url(&config.base_url);
    Arc::new(move |question: String| {
        let endpoint = endpoint.clone();
        async move { ask(&endpoint, &question).await }.boxed_local()
    })
}
