#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One entry of the conversation transcript.
///
/// Fields are never mutated after construction; the transcript is
/// append-only.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub sources: Vec<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }
}

/// Request body for the answering endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// Response from the answering endpoint.
///
/// `sources` is optional on the wire and may arrive malformed; anything
/// that is not an array of strings is coerced to empty rather than
/// failing the whole answer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Vec<String>,
}

fn lenient_sources<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    })
}
