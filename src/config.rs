#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Client configuration.
///
/// `base_url` is the root against which `/api/ask` is resolved. The
/// default empty string resolves against the page's own origin, which is
/// the normal deployment (the answering service serves the page).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Configuration baked in at build time via `API_BASE_URL`, falling
    /// back to same-origin.
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL").unwrap_or_default().to_owned(),
        }
    }
}
