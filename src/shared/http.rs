//! Shared HTTP plumbing for the outbound adapters.

use std::time::Duration;

/// Build the single `reqwest::Client` shared by every adapter.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("vibe-check/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// First 200 chars of an error body, for logs and error messages.
pub fn body_snippet(text: &str) -> String {
    text.chars().take(200).collect()
}
