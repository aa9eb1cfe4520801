//! Relay client — builds the prompt for a profile and fetches the report.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::profile::Profile;
use crate::prompt::build_prompt;

/// Shown in place of a report when anything goes wrong. Every failure mode
/// collapses into this one message; the diagnostic detail is only logged.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I encountered an error generating your roadmap. Please try again.";

const DEFAULT_RELAY_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
enum AdviceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay responded with status {0}")]
    Status(u16),
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    text: String,
}

/// HTTP client for the relay service's `/career` endpoint.
#[derive(Debug, Clone)]
pub struct MentorClient {
    client: reqwest::Client,
    relay_url: String,
}

impl Default for MentorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MentorClient {
    pub fn new() -> Self {
        Self::with_relay_url(DEFAULT_RELAY_URL.to_string())
    }

    pub fn with_relay_url(relay_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
        }
    }

    /// Builds the prompt for `profile`, relays it, and returns the report
    /// text. Never fails from the caller's point of view: any error is
    /// logged and replaced by `FALLBACK_MESSAGE`.
    pub async fn get_career_advice(&self, profile: &Profile) -> String {
        let prompt = build_prompt(profile);
        match self.request_advice(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                error!("Error fetching career advice: {err}");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    async fn request_advice(&self, prompt: &str) -> Result<String, AdviceError> {
        let response = self
            .client
            .post(format!("{}/career", self.relay_url))
            .json(&RelayRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdviceError::Status(status.as_u16()));
        }

        Ok(response.json::<RelayResponse>().await?.text)
    }
}
