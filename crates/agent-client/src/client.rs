use tracing::{debug, info, warn};
use url::Url;

use crate::{AGENT_HOST, AgentError, Result};

/// Endpoint for an agent id.
pub fn agent_image_url(agent_id: &str) -> String {
    format!("https://{AGENT_HOST}/{agent_id}/image")
}

/// Response returned by the agent for a pushed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub status: u16,
    pub body: String,
}

impl PushOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends frames to a single agent endpoint.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AgentClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_http(endpoint, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxy settings, timeouts).
    pub fn with_http(endpoint: &str, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AgentError::UnsupportedScheme(endpoint.scheme().to_string()));
        }
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `body` as-is. One attempt, client default timeouts, no content type.
    ///
    /// A non-2xx status is returned in the outcome rather than as an error.
    /// Once the status has arrived the frame counts as delivered; a failure
    /// reading the response body leaves the outcome body empty.
    pub async fn push_image(&self, body: Vec<u8>) -> Result<PushOutcome> {
        let bytes = body.len();
        debug!(url = %self.endpoint, bytes, "Posting frame to agent");

        let resp = self.http.post(self.endpoint.clone()).body(body).send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_else(|e| {
            warn!(status = status.as_u16(), "Failed to read agent response body: {e}");
            String::new()
        });

        if status.is_success() {
            info!(status = status.as_u16(), bytes, "Agent accepted frame");
        } else {
            warn!(status = status.as_u16(), body = %body, "Agent returned non-success status");
        }

        Ok(PushOutcome {
            status: status.as_u16(),
            body,
        })
    }
}
