//! HTTP client for the badge display agent.
//!
//! The agent accepts a packed 1bpp frame as the raw body of a POST to
//! `https://agent.electricimp.com/<agent-id>/image`.

pub mod client;

pub use client::{AgentClient, PushOutcome, agent_image_url};

/// Host serving device agents.
pub const AGENT_HOST: &str = "agent.electricimp.com";

/// Unified error type for the agent-client crate.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid agent URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Result type alias for agent-client operations.
pub type Result<T> = std::result::Result<T, AgentError>;
