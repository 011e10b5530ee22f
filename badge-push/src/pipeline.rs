//! The load -> extract -> pack -> send pipeline.

use agent_client::{AgentClient, PushOutcome};
use anyhow::Context;
use badge_image::{extract_canvas, load_bilevel};
use image::GrayImage;
use panel_codec::{PackedBuffer, pack_pixels};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::debug_output::write_debug_output;

/// What a completed run did with the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    DryRun { bytes: usize },
    Sent { bytes: usize, outcome: PushOutcome },
}

/// Single-shot pipeline bound to one configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode, binarize, fit and rotate the source image.
    pub fn prepare_image(&self) -> anyhow::Result<GrayImage> {
        let path = &self.config.image_path;
        load_bilevel(path, &self.config.load_options())
            .with_context(|| format!("failed to prepare {}", path.display()))
    }

    /// Build the packed frame without sending it.
    pub fn build_payload(&self) -> anyhow::Result<PackedBuffer> {
        let canvas = self.config.canvas;
        let image = self.prepare_image()?;
        let pixels = extract_canvas(&image, canvas)?;
        let packed = pack_pixels(&pixels, canvas, &self.config.pack_options())?;
        info!(%canvas, bytes = packed.len(), "Frame packed");
        Ok(packed)
    }

    /// Build the frame and send it to the configured agent.
    pub async fn run(&self) -> anyhow::Result<RunReport> {
        let client = AgentClient::new(&self.config.agent_url)?;
        self.run_with(&client).await
    }

    /// Like [`Pipeline::run`] with a caller-supplied client.
    pub async fn run_with(&self, client: &AgentClient) -> anyhow::Result<RunReport> {
        let packed = self.build_payload()?;
        let bytes = packed.len();

        if let Some(dir) = &self.config.debug_output {
            if let Err(e) = write_debug_output(dir, &packed, self.config.polarity) {
                warn!("Failed to write debug output: {e:#}");
            }
        }

        if self.config.dry_run_mode {
            info!(bytes, "Dry-run mode: frame not sent");
            return Ok(RunReport::DryRun { bytes });
        }

        let outcome = client
            .push_image(packed.into_bytes())
            .await
            .with_context(|| format!("failed to send frame to {}", client.endpoint()))?;
        Ok(RunReport::Sent { bytes, outcome })
    }
}
