//! Push a prepared image to the badge display agent.
//!
//! Takes no arguments; everything comes from `.env` / the environment.

use tracing_subscriber::EnvFilter;

use badge_push_lib::config::{self, AppConfig};
use badge_push_lib::pipeline::{Pipeline, RunReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    config::load_dotenv();
    let config = AppConfig::load()?;

    match Pipeline::new(config).run().await? {
        RunReport::DryRun { bytes } => {
            tracing::info!(bytes, "Done (dry run)");
        }
        RunReport::Sent { bytes, outcome } => {
            tracing::info!(bytes, status = outcome.status, "Done");
        }
    }
    Ok(())
}
