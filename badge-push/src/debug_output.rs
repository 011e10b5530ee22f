//! Debug dump of the frame about to be sent.

use std::path::Path;

use anyhow::Context;
use badge_image::render_preview;
use panel_codec::{PackedBuffer, Polarity};

pub const PAYLOAD_FILE: &str = "payload.bin";
pub const PREVIEW_FILE: &str = "preview.png";

/// Write the raw payload and a PNG rendering of it into `dir`.
pub fn write_debug_output(
    dir: &Path,
    packed: &PackedBuffer,
    polarity: Polarity,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let payload_path = dir.join(PAYLOAD_FILE);
    std::fs::write(&payload_path, packed.as_bytes())
        .with_context(|| format!("failed to write {}", payload_path.display()))?;

    let preview_path = dir.join(PREVIEW_FILE);
    render_preview(packed, polarity)
        .save(&preview_path)
        .with_context(|| format!("failed to write {}", preview_path.display()))?;

    tracing::info!(dir = %dir.display(), bytes = packed.len(), "Wrote debug output");
    Ok(())
}
