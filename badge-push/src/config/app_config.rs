//! Runtime configuration loaded from defaults + environment overrides.

use std::path::PathBuf;

use badge_image::{FitMode, LoadOptions};
use panel_codec::{Canvas, PackOptions, Polarity};

use super::Preset;
use super::defaults::{DEFAULT_AGENT_URL, PLACEHOLDER_AGENT_ID, get_default};
use super::validation::validate_setting;

/// Everything one run of the pipeline needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub preset: Preset,
    pub image_path: PathBuf,
    pub fit: FitMode,
    pub agent_url: String,
    pub canvas: Canvas,
    pub rotate_180: bool,
    pub polarity: Polarity,
    pub dry_run_mode: bool,
    pub debug_output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let preset = Preset::default();
        Self {
            preset,
            image_path: PathBuf::from(preset.image_file()),
            fit: preset.fit(),
            agent_url: DEFAULT_AGENT_URL.into(),
            canvas: Canvas::BADGE,
            rotate_180: true,
            polarity: Polarity::LitIsOne,
            dry_run_mode: false,
            debug_output: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset or blank keys
    /// take their default; every value is validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Result<String, anyhow::Error> {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string());
            validate_setting(key, &value)
                .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;
            Ok(value)
        };

        let preset: Preset = g("BADGE_PRESET")?.parse().map_err(anyhow::Error::msg)?;

        let image_path = match g("BADGE_IMAGE")? {
            p if p.is_empty() => PathBuf::from(preset.image_file()),
            p => PathBuf::from(p),
        };

        let fit = match g("BADGE_FIT")?.as_str() {
            "exact" => FitMode::Exact,
            "fit" => FitMode::FitAndPad,
            _ => preset.fit(),
        };

        let canvas = Canvas::new(
            g("CANVAS_WIDTH")?.parse()?,
            g("CANVAS_HEIGHT")?.parse()?,
        );

        let polarity = match g("LIT_POLARITY")?.as_str() {
            "zero" => Polarity::LitIsZero,
            _ => Polarity::LitIsOne,
        };

        let debug_output = Some(g("DEBUG_OUTPUT")?)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let config = Self {
            preset,
            image_path,
            fit,
            agent_url: g("AGENT_URL")?,
            canvas,
            rotate_180: g("ROTATE_180")? == "true",
            polarity,
            dry_run_mode: g("DRY_RUN_MODE")? == "true",
            debug_output,
        };

        if config.agent_url.contains(PLACEHOLDER_AGENT_ID) && !config.dry_run_mode {
            tracing::warn!(
                url = %config.agent_url,
                "AGENT_URL still contains the placeholder agent id"
            );
        }

        tracing::info!(
            preset = %config.preset,
            image = %config.image_path.display(),
            canvas = %config.canvas,
            dry_run = config.dry_run_mode,
            "Settings loaded"
        );
        Ok(config)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new()
            .with_canvas(self.canvas)
            .with_fit(self.fit)
            .with_rotate_180(self.rotate_180)
    }

    /// Frames always come from a canvas-sized image, so the codec's default
    /// trailing-row policy (reject) applies.
    pub fn pack_options(&self) -> PackOptions {
        PackOptions::new().with_polarity(self.polarity)
    }
}
