//! Configuration: defaults, validation, loading from `.env` + environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;

use std::fmt;
use std::str::FromStr;

use badge_image::FitMode;

/// Built-in source image profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// `cat.png`, already drawn at panel resolution.
    #[default]
    Cat,
    /// `robot.png`, arbitrary size, fitted and padded.
    Robot,
}

impl Preset {
    pub fn image_file(self) -> &'static str {
        match self {
            Preset::Cat => "cat.png",
            Preset::Robot => "robot.png",
        }
    }

    pub fn fit(self) -> FitMode {
        match self {
            Preset::Cat => FitMode::Exact,
            Preset::Robot => FitMode::FitAndPad,
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cat" => Ok(Preset::Cat),
            "robot" => Ok(Preset::Robot),
            other => Err(format!("unknown preset '{other}'")),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Preset::Cat => "cat",
            Preset::Robot => "robot",
        })
    }
}

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
