//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Agent id left in the default URL; must be replaced before a real push.
pub const PLACEHOLDER_AGENT_ID: &str = "REPLACEME";

pub const DEFAULT_AGENT_URL: &str = "https://agent.electricimp.com/REPLACEME/image";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("BADGE_PRESET", "cat", "Source profile: cat or robot"),
    ("BADGE_IMAGE", "", "Source image path (empty = preset's file)"),
    ("BADGE_FIT", "", "exact or fit (empty = preset's mode)"),
    ("AGENT_URL", DEFAULT_AGENT_URL, "Endpoint receiving the packed frame"),
    ("CANVAS_WIDTH", "264", "Panel width in pixels"),
    ("CANVAS_HEIGHT", "176", "Panel height in pixels"),
    ("ROTATE_180", "true", "Rotate for the inverted panel mounting"),
    ("LIT_POLARITY", "one", "Bit value of a black pixel: one or zero"),
    ("DRY_RUN_MODE", "false", "Build the frame but do not send it"),
    ("DEBUG_OUTPUT", "", "Directory for payload.bin and preview.png"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
