//! Setting value validation.

use url::Url;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "BADGE_PRESET" => {
            if value != "cat" && value != "robot" {
                return Err("must be 'cat' or 'robot'".into());
            }
        }
        "BADGE_FIT" => {
            if !value.is_empty() && value != "exact" && value != "fit" {
                return Err("must be 'exact' or 'fit'".into());
            }
        }
        "AGENT_URL" => {
            let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err("scheme must be http or https".into());
            }
            if url.host_str().is_none_or(str::is_empty) {
                return Err("missing host".into());
            }
        }
        "CANVAS_WIDTH" | "CANVAS_HEIGHT" => validate_int_range(value, 1, 4096)?,
        "LIT_POLARITY" => {
            if value != "one" && value != "zero" {
                return Err("must be 'one' or 'zero'".into());
            }
        }
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(key, "ROTATE_180" | "DRY_RUN_MODE")
}
