use anyhow::{Context, Result};

/// Settings for the probe binary.
///
/// Defaults are baked in at compile time from `config.toml` (see `build.rs`)
/// and may be overridden at runtime through environment variables.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub app_name: &'static str,
    pub app_version: &'static str,

    /// Device to open; `None` selects the default device
    pub device: Option<String>,
    /// Flat ALC key/value list for context creation
    pub attributes: Vec<i32>,
    /// Seconds to keep the context current; 0 waits for Ctrl+C
    pub hold_secs: u64,
}

pub const ENV_DEVICE: &str = "OPENAL_PROBE_DEVICE";
pub const ENV_ATTRIBUTES: &str = "OPENAL_PROBE_ATTRIBUTES";
pub const ENV_HOLD_SECS: &str = "OPENAL_PROBE_HOLD_SECS";

impl ProbeConfig {
    /// Build from the values `build.rs` exported from `config.toml`.
    pub fn new() -> Result<Self> {
        Self::from_parts(
            env!("PROBE_DEVICE"),
            env!("PROBE_ATTRIBUTES"),
            env!("PROBE_HOLD_SECS"),
        )
    }

    fn from_parts(device: &str, attributes: &str, hold_secs: &str) -> Result<Self> {
        Ok(Self {
            app_name: env!("APP_NAME"),
            app_version: env!("APP_VERSION"),
            device: parse_device(device),
            attributes: parse_attributes(attributes)
                .context("Failed to parse PROBE_ATTRIBUTES")?,
            hold_secs: hold_secs
                .trim()
                .parse()
                .context("Failed to parse PROBE_HOLD_SECS")?,
        })
    }

    /// Apply `OPENAL_PROBE_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(device) = lookup(ENV_DEVICE) {
            self.device = parse_device(&device);
        }
        if let Some(attrs) = lookup(ENV_ATTRIBUTES) {
            self.attributes =
                parse_attributes(&attrs).with_context(|| format!("Invalid {}", ENV_ATTRIBUTES))?;
        }
        if let Some(secs) = lookup(ENV_HOLD_SECS) {
            self.hold_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_HOLD_SECS, secs))?;
        }
        Ok(())
    }

    /// Human-readable device selector for logs.
    pub fn device_label(&self) -> &str {
        self.device.as_deref().unwrap_or("<default>")
    }
}

fn parse_device(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a comma-separated integer list; entries may be decimal or `0x` hex.
fn parse_attributes(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => i32::from_str_radix(hex, 16),
                None => s.parse(),
            };
            parsed.with_context(|| format!("Invalid attribute value {:?}", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_device_selects_default() {
        let config = ProbeConfig::from_parts("  ", "", "0").unwrap();
        assert_eq!(config.device, None);
        assert_eq!(config.device_label(), "<default>");
        assert!(config.attributes.is_empty());
        assert_eq!(config.hold_secs, 0);
    }

    #[test]
    fn test_attributes_accept_decimal_and_hex() {
        assert_eq!(
            parse_attributes("0x1007, 44100,4105,0").unwrap(),
            vec![0x1007, 44100, 0x1009, 0]
        );
    }

    #[test]
    fn test_bad_attribute_is_an_error() {
        assert!(parse_attributes("0x1007,fast").is_err());
        assert!(ProbeConfig::from_parts("", "1,2", "soon").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ProbeConfig::from_parts("", "", "0").unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_DEVICE, "OpenAL Soft"),
            (ENV_ATTRIBUTES, "0x1007,48000"),
            (ENV_HOLD_SECS, "3"),
        ]
        .into_iter()
        .collect();

        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.device.as_deref(), Some("OpenAL Soft"));
        assert_eq!(config.attributes, vec![0x1007, 48000]);
        assert_eq!(config.hold_secs, 3);
    }

    #[test]
    fn test_missing_env_keeps_defaults() {
        let mut config = ProbeConfig::from_parts("Some Device", "4103,22050", "5").unwrap();
        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.device.as_deref(), Some("Some Device"));
        assert_eq!(config.attributes, vec![4103, 22050]);
        assert_eq!(config.hold_secs, 5);
    }
}
