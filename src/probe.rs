//! One pass through the device/context lifecycle, reporting what the
//! native layer says at each step.

use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Serialize;
use tokio::signal;

use openal_ctx::{Context, Device, clear_current, current_context};

use crate::config::ProbeConfig;

/// Observations taken while a context is live.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProbeReport {
    pub device: String,
    pub attributes: Vec<i32>,
    pub made_current: bool,
    /// `current_context()` referred to the probe's context
    pub current_matches: bool,
    /// `Context::device()` referred to the opened device
    pub device_matches: bool,
}

pub fn open_device(config: &ProbeConfig) -> Result<Device> {
    Device::open(config.device.as_deref())
        .with_context(|| format!("Failed to open OpenAL device {}", config.device_label()))
}

pub fn create_context<'d>(device: &'d Device, config: &ProbeConfig) -> Result<Context<'d>> {
    Context::new(device, &config.attributes).with_context(|| {
        format!(
            "Failed to create OpenAL context on {} with attributes {:?}",
            config.device_label(),
            config.attributes
        )
    })
}

/// Make `context` current and check both native queries against it.
pub fn inspect(context: &Context<'_>, config: &ProbeConfig) -> ProbeReport {
    let made_current = context.make_current();
    let current_matches = current_context().is_some_and(|c| c == *context);
    let device_matches = context.device().is_some_and(|d| d == *context.owner());

    if !current_matches {
        log::warn!("Current context does not match the probe context");
    }
    if !device_matches {
        log::warn!("Context device does not match the opened device");
    }

    ProbeReport {
        device: config.device_label().to_string(),
        attributes: config.attributes.clone(),
        made_current,
        current_matches,
        device_matches,
    }
}

/// Wait for Ctrl+C, or for `hold_secs` if non-zero.
pub async fn hold(hold_secs: u64) {
    if hold_secs == 0 {
        log::info!("Context is current, press Ctrl+C to release it");
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
        }
        return;
    }

    tokio::select! {
        res = signal::ctrl_c() => {
            if let Err(e) = res {
                log::error!("Failed to listen for Ctrl+C: {}", e);
            }
            log::info!("Received Ctrl+C, shutting down...");
        }
        _ = tokio::time::sleep(Duration::from_secs(hold_secs)) => {
            log::info!("Held context for {}s", hold_secs);
        }
    }
}

/// Release the current selection if it is ours, then destroy the context.
pub fn release(context: Context<'_>) {
    if context.is_current() && !clear_current() {
        log::warn!("Failed to clear the current context before destroying it");
    }
    context.destroy();
}

/// Close the device once every context on it is gone.
pub fn close(device: Device) -> Result<()> {
    if !device.close() {
        anyhow::bail!("alcCloseDevice reported failure");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let report = ProbeReport {
            device: "<default>".to_string(),
            attributes: vec![0x1007, 44100],
            made_current: true,
            current_matches: true,
            device_matches: false,
        };

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["device"], "<default>");
        assert_eq!(json["attributes"], serde_json::json!([4103, 44100]));
        assert_eq!(json["made_current"], true);
        assert_eq!(json["device_matches"], false);
    }
}
