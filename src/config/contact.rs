//! `[contact]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[contact]` section in folio.toml - contact form simulation.
///
/// Messages are never delivered; submitting waits `delay_ms` and reports
/// success.
///
/// # Example
/// ```toml
/// [contact]
/// delay_ms = 0   # respond immediately
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    /// Simulated network delay in milliseconds.
    #[serde(default = "defaults::contact::delay_ms")]
    #[educe(Default = defaults::contact::delay_ms())]
    pub delay_ms: u64,
}

impl ContactConfig {
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
