//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is published once by
//! `main` after loading and read from anywhere via [`cfg`].
//!
//! ```ignore
//! use crate::config::cfg;
//!
//! let c = cfg();
//! build_site(&c, &catalog)?;  // Arc auto-derefs to &SiteConfig
//! ```

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
///
/// Holds the default config until [`init_config`] publishes the loaded one.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`.
///
/// Wait-free; the returned `Arc` keeps this snapshot alive even if a new
/// config is published meanwhile.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let config = Arc::new(config);
    CONFIG.store(Arc::clone(&config));
    config
}
