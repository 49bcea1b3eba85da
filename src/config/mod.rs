//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, url, language)         |
//! | `[build]`   | Catalog, assets and output paths, sitemap    |
//! | `[serve]`   | Preview server (interface, port)             |
//! | `[contact]` | Contact form simulation (delay)              |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Alex Chen"
//! url = "https://alexchen.dev"
//!
//! [build]
//! data = "portfolio.toml"
//! output = "public"
//!
//! [serve]
//! port = 5277
//!
//! [contact]
//! delay_ms = 1500
//! ```

mod base;
mod build;
mod contact;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use handle::{cfg, init_config};

use base::BaseConfig;
use build::BuildConfig;
use contact::ContactConfig;
use error::ConfigError;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Contact form settings
    #[serde(default)]
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config named by the CLI, falling back to defaults when the
    /// file does not exist, then apply CLI overrides.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Absolute sitemap path inside the output directory
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build { build_args } => {
                Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
                if build_args.clean {
                    self.build.clean = true;
                }
                if build_args.base_url.is_some() {
                    self.base.url = build_args.base_url.clone();
                }
            }
            Commands::Serve {
                interface,
                port,
                delay_ms,
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                Self::update_option(&mut self.contact.delay_ms, delay_ms.as_ref());
            }
            Commands::Init { .. } => {}
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        // Apply CLI overrides first
        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let Some(cli) = self.cli else {
            bail!("CLI arguments were not applied to the config");
        };

        if cli.is_init() {
            if self.config_path.exists() {
                bail!("Config file already exists. Remove it manually or init in a different path.");
            }
            return Ok(());
        }

        if !self.config_path.exists() {
            bail!("Config file not found.");
        }

        if !self.build.data.is_file() {
            bail!(ConfigError::Validation(format!(
                "[build.data] `{}` not found",
                self.build.data.display()
            )));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.serve.interface.parse::<IpAddr>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[serve.interface] `{}` is not an IP address",
                self.serve.interface
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    fn site_dir(config: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("folio.toml"), config).unwrap();
        fs::write(dir.path().join("portfolio.toml"), crate::catalog::DEFAULT_CATALOG).unwrap();
        dir
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str("[base]\ntitle = \"Alex\"").unwrap();
        assert_eq!(config.base.title, "Alex");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"Alex\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[deploy]\nprovider = \"github\"").is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_load_resolves_paths() {
        let dir = site_dir("[build]\noutput = \"dist\"");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "build"]);

        let config = SiteConfig::load(cli).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.build.data, root.join("portfolio.toml"));
        assert_eq!(config.config_path, root.join("folio.toml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_build() {
        let dir = site_dir("[build]\nminify = true");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&[
            "folio",
            "--root",
            root,
            "build",
            "--clean",
            "--minify=false",
            "--base-url",
            "https://preview.example.com",
        ]);

        let config = SiteConfig::load(cli).unwrap();
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(
            config.base.url.as_deref(),
            Some("https://preview.example.com")
        );
    }

    #[test]
    fn test_cli_overrides_serve() {
        let dir = site_dir("[base]\nurl = \"https://alexchen.dev\"\n[serve]\nport = 3000");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "serve", "--port", "9000", "--delay-ms", "0"]);

        let config = SiteConfig::load(cli).unwrap();
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.contact.delay_ms, 0);
        // The public URL is not rewritten to the local address
        assert_eq!(config.base.url.as_deref(), Some("https://alexchen.dev"));
    }

    #[test]
    fn test_validate_missing_data() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "build"]);

        let config = SiteConfig::load(cli).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.data]"));
    }

    #[test]
    fn test_validate_bad_url() {
        let dir = site_dir("[base]\nurl = \"alexchen.dev\"");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "build"]);

        let config = SiteConfig::load(cli).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_interface() {
        let dir = site_dir("[serve]\ninterface = \"localhost\"");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "build"]);

        let config = SiteConfig::load(cli).unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[serve.interface]"));
    }

    #[test]
    fn test_validate_init_existing_config() {
        let dir = site_dir("");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "init"]);

        let config = SiteConfig::load(cli).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_init_named_subdir() {
        let dir = site_dir("");
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["folio", "--root", root, "init", "fresh"]);

        let config = SiteConfig::load(cli).unwrap();
        assert!(config.get_root().ends_with("fresh"));
        assert!(config.validate().is_ok());
    }
}
