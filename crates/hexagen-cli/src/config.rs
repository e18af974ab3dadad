//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `HEXAGEN_<SECTION>__<KEY>`, e.g.
//!    `HEXAGEN_TOOLCHAIN__PROGRAM=/usr/share/dotnet/dotnet`
//! 3. Config file: `--config <FILE>`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use hexagen_adapters::DotnetToolchain;
use hexagen_core::domain::Framework;

const ENV_PREFIX: &str = "HEXAGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new solutions.
    pub defaults: Defaults,
    /// External toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Target framework used when `--framework` is not given.
    pub framework: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            framework: Framework::DEFAULT.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Program invoked for every toolchain command.
    pub program: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: DotnetToolchain::DEFAULT_PROGRAM.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `--config` path must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) if !path.is_file() => {
                bail!("Configuration file not found: {}", path.display())
            }
            Some(path) => path.clone(),
            None => Self::config_path(),
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hexagen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hexagen", "hexagen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".hexagen.toml"))
    }

    /// The file that [`Self::load`] reads for the given `--config` value.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_framework_is_netcoreapp31() {
        assert_eq!(AppConfig::default().defaults.framework, "netcoreapp3.1");
    }

    #[test]
    fn default_program_is_dotnet() {
        assert_eq!(AppConfig::default().toolchain.program, "dotnet");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[defaults]\nframework = \"net8.0\"\n\n[output]\nno_color = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.framework, "net8.0");
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nno_color = \"sometimes\"").unwrap();
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn active_path_prefers_the_flag() {
        let flag = PathBuf::from("custom.toml");
        assert_eq!(AppConfig::active_path(Some(&flag)), flag);
        assert!(!AppConfig::active_path(None).as_os_str().is_empty());
    }
}
