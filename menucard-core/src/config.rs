//! Catalog Source Discovery Module
//!
//! Finds the catalog file to load. Resolution order:
//!
//! 1. Explicit path (CLI `--catalog`)
//! 2. `MENUCARD_CATALOG` environment variable
//! 3. `menu.yaml`, `menu.yml` or `menu.json` in the working directory
//! 4. `menu.yaml` in the platform config directory
//!
//! Explicit sources must exist; implicit ones are skipped when absent.

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable naming the catalog file
pub const ENV_CATALOG_PATH: &str = "MENUCARD_CATALOG";

/// File names probed in the working directory, in order
pub const LOCAL_CATALOG_NAMES: &[&str] = &["menu.yaml", "menu.yml", "menu.json"];

/// Which discovery rule produced the catalog path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    CliOverride,
    Environment,
    WorkingDirectory,
    PlatformConfig,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceKind::CliOverride => "--catalog",
            SourceKind::Environment => ENV_CATALOG_PATH,
            SourceKind::WorkingDirectory => "working directory",
            SourceKind::PlatformConfig => "platform config",
        };
        f.write_str(label)
    }
}

/// A resolved catalog file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl CatalogSource {
    /// Discover the catalog using the process environment and working directory
    pub fn discover(cli_override: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        let env_value = std::env::var_os(ENV_CATALOG_PATH).map(PathBuf::from);
        Self::resolve(cli_override, env_value, &cwd, platform_config_dir())
    }

    /// Resolve with every input passed explicitly
    pub fn resolve(
        cli_override: Option<PathBuf>,
        env_value: Option<PathBuf>,
        cwd: &Path,
        config_dir: Option<PathBuf>,
    ) -> Result<Self> {
        trace!("Discovering catalog source");

        if let Some(path) = cli_override {
            return Self::explicit(path, SourceKind::CliOverride);
        }

        if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
            return Self::explicit(path, SourceKind::Environment);
        }

        let mut searched = Vec::new();

        for name in LOCAL_CATALOG_NAMES {
            let candidate = cwd.join(name);
            if candidate.is_file() {
                debug!("Using catalog from working directory: {:?}", candidate);
                return Ok(Self {
                    path: candidate,
                    kind: SourceKind::WorkingDirectory,
                });
            }
            searched.push(candidate);
        }

        if let Some(dir) = config_dir {
            let candidate = dir.join("menu.yaml");
            if candidate.is_file() {
                debug!("Using catalog from platform config: {:?}", candidate);
                return Ok(Self {
                    path: candidate,
                    kind: SourceKind::PlatformConfig,
                });
            }
            searched.push(candidate);
        }

        let listing = searched
            .iter()
            .map(|p| format!("  {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n");
        Err(anyhow!(
            "No menu catalog found. Pass --catalog or set {}. Searched:\n{}",
            ENV_CATALOG_PATH,
            listing
        ))
    }

    fn explicit(path: PathBuf, kind: SourceKind) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Catalog path from {} does not exist: {}",
                kind,
                path.display()
            ));
        }
        if !path.is_file() {
            return Err(anyhow!(
                "Catalog path from {} is not a file: {}",
                kind,
                path.display()
            ));
        }

        debug!("Using catalog from {}: {:?}", kind, path);
        Ok(Self { path, kind })
    }
}

/// Platform-specific config directory for menucard
///
/// On Linux: ~/.config/menucard
/// On macOS: ~/Library/Application Support/menucard
/// On Windows: %APPDATA%\menucard
pub fn platform_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "menucard").map(|dirs| dirs.config_dir().to_path_buf())
}
