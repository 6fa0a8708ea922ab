use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::estimator::RatePolicy;

/// Global configuration loaded from `~/.config/eta/config.toml`.
///
/// Every field can be overridden on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtaConfig {
    /// Seconds to wait between polls in one-shot mode.
    pub interval_secs: f64,
    /// Width of the progress line in columns.
    pub output_width: usize,
    /// Rate estimate: "two_point" (oldest vs newest sample) or "least_squares".
    pub rate_policy: RatePolicy,
}

impl Default for EtaConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1.0,
            output_width: 80,
            rate_policy: RatePolicy::TwoPoint,
        }
    }
}

impl EtaConfig {
    /// Poll interval as a `Duration`. Rejects negative or non-finite values.
    pub fn interval(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.interval_secs)
            .with_context(|| format!("invalid interval_secs: {}", self.interval_secs))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("eta")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EtaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EtaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<EtaConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: EtaConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.interval()?;
    Ok(cfg)
}
