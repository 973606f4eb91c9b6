//! CLI settings, loaded from a TOML file layered under `ROLLCALL_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Shape of the optional TOML config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Path to the SQLite database file. A leading `~` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,

  /// Default username when `--user` is not given.
  #[serde(default)]
  pub username: Option<String>,
}

fn default_store_path() -> PathBuf { PathBuf::from("rollcall.db") }

impl Settings {
  /// Load settings from `path` (missing file is fine) with environment
  /// overrides, e.g. `ROLLCALL_STORE_PATH`, `ROLLCALL_USERNAME`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("ROLLCALL"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
