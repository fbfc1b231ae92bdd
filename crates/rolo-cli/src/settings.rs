//! Runtime settings: optional TOML file layered under `ROLO_*` environment
//! variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rolo_core::clock::DEFAULT_UTC_OFFSET_HOURS;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  /// Hours east of UTC for the reference zone used by meeting checks.
  #[serde(default = "default_utc_offset_hours")]
  pub utc_offset_hours: i32,
  /// JSON seed loaded into the address book at startup.
  #[serde(default)]
  pub data_file:        Option<PathBuf>,
}

fn default_utc_offset_hours() -> i32 { DEFAULT_UTC_OFFSET_HOURS }

/// Read `path` (if any) and the environment. A missing file is not an error.
pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
  let mut builder = config::Config::builder();
  if let Some(path) = path {
    builder = builder.add_source(config::File::from(path).required(false));
  }
  builder
    .add_source(config::Environment::with_prefix("ROLO"))
    .build()
    .context("failed to read config")?
    .try_deserialize()
    .context("failed to deserialise settings")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_without_file() {
    let settings = load(Some(Path::new("/nonexistent/rolo.toml"))).unwrap();
    assert_eq!(settings.utc_offset_hours, DEFAULT_UTC_OFFSET_HOURS);
  }

  #[test]
  fn toml_values_override_defaults() {
    let settings: Settings = config::Config::builder()
      .add_source(config::File::from_str(
        "utc_offset_hours = -5\ndata_file = \"people.json\"",
        config::FileFormat::Toml,
      ))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(settings.utc_offset_hours, -5);
    assert_eq!(settings.data_file, Some(PathBuf::from("people.json")));
  }
}
