use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::validation;
use crate::error::AppError;
use crate::models::Settings;

const SETTINGS_FILE: &str = "settings.json";
const ENV_DIR: &str = "CARPORT_PRICING_DIR";
const ENV_PORTABLE: &str = "CARPORT_PRICING_PORTABLE";

pub fn resolve_app_dir() -> Result<PathBuf, AppError> {
  if let Ok(dir) = std::env::var(ENV_DIR) {
    if !dir.trim().is_empty() {
      return Ok(PathBuf::from(dir));
    }
  }

  if let Some(portable) = resolve_portable_dir()? {
    return Ok(portable);
  }

  let base = dirs_next::config_dir()
    .ok_or_else(|| AppError::new("PATH", "config directory not found"))?;
  Ok(base.join("CarportPricing"))
}

pub fn settings_path(app_dir: &Path) -> PathBuf {
  app_dir.join(SETTINGS_FILE)
}

/// Writes the default settings file unless one exists.
pub fn ensure_defaults(app_dir: &Path) -> Result<PathBuf, AppError> {
  fs::create_dir_all(app_dir)?;
  let path = settings_path(app_dir);
  if !path.exists() {
    update_settings(&path, &Settings::default())?;
    info!(path = %path.display(), "wrote default settings");
  }
  Ok(path)
}

pub fn get_settings(path: &Path) -> Result<Settings, AppError> {
  let raw = fs::read_to_string(path)?;
  let settings: Settings = if raw.trim().is_empty() {
    Settings::default()
  } else {
    serde_json::from_str(&raw)?
  };
  validation::ensure_vat_rate(settings.vat_rate)?;
  debug!(path = %path.display(), ?settings, "loaded settings");
  Ok(settings)
}

pub fn update_settings(path: &Path, settings: &Settings) -> Result<(), AppError> {
  validation::ensure_vat_rate(settings.vat_rate)?;
  let json = serde_json::to_string_pretty(settings)?;
  fs::write(path, json)?;
  Ok(())
}

fn resolve_portable_dir() -> Result<Option<PathBuf>, AppError> {
  let env_enabled = std::env::var(ENV_PORTABLE)
    .ok()
    .map(|value| {
      let value = value.to_ascii_lowercase();
      value == "1" || value == "true" || value == "yes"
    })
    .unwrap_or(false);

  let exe_dir = std::env::current_exe()
    .ok()
    .and_then(|path| path.parent().map(|parent| parent.to_path_buf()));

  if let Some(exe_dir) = exe_dir {
    let flag = exe_dir.join("portable.flag");
    let data_dir = exe_dir.join("data");
    if env_enabled || flag.exists() {
      fs::create_dir_all(&data_dir)?;
      return Ok(Some(data_dir));
    }
  }

  Ok(None)
}
