use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chaincheck_core::DEFAULT_ANALYSIS_DELAY;
use chaincheck_logging::{app_info, app_warn};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::logging::LogDestination;
use super::ui::constants::MIN_WINDOW_SIZE;

pub const CONFIG_FILENAME: &str = "chaincheck.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY.as_millis() as u64,
            window_width: 1100.0,
            window_height: 860.0,
            log_destination: LogDestination::Both,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Initial window size, never below the minimum the window allows.
    pub fn window_size(&self) -> [f32; 2] {
        let [min_width, min_height] = MIN_WINDOW_SIZE;
        [
            clamp_dimension(self.window_width, min_width),
            clamp_dimension(self.window_height, min_height),
        ]
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }
}

fn clamp_dimension(value: f32, min: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Reads `{dir}/chaincheck.ron`. `Ok(None)` means no file exists yet.
pub fn load(dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = config_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}

/// Atomically writes the config by writing a temp file then renaming it.
pub fn save(dir: &Path, config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let content = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::new())?;
    let target = config_path(dir);
    let io_err = |source: io::Error| ConfigError::Io {
        path: target.clone(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.as_file_mut().sync_all().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;
    Ok(target)
}

/// Turns the outcome of [`load`] into the config to run with, logging what
/// happened. A missing file is replaced with defaults on disk; a broken one is
/// left alone so the user can fix it.
pub fn settle(dir: &Path, loaded: Result<Option<AppConfig>, ConfigError>) -> AppConfig {
    match loaded {
        Ok(Some(config)) => {
            app_info!("Loaded config from {:?}", config_path(dir));
            config
        }
        Ok(None) => {
            let config = AppConfig::default();
            match save(dir, &config) {
                Ok(path) => app_info!("Wrote default config to {:?}", path),
                Err(err) => app_warn!("Could not write default config: {}", err),
            }
            config
        }
        Err(err) => {
            app_warn!("Using default config: {}", err);
            AppConfig::default()
        }
    }
}
