use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::app::AppError;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

const DEFAULT_WIDTH: i32 = 20;
const DEFAULT_HEIGHT: i32 = 20;
const DEFAULT_MAX_CELLS: u64 = 4_000_000;
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 250;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_width: Option<i32>,
    #[serde(default)]
    pub default_height: Option<i32>,
    #[serde(default)]
    pub max_cells: Option<u64>,
    #[serde(default)]
    pub pretty: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub progress_interval_ms: Option<u64>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_size(mut self, width: i32, height: i32) -> Self {
        self.default_width = Some(width);
        self.default_height = Some(height);
        self
    }

    pub fn get_default_width(&self) -> i32 {
        self.default_width.unwrap_or(DEFAULT_WIDTH)
    }

    pub fn get_default_height(&self) -> i32 {
        self.default_height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn set_max_cells(mut self, value: u64) -> Self {
        self.max_cells = Some(value);
        self
    }

    pub fn get_max_cells(&self) -> u64 {
        self.max_cells.unwrap_or(DEFAULT_MAX_CELLS)
    }

    pub fn set_pretty(mut self, value: bool) -> Self {
        self.pretty = Some(value);
        self
    }

    pub fn get_pretty(&self) -> bool {
        self.pretty.unwrap_or_default()
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_progress_interval(&self) -> Duration {
        Duration::from_millis(
            self.progress_interval_ms
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
        )
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazegen")
            .join("settings.ron")
    }

    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options.from_str(text)
    }

    /// Loads settings from `path`, writing the default file there first if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("creating default settings at {:?}", path);
                Self::reset_config(path)?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_ron(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn reset_config(path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
