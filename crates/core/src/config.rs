use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::auto_mode::DayInterval;

static OVERRIDES_FILE_NAME: &str = "overrides.json";
static ENV_DATA_DIR: &str = "PYWALFOX_DATA_DIR";
static PYWAL_COLORS_FILE: &str = "colors.json";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("org", "pywalfox", "pywalfox"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    overrides_path: PathBuf,
    day_interval: DayInterval,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory from the override,
    /// `PYWALFOX_DATA_DIR`, and platform defaults, creating it when missing.
    pub fn discover(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        Self::from_data_dir(data_dir)
    }

    /// Construct [`AppConfig`] directly from a resolved data directory.
    pub fn from_data_dir(data_dir: PathBuf) -> Result<Self> {
        let overrides_path = data_dir.join(OVERRIDES_FILE_NAME);
        Ok(Self {
            data_dir,
            overrides_path,
            day_interval: DayInterval::default(),
        })
    }

    pub fn with_day_interval(mut self, day_interval: DayInterval) -> Self {
        self.day_interval = day_interval;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn overrides_path(&self) -> &Path {
        &self.overrides_path
    }

    pub fn day_interval(&self) -> DayInterval {
        self.day_interval
    }
}

/// Where pywal writes the palette of the current wallpaper.
pub fn pywal_palette_path() -> Option<PathBuf> {
    BaseDirs::new().map(|base| {
        base.home_dir()
            .join(".cache")
            .join("wal")
            .join(PYWAL_COLORS_FILE)
    })
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        return Ok(manifest_dir.join("..").join("tmp").join("dev-pywalfox"));
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".pywalfox"));
    }

    Ok(env::current_dir()?.join(".pywalfox"))
}
