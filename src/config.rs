use crate::app_dirs::AppDirs;
use crate::error::{BlinkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ROUNDS: usize = 5;
pub const DEFAULT_RELOCATION_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

pub const MAX_ROUNDS: usize = 50;
pub const MIN_RELOCATION_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub rounds: usize,
    pub relocation_interval_ms: u64,
    pub tick_rate_ms: u64,
    /// let space/enter count as a tap wherever the target is
    pub keyboard_taps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            relocation_interval_ms: DEFAULT_RELOCATION_INTERVAL_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            keyboard_taps: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(BlinkError::InvalidConfig(format!(
                "rounds must be between 1 and {MAX_ROUNDS}, got {}",
                self.rounds
            )));
        }
        if self.relocation_interval_ms < MIN_RELOCATION_INTERVAL_MS {
            return Err(BlinkError::InvalidConfig(format!(
                "relocation interval must be at least {MIN_RELOCATION_INTERVAL_MS} ms, got {}",
                self.relocation_interval_ms
            )));
        }
        if !(10..=1000).contains(&self.tick_rate_ms) {
            return Err(BlinkError::InvalidConfig(format!(
                "tick rate must be between 10 and 1000 ms, got {}",
                self.tick_rate_ms
            )));
        }
        Ok(())
    }

    pub fn relocation_interval(&self) -> Duration {
        Duration::from_millis(self.relocation_interval_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict variant of `load` that reports why the file could not be used
    pub fn try_load(&self) -> Result<Config> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice::<Config>(&bytes)?)
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "using default config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
