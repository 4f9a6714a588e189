use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", "blink") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("blink_config.json")
        }
    }

    pub fn log_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("blink"),
            )
        } else {
            ProjectDirs::from("", "", "blink").map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }
}
