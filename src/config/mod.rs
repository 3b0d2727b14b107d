use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default tree scanned by `devaudit repos`.
pub const DEFAULT_SCAN_ROOT: &str = "~/code";

/// LaunchServices store read by `devaudit apps --source launch-services`.
pub const DEFAULT_LAUNCH_SERVICES_DB: &str = "~/Library/Application Support/com.apple.LaunchServices/com.apple.launchservices.secure.plist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_scan_root")]
    pub scan_root: String,
    #[serde(default = "default_launch_services_db")]
    pub launch_services_db: String,
    #[serde(default = "default_git_command")]
    pub git_command: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_scan_root() -> String {
    DEFAULT_SCAN_ROOT.to_string()
}
fn default_launch_services_db() -> String {
    DEFAULT_LAUNCH_SERVICES_DB.to_string()
}
fn default_git_command() -> String {
    "git".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_root: default_scan_root(),
            launch_services_db: default_launch_services_db(),
            git_command: default_git_command(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.devaudit`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".devaudit")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("devaudit.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    /// Existing files are left untouched unless `force` is set.
    pub fn save_to(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Scan root with `~` expanded.
    pub fn scan_root_path(&self) -> PathBuf {
        expand_tilde(&self.scan_root)
    }

    /// LaunchServices database path with `~` expanded.
    pub fn launch_services_db_path(&self) -> PathBuf {
        expand_tilde(&self.launch_services_db)
    }
}
