use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Workday start as "HH:MM"; validated when the schedule is built.
    #[serde(default = "default_workday_start")]
    pub workday_start: String,
    #[serde(default = "default_late_threshold")]
    pub late_threshold_minutes: i64,
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

fn default_workday_start() -> String {
    "09:00".to_string()
}
fn default_late_threshold() -> i64 {
    15
}
fn default_company_name() -> String {
    "Company".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            workday_start: default_workday_start(),
            late_threshold_minutes: default_late_threshold(),
            company_name: default_company_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stafftrack")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stafftrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("stafftrack.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A present-but-unreadable file is a hard error, never a silent guess.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Validate field shapes without building the schedule.
    pub fn check(&self) -> AppResult<()> {
        if crate::utils::time::parse_time(&self.workday_start).is_none() {
            return Err(AppError::Config(format!(
                "workday_start must be HH:MM, got '{}'",
                self.workday_start
            )));
        }
        if self.late_threshold_minutes < 0 {
            return Err(AppError::Config(format!(
                "late_threshold_minutes must be non-negative, got {}",
                self.late_threshold_minutes
            )));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
