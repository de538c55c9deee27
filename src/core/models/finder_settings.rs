use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::global_constants;

/// Tunable parameters for the finder, persisted as JSON in the platform
/// config directory. The scoring weights and the close-match threshold are
/// deliberately configuration rather than hard-coded values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_trusted_domains")]
    pub trusted_domains: Vec<String>,
    #[serde(default = "default_close_match_threshold")]
    pub close_match_threshold: f64,
    #[serde(default = "default_trusted_domain_bonus")]
    pub trusted_domain_bonus: u32,
    #[serde(default = "default_make_match_bonus")]
    pub make_match_bonus: u32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            trusted_domains: default_trusted_domains(),
            close_match_threshold: default_close_match_threshold(),
            trusted_domain_bonus: default_trusted_domain_bonus(),
            make_match_bonus: default_make_match_bonus(),
            max_results: default_max_results(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FinderSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: FinderSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Output dir: {:?}", settings.output_dir);
        log::debug!(
            "[SETTINGS] Close-match threshold: {}",
            settings.close_match_threshold
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

fn default_output_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("downloads")
    } else {
        PathBuf::from("/mnt/data")
    }
}

fn default_trusted_domains() -> Vec<String> {
    global_constants::DEFAULT_TRUSTED_DOMAINS
        .iter()
        .map(|domain| domain.to_string())
        .collect()
}

fn default_close_match_threshold() -> f64 {
    global_constants::DEFAULT_CLOSE_MATCH_THRESHOLD
}

fn default_trusted_domain_bonus() -> u32 {
    global_constants::DEFAULT_TRUSTED_DOMAIN_BONUS
}

fn default_make_match_bonus() -> u32 {
    global_constants::DEFAULT_MAKE_MATCH_BONUS
}

fn default_max_results() -> usize {
    global_constants::DEFAULT_MAX_RESULTS
}

fn default_request_timeout_secs() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECS
}
