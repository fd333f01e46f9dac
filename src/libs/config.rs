//! Configuration management for the stint application.
//!
//! Handles the leaderboard service credentials, tracker timing settings and
//! the local account state (session code, offline totals). Supports both
//! programmatic access and an interactive setup wizard, following a modular
//! layout where each concern has its own optional section.
//!
//! ## Storage
//!
//! The configuration is serialized to JSON and stored encrypted in the
//! platform data directory (see [`crate::libs::secure_file`]). A file that
//! can no longer be decrypted or parsed is discarded and replaced with
//! defaults rather than failing startup; the tracker must come up even with
//! a damaged config.

use super::data_storage::DataStorage;
use super::secure_file::SecureFile;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "stint.config";

/// Enforced interval floors, in seconds.
pub const MIN_ONLINE_REPORT_INTERVAL: u64 = 60;
pub const MIN_OFFLINE_SAVE_INTERVAL: u64 = 1;

/// Default intervals, in seconds.
pub const DEFAULT_ONLINE_REPORT_INTERVAL: u64 = 60;
pub const DEFAULT_OFFLINE_SAVE_INTERVAL: u64 = 30;

/// Represents a configurable module in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Leaderboard service connection parameters.
///
/// `app_secret` never leaves the machine; it only feeds request signatures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the ranking API, e.g. `https://api.example.com/api/ranking`.
    pub api_url: String,
    /// Web origin hosting the interactive account-binding flow.
    pub web_url: String,
    /// Application identifier issued by the service.
    pub app_id: String,
    /// Shared secret used for request signing.
    pub app_secret: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Server".to_string(),
        }
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            web_url: "".to_string(),
            app_id: "".to_string(),
            app_secret: "".to_string(),
        });
        msg_print!(Message::ConfigModuleServer);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            web_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerWebUrl.to_string())
                .default(default.web_url)
                .interact_text()?,
            app_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerAppId.to_string())
                .default(default.app_id)
                .interact_text()?,
            app_secret: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerAppSecret.to_string())
                .default(default.app_secret)
                .interact_text()?,
        })
    }

    /// True once real credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.app_secret.is_empty()
    }
}

/// Tracker timing configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Interval in seconds between online report attempts (floor 60).
    pub online_report_interval: u64,
    /// Interval in seconds between offline saves (floor 1).
    pub offline_save_interval: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            online_report_interval: DEFAULT_ONLINE_REPORT_INTERVAL,
            offline_save_interval: DEFAULT_OFFLINE_SAVE_INTERVAL,
        }
    }
}

/// Local account state mutated by the tracker core.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccountConfig {
    /// Opaque per-installation credential bound to a remote user account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_code: Option<String>,
    /// Whether durations are accounted locally instead of reported.
    #[serde(default)]
    pub offline: bool,
    /// Accumulated active seconds persisted while offline.
    #[serde(default)]
    pub offline_total_seconds: u64,
    /// Optional display name for the offline account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_nickname: Option<String>,
}

impl AccountConfig {
    pub fn display_name(&self) -> String {
        match &self.offline_nickname {
            Some(nickname) if !nickname.trim().is_empty() => nickname.clone(),
            _ => "Offline Account".to_string(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Leaderboard service connection; absent until `stint init` runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Tracker timing overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    /// Account state; always present, mutated by the tracker.
    #[serde(default)]
    pub account: AccountConfig,
}

impl Config {
    fn secure_file() -> Result<SecureFile> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Ok(SecureFile::new(&path))
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing, undecryptable or corrupted. A damaged file is deleted so the
    /// next save starts clean.
    pub fn read() -> Result<Config> {
        let file = Self::secure_file()?;
        if !file.exists() {
            return Ok(Config::default());
        }

        match file.read().and_then(|content| Ok(serde_json::from_str::<Config>(&content)?)) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable config file");
                let _ = file.remove();
                Ok(Config::default())
            }
        }
    }

    /// Serializes and writes the configuration, encrypted at rest.
    pub fn save(&self) -> Result<()> {
        let file = Self::secure_file()?;
        let content = serde_json::to_string_pretty(self)?;
        file.write(&content)
    }

    /// Interactive setup wizard for the server and tracker modules.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ServerConfig::module(),
            ConfigModule {
                key: "tracker".to_string(),
                name: "Tracker".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        online_report_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOnlineReportInterval.to_string())
                            .default(default.online_report_interval)
                            .interact_text()?,
                        offline_save_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptOfflineSaveInterval.to_string())
                            .default(default.offline_save_interval)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Report interval for the current mode, with the floors enforced.
    pub fn report_interval_seconds(&self) -> u64 {
        let tracker = self.tracker.clone().unwrap_or_default();
        if self.account.offline {
            tracker.offline_save_interval.max(MIN_OFFLINE_SAVE_INTERVAL)
        } else {
            tracker.online_report_interval.max(MIN_ONLINE_REPORT_INTERVAL)
        }
    }

    /// Whether reporting to the service is possible at all: online mode,
    /// configured server and a bound session code.
    pub fn can_report_online(&self) -> bool {
        !self.account.offline
            && self.account.session_code.is_some()
            && self.server.as_ref().map(|server| server.is_configured()).unwrap_or(false)
    }
}
