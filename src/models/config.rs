//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search provider connection settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Target profile URL pattern and field extraction rules
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Date rendering settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Export artifact settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Starter queries offered when no query is given
    #[serde(default = "defaults::suggestions")]
    pub suggestions: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let loaded = Self::load(&path);
        Self::or_default(path, loaded)
    }

    /// Resolve an earlier load attempt, warning and using defaults on failure.
    ///
    /// Lets callers install a logger between loading and resolving, so the
    /// warning is not lost.
    pub fn or_default(path: impl AsRef<Path>, loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Log level from a load attempt, or the default level if it failed.
    pub fn log_level_of(loaded: &Result<Self>) -> String {
        loaded
            .as_ref()
            .map(|config| config.logging.level.clone())
            .unwrap_or_else(|_| defaults::log_level())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.provider.user_agent.trim().is_empty() {
            return Err(AppError::validation("provider.user_agent is empty"));
        }
        if self.provider.timeout_secs == 0 {
            return Err(AppError::validation("provider.timeout_secs must be > 0"));
        }
        if self.provider.num_results == 0 {
            return Err(AppError::validation("provider.num_results must be > 0"));
        }
        if self.provider.endpoint.trim().is_empty() {
            return Err(AppError::validation("provider.endpoint is empty"));
        }
        if self.profile.domain.trim().is_empty() {
            return Err(AppError::validation("profile.domain is empty"));
        }
        if self.profile.path_segment.trim().is_empty() {
            return Err(AppError::validation("profile.path_segment is empty"));
        }
        let file_name = self.export.file_name.trim();
        if file_name.is_empty() {
            return Err(AppError::validation("export.file_name is empty"));
        }
        if file_name.contains('/') || file_name.contains('\\') {
            return Err(AppError::validation(
                "export.file_name must not contain a path separator",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            profile: ProfileConfig::default(),
            display: DisplayConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
            suggestions: defaults::suggestions(),
        }
    }
}

/// Search provider connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Search endpoint accepting a JSON POST
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "defaults::api_key_env")]
    pub api_key_env: String,

    /// Number of results requested per query
    #[serde(default = "defaults::num_results")]
    pub num_results: usize,

    /// Domains the provider should restrict results to (empty = unrestricted)
    #[serde(default = "defaults::include_domains")]
    pub include_domains: Vec<String>,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            api_key_env: defaults::api_key_env(),
            num_results: defaults::num_results(),
            include_domains: defaults::include_domains(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Target profile pattern and field extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Host of the target network (e.g., "linkedin.com")
    #[serde(default = "defaults::domain")]
    pub domain: String,

    /// Profile path segment following the domain (e.g., "/in/")
    #[serde(default = "defaults::path_segment")]
    pub path_segment: String,

    /// Regex patterns removed from the job title, applied in order
    #[serde(default = "defaults::strip_suffixes")]
    pub strip_suffixes: Vec<String>,

    /// Job title used when none can be extracted
    #[serde(default = "defaults::default_job_title")]
    pub default_job_title: String,
}

impl ProfileConfig {
    /// Literal substring every profile URL must contain.
    pub fn url_pattern(&self) -> String {
        format!("{}{}", self.domain, self.path_segment)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            domain: defaults::domain(),
            path_segment: defaults::path_segment(),
            strip_suffixes: defaults::strip_suffixes(),
            default_job_title: defaults::default_job_title(),
        }
    }
}

/// Date rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// POSIX locale name used for month names (e.g., "en_US", "de_DE")
    #[serde(default = "defaults::locale")]
    pub locale: String,

    /// strftime-style pattern for published dates
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: defaults::locale(),
            date_format: defaults::date_format(),
        }
    }
}

/// Export artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Fixed name of the exported document
    #[serde(default = "defaults::file_name")]
    pub file_name: String,

    /// Directory the CLI saves exports into
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: defaults::file_name(),
            output_dir: defaults::output_dir(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Provider defaults
    pub fn endpoint() -> String {
        "https://api.exa.ai/search".into()
    }
    pub fn api_key_env() -> String {
        "EXA_API_KEY".into()
    }
    pub fn num_results() -> usize {
        25
    }
    pub fn include_domains() -> Vec<String> {
        vec!["linkedin.com".into()]
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; prospector/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Profile defaults
    pub fn domain() -> String {
        "linkedin.com".into()
    }
    pub fn path_segment() -> String {
        "/in/".into()
    }
    pub fn strip_suffixes() -> Vec<String> {
        vec![r"(?i)\s*\|\s*linkedin\s*$".into()]
    }
    pub fn default_job_title() -> String {
        "Professional".into()
    }

    // Display defaults
    pub fn locale() -> String {
        "en_US".into()
    }
    pub fn date_format() -> String {
        "%b %-d, %Y".into()
    }

    // Export defaults
    pub fn file_name() -> String {
        "linkedin-profiles.json".into()
    }
    pub fn output_dir() -> String {
        ".".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }

    pub fn suggestions() -> Vec<String> {
        vec![
            "Software Engineer".into(),
            "Product Manager".into(),
            "Data Scientist".into(),
            "UX Designer".into(),
            "DevOps Engineer".into(),
        ]
    }
}
