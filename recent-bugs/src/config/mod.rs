//! Report configuration.
//!
//! Settings come from an optional TOML file with a `[report]` section and
//! from the environment, which takes precedence. They are resolved once at
//! process start into a [`ReportConfig`].

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::MissingProjectPolicy;

use crate::bugs::BugStatus;
use crate::launchpad::DEFAULT_API_ROOT;
use crate::reviews::DEFAULT_REVIEW_HOST;
use settings::{ConfigFile, ReportSettings};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "LPCACHEDIR";

/// Environment variable overriding the default project.
pub const PROJECT_ENV: &str = "LPPROJECT";

/// Cache directory used when none is configured.
pub const DEFAULT_CACHE_DIR: &str = "~/.launchpadlib/cache";

/// Resolved report configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Response cache directory; `None` disables caching.
    pub cache_dir: Option<PathBuf>,

    /// Project reported when none is requested.
    pub default_project: Option<String>,

    /// Statuses to search for.
    pub status_filter: Vec<BugStatus>,

    /// Host of the review service linked from bug comments.
    pub review_host: String,

    /// Root of the bug tracker web service.
    pub api_root: String,

    /// Unknown project handling.
    pub missing_project: MissingProjectPolicy,

    /// Per-request timeout; `None` keeps the HTTP client default.
    pub request_timeout: Option<Duration>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cache_dir: expand_home(DEFAULT_CACHE_DIR),
            default_project: None,
            status_filter: BugStatus::open(),
            review_host: DEFAULT_REVIEW_HOST.to_string(),
            api_root: DEFAULT_API_ROOT.to_string(),
            missing_project: MissingProjectPolicy::default(),
            request_timeout: None,
        }
    }
}

impl ReportConfig {
    /// Loads the configuration from `path`, if given, then applies
    /// environment overrides.
    ///
    /// A `path` that does not exist is treated as an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or holds
    /// an invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => load_file(path)?.report,
            None => ReportSettings::default(),
        };
        let source = path.map_or_else(|| "<defaults>".to_string(), |p| p.display().to_string());

        let mut config = Self::from_settings(settings, &source)?;
        config.apply_env();
        Ok(config)
    }

    /// Builds a configuration from parsed settings, filling in defaults.
    fn from_settings(settings: ReportSettings, source: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let status_filter = settings.status_filter.unwrap_or(defaults.status_filter);
        if status_filter.is_empty() {
            return Err(ConfigError::ValidationError {
                path: source.to_string(),
                message: "status-filter must name at least one status".to_string(),
            });
        }

        if settings.request_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                path: source.to_string(),
                message: "request-timeout-secs must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            cache_dir: settings
                .cache_dir
                .map_or(defaults.cache_dir, |dir| expand_home(&dir)),
            default_project: settings.default_project.filter(|p| !p.is_empty()),
            status_filter,
            review_host: settings.review_host.unwrap_or(defaults.review_host),
            api_root: settings.api_root.unwrap_or(defaults.api_root),
            missing_project: settings.missing_project.unwrap_or_default(),
            request_timeout: settings.request_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Applies [`CACHE_DIR_ENV`] and [`PROJECT_ENV`].
    ///
    /// Environment variables take precedence over the config file.
    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
            debug!(env = CACHE_DIR_ENV, "Cache directory overridden by environment");
            self.cache_dir = expand_home(&dir);
        }
        if let Ok(project) = std::env::var(PROJECT_ENV) {
            debug!(env = PROJECT_ENV, "Default project overridden by environment");
            self.default_project = Some(project).filter(|p| !p.is_empty());
        }
    }
}

/// Reads and parses a config file; a missing file yields empty settings.
fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(ConfigFile::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })
}

/// Expands `~` and a leading `~/` to the home directory; `~user` paths are
/// kept as they are. An empty path disables the cache, as does a `~` path
/// when the home directory is unknown.
fn expand_home(path: &str) -> Option<PathBuf> {
    if path.is_empty() {
        return None;
    }
    if path == "~" {
        return dirs::home_dir();
    }
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest.trim_start_matches('/'))),
        None => Some(PathBuf::from(path)),
    }
}
