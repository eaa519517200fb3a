//! Marquee settings.
//!
//! Each value is taken from the first source that sets it, checked in this
//! order: CLI flag, environment variable, config file, built-in default.
//!
//! Config lives at `~/.marquee/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// File schema (every key optional)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub notification_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;
pub const DEFAULT_LOG_FILE: &str = "marquee.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

const ENV_BASE_URL: &str = "MARQUEE_BASE_URL";
const ENV_LOG_LEVEL: &str = "MARQUEE_LOG_LEVEL";

// ============================================================================
// Effective settings
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub notification_ttl: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems found while resolving. Reported once the logger is up.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.marquee/config.toml`.
///
/// A missing default file is generated and `MarqueeConfig::default()` is
/// returned. A missing explicit file is an error. A malformed file returns
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<MarqueeConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("No home directory; running with built-in settings");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("Writing starter config to {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<MarqueeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: MarqueeConfig = toml::from_str(&contents)?;
    info!("Using config file {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Writes a starter file where every option is present but commented out.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Marquee Configuration
# All settings are optional; defaults are used for anything not specified.
# Precedence: CLI flags, then MARQUEE_* env vars, then this file.

# [server]
# base_url = "http://localhost:8000"   # Or set MARQUEE_BASE_URL / --base-url

# [ui]
# notification_secs = 3                # How long toasts stay on screen

# [logging]
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# file = "marquee.log"                 # Or set MARQUEE_LOG_LEVEL for the level
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Cannot create {}: {}", parent.display(), e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Cannot write starter config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapses every source into the settings the app runs with.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &MarqueeConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with(config, |key: &str| std::env::var(key).ok(), cli_base_url)
}

/// `resolve` with the environment passed in as a lookup function.
pub fn resolve_with(
    config: &MarqueeConfig,
    env: impl Fn(&str) -> Option<String>,
    cli_base_url: Option<&str>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: env → config → default. Unparseable values fall back.
    let log_level = match env(ENV_LOG_LEVEL).or_else(|| config.logging.level.clone()) {
        Some(raw) => parse_level(&raw).unwrap_or_else(|| {
            warnings.push(format!("Unknown log level {raw:?}, using default"));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        base_url,
        notification_ttl: Duration::from_secs(
            config
                .ui
                .notification_secs
                .unwrap_or(DEFAULT_NOTIFICATION_SECS),
        ),
        log_level,
        log_file: PathBuf::from(
            config
                .logging
                .file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        warnings,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = MarqueeConfig::default();
        assert!(config.server.base_url.is_none());
        assert!(config.ui.notification_secs.is_none());
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn with_base_url(url: &str) -> MarqueeConfig {
        MarqueeConfig {
            server: ServerConfig {
                base_url: Some(url.to_string()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MarqueeConfig::default();
        let resolved = resolve_with(&config, no_env, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.notification_ttl,
            Duration::from_secs(DEFAULT_NOTIFICATION_SECS)
        );
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MarqueeConfig {
            ui: UiConfig {
                notification_secs: Some(10),
            },
            logging: LoggingConfig {
                level: None,
                file: Some("/tmp/movies.log".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, no_env, None);
        assert_eq!(resolved.notification_ttl, Duration::from_secs(10));
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/movies.log"));
    }

    #[test]
    fn test_resolve_file_base_url_beats_default() {
        let resolved = resolve_with(&with_base_url("http://from-config:9000"), no_env, None);
        assert_eq!(resolved.base_url, "http://from-config:9000");
    }

    #[test]
    fn test_resolve_env_beats_file() {
        let env = env_of(&[
            ("MARQUEE_BASE_URL", "http://from-env:7000"),
            ("MARQUEE_LOG_LEVEL", "trace"),
        ]);
        let mut config = with_base_url("http://from-config:9000");
        config.logging.level = Some("warn".to_string());

        let resolved = resolve_with(&config, env, None);
        assert_eq!(resolved.base_url, "http://from-env:7000");
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_resolve_cli_beats_env() {
        let env = env_of(&[("MARQUEE_BASE_URL", "http://from-env:7000")]);
        let resolved = resolve_with(
            &with_base_url("http://from-config:9000"),
            env,
            Some("http://from-cli:1234"),
        );
        assert_eq!(resolved.base_url, "http://from-cli:1234");
    }

    #[test]
    fn test_unknown_log_level_is_reported_not_logged() {
        let env = env_of(&[("MARQUEE_LOG_LEVEL", "loud")]);
        let resolved = resolve_with(&MarqueeConfig::default(), env, None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("loud"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("TRACE"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[server]
base_url = "http://192.168.1.10:8000"

[ui]
notification_secs = 5

[logging]
level = "info"
file = "movies.log"
"#;
        let config: MarqueeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.10:8000")
        );
        assert_eq!(config.ui.notification_secs, Some(5));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(config.logging.file.as_deref(), Some("movies.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[ui]
notification_secs = 1
"#;
        let config: MarqueeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.notification_secs, Some(1));
        assert!(config.server.base_url.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("marquee-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[ui]\nnotification_secs = \"soon\"\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("marquee-definitely-missing.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Io(_))
        ));
    }
}
