//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mockchat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::Provider;
use crate::core::state::DEFAULT_GREETING;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub greeting: Option<String>,
    pub tick_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub provider: Option<Provider>,
    pub latency_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;
pub const DEFAULT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_LOG_FILE: &str = "mockchat.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: Provider,
    pub latency: Duration,
    pub request_timeout: Duration,
    pub tick_interval: Duration,
    pub greeting: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub provider: Option<Provider>,
    pub latency_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub tick_ms: Option<u64>,
    pub log_level: Option<LevelFilter>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mockchat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mockchat").join("config.toml"))
}

/// Load config from `~/.mockchat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChatConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChatConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ChatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Mockchat Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# greeting = "Hello! I'm your AI assistant. How can I help you today?"
# tick_interval_ms = 300             # Thinking animation frame interval

# [generator]
# provider = "mock"                  # "mock" or "echo"
# latency_ms = 2000                  # Simulated response delay
# timeout_ms = 30000                 # Replies slower than this become errors

# [logging]
# file = "mockchat.log"
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", name, raw);
            None
        }
    }
}

fn env_provider() -> Option<Provider> {
    let raw = std::env::var("MOCKCHAT_PROVIDER").ok()?;
    match raw.to_lowercase().as_str() {
        "mock" => Some(Provider::Mock),
        "echo" => Some(Provider::Echo),
        _ => {
            warn!("Unknown MOCKCHAT_PROVIDER={:?}", raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ChatConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli
        .provider
        .or_else(env_provider)
        .or(config.generator.provider)
        .unwrap_or_default();

    let latency_ms = cli
        .latency_ms
        .or_else(|| env_parsed("MOCKCHAT_LATENCY_MS"))
        .or(config.generator.latency_ms)
        .unwrap_or(DEFAULT_LATENCY_MS);

    let timeout_ms = cli
        .timeout_ms
        .or_else(|| env_parsed("MOCKCHAT_TIMEOUT_MS"))
        .or(config.generator.timeout_ms)
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS);

    // Zero would spin the ticker, so it falls back to the default
    let tick_ms = cli
        .tick_ms
        .or_else(|| env_parsed("MOCKCHAT_TICK_MS"))
        .or(config.general.tick_interval_ms)
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

    let log_level = cli
        .log_level
        .or_else(|| env_parsed("MOCKCHAT_LOG_LEVEL"))
        .or_else(|| {
            config
                .logging
                .level
                .as_deref()
                .and_then(|s| LevelFilter::from_str(s).ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let greeting = config
        .general
        .greeting
        .clone()
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());

    ResolvedConfig {
        provider,
        latency: Duration::from_millis(latency_ms),
        request_timeout: Duration::from_millis(timeout_ms),
        tick_interval: Duration::from_millis(tick_ms),
        greeting,
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ChatConfig::default();
        assert!(config.general.greeting.is_none());
        assert!(config.generator.provider.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ChatConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.greeting, DEFAULT_GREETING);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ChatConfig {
            generator: GeneratorConfig {
                provider: Some(Provider::Mock),
                latency_ms: Some(5000),
                timeout_ms: Some(9000),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            provider: Some(Provider::Echo),
            latency_ms: Some(10),
            timeout_ms: Some(20),
            tick_ms: Some(50),
            log_level: Some(LevelFilter::Warn),
            log_file: Some(PathBuf::from("/tmp/chat.log")),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.provider, Provider::Echo);
        assert_eq!(resolved.latency, Duration::from_millis(10));
        assert_eq!(resolved.request_timeout, Duration::from_millis(20));
        assert_eq!(resolved.tick_interval, Duration::from_millis(50));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/chat.log"));
    }

    #[test]
    fn test_zero_tick_interval_falls_back_to_default() {
        let cli = CliOverrides {
            tick_ms: Some(0),
            ..Default::default()
        };
        let resolved = resolve(&ChatConfig::default(), &cli);
        assert!(resolved.tick_interval > Duration::ZERO);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = ChatConfig {
            generator: GeneratorConfig {
                timeout_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.request_timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_blank_greeting_falls_back_to_default() {
        let config = ChatConfig {
            general: GeneralConfig {
                greeting: Some("   ".to_string()),
                tick_interval_ms: None,
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config, &CliOverrides::default()).greeting, DEFAULT_GREETING);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
greeting = "Welcome back."
tick_interval_ms = 150

[generator]
provider = "echo"
latency_ms = 250
timeout_ms = 5000

[logging]
file = "chat.log"
level = "info"
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.greeting.as_deref(), Some("Welcome back."));
        assert_eq!(config.general.tick_interval_ms, Some(150));
        assert_eq!(config.generator.provider, Some(Provider::Echo));
        assert_eq!(config.generator.latency_ms, Some(250));
        assert_eq!(config.generator.timeout_ms, Some(5000));
        assert_eq!(config.logging.file.as_deref(), Some("chat.log"));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only one override; everything else stays default
        let toml_str = r#"
[generator]
latency_ms = 100
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.latency_ms, Some(100));
        assert!(config.generator.provider.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let toml_str = r#"
[generator]
provider = "openai"
"#;
        assert!(toml::from_str::<ChatConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("mockchat-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ngreeting = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("mockchat-definitely-missing.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
