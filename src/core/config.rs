//! Configuration management for the MCP server.
//!
//! Settings come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first). The Sentry host and access
//! token are mandatory; startup fails before any tool is served when
//! either is missing.

use std::time::Duration;

use clap::{ArgAction, Parser};
use reqwest::Url;
use tracing::info;

use super::error::{Error, Result};

/// Default request timeout for Sentry API calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MISSING_CREDENTIALS: &str = "Both --host and --access-token (or their corresponding \
     SENTRY_ environment variables) are required.";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "sentry-mcp-server", version, about = "MCP server for the Sentry API")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// The Sentry host URL.
    #[arg(short = 'h', long, env = "SENTRY_HOST")]
    pub host: Option<String>,

    /// The Sentry API access token.
    #[arg(short = 't', long, env = "SENTRY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Timeout for each Sentry API request, in seconds.
    #[arg(long, env = "SENTRY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "MCP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Server name reported to MCP clients.
    #[arg(long, env = "MCP_SERVER_NAME", default_value = "sentry-api-mcp-stdio")]
    pub server_name: String,

    /// Print help.
    #[arg(short = 'H', long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// Parse arguments from the process command line and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Sentry API connection settings.
    pub sentry: SentryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Sentry API.
#[derive(Clone)]
pub struct SentryConfig {
    /// Base URL of the Sentry installation.
    pub host: Url,

    /// Bearer token sent with every request.
    pub access_token: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryConfig")
            .field("host", &self.host.as_str())
            .field("access_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SentryConfig {
    /// Build Sentry settings, validating the host URL.
    pub fn new(host: &str, access_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let access_token = access_token.into();
        if host.trim().is_empty() || access_token.trim().is_empty() {
            return Err(Error::config(MISSING_CREDENTIALS));
        }

        let host = parse_host(host.trim())?;

        Ok(Self {
            host,
            access_token: access_token.trim().to_string(),
            timeout,
        })
    }
}

fn parse_host(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::config(format!("Invalid Sentry host URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "Invalid Sentry host URL '{}': scheme must be http or https",
            raw
        )));
    }

    if url.host_str().is_none() {
        return Err(Error::config(format!(
            "Invalid Sentry host URL '{}': missing host",
            raw
        )));
    }

    Ok(url)
}

impl Config {
    /// Build the configuration from parsed arguments.
    pub fn from_args(args: Args) -> Result<Self> {
        let (Some(host), Some(access_token)) = (args.host, args.access_token) else {
            return Err(Error::config(MISSING_CREDENTIALS));
        };

        if args.timeout_secs == 0 {
            return Err(Error::config("--timeout-secs must be greater than zero"));
        }

        let sentry = SentryConfig::new(
            &host,
            access_token,
            Duration::from_secs(args.timeout_secs),
        )?;

        info!("Sentry host: {}", sentry.host);

        Ok(Self {
            server: ServerConfig {
                name: args.server_name,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: args.log_level,
            },
            sentry,
        })
    }

    /// Configuration pointing at `host`, with defaults everywhere else.
    pub fn for_host(host: &str, access_token: &str) -> Result<Self> {
        Self::from_args(Args {
            host: Some(host.to_string()),
            access_token: Some(access_token.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
            server_name: "sentry-api-mcp-stdio".to_string(),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("SENTRY_HOST");
            std::env::remove_var("SENTRY_ACCESS_TOKEN");
            std::env::remove_var("SENTRY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_flags() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let args = Args::try_parse_from([
            "sentry-mcp-server",
            "-h",
            "https://sentry.example.com",
            "-t",
            "secret",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.sentry.host.as_str(), "https://sentry.example.com/");
        assert_eq!(config.sentry.access_token, "secret");
        assert_eq!(config.sentry.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.server.name, "sentry-api-mcp-stdio");
    }

    #[test]
    fn test_help_is_capital_h() {
        let err = Args::try_parse_from(["sentry-mcp-server", "-H"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["sentry-mcp-server", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_env_fallback_and_flag_precedence() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("SENTRY_HOST", "https://env.example.com");
            std::env::set_var("SENTRY_ACCESS_TOKEN", "env-token");
        }

        let args = Args::try_parse_from(["sentry-mcp-server"]).unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.sentry.host.host_str(), Some("env.example.com"));
        assert_eq!(config.sentry.access_token, "env-token");

        let args = Args::try_parse_from([
            "sentry-mcp-server",
            "--host",
            "https://flag.example.com",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.sentry.host.host_str(), Some("flag.example.com"));
        assert_eq!(config.sentry.access_token, "env-token");

        clear_env();
    }

    #[test]
    fn test_missing_token_fails() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let args =
            Args::try_parse_from(["sentry-mcp-server", "--host", "https://sentry.io"]).unwrap();
        let err = Config::from_args(args).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("--access-token"));
    }

    #[test]
    fn test_blank_values_are_missing() {
        let err = SentryConfig::new("  ", "token", Duration::from_secs(1)).unwrap_err();
        assert!(err.to_string().contains("--host"));
        let err = SentryConfig::new("https://sentry.io", " ", Duration::from_secs(1)).unwrap_err();
        assert!(err.to_string().contains("--access-token"));
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(SentryConfig::new("not a url", "t", Duration::from_secs(1)).is_err());
        assert!(SentryConfig::new("ftp://sentry.io", "t", Duration::from_secs(1)).is_err());
        assert!(SentryConfig::new("mailto:ops@sentry.io", "t", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let args = Args::try_parse_from([
            "sentry-mcp-server",
            "-h",
            "https://sentry.io",
            "-t",
            "x",
            "--timeout-secs",
            "0",
        ])
        .unwrap();
        assert!(Config::from_args(args).is_err());
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = Config::for_host("https://sentry.io", "super_secret_token").unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
