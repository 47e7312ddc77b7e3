//! Configuration management

use clap::Parser;
use config::builder::DefaultState;
use config::{Config as ConfigBuilder, ConfigError as BuilderError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Secret used when none is configured; startup warns about it
pub const DEFAULT_JWT_SECRET: &str = "change-this-secret-in-production";

/// Upper bound for `security.session_ttl_hours` (ten years)
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid server configuration: {0}")]
    InvalidServer(String),

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),

    #[error("Invalid security configuration: {0}")]
    InvalidSecurity(String),

    #[error("Invalid gateway configuration: {0}")]
    InvalidGateway(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

impl From<BuilderError> for ConfigError {
    fn from(err: BuilderError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from the process command line and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CliArgs::parse())
    }

    /// Load configuration with precedence:
    /// CLI args (and their legacy env vars) > GATEWAY_ env vars > config file > defaults
    pub fn load_from(cli_args: CliArgs) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;

        if let Some(config_path) = &cli_args.config {
            if !config_path.exists() {
                return Err(ConfigError::FileNotFound(
                    config_path.display().to_string(),
                ));
            }
            builder = builder.add_source(File::from(config_path.as_path()));
        }

        // Example: GATEWAY_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("GATEWAY")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = &cli_args.host {
            builder = builder.set_override("server.host", host.clone())?;
        }
        if let Some(port) = cli_args.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(secret) = &cli_args.jwt_secret {
            builder = builder.set_override("security.jwt_secret", secret.clone())?;
        }
        if let Some(token) = &cli_args.developer_api_token {
            builder = builder.set_override("security.developer_api_token", token.clone())?;
        }
        if let Some(flag) = &cli_args.mock_gateway {
            builder = builder.set_override("gateway.mock_responses", flag == "1")?;
        }
        if let Some(log_level) = &cli_args.log_level {
            builder = builder.set_override("logging.level", log_level.clone())?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file path, on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config: Config = defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.security.validate()?;
        self.gateway.validate()?;
        Ok(())
    }
}

fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
    Ok(ConfigBuilder::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stdout")?
        .set_default("logging.rotation", "daily")?
        .set_default("security.jwt_secret", DEFAULT_JWT_SECRET)?
        .set_default("security.auth_mode", "dual")?
        .set_default("security.session_ttl_hours", 24)?
        .set_default("security.allowed_origins", vec!["*"])?
        .set_default("gateway.mock_responses", false)?
        .set_default("gateway.pay_url_base", "https://payment-mock.com")?)
}

/// Command-line arguments for configuration override.
///
/// The legacy environment variables (`PORT`, `JWT_SECRET`,
/// `DEVELOPER_API_TOKEN`, `MOCK_GATEWAY`) are read through these flags.
#[derive(Debug, Default, Parser)]
#[command(name = "mock-gateway")]
#[command(about = "Mock payment and bank-scraper gateway", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Server host address
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long, value_name = "PORT", env = "PORT")]
    pub port: Option<u16>,

    /// Secret used to sign session tokens
    #[arg(long, value_name = "SECRET", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Static developer API token accepted with the `Token` scheme
    #[arg(
        long,
        value_name = "TOKEN",
        env = "DEVELOPER_API_TOKEN",
        hide_env_values = true
    )]
    pub developer_api_token: Option<String>,

    /// "1" passes mock payloads through, anything else nulls them
    #[arg(long, value_name = "FLAG", env = "MOCK_GATEWAY")]
    pub mock_gateway: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidServer("host cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidServer("port must be greater than 0".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
    pub log_file: Option<PathBuf>,
    pub rotation: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "level must be one of: {:?}",
                valid_levels
            )));
        }

        let valid_formats = ["json", "text"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "format must be one of: {:?}",
                valid_formats
            )));
        }

        let valid_outputs = ["stdout", "file"];
        if !valid_outputs.contains(&self.output.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "output must be one of: {:?}",
                valid_outputs
            )));
        }

        if self.output == "file" && self.log_file.is_none() {
            return Err(ConfigError::InvalidLogging(
                "log_file must be specified when output is 'file'".to_string(),
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.rotation.as_str()) {
            return Err(ConfigError::InvalidLogging(format!(
                "rotation must be one of: {:?}",
                valid_rotations
            )));
        }

        Ok(())
    }
}

/// Which credential kinds the authentication gate accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// `Token <api_token>` and `Bearer <session_token>`
    Dual,
    /// `Bearer <session_token>` only
    Bearer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    #[serde(default)]
    pub developer_api_token: Option<String>,
    pub auth_mode: AuthMode,
    pub session_ttl_hours: i64,
    pub allowed_origins: Vec<String>,
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::InvalidSecurity("jwt_secret cannot be empty".to_string()));
        }

        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            return Err(ConfigError::InvalidSecurity(format!(
                "session_ttl_hours must be between 1 and {}",
                MAX_SESSION_TTL_HOURS
            )));
        }

        if self.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidSecurity("allowed_origins cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Lifetime of issued session tokens, `None` if the hours overflow
    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        chrono::Duration::try_hours(self.session_ttl_hours)
    }

    /// The developer token, if one is configured and non-empty
    pub fn developer_token(&self) -> Option<&str> {
        self.developer_api_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// When false every mock endpoint answers with a `null` body
    pub mock_responses: bool,
    pub pay_url_base: String,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pay_url_base.is_empty() {
            return Err(ConfigError::InvalidGateway("pay_url_base cannot be empty".to_string()));
        }

        url::Url::parse(&self.pay_url_base).map_err(|e| {
            ConfigError::InvalidGateway(format!("pay_url_base is not a valid URL: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::load_from(CliArgs::default()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.security.auth_mode, AuthMode::Dual);
        assert_eq!(config.security.session_ttl_hours, 24);
        assert_eq!(config.gateway.pay_url_base, "https://payment-mock.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::load_from(CliArgs {
            port: Some(8081),
            jwt_secret: Some("s3cret".to_string()),
            developer_api_token: Some("dev-token".to_string()),
            mock_gateway: Some("1".to_string()),
            log_level: Some("debug".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.security.jwt_secret, "s3cret");
        assert_eq!(config.security.developer_token(), Some("dev-token"));
        assert!(config.gateway.mock_responses);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_mock_gateway_flag_only_enabled_by_one() {
        for (flag, expected) in [
            ("1", true),
            ("0", false),
            ("true", false),
            ("", false),
            (" 1", false),
            ("1 ", false),
        ] {
            let config = Config::load_from(CliArgs {
                mock_gateway: Some(flag.to_string()),
                ..Default::default()
            })
            .unwrap();
            assert_eq!(config.gateway.mock_responses, expected, "flag {:?}", flag);
        }
    }

    #[test]
    fn test_empty_developer_token_is_treated_as_unset() {
        let config = Config::load_from(CliArgs {
            developer_api_token: Some(String::new()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.security.developer_token(), None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 7000

[security]
jwt_secret = "file-secret"
auth_mode = "bearer"

[gateway]
mock_responses = true
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.security.jwt_secret, "file-secret");
        assert_eq!(config.security.auth_mode, AuthMode::Bearer);
        assert!(config.gateway.mock_responses);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::load_from(CliArgs::default()).unwrap();
        config.security.jwt_secret.clear();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSecurity(_))));

        let mut config = Config::load_from(CliArgs::default()).unwrap();
        config.logging.output = "file".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLogging(_))));

        let mut config = Config::load_from(CliArgs::default()).unwrap();
        config.gateway.pay_url_base = "not a url".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGateway(_))));

        for hours in [0, -1, MAX_SESSION_TTL_HOURS + 1, i64::MAX] {
            let mut config = Config::load_from(CliArgs::default()).unwrap();
            config.security.session_ttl_hours = hours;
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidSecurity(_))),
                "session_ttl_hours {}",
                hours
            );
        }

        let mut config = Config::load_from(CliArgs::default()).unwrap();
        config.security.session_ttl_hours = MAX_SESSION_TTL_HOURS;
        assert!(config.validate().is_ok());
        assert_eq!(
            config.security.session_ttl(),
            Some(chrono::Duration::hours(MAX_SESSION_TTL_HOURS))
        );

        let result = Config::load_from(CliArgs {
            log_level: Some("verbose".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::InvalidLogging(_))));
    }
}
