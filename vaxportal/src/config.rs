//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `VAXPORTAL_CONFIG`
//! environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `VAXPORTAL_` override YAML values
//! 3. **DATABASE_URL** - Special case: overrides `database_url` if set
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Override server port
//! VAXPORTAL_PORT=8080
//!
//! # Point at a database file (preferred method)
//! DATABASE_URL="sqlite://vaxportal.db?mode=rwc"
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "VAXPORTAL_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// Loaded from YAML and environment variables; all fields have defaults so the
/// service starts with no config file at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite database URL. `mode=rwc` creates the file on first start.
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            database_url: "sqlite://vaxportal.db?mode=rwc".to_string(),
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        Self::figment(args).extract()
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::from(figment::providers::Serialized::defaults(Config::default()))
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("VAXPORTAL_"))
            // Common DATABASE_URL pattern
            .merge(Env::raw().only(&["DATABASE_URL"]))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn args_for(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&args_for("missing.yaml")).expect("load");
            assert_eq!(config.port, 3001);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.database_url, "sqlite://vaxportal.db?mode=rwc");
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 9000\nhost: 127.0.0.1\n")?;
            let config = Config::load(&args_for("config.yaml")).expect("load");
            assert_eq!(config.port, 9000);
            assert_eq!(config.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 9000\n")?;
            jail.set_env("VAXPORTAL_PORT", "9100");
            jail.set_env("DATABASE_URL", "sqlite::memory:");
            let config = Config::load(&args_for("config.yaml")).expect("load");
            assert_eq!(config.port, 9100);
            assert_eq!(config.database_url, "sqlite::memory:");
            Ok(())
        });
    }

    #[test]
    fn test_bind_address() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
    }
}
