//! Typed application settings.
//!
//! Every section has serde defaults so a partial TOML file (or none at
//! all) still yields a runnable development configuration.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "blog-api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/blog_development".to_string(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub issuer: String,
    pub audience: String,
    pub secret: String,
    /// Token validity in hours.
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            issuer: "blog-api".to_string(),
            audience: "blog-clients".to_string(),
            secret: String::new(),
            expiration_hours: 24,
        }
    }
}

impl JwtConfig {
    /// Rejects configurations that would issue unverifiable or weakly
    /// signed tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.issuer.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "jwt.issuer".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.audience.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "jwt.audience".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.secret.len() < 32 {
            return Err(ConfigError::ValidationError {
                key: "jwt.secret".to_string(),
                reason: "must be at least 32 characters".to_string(),
            });
        }
        if self.expiration_hours <= 0 {
            return Err(ConfigError::ValidationError {
                key: "jwt.expiration_hours".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Tracing filter directive, e.g. "info" or "blog_api=debug,info".
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Absolute expiration for listing entries. One day by default.
    pub ttl_seconds: u64,
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 86_400,
            max_entries: 128,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Directory blog images are written to.
    pub directory: std::path::PathBuf,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            directory: std::path::PathBuf::from("uploads/images"),
        }
    }
}

/// Root settings object, deserialized from the layered configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub logger: LoggerConfig,
    pub cache: CacheConfig,
    pub uploads: UploadsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let settings = Settings::default();
        assert_eq!(settings.server.address(), "127.0.0.1:8080");
        assert!(settings.cache.enabled);
        assert_eq!(settings.cache.ttl_seconds, 86_400);
    }

    #[test]
    fn jwt_validation_rejects_short_secret() {
        let jwt = JwtConfig {
            secret: "short".to_string(),
            ..JwtConfig::default()
        };
        assert!(jwt.validate().is_err());
    }

    #[test]
    fn jwt_validation_rejects_empty_issuer() {
        let jwt = JwtConfig {
            issuer: "  ".to_string(),
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..JwtConfig::default()
        };
        assert!(jwt.validate().is_err());
    }

    #[test]
    fn jwt_validation_accepts_sane_config() {
        let jwt = JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            ..JwtConfig::default()
        };
        assert!(jwt.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9999\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.server.port, 9999);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.jwt.expiration_hours, 24);
    }
}
