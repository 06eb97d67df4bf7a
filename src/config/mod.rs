//! Configuration management.
//!
//! Layered loading with TOML files plus `BLOG__*` environment variable
//! overrides, selected by `BLOG_APP_ENV`.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    CacheConfig, DatabaseConfig, JwtConfig, LogFormat, LoggerConfig, Settings, UploadsConfig,
};
