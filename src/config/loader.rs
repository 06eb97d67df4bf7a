//! Layered configuration loading.
//!
//! Priority, lowest to highest:
//! 1. `default.toml`
//! 2. `{environment}.toml`
//! 3. `local.toml` (developer overrides, not committed)
//! 4. `BLOG__*` environment variables (`BLOG__SERVER__PORT=9000`)

use std::path::{Path, PathBuf};

use config::{Config, File};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
        }
    }

    /// Loads and deserializes settings for the given environment.
    /// Missing files are fine; serde defaults fill the gaps.
    pub fn load(&self, environment: Environment) -> Result<Settings, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(self.config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(self.config_dir.join(format!("{environment}.toml"))).required(false),
            )
            .add_source(File::from(self.config_dir.join("local.toml")).required(false))
            .add_source(
                config::Environment::with_prefix("BLOG")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.jwt.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    const VALID_JWT: &str =
        "[jwt]\nsecret = \"0123456789abcdef0123456789abcdef\"\n";

    #[test]
    fn environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "default.toml", &format!("{VALID_JWT}[server]\nport = 8080\n"));
        write_file(dir.path(), "test.toml", "[server]\nport = 9090\n");

        let settings = ConfigLoader::new(dir.path()).load(Environment::Test).unwrap();
        assert_eq!(settings.server.port, 9090);
    }

    #[test]
    fn local_file_wins_over_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "default.toml", VALID_JWT);
        write_file(dir.path(), "test.toml", "[server]\nport = 9090\n");
        write_file(dir.path(), "local.toml", "[server]\nport = 7070\n");

        let settings = ConfigLoader::new(dir.path()).load(Environment::Test).unwrap();
        assert_eq!(settings.server.port, 7070);
    }

    #[test]
    fn invalid_jwt_section_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "default.toml", "[jwt]\nsecret = \"tiny\"\n");

        let result = ConfigLoader::new(dir.path()).load(Environment::Test);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
