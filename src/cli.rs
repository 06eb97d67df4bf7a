//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Blog content-management backend.
#[derive(Parser, Debug)]
#[command(name = "blog-api", version)]
#[command(about = "REST backend for blogs, categories, comments, and users")]
pub struct Cli {
    /// Directory containing the layered TOML configuration files.
    #[arg(short, long, env = "BLOG_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Override the configured listen port.
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_config_dir() {
        let cli = Cli::parse_from(["blog-api"]);
        assert_eq!(cli.config_dir, PathBuf::from("config"));
        assert!(cli.port.is_none());
    }

    #[test]
    fn port_override_parses() {
        let cli = Cli::parse_from(["blog-api", "--port", "9000"]);
        assert_eq!(cli.port, Some(9000));
    }
}
