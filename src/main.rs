use clap::Parser;

use blog_api::cli::Cli;
use blog_api::config::{ConfigLoader, Environment};
use blog_api::logger::init_logger;
use blog_api::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let environment = Environment::from_env();
    let mut settings = ConfigLoader::new(&cli.config_dir).load(environment)?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
