use clap::Parser;

use stratus_rs::cli::{Cli, Commands, config_merger};
use stratus_rs::config::ConfigLoader;
use stratus_rs::logger;
use stratus_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new()?;
    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }
    if let Some(config) = &cli.config {
        loader = loader.with_config_file(config.clone());
    }

    let mut settings = loader.load()?;
    config_merger::apply_cli_overrides(&mut settings, &cli);

    logger::init_logger(&settings.logger)?;

    // Dry-run: the loader already validated; report and exit.
    if let Some(Commands::Serve { dry_run: true, .. }) = cli.command {
        settings.validate()?;
        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", settings.server.address());
        println!("✓ Upstream base URL: {}", settings.upstream.base_url);
        println!(
            "✓ Cache backend: {:?} (enabled: {})",
            settings.cache.backend, settings.cache.enabled
        );
        return Ok(());
    }

    Server::new(settings).run().await
}
