use anyhow::Result;
use aura_lounge::cli::{load_config, Args, CliApp};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("☕ Aura Coffee Lounge starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(&config);
    app.run(args).await.map_err(|e| {
        tracing::error!("Command failed: {}", e);
        e
    })?;

    tracing::info!("☕ Aura Coffee Lounge stopped");
    Ok(())
}
