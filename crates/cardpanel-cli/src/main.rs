use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cardpanel_cli::{Cli, PanelConfig, run_command};
use cardpanel_network::HttpCardService;
use cardpanel_panel::PanelController;

fn init_tracing(level: Option<&str>) {
    let filter = level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<PanelConfig> {
    let mut config = match &cli.config {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };

    if let Some(url) = &cli.url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    debug!(?config, "Configuration loaded");
    info!(version = cardpanel_core::VERSION, device = %config.base_url, "Starting cardpanel");

    let service =
        HttpCardService::new(config.service_config()).context("Failed to create device client")?;
    let mut controller = PanelController::new(Arc::new(service), config.default_view);

    let mut input = io::BufReader::new(io::stdin());
    let mut out = io::stdout().lock();
    let ok = run_command(cli.command, &mut controller, &config, &mut input, &mut out).await?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
