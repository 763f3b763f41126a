//! CLI entrypoint for Ethica
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ethica_application::{GatewayError, RunAnalysisUseCase};
use ethica_domain::Scenario;
use ethica_infrastructure::{ConfigLoader, JsonExporter, build_gateways};
use ethica_presentation::{AppState, Cli, ConsoleFormatter, ConsoleProgress, serve};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Provider keys commonly live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Ethica");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    let params = config.scoring.params();

    // === Dependency Injection ===
    let pipeline = match build_gateways(&config) {
        Ok(gateways) => Some(Arc::new(RunAnalysisUseCase::new(gateways, params))),
        Err(GatewayError::MissingCredentials(key)) if cli.serve => {
            // The HTTP surface stays up in mock mode without credentials.
            warn!(%key, "Credential missing; serving mock responses");
            None
        }
        Err(e) => return Err(e).context("Failed to construct providers"),
    };

    // Server mode
    if cli.serve {
        serve(cli.port, AppState { pipeline }).await?;
        return Ok(());
    }

    // One-shot mode - an action is required
    let action = match cli.action {
        Some(action) => action,
        None => bail!("An action is required. Use --serve for the HTTP API."),
    };
    let pipeline = pipeline.context("Providers are required for a one-shot analysis")?;

    let scenario =
        Scenario::new(action.clone(), cli.context.clone()).with_stakeholders(cli.stakeholders);

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 Ethica - Decision Analysis                 |");
        println!("+============================================================+");
        println!();
        println!("Action: {action}");
        if !cli.context.is_empty() {
            println!("Context: {}", cli.context);
        }
    }

    // Execute with or without progress reporting
    let result = if cli.quiet {
        pipeline.execute(scenario).await?
    } else {
        pipeline
            .execute_with_progress(scenario, &ConsoleProgress)
            .await?
    };

    println!();
    println!("{}", ConsoleFormatter::format(&result, cli.output));

    if !cli.no_export {
        let exporter = JsonExporter::new(config.export.directory.clone());
        let path = match &cli.export {
            Some(path) => {
                exporter.export_to(&result, path)?;
                path.clone()
            }
            None => exporter.export(&result)?,
        };
        if !cli.quiet {
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}
