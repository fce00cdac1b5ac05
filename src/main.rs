mod cli;

use media_proxy::{config, registry::RouteRegistry, server};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

async fn start_server(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = config::load_or_create(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config::validate_config(&config)?;

    let media_path = config.media.resolved_media_path();
    tracing::info!(
        port = config.server.port,
        base_route = %config.media.base_route,
        media_path = ?media_path,
        "Configuration loaded"
    );

    let registry = RouteRegistry::build(&media_path, config.media.base_route.clone())
        .context("Failed to scan media files")?;

    if registry.is_empty() {
        tracing::info!("Place media files under {:?} to serve them", media_path);
    }

    tracing::info!("Media directory: {:?}", media_path);
    tracing::info!("  List media:   GET {}", registry.list_route());
    tracing::info!("  Fetch a file: GET {}/<relative path>", registry.base_route());

    server::start_server(config, registry).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "media_proxy=trace,tower_http=debug".to_string()
        } else {
            "media_proxy=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(&cli.config, host, port))
        }
        Commands::Scan { json } => scan(&cli.config, json),
        Commands::Validate {
            config: config_path,
        } => validate_config(config_path.as_deref().unwrap_or(&cli.config)),
        Commands::Version => {
            println!("media-proxy {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn scan(config_path: &Path, json: bool) -> Result<()> {
    let config = config::load_or_create(config_path)?;
    let media_path = config.media.resolved_media_path();
    let registry = RouteRegistry::build(&media_path, config.media.base_route)
        .context("Failed to scan media files")?;

    if json {
        let data = registry.list();
        let listing = server::routes_media::MediaListResponse {
            success: true,
            count: data.len(),
            data,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for (route, path) in registry.routes() {
        println!("{} -> {}", route, path.display());
    }
    println!("\n{} media files under {}", registry.len(), media_path.display());

    Ok(())
}

fn validate_config(path: &Path) -> Result<()> {
    println!("Validating config: {:?}", path);
    let config = config::load_config(path)?;
    println!("✓ Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Base route: {}", config.media.base_route);
    println!("  Media path: {}", config.media.media_path.display());
    Ok(())
}
