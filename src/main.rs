//! reactscope - React component and accessibility tree inspector
//!
//! Connects to a running Chrome over CDP, attaches to one page and runs a
//! single inspection tool against it.

mod cli;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reactscope_config::{Config, ConfigLoader, LoggingConfig};
use reactscope_inspector::{register_tools, CdpClient, Inspector};
use reactscope_protocols::{ToolContext, ToolRegistry};

use cli::Cli;

/// Keeps the file writer flushing until exit.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn reactscope_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".reactscope"))
        .unwrap_or_else(|| PathBuf::from(".reactscope"))
}

/// Initialize tracing: stderr always, plus a daily-rolling file when enabled.
///
/// Stdout is reserved for tool output.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let file_layer = if logging.file {
        let log_dir = logging.log_dir();
        std::fs::create_dir_all(&log_dir)?;
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("reactscope")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);
        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| reactscope_dir().join("config.toml"));
    // An explicit path must exist; the default one is optional.
    let mut config = if cli.config.is_some() {
        ConfigLoader::load(&path)?
    } else {
        ConfigLoader::load_or_default(&path)?
    };
    if let Some(endpoint) = &cli.endpoint {
        config.cdp.endpoint = endpoint.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging)?;

    debug!("Connecting to {}", config.cdp.endpoint);
    let client = CdpClient::connect_with_timeout(
        &config.cdp.endpoint,
        Duration::from_secs(config.cdp.request_timeout_secs),
    )
    .await?;

    let Some((tool_id, params)) = cli.command.tool_call() else {
        return list_pages(&client, cli.json).await;
    };

    let page = client.find_page(cli.page.as_deref()).await?;
    info!("Inspecting {} ({})", page.title, page.url);
    let session = client.attach_page(&page.id).await?;

    let inspector = Arc::new(Inspector::new(Arc::new(session), config.limits.clone()));
    if cli.command.needs_hook() {
        inspector.ensure_installed().await?;
    }

    let registry = ToolRegistry::new();
    register_tools(&registry, inspector)?;
    let result = registry
        .invoke(tool_id, params, ToolContext::for_target(page.id.clone()))
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success {
        println!("{}", result.content);
    } else {
        eprintln!("Error: {}", result.error.as_deref().unwrap_or("unknown failure"));
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

async fn list_pages(client: &CdpClient, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pages = client.list_pages().await?;
    if json {
        let listing: Vec<_> = pages
            .iter()
            .map(|p| serde_json::json!({"id": p.id, "title": p.title, "url": p.url}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    for page in &pages {
        println!("{}  {}  {}", page.id, page.title, page.url);
    }
    if pages.is_empty() {
        println!("No pages");
    }
    Ok(())
}
