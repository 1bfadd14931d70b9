use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ruistats::api::Client;
use ruistats::config::{self, DisplayConfig, API_BASE_ENV};
use ruistats::data_provider::StatsProvider;
use ruistats::types::{DEFAULT_SEASON, MAX_GAMES_LIMIT, RECENT_GAMES_LIMIT};
use ruistats::{commands, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "ruistats")]
#[command(
    version,
    about = "Rui Hachimura box-score dashboard",
    long_about = "Rui Hachimura box-score dashboard\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error) or a tracing filter directive
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve built-in fixture data instead of calling the stats service
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the latest game and the recent scoring trend
    Games {
        /// Number of most recent games to fetch
        #[arg(
            short,
            long,
            default_value_t = RECENT_GAMES_LIMIT,
            value_parser = clap::value_parser!(u32).range(1..=MAX_GAMES_LIMIT as i64)
        )]
        limit: u32,
    },
    /// Display per-game averages for a season
    Season {
        /// Season label, e.g. 2024-25
        #[arg(short, long, default_value = DEFAULT_SEASON)]
        season: String,
    },
    /// Display current configuration
    Config,
}

#[cfg(feature = "development")]
fn create_client(cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn StatsProvider>> {
    if cli.mock {
        tracing::info!("Using mock stats provider");
        return Ok(Arc::new(ruistats::dev::mock_client::MockClient::new()));
    }
    create_http_client(config)
}

#[cfg(not(feature = "development"))]
fn create_client(_cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn StatsProvider>> {
    create_http_client(config)
}

fn create_http_client(config: &config::Config) -> anyhow::Result<Arc<dyn StatsProvider>> {
    let client = Client::new(config.api_base.clone())
        .with_context(|| format!("Failed to create stats client for {}", config.api_base))?;
    Ok(Arc::new(client))
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };
    let env_override = std::env::var(API_BASE_ENV).is_ok_and(|v| !v.trim().is_empty());

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!(
        "api_base: {}{}",
        cfg.api_base,
        if env_override { format!(" (from {})", API_BASE_ENV) } else { String::new() }
    );
    println!();
    print_display_config(&cfg.display);
}

fn print_display_config(display: &DisplayConfig) {
    println!("[display]");
    println!("use_unicode: {}", display.use_unicode);
    println!("selection_fg: {:?}", display.selection_fg);
    println!("header_fg: {:?}", display.header_fg);
    println!("error_fg: {:?}", display.error_fg);
    println!("chart_fg: {:?}", display.chart_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn StatsProvider,
    command: Commands,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Games { limit } => commands::games::run(client, limit, display).await,
        Commands::Season { season } => commands::season::run(client, &season, display).await,
    }
}

fn exit_with_error(e: anyhow::Error) -> ! {
    eprintln!("Error: {:#}", e);
    tracing::error!("Command failed: {:#}", e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Config command doesn't need a client
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let client = create_client(&cli, &config).unwrap_or_else(|e| exit_with_error(e));

    match cli.command {
        None => {
            let queries = tui::Queries {
                games_limit: RECENT_GAMES_LIMIT,
                season: DEFAULT_SEASON.to_string(),
            };
            if let Err(e) = tui::run(client, config, queries).await {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            if let Err(e) = execute_command(client.as_ref(), command, &config.display).await {
                exit_with_error(e);
            }
        }
    }
}
