//! Wallet session widget binary.
//!
//! # Architecture Overview
//!
//! ```text
//!              ┌──────────────────────────────────────────────────┐
//!              │                 WALLET WIDGET                     │
//!              │                                                   │
//!   stdin ─────┼─▶ interactive loop ──▶ WalletWidget.activate()    │
//!              │        ▲                      │                   │
//!              │        │              SessionCommand (mpsc)       │
//!              │        │                      ▼                   │
//!              │   watch channel  ◀──  SessionService task         │
//!              │   (state change)             │                    │
//!              │                              ▼                    │
//!   stdout ◀───┼── render(Control)    InjectedConnector ───────────┼──▶ wallet
//!              │                      (JSON-RPC, timeout,          │    endpoint
//!              │                       chain verification)         │
//!              │                                                   │
//!              │  cross-cutting: config (TOML) · tracing · metrics │
//!              └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;

use wallet_widget::config::validation::validate_config;
use wallet_widget::config::{load_config, ConfigError, WidgetConfig};
use wallet_widget::observability;
use wallet_widget::widget::Control;
use wallet_widget::{InjectedConnector, SessionService, WalletWidget};

#[derive(Parser)]
#[command(name = "wallet-widget")]
#[command(about = "Connect/disconnect toggle for an injected wallet", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the wallet endpoint RPC URL.
    #[arg(long)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive widget (default)
    Run,
    /// Print the currently rendered control as JSON and exit
    Render,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WidgetConfig::default(),
    };
    if let Some(rpc_url) = cli.rpc_url {
        config.provider.rpc_url = rpc_url;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    observability::logging::init_logging(&config.observability.log_level);

    tracing::info!(
        rpc_url = %config.provider.rpc_url,
        chain_id = config.provider.chain_id,
        rpc_timeout_secs = config.provider.rpc_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let connector = Arc::new(InjectedConnector::new(config.provider.clone())?);
    let session = SessionService::spawn(connector);
    let widget = WalletWidget::new(session);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_interactive(widget).await?,
        Commands::Render => {
            println!("{}", serde_json::to_string_pretty(&widget.render())?);
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Drive the widget from the terminal.
///
/// Enter activates the control; the screen repaints whenever the session
/// service publishes a state change.
async fn run_interactive(widget: WalletWidget) -> Result<(), Box<dyn std::error::Error>> {
    let mut changes = widget.subscribe();
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    draw(&widget.render());

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&widget.render());
            }
            line = lines.next_line() => {
                match line? {
                    Some(input) => match input.trim() {
                        "q" | "quit" => break,
                        "" => widget.activate(),
                        _ => draw(&widget.render()),
                    },
                    // stdin closed
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn draw(control: &Control) {
    println!();
    println!("  [ {} ]", control.label);
    println!("  press Enter to activate, q to quit");
}
