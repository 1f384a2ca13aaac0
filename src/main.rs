use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use replydesk::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_console, cmd_draft, cmd_export, cmd_ls,
    cmd_show,
};
use replydesk::export::ExportFormat;
use replydesk::types::TicketId;

const LOG_ENV: &str = "REPLYDESK_LOG";

#[derive(Parser)]
#[command(name = "replydesk")]
#[command(about = "Review console for customer support tickets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tickets
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket with its sender details and original message
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a suggested reply for a ticket
    Draft {
        /// Ticket ID
        id: u64,
    },

    /// Export all tickets to a file
    Export {
        /// Format: csv or xlsx
        #[arg(value_parser = parse_format)]
        format: ExportFormat,

        /// Directory to write the file into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Interactive review console
    Console,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (source.kind, latency.generate_ms, display.utc_offset_hours, ...)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
        .map_err(|_| "Invalid format. Must be one of: csv, xlsx".to_string())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Ls { json } => cmd_ls(json).await,
        Commands::Show { id, json } => cmd_show(TicketId::new(id), json).await,
        Commands::Draft { id } => cmd_draft(TicketId::new(id)).await,
        Commands::Export { format, dir } => cmd_export(format, &dir).await,
        Commands::Console => cmd_console().await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
