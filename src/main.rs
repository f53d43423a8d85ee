use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intent_hook::HookOptions;
use intent_hook::hook::panic_message;
use intent_hook::cli::{ConfigFormat, OutputFormat, parse_config_format, parse_output_format};

#[derive(Parser)]
#[command(name = "intent-hook")]
#[command(
    version,
    about = "Rule-based user intent analysis hook for multi-agent workspaces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, default_value = ".", help = "Workspace root directory")]
    workspace: PathBuf,

    #[arg(
        long,
        short,
        help = "Hook settings file (default: .kiro/settings/hooks.yaml under the workspace)"
    )]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one user instruction
    Analyze {
        #[arg(required = true, help = "Instruction text (words are joined with spaces)")]
        text: Vec<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = parse_output_format,
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Analyze the built-in sample instructions
    Demo,

    /// Check whether a path is on the read allow-list
    CheckPath {
        #[arg(help = "Path to check (relative to the workspace root)")]
        path: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show effective configuration (defaults, file, env)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "yaml",
            value_parser = parse_config_format,
            help = "Output format: yaml, json"
        )]
        format: ConfigFormat,
    },
    /// Show configuration and workspace file paths
    Path,
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Report panics as a single log event.
///
/// Panics inside `on_user_input` are still turned into its failure string;
/// this only makes the location visible on stderr.
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        eprintln!(
            "{} intent-hook panicked at {}: {}",
            console::style("✗").red().bold(),
            location,
            message
        );

        // Backtrace only when RUST_BACKTRACE is set
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            default_hook(panic_info);
        }
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut options = HookOptions::new(cli.workspace);
    options.config_path = cli.config;

    match cli.command {
        Commands::Analyze { text, format } => {
            intent_hook::cli::commands::analyze::run(&text.join(" "), &options, format)?;
        }
        Commands::Demo => {
            intent_hook::cli::commands::demo::run(&options)?;
        }
        Commands::CheckPath { path } => {
            if !intent_hook::cli::commands::check_path::run(&path, &options)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                intent_hook::cli::commands::config::show(&options, format)?;
            }
            ConfigAction::Path => {
                intent_hook::cli::commands::config::path(&options)?;
            }
            ConfigAction::Init { force } => {
                intent_hook::cli::commands::config::init(&options, force)?;
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
