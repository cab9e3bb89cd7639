//! fraud-pulse: terminal dashboard for fraud-operations metrics.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use fraud_pulse::{
    cli::{self, SummaryOptions},
    config::{self, AppConfig, DashboardOverrides},
    reports::ReportFormat,
    state::DashboardTab,
};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fraud-pulse")]
#[command(version)]
#[command(about = "Terminal dashboard for fraud-operations metrics", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the dashboard on the trend analysis tab
    fraud-pulse dashboard --tab trend-analysis

    # Print a snapshot with a root-cause summary
    fraud-pulse summary --rca \"Why is LATAM declining?\"

    # Machine-readable snapshot
    fraud-pulse summary -o json -O snapshot.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (default: discovered .fraud-pulse.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file for the interactive dashboard
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard {
        /// Tab shown on launch
        #[arg(long, value_enum)]
        tab: Option<DashboardTab>,

        /// Delay before a root-cause summary is revealed, in milliseconds
        #[arg(long)]
        rca_delay_ms: Option<u64>,

        /// Do not read or write the saved theme preference
        #[arg(long)]
        no_persist: bool,
    },

    /// Print a non-interactive snapshot of the dashboard
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value = "summary")]
        output: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// Append a directional root-cause summary for this question
        #[arg(long, value_name = "QUERY")]
        rca: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON schema of the config file
    ConfigSchema {
        /// Write the schema to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// List the config search paths
    Path,
    /// Write an example config to the current directory
    Init,
}

/// Route logs to a file so they never draw over the dashboard.
fn init_file_logging(filter: tracing_subscriber::EnvFilter, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    if matches!(cli.command, Commands::Dashboard { .. }) {
        let path = cli.log_file.clone().unwrap_or_else(cli::default_log_file);
        return init_file_logging(filter, &path);
    }

    match &cli.log_file {
        Some(path) => init_file_logging(filter, path),
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> AppConfig {
    let (config, loaded_from) = config::load_or_default(explicit);
    match loaded_from {
        Some(path) => tracing::debug!("Using config {}", path.display()),
        None => tracing::debug!("No config file found; using defaults"),
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match cli.command {
        Commands::Dashboard {
            tab,
            rca_delay_ms,
            no_persist,
        } => {
            let mut config = load_config(cli.config.as_deref());
            config.apply_overrides(&DashboardOverrides {
                tab,
                rca_delay_ms,
                no_persist,
            });
            cli::run_dashboard(&config)
        }

        Commands::Summary {
            output,
            output_file,
            rca,
        } => {
            let config = load_config(cli.config.as_deref());
            cli::run_summary(
                &config,
                &SummaryOptions {
                    format: output,
                    output_file,
                    rca_query: rca,
                    no_color: cli.no_color,
                },
            )
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "fraud-pulse", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to build schema")?;
            match output {
                Some(path) => {
                    fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".fraud-pulse.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
