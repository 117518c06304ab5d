// Command-line reading-progress report

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use readmark::report::{progress_line, render_entry};
use readmark::{DeclId, Report, ReportFormat, ScanConfig, ScanOutcome, Scanner, Status};

#[derive(Parser)]
#[command(name = "readmark")]
#[command(about = "Report reading-progress marks in Rust source", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./readmark.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every mark with its notes
    Scan {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Only list marks with this status (UN_READ, READING, HAVE_READ, NOTICE)
        #[arg(short, long)]
        status: Option<Status>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Print the progress summary only
    Progress {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show the mark on one declaration
    Show {
        /// Declaration identifier, e.g. `my_crate::mapper::Subject::new`
        id: String,

        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn scan(config: ScanConfig, paths: &[PathBuf]) -> anyhow::Result<ScanOutcome> {
    Scanner::new(config)
        .scan_paths(paths)
        .context("scan failed")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = ScanConfig::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Scan {
            paths,
            status,
            format,
        } => {
            let outcome = scan(config, &paths)?;
            let report = Report::new(&outcome).with_status(status);
            print!("{}", report.render(format)?);
        }
        Commands::Progress { paths } => {
            let outcome = scan(config, &paths)?;
            println!("{}", progress_line(&outcome.registry.progress()));
        }
        Commands::Show { id, paths } => {
            let outcome = scan(config, &paths)?;
            let id = DeclId::new(id);
            match outcome.registry.get(&id) {
                Some(entry) => print!("{}", render_entry(&id, entry)),
                None => bail!("no mark found for `{}`", id),
            }
        }
    }

    Ok(())
}
