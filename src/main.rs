//! CLI entry point for the bike-share statistics tool.
//!
//! Runs an interactive exploration session by default, or a single
//! non-interactive report for a given city and optional month/day.

use anyhow::Result;
use bikeshare_stats::{
    filter::{City, DayFilter, FilterSelection, MonthFilter},
    loader::load_data,
    output::{print_pretty, write_json, write_report},
    report::TripReport,
    session::run_session,
    source::CsvDirectory,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore bike-share trip data for Chicago, New York City and Washington", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively choose filters, view statistics and page through raw data
    Explore,
    /// Print statistics for one selection and exit
    Report {
        /// City name or number (1 Chicago, 2 New York City, 3 Washington)
        #[arg(short, long)]
        city: City,

        /// Month name or number (0 = all, 1 January .. 6 June)
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day of week name or number (0 = all, 1 Monday .. 7 Sunday)
        #[arg(short = 'w', long, default_value = "all")]
        day: DayFilter,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr (quiet by default, prompts share the terminal) + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let source = CsvDirectory::new(&cli.data_dir);
    info!(data_dir = %source.dir().display(), "Using trip data directory");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let stdin = std::io::stdin();
            run_session(&source, &mut stdin.lock(), &mut out)?;
        }
        Commands::Report {
            city,
            month,
            day,
            json,
        } => {
            let selection = FilterSelection::new(city, month, day);
            let table = load_data(&source, &selection)?;
            let report = TripReport::from_table(&table, &selection);
            print_pretty(&report);

            if json {
                write_json(&mut out, &report)?;
            } else {
                write_report(&mut out, &report)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
