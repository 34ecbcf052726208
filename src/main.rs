//! CLI entry point for the bikeshare explorer.
//!
//! `explore` runs the interactive question-and-answer loop; `report` prints
//! statistics for a single selection, as text or JSON.

use anyhow::Result;
use bikeshare_explorer::{
    city::City,
    config::Settings,
    filter::{FilterCriteria, Selection},
    loader::CsvDirectory,
    output::{render_report, write_json},
    prompt::Console,
    record::{DayOfWeek, Month},
    session::{Session, run_query},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files [env: BIKESHARE_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Year used to turn birth years into ages [env: BIKESHARE_REFERENCE_YEAR]
    #[arg(long, global = true)]
    reference_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick a city, month and day, then browse statistics and trips
    Explore,
    /// Print statistics for one selection without prompting
    Report {
        #[arg(long, value_enum)]
        city: City,

        /// Month name, abbreviation, 1-12, or "all"
        #[arg(long, default_value = "all")]
        month: Selection<Month>,

        /// Day name, abbreviation, or "all"
        #[arg(long, default_value = "all")]
        day: Selection<DayOfWeek>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(year) = cli.reference_year {
        settings.reference_year = year;
    }

    let _file_guard = init_logging(&settings.log_file_path)?;
    info!(
        data_dir = %settings.data_dir.display(),
        reference_year = settings.reference_year,
        "Starting"
    );

    let source = CsvDirectory::new(&settings.data_dir);

    match cli.command {
        Commands::Explore => {
            let console = Console::new(std::io::stdin().lock(), std::io::stdout());
            Session::new(source, console, settings.stats()).run()?;
        }
        Commands::Report {
            city,
            month,
            day,
            format,
        } => {
            let criteria = FilterCriteria::new(month, day);
            let (_, report) = run_query(&source, city, &criteria, &settings.stats())?;

            let mut stdout = std::io::stdout().lock();
            match format {
                Format::Text => render_report(&mut stdout, &report, &criteria)?,
                Format::Json => write_json(&mut stdout, &report)?,
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// Stderr defaults to `warn` so log lines don't interleave with the prompts.
fn init_logging(log_file_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    filter_or(std::env::var(var).ok().as_deref(), default)
}

/// `directives` as given when present and valid, otherwise `default` everywhere.
fn filter_or(directives: Option<&str>, default: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}
