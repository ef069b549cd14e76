// latestlog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading
// 3. Logging initialisation (debug mode support)
// 4. One run of the finder and the exit code it maps to

use clap::Parser;
use latestlog::app::finder::LatestLogFinder;
use latestlog::core::report::{self, OutputFormat};
use latestlog::core::resolver::Platform;
use latestlog::platform::config::{self, AppConfig, PlatformPaths};
use latestlog::platform::home::SystemHome;
use latestlog::util::{self, error::Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

/// latestlog - report the most recently modified FinderModernGUI log file.
///
/// With no arguments, searches the platform's FinderModernGUI logs directory
/// and prints the newest `*.log` file with its modification time.
#[derive(Parser, Debug)]
#[command(name = "latestlog", version, about)]
struct Cli {
    /// Output format: text or json.
    #[arg(long = "format", value_parser = OutputFormat::from_str)]
    format: Option<OutputFormat>,

    /// List every log file, newest first, instead of only the latest.
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Search this directory instead of the platform default.
    #[arg(long = "logs-dir")]
    logs_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };

    // Config is read before logging so `[logging] level` can take effect;
    // its warnings are emitted once the subscriber exists.
    let loaded = match &cli.config {
        Some(path) => config::load_config_file(path),
        None => Ok(config::load_config(&PlatformPaths::resolve().config_dir)),
    };

    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            return ExitCode::from(util::constants::EXIT_FAILURE as u8);
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        os = std::env::consts::OS,
        "latestlog starting"
    );

    match run(&cli, app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `--help` and `--version` exit 0; usage errors exit with the generic
/// failure code so they cannot be mistaken for an unresolved search.
fn usage_exit(e: &clap::Error) -> ExitCode {
    // Printing only fails if stdout/stderr are closed; the exit code still applies.
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::from(util::constants::EXIT_FAILURE as u8)
    } else {
        ExitCode::SUCCESS
    }
}

/// CLI flags override config.toml values.
fn run(cli: &Cli, app_config: AppConfig) -> Result<()> {
    let format = cli.format.unwrap_or(app_config.format);
    let logs_dir = cli.logs_dir.clone().or(app_config.logs_dir);

    let finder = LatestLogFinder::new(Platform::current(), SystemHome).with_logs_dir(logs_dir);
    let stdout = std::io::stdout().lock();

    if cli.all {
        let ranked = finder.ranked()?;
        report::write_listing(&ranked, format, stdout)?;
    } else {
        let latest = finder.latest()?;
        report::write_latest(&latest, format, stdout)?;
    }
    Ok(())
}
