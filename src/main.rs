//! PixelGrid - Terminal-based pixel grid for labeling handwritten digits
//!
//! Draw a digit on a small black-and-white grid with the mouse, label it,
//! collect samples, and export them as CSV for training a classifier.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use pixelgrid::config::Config;
use pixelgrid::constants::APP_BINARY_NAME;
use pixelgrid::tui;

/// PixelGrid - Terminal-based pixel grid for labeling handwritten digits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of grid rows (overrides the config file)
    #[arg(long, value_name = "N")]
    rows: Option<u8>,

    /// Number of grid columns (overrides the config file)
    #[arg(long, value_name = "N")]
    cols: Option<u8>,

    /// Directory exported CSV files are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log file path (defaults to pixelgrid.log in the config directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Save the effective configuration to the config file and exit
    #[arg(long, conflicts_with = "print_config")]
    write_config: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir.clone_from(dir);
        }
    }

    fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join(format!("{APP_BINARY_NAME}.log"))),
        }
    }
}

/// Initialize logging to a file (use `RUST_LOG` to control the level).
///
/// The TUI owns stdout, so nothing is logged to the terminal.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.write_config {
        config.save()?;
        println!("Wrote {}", Config::config_file_path()?.display());
        return Ok(());
    }

    init_logging(&cli.log_path()?)?;
    tracing::info!(
        rows = config.grid.rows,
        cols = config.grid.cols,
        output_dir = %config.export.output_dir.display(),
        "starting editor"
    );

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);
    app_state.shutdown();

    // Restore terminal
    tui::restore_terminal(terminal)?;

    if let Err(e) = &result {
        tracing::error!("editor failed: {e:#}");
    }
    result
}
