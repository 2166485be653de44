use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use mosaic_desk::config::{ConfigError, WorkspaceConfig};
use mosaic_desk::constants::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH,
};
use mosaic_desk::definitions::{load_from_path, sample_definitions};
use mosaic_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use mosaic_desk::runner::{NavigationLog, run_workspace};
use mosaic_desk::tracing_sub;
use mosaic_desk::window::Workspace;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(
    name = "mosaic-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating content windows you can focus, drag and resize"
)]
struct Cli {
    /// JSON array of window definitions. Without it the built-in explore
    /// page is shown.
    #[arg(short = 'd', long = "definitions", value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Smallest width a window can be resized to, in logical units.
    #[arg(long = "min-width", value_name = "UNITS", default_value_t = DEFAULT_MIN_WIDTH)]
    min_width: u32,

    /// Smallest height a window can be resized to, in logical units.
    #[arg(long = "min-height", value_name = "UNITS", default_value_t = DEFAULT_MIN_HEIGHT)]
    min_height: u32,

    /// Logical units per terminal column.
    #[arg(long = "cell-width", value_name = "UNITS", default_value_t = DEFAULT_CELL_WIDTH)]
    cell_width: u16,

    /// Logical units per terminal row.
    #[arg(long = "cell-height", value_name = "UNITS", default_value_t = DEFAULT_CELL_HEIGHT)]
    cell_height: u16,

    /// Append logs to this file. Logs are discarded when omitted.
    #[arg(long = "log-file", value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

struct AppConfig {
    workspace: WorkspaceConfig,
    definitions: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Level,
}

impl TryFrom<&Cli> for AppConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            workspace: WorkspaceConfig::validated(
                cli.min_width,
                cli.min_height,
                cli.cell_width,
                cli.cell_height,
            )?,
            definitions: cli.definitions.clone(),
            log_file: cli.log_file.clone(),
            log_level: tracing_sub::parse_level(&cli.log_level)?,
        })
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::try_from(&cli)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    tracing_sub::init(config.log_file.as_deref(), config.log_level)?;

    let definitions = match &config.definitions {
        Some(path) => load_from_path(path).map_err(io::Error::other)?,
        None => sample_definitions(),
    };
    let mut workspace = Workspace::new(definitions, config.workspace)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    let mut navigation = NavigationLog::default();
    let mut output = ConsoleOutputDriver::new()?;
    let result = run_workspace(
        &mut output,
        ConsoleInputDriver::new(),
        &mut workspace,
        &mut navigation,
        POLL_INTERVAL,
    );
    // Restore the terminal before reporting anything.
    drop(output);
    result?;

    for request in navigation.requests() {
        println!("navigate to {} (from {})", request.path, request.window_id);
    }
    Ok(())
}
