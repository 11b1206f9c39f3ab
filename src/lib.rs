//! tabmenu - demo host for the menu bar and tab widgets
//!
//! The binary entry point lives in `main.rs`; this library owns startup
//! ([`run`]), the event loop ([`runner`]) and the demo state ([`app`]).

pub mod app;
pub mod runner;

use std::path::Path;

use tabmenu_core::logging::{self, LogConfig};
use tabmenu_core::prelude::*;

pub use app::App;

/// Set up error reporting and logging, then run the TUI until the user
/// quits.
pub fn run(config_dir: &Path) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the TUI owns stdout
    let log_config = LogConfig::from_env();
    logging::init(&log_config)?;

    info!("═══════════════════════════════════════════════════════");
    info!("tabmenu starting");
    info!("Config dir: {}", config_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let result = runner::run(config_dir);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "Details in {}",
            logging::current_log_file(&log_config).display()
        );
    }

    info!("tabmenu exiting");
    result
}
