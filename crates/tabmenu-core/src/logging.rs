//! File logging for the TUI host.
//!
//! The terminal belongs to the widgets, so records go to a daily file under
//! the platform data dir. `TABMENU_LOG` overrides the filter and
//! `TABMENU_LOG_DIR` the directory. Old files beyond [`LogConfig::max_files`]
//! are pruned by the appender.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILENAME: &str = "tabmenu.log";
const FILTER_ENV: &str = "TABMENU_LOG";
const DIR_ENV: &str = "TABMENU_LOG_DIR";

/// Every crate of the workspace at info, dependencies at warn
pub const DEFAULT_FILTER: &str = "tabmenu=info,tabmenu_core=info,tabmenu_tui=info,warn";

/// Where and what to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub filter: Option<String>,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            filter: None,
            max_files: 7,
        }
    }
}

impl LogConfig {
    /// Defaults, with `TABMENU_LOG` and `TABMENU_LOG_DIR` applied.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(FILTER_ENV).ok(),
            std::env::var_os(DIR_ENV).map(PathBuf::from),
        )
    }

    fn from_vars(filter: Option<String>, directory: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        config.filter = filter.filter(|f| !f.trim().is_empty());
        if let Some(dir) = directory {
            config.directory = dir;
        }
        config
    }

    /// The filter to install. A filter that does not parse is replaced by
    /// [`DEFAULT_FILTER`].
    pub fn env_filter(&self) -> EnvFilter {
        self.filter
            .as_deref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }

    /// File the appender writes to on `date` (UTC).
    pub fn file_for(&self, date: NaiveDate) -> PathBuf {
        self.directory
            .join(format!("{}.{}", LOG_FILENAME, date.format("%Y-%m-%d")))
    }
}

fn default_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tabmenu")
        .join("logs")
}

fn appender(directory: &Path, max_files: usize) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(directory)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILENAME)
        .max_log_files(max_files.max(1))
        .build(directory)
        .map_err(|e| Error::logging(format!("{}: {}", directory.display(), e)))
}

/// Install the global subscriber.
///
/// # Examples
/// ```bash
/// TABMENU_LOG=debug cargo run
/// TABMENU_LOG=tabmenu_tui=trace TABMENU_LOG_DIR=/tmp/tabmenu cargo run
/// ```
pub fn init(config: &LogConfig) -> Result<()> {
    let writer = appender(&config.directory, config.max_files)?;

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!(
        "Logging to {} (keeping {} files)",
        config.directory.display(),
        config.max_files
    );
    Ok(())
}

/// Today's log file for `config`.
pub fn current_log_file(config: &LogConfig) -> PathBuf {
    config.file_for(chrono::Utc::now().date_naive())
}
