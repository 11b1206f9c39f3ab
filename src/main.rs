//! tabmenu - terminal menu bar and tab container demo
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tabmenu_core::config::init_config_dir;
use tabmenu_core::prelude::*;

/// tabmenu - terminal menu bar and tab container demo
#[derive(Parser, Debug)]
#[command(name = "tabmenu")]
#[command(about = "Mouse-driven menu bar and tabs in the terminal", long_about = None)]
struct Args {
    /// Directory containing .tabmenu/config.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Write a commented default config and exit
    #[arg(long)]
    init: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        init_config_dir(&config_dir)?;
        eprintln!(
            "Config ready in {}",
            config_dir.join(".tabmenu").display()
        );
        return Ok(());
    }

    tabmenu::run(&config_dir)
}
