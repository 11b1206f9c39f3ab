//! Terminal lifecycle and the main event loop

use std::path::Path;
use std::time::Duration;

use ratatui::DefaultTerminal;
use tabmenu_core::config;
use tabmenu_core::prelude::*;
use tabmenu_tui::{canvas, event, terminal};

use crate::app::App;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Load settings, take over the terminal and run until quit.
pub fn run(config_dir: &Path) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let settings = config::load_settings(config_dir);
    info!(
        "Loaded settings: {} menu options, {} tabs, mouse_capture={}",
        settings.menu.options.len(),
        settings.tabs.initial.len(),
        settings.behavior.mouse_capture
    );

    let mut term = ratatui::init();
    let mut app = App::new(&settings);

    let result = if settings.behavior.mouse_capture {
        terminal::enable_mouse_capture().and_then(|()| run_loop(&mut term, &mut app))
    } else {
        warn!("Mouse capture disabled; menus and tabs only react to keys");
        run_loop(&mut term, &mut app)
    };

    if settings.behavior.mouse_capture {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    ratatui::restore();

    result
}

fn run_loop(term: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        term.draw(|frame| {
            app.set_area(canvas::from_rect(frame.area()));
            app.draw(frame.buffer_mut());
        })
        .context("Failed to draw frame")?;

        if let Some(event) = event::poll(POLL_INTERVAL)? {
            app.handle_event(event);
        }
    }
    Ok(())
}
