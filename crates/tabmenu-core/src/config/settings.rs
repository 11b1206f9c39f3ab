//! Settings parser for .tabmenu/config.toml

use super::types::Settings;
use crate::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const TABMENU_DIR: &str = ".tabmenu";

/// Parse settings from TOML text, rejecting malformed menu options.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| Error::config(format!("{}", e)))?;

    for option in &settings.menu.options {
        option.validate()?;
    }

    Ok(settings)
}

/// Load settings from `<dir>/.tabmenu/config.toml`
///
/// Never fails: a missing file means defaults, and an unreadable or invalid
/// file is logged and replaced by defaults.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(TABMENU_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                let err = Error::config_parse(&config_path, e.to_string());
                warn!("{}", err);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in `<dir>/.tabmenu/`
pub fn init_config_dir(dir: &Path) -> Result<()> {
    let tabmenu_dir = dir.join(TABMENU_DIR);

    if !tabmenu_dir.exists() {
        std::fs::create_dir_all(&tabmenu_dir)
            .map_err(|e| Error::config(format!("Failed to create .tabmenu dir: {}", e)))?;
    }

    let config_path = tabmenu_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# tabmenu configuration

[behavior]
mouse_capture = true    # Menus and tabs are mouse driven

[ui]
expand_indicator = "⯈"  # Suffix for items that open a submenu
shadow_glyph = "░"      # Drop shadow under submenus

# Menu entries. `structure` is a dotted path: "file.open" sits under "file".
# Entries whose parent path does not exist are ignored.
[[menu.options]]
id = "file"
text = "File"
structure = "file"

[[menu.options]]
id = "file.quit"
text = "Quit"
structure = "file.quit"

[[tabs.initial]]
name = "welcome"
body = "Hello from tabmenu."
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}
