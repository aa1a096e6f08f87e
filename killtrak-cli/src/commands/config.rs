//! Configuration management CLI commands.
//!
//! `config get`, `config set`, `config list` and `config path` read and edit
//! `config.ini` without opening it by hand.

use clap::Subcommand;
use killtrak::config::{config_file_path, ConfigError, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Setting name as section.key (e.g. tracker.interval_ms)
        key: String,
    },

    /// Change one setting
    Set {
        /// Setting name as section.key (e.g. tracker.confidence_threshold)
        key: String,

        /// New value
        value: String,
    },

    /// Print every setting, marking those changed from the default
    List,

    /// Print the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            println!("{}", key.get(&ConfigFile::load()?));
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let mut config = ConfigFile::load()?;
            key.set(&mut config, &value)?;
            config.save()?;
            println!("Set {} = {}", key.name(), key.get(&config));
        }
        ConfigCommands::List => {
            for line in list_lines(&ConfigFile::load()?) {
                println!("{}", line);
            }
        }
        ConfigCommands::Path => println!("{}", config_file_path().display()),
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|e: ConfigError| {
        CliError::Config(format!(
            "{}. Use 'killtrak config list' to see available keys.",
            e
        ))
    })
}

/// One `[section]` header per section, then `key = value` lines.
fn list_lines(config: &ConfigFile) -> Vec<String> {
    let defaults = ConfigFile::default();
    let mut lines = Vec::new();
    let mut current_section = "";

    for key in ConfigKey::all() {
        if key.section() != current_section {
            if !current_section.is_empty() {
                lines.push(String::new());
            }
            current_section = key.section();
            lines.push(format!("[{}]", current_section));
        }

        let value = key.get(config);
        if value == key.get(&defaults) {
            lines.push(format!("  {} = {}", key.key_name(), value));
        } else {
            lines.push(format!("  {} = {}  (changed)", key.key_name(), value));
        }
    }
    lines
}
