//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::{CONFIG_KEYS, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    if output_json {
        let mut values = serde_json::Map::new();
        for key in CONFIG_KEYS {
            values.insert(key.to_string(), json!(config.get(key)?));
        }
        return print_json(&json!({
            "config_file": Config::config_path().to_string_lossy(),
            "values": values,
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    for key in CONFIG_KEYS {
        let value = config.get(key)?;
        println!(
            "  {}: {}",
            key.cyan(),
            value.as_deref().unwrap_or("not set")
        );
    }
    println!(
        "\n{} {}",
        "Config file:".dimmed(),
        Config::config_path().display()
    );
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get(key)? {
        Some(value) => println!("{}", value),
        None => println!("not set"),
    }
    Ok(())
}

/// Set a configuration value and save it
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {} = {}", key.cyan(), value);
    Ok(())
}
