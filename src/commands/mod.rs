mod config;
mod console;
mod draft;
mod export;
mod ls;
mod show;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use console::{ReplCommand, cmd_console};
pub use draft::cmd_draft;
pub use export::cmd_export;
pub use ls::cmd_ls;
pub use show::cmd_show;

use crate::config::Config;
use crate::console::Console;
use crate::error::Result;

/// Build a console from the configuration and wait for the initial load
pub(crate) async fn load_console(config: &Config) -> Result<Console> {
    let console = Console::from_config(config)?;
    console.load().await?;
    Ok(console)
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
