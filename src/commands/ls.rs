use super::{load_console, print_json};
use crate::config::Config;
use crate::display::format_list_view;
use crate::error::Result;

/// List all tickets as a table, or as JSON
pub async fn cmd_ls(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let console = load_console(&config).await?;

    if output_json {
        let tickets = console.tickets().unwrap_or_default();
        return print_json(&tickets);
    }

    println!(
        "{}",
        format_list_view(&console.list_view(), config.display_offset()?)
    );
    Ok(())
}
