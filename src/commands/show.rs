use serde_json::json;

use super::{load_console, print_json};
use crate::config::Config;
use crate::display::format_detail;
use crate::error::{ReplydeskError, Result};
use crate::types::TicketId;

/// Display a ticket with its sender details and original message
pub async fn cmd_show(id: TicketId, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let console = load_console(&config).await?;

    if console.ticket(id).is_none() {
        return Err(ReplydeskError::TicketNotFound(id));
    }
    console.select(id)?;
    let view = console
        .detail_view()
        .ok_or(ReplydeskError::TicketNotFound(id))?;

    if output_json {
        return print_json(&json!({
            "ticket": view.ticket,
            "draft": view.draft,
            "generating": view.generating,
            "canSend": view.can_send,
        }));
    }

    println!("{}", format_detail(&view, config.display_offset()?));
    Ok(())
}
