use super::load_console;
use crate::config::Config;
use crate::console::GenerateOutcome;
use crate::error::Result;
use crate::types::TicketId;

/// Generate a suggested reply for a ticket and print it
pub async fn cmd_draft(id: TicketId) -> Result<()> {
    let config = Config::load()?;
    let console = load_console(&config).await?;

    if let GenerateOutcome::Started(handle) = console.generate(id)? {
        handle.wait().await;
    }

    println!("{}", console.draft(id));
    Ok(())
}
