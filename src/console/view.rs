//! Snapshots of console state for the presentation layer.

use crate::ticket::Ticket;
use crate::types::TicketId;

/// What the ticket list area should show
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Initial fetch outstanding
    Loading,
    /// Fetch failed; offer a retry
    Failed { message: String },
    /// Sync running; the table is hidden behind a busy indicator
    Busy,
    Table {
        tickets: Vec<Ticket>,
        selected: Option<TicketId>,
    },
}

impl ListView {
    pub fn is_busy(&self) -> bool {
        matches!(self, ListView::Busy)
    }
}

/// Everything the detail panel of the selected ticket needs
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub ticket: Ticket,
    pub draft: String,
    pub generating: bool,
    pub can_send: bool,
}
