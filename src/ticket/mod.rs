//! Ticket records and the in-memory ticket store.

mod builder;
mod received_at;
mod record;
mod store;

pub use builder::TicketBuilder;
pub use received_at::ReceivedAt;
pub use record::{SerialNumbersField, TicketRecord};
pub use store::{LoadReport, LoadState, SkippedRecord, TicketStore};

use serde::Serialize;

use crate::types::{EmotionalTone, TicketId, TicketStatus};

/// One inbound support message extracted from an email
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub date: ReceivedAt,
    pub full_name: Option<String>,
    pub object: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub serial_numbers: Option<Vec<String>>,
    pub device_type: Option<String>,
    pub emotional_tone: EmotionalTone,
    pub issue_summary: String,
    pub original_message: String,
    pub status: TicketStatus,
    pub reviewed_by_human: bool,
}

impl Ticket {
    /// Serial numbers joined the way the console shows them
    pub fn serial_numbers_joined(&self) -> Option<String> {
        self.serial_numbers.as_ref().map(|numbers| numbers.join(","))
    }

    pub fn is_sent(&self) -> bool {
        self.status == TicketStatus::Sent
    }
}
