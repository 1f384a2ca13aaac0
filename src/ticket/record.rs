//! Wire form of a ticket as delivered by a data source.

use serde::{Deserialize, Serialize};

use super::{ReceivedAt, Ticket};
use crate::error::{ReplydeskError, Result};
use crate::types::{EmotionalTone, TicketId, TicketStatus};

/// Serial numbers arrive either as a list or as one free-text string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerialNumbersField {
    Many(Vec<String>),
    One(String),
}

impl SerialNumbersField {
    fn into_list(self) -> Option<Vec<String>> {
        let list = match self {
            SerialNumbersField::Many(items) => items,
            SerialNumbersField::One(text) => vec![text],
        };
        let list: Vec<String> = list
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if list.is_empty() { None } else { Some(list) }
    }
}

/// Unvalidated ticket record. Tone and date are kept as raw strings until
/// conversion into a [`Ticket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub id: u64,
    pub date: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub serial_numbers: Option<SerialNumbersField>,
    #[serde(default)]
    pub device_type: Option<String>,
    pub emotional_tone: String,
    pub issue_summary: String,
    pub original_message: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub reviewed_by_human: bool,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = ReplydeskError;

    fn try_from(record: TicketRecord) -> Result<Self> {
        let emotional_tone: EmotionalTone = record.emotional_tone.parse()?;
        let date: ReceivedAt = record.date.parse()?;

        Ok(Ticket {
            id: TicketId::new(record.id),
            date,
            full_name: non_blank(record.full_name),
            object: non_blank(record.object),
            phone: non_blank(record.phone),
            email: record.email,
            serial_numbers: record.serial_numbers.and_then(SerialNumbersField::into_list),
            device_type: non_blank(record.device_type),
            emotional_tone,
            issue_summary: record.issue_summary,
            original_message: record.original_message,
            status: record.status.unwrap_or_default(),
            reviewed_by_human: record.reviewed_by_human,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
