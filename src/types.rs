use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReplydeskError;

pub const REPLYDESK_DIR: &str = ".replydesk";

/// Identifier of a ticket, assigned by the data source and stable for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    pub const fn new(id: u64) -> Self {
        TicketId(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        TicketId(id)
    }
}

/// Classified sentiment of a ticket's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionalTone {
    #[serde(rename = "Позитивный")]
    Positive,
    #[serde(rename = "Нейтральный")]
    Neutral,
    #[serde(rename = "Негативный")]
    Negative,
}

impl EmotionalTone {
    pub const ALL: [EmotionalTone; 3] = [
        EmotionalTone::Positive,
        EmotionalTone::Neutral,
        EmotionalTone::Negative,
    ];

    /// The display label used in tables and exports
    pub fn label(self) -> &'static str {
        match self {
            EmotionalTone::Positive => "Позитивный",
            EmotionalTone::Neutral => "Нейтральный",
            EmotionalTone::Negative => "Негативный",
        }
    }
}

impl fmt::Display for EmotionalTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmotionalTone {
    type Err = ReplydeskError;

    /// Accepts the display labels and the extractor's English classes.
    /// `angry` and `urgent` are stronger forms of negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "Позитивный" => return Ok(EmotionalTone::Positive),
            "Нейтральный" => return Ok(EmotionalTone::Neutral),
            "Негативный" => return Ok(EmotionalTone::Negative),
            _ => {}
        }
        match trimmed.to_lowercase().as_str() {
            "positive" => Ok(EmotionalTone::Positive),
            "neutral" => Ok(EmotionalTone::Neutral),
            "negative" | "angry" | "urgent" => Ok(EmotionalTone::Negative),
            _ => Err(ReplydeskError::UnrecognizedTone(s.to_string())),
        }
    }
}

/// Review state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    New,
    Sent,
}

impl TicketStatus {
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::New => "Новое",
            TicketStatus::Sent => "Отправлено",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::New => write!(f, "new"),
            TicketStatus::Sent => write!(f, "sent"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = ReplydeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "sent" => Ok(TicketStatus::Sent),
            _ => Err(ReplydeskError::Config(format!("invalid status '{}'", s))),
        }
    }
}
