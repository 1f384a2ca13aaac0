use thiserror::Error;

use crate::types::TicketId;

#[derive(Error, Debug)]
pub enum ReplydeskError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(TicketId),

    #[error("cannot select ticket '{0}': not in the current ticket list")]
    InvalidSelection(TicketId),

    #[error("unrecognized emotional tone '{0}'")]
    UnrecognizedTone(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("ticket '{0}' has no reply ready to send")]
    NothingToSend(TicketId),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("failed to load tickets: {0}")]
    Transport(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReplydeskError {
    /// True for errors that reference a ticket id absent from the store
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReplydeskError::TicketNotFound(_) | ReplydeskError::InvalidSelection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReplydeskError>;
