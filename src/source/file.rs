use std::path::PathBuf;

use serde::Deserialize;

use super::TicketSource;
use crate::error::{ReplydeskError, Result};
use crate::ticket::TicketRecord;

/// Accepted file layouts: a bare array or the `{ "data": [...] }` envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum TicketFeed {
    List(Vec<TicketRecord>),
    Envelope { data: Vec<TicketRecord> },
}

/// Reads ticket records from a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TicketSource for FileSource {
    async fn fetch(&self) -> Result<Vec<TicketRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ReplydeskError::Transport(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let feed: TicketFeed = serde_json::from_str(&content).map_err(|e| {
            ReplydeskError::Transport(format!("malformed ticket feed {}: {}", self.path.display(), e))
        })?;

        Ok(match feed {
            TicketFeed::List(records) => records,
            TicketFeed::Envelope { data } => data,
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
