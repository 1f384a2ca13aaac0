//! Data sources that supply the initial ticket collection.

mod file;
mod mock;

pub use file::FileSource;
pub use mock::{MockSource, mock_records};

use crate::config::{Config, SourceKind};
use crate::error::Result;
use crate::ticket::TicketRecord;

/// Supplier of ticket records.
///
/// Implementations fail with [`crate::ReplydeskError::Transport`] when the
/// records cannot be obtained at all; individual bad records are returned
/// as-is and filtered by the store.
#[async_trait::async_trait]
pub trait TicketSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TicketRecord>>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Build the source selected in the configuration
pub fn from_config(config: &Config) -> Result<Box<dyn TicketSource>> {
    match config.source.kind {
        SourceKind::Mock => Ok(Box::new(MockSource::new(config.load_latency()))),
        SourceKind::File => {
            let path = config.source.path.clone().ok_or_else(|| {
                crate::error::ReplydeskError::Config(
                    "source.path is required when source.kind is 'file'".to_string(),
                )
            })?;
            Ok(Box::new(FileSource::new(path)))
        }
    }
}
