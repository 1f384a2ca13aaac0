pub mod commands;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod export;
pub mod source;
pub mod ticket;
pub mod types;

pub use config::Config;
pub use console::{
    Console, DetailView, DraftController, GenerateOutcome, ListView, ReplyGenerator,
    ReplyTemplate, SyncOutcome, SyncStub, TaskHandle,
};
pub use error::{ReplydeskError, Result};
pub use export::{ArtifactSink, DirectorySink, ExportArtifact, ExportFormat, ExportSettings};
pub use source::{FileSource, MockSource, TicketSource};
pub use ticket::{
    LoadReport, LoadState, ReceivedAt, Ticket, TicketBuilder, TicketRecord, TicketStore,
};
pub use types::{EmotionalTone, REPLYDESK_DIR, TicketId, TicketStatus};
