//! The review console: the application shell that owns the ticket store,
//! the selection/draft controller and the sync flag.
//!
//! All state lives behind one mutex in [`Console`]. Commands lock it briefly
//! and never hold the lock across an await; the generation and sync stubs run
//! as spawned tasks that re-acquire the lock only to publish their result.

mod controller;
mod generator;
mod sync;
mod view;

pub use controller::{DraftController, GenerationToken};
pub use generator::{ReplyGenerator, ReplyTemplate};
pub use sync::SyncStub;
pub use view::{DetailView, ListView};

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::{ReplydeskError, Result};
use crate::export::{self, ExportArtifact, ExportFormat, ExportSettings};
use crate::source::{self, TicketSource};
use crate::ticket::{LoadReport, LoadState, Ticket, TicketStore};
use crate::types::TicketId;

#[derive(Debug, Default)]
struct ConsoleState {
    store: TicketStore,
    controller: DraftController,
    syncing: bool,
}

/// Handle to a background task started by the console
#[derive(Debug)]
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Wait until the task has published its result
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            tracing::warn!("Console task ended abnormally: {e}");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[derive(Debug)]
pub enum GenerateOutcome {
    Started(TaskHandle),
    /// A generation for this ticket is already running; nothing new was started
    AlreadyGenerating,
}

#[derive(Debug)]
pub enum SyncOutcome {
    Started(TaskHandle),
    AlreadySyncing,
}

#[derive(Clone)]
pub struct Console {
    state: Arc<Mutex<ConsoleState>>,
    source: Arc<dyn TicketSource>,
    generator: ReplyGenerator,
    sync: SyncStub,
    export_settings: ExportSettings,
}

impl Console {
    pub fn new(
        source: Arc<dyn TicketSource>,
        generator: ReplyGenerator,
        sync: SyncStub,
        export_settings: ExportSettings,
    ) -> Self {
        Console {
            state: Arc::new(Mutex::new(ConsoleState::default())),
            source,
            generator,
            sync,
            export_settings,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Console::new(
            Arc::from(source::from_config(config)?),
            ReplyGenerator::new(config.generate_latency()),
            SyncStub::new(config.sync_latency()),
            ExportSettings::from_config(config)?,
        ))
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Fetch tickets from the source. On failure the store is left in
    /// [`LoadState::Failed`] and the error is returned as well.
    pub async fn load(&self) -> Result<LoadReport> {
        self.state.lock().store.begin_loading();
        tracing::debug!("Loading tickets from {}", self.source.describe());

        match self.source.fetch().await {
            Ok(records) => Ok(self.state.lock().store.populate(records)),
            Err(e) => {
                self.state.lock().store.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Retry path: drop drafts and generation flags, then load again
    pub async fn reload(&self) -> Result<LoadReport> {
        self.state.lock().controller.reset();
        self.load().await
    }

    pub fn load_state(&self) -> LoadState {
        self.state.lock().store.state().clone()
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    /// Snapshot of the loaded tickets, `None` until loaded
    pub fn tickets(&self) -> Option<Vec<Ticket>> {
        self.state.lock().store.tickets().map(<[Ticket]>::to_vec)
    }

    pub fn ticket(&self, id: TicketId) -> Option<Ticket> {
        self.state.lock().store.get(id).cloned()
    }

    pub fn list_view(&self) -> ListView {
        let state = self.state.lock();
        match state.store.state() {
            LoadState::Loading => ListView::Loading,
            LoadState::Failed { message } => ListView::Failed {
                message: message.clone(),
            },
            LoadState::Ready if state.syncing => ListView::Busy,
            LoadState::Ready => ListView::Table {
                tickets: state.store.tickets().map(<[Ticket]>::to_vec).unwrap_or_default(),
                selected: state.controller.selected(),
            },
        }
    }

    pub fn selected(&self) -> Option<TicketId> {
        self.state.lock().controller.selected()
    }

    /// Detail panel of the selected ticket
    pub fn detail_view(&self) -> Option<DetailView> {
        let state = self.state.lock();
        let id = state.controller.selected()?;
        let ticket = state.store.get(id)?.clone();
        Some(DetailView {
            ticket,
            draft: state.controller.draft(id).to_string(),
            generating: state.controller.is_generating(id),
            can_send: state.controller.can_send(id),
        })
    }

    pub fn draft(&self, id: TicketId) -> String {
        self.state.lock().controller.draft(id).to_string()
    }

    pub fn is_generating(&self, id: TicketId) -> bool {
        self.state.lock().controller.is_generating(id)
    }

    pub fn can_send(&self, id: TicketId) -> bool {
        self.state.lock().controller.can_send(id)
    }

    pub fn is_syncing(&self) -> bool {
        self.state.lock().syncing
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    pub fn select(&self, id: TicketId) -> Result<()> {
        let mut state = self.state.lock();
        let ConsoleState {
            store, controller, ..
        } = &mut *state;
        controller.select(id, store)
    }

    pub fn deselect(&self) {
        self.state.lock().controller.deselect();
    }

    pub fn set_draft(&self, id: TicketId, text: impl Into<String>) {
        self.state.lock().controller.set_draft(id, text);
    }

    /// Start generating a reply for `id`.
    ///
    /// The result is written to the draft map when it arrives, whether or not
    /// the ticket is still selected. A second call for a ticket that is still
    /// generating is ignored.
    pub fn generate(&self, id: TicketId) -> Result<GenerateOutcome> {
        let (token, tone) = {
            let mut state = self.state.lock();
            let tone = state
                .store
                .get(id)
                .map(|t| t.emotional_tone)
                .ok_or(ReplydeskError::TicketNotFound(id))?;
            match state.controller.begin_generation(id) {
                Some(token) => (token, tone),
                None => {
                    tracing::warn!("Generation for ticket {} already running; request ignored", id);
                    return Ok(GenerateOutcome::AlreadyGenerating);
                }
            }
        };

        let state = Arc::clone(&self.state);
        let generator = self.generator.clone();
        let handle = tokio::spawn(async move {
            let reply = generator.generate(tone).await;
            if state.lock().controller.finish_generation(token, reply) {
                tracing::info!("Draft generated for ticket {}", token.id);
            } else {
                tracing::warn!("Discarded draft for ticket {} after reload", token.id);
            }
        });

        Ok(GenerateOutcome::Started(TaskHandle { handle }))
    }

    /// Flag the ticket as answered
    pub fn mark_sent(&self, id: TicketId) -> Result<Ticket> {
        self.state.lock().store.mark_sent(id)
    }

    /// Send the current draft: mark the ticket sent and close its detail view
    pub fn send(&self, id: TicketId) -> Result<Ticket> {
        let mut state = self.state.lock();
        if !state.store.contains(id) {
            return Err(ReplydeskError::TicketNotFound(id));
        }
        if !state.controller.can_send(id) {
            return Err(ReplydeskError::NothingToSend(id));
        }

        let ticket = state.store.mark_sent(id)?;
        if state.controller.selected() == Some(id) {
            state.controller.deselect();
        }
        Ok(ticket)
    }

    /// Start the sync stub. The list view reports [`ListView::Busy`] until it
    /// finishes.
    pub fn sync(&self) -> SyncOutcome {
        {
            let mut state = self.state.lock();
            if state.syncing {
                return SyncOutcome::AlreadySyncing;
            }
            state.syncing = true;
        }

        let state = Arc::clone(&self.state);
        let stub = self.sync.clone();
        let handle = tokio::spawn(async move {
            stub.run().await;
            state.lock().syncing = false;
            tracing::info!("Sync finished");
        });

        SyncOutcome::Started(TaskHandle { handle })
    }

    /// Encode the current ticket collection
    pub fn export(&self, format: ExportFormat) -> Result<ExportArtifact> {
        let tickets = self
            .tickets()
            .ok_or_else(|| ReplydeskError::Export("tickets are not loaded".to_string()))?;
        export::export(&tickets, format, &self.export_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;
    use std::time::Duration;

    async fn loaded_console() -> Console {
        let console = Console::new(
            Arc::new(MockSource::new(Duration::ZERO)),
            ReplyGenerator::new(Duration::from_millis(2000)),
            SyncStub::new(Duration::from_millis(1500)),
            ExportSettings::default(),
        );
        console.load().await.unwrap();
        console
    }

    #[tokio::test]
    async fn test_list_view_before_and_after_load() {
        let console = Console::new(
            Arc::new(MockSource::new(Duration::ZERO)),
            ReplyGenerator::instant(),
            SyncStub::new(Duration::ZERO),
            ExportSettings::default(),
        );
        assert_eq!(console.list_view(), ListView::Loading);

        console.load().await.unwrap();
        match console.list_view() {
            ListView::Table { tickets, selected } => {
                assert_eq!(tickets.len(), 5);
                assert_eq!(selected, None);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_ignores_duplicate() {
        let console = loaded_console().await;
        let id = TicketId::new(1);

        let first = console.generate(id).unwrap();
        assert!(matches!(first, GenerateOutcome::Started(_)));
        assert!(matches!(
            console.generate(id).unwrap(),
            GenerateOutcome::AlreadyGenerating
        ));

        if let GenerateOutcome::Started(handle) = first {
            handle.wait().await;
        }
        assert!(!console.is_generating(id));
        assert!(!console.draft(id).is_empty());
    }

    #[tokio::test]
    async fn test_generate_unknown_ticket() {
        let console = loaded_console().await;
        let err = console.generate(TicketId::new(77)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_send_requires_draft() {
        let console = loaded_console().await;
        let id = TicketId::new(2);

        let err = console.send(id).unwrap_err();
        assert!(matches!(err, ReplydeskError::NothingToSend(_)));

        console.select(id).unwrap();
        console.set_draft(id, "Ответ оператора");
        let ticket = console.send(id).unwrap();
        assert!(ticket.reviewed_by_human);
        assert_eq!(console.selected(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_hides_table() {
        let console = loaded_console().await;

        let outcome = console.sync();
        assert!(console.list_view().is_busy());
        assert!(matches!(console.sync(), SyncOutcome::AlreadySyncing));

        if let SyncOutcome::Started(handle) = outcome {
            handle.wait().await;
        }
        assert!(!console.is_syncing());
        assert!(matches!(console.list_view(), ListView::Table { .. }));
    }

    #[tokio::test]
    async fn test_export_before_load_fails() {
        let console = Console::new(
            Arc::new(MockSource::new(Duration::ZERO)),
            ReplyGenerator::instant(),
            SyncStub::new(Duration::ZERO),
            ExportSettings::default(),
        );
        let err = console.export(ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ReplydeskError::Export(_)));
    }
}
