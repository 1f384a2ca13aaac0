//! In-memory ticket store.
//!
//! The store is the single source of truth for ticket identity and content.
//! It is filled once from a data source and afterwards only changes through
//! [`TicketStore::mark_sent`]. Readers get shared references or clones, never
//! a handle that could edit a ticket in place.

use std::collections::HashSet;

use super::{Ticket, TicketRecord};
use crate::error::{ReplydeskError, Result};
use crate::types::{TicketId, TicketStatus};

/// Lifecycle of the ticket collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A fetch is outstanding; the list is not known yet (not the same as empty)
    #[default]
    Loading,
    Ready,
    /// The last fetch failed; a reload may be attempted
    Failed { message: String },
}

/// A record the store refused to accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: u64,
    pub reason: String,
}

/// Outcome of populating the store from a batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    state: LoadState,
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// An empty store in the `Loading` state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Drop the current collection and wait for a new fetch
    pub fn begin_loading(&mut self) {
        self.state = LoadState::Loading;
        self.tickets.clear();
    }

    /// Replace the collection with validated `records`.
    ///
    /// Records with an unrecognized tone, an unparsable date or an id that was
    /// already taken are skipped and reported. The first valid record for an id
    /// wins; an invalid one does not claim the id.
    pub fn populate(&mut self, records: Vec<TicketRecord>) -> LoadReport {
        let mut report = LoadReport::default();
        let mut seen: HashSet<TicketId> = HashSet::new();
        let mut tickets = Vec::with_capacity(records.len());

        for record in records {
            let raw_id = record.id;
            let reason = match Ticket::try_from(record) {
                Ok(ticket) if seen.insert(ticket.id) => {
                    tickets.push(ticket);
                    continue;
                }
                Ok(_) => "duplicate ticket id".to_string(),
                Err(e) => e.to_string(),
            };
            report.skipped.push(SkippedRecord { id: raw_id, reason });
        }

        for skipped in &report.skipped {
            tracing::warn!("Skipped ticket record {}: {}", skipped.id, skipped.reason);
        }

        report.loaded = tickets.len();
        self.tickets = tickets;
        self.state = LoadState::Ready;
        tracing::info!("Loaded {} tickets", report.loaded);
        report
    }

    /// Record a failed fetch. Previously loaded tickets are discarded.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("Ticket load failed: {}", message);
        self.tickets.clear();
        self.state = LoadState::Failed { message };
    }

    /// All tickets, or `None` while loading or after a failed load
    pub fn tickets(&self) -> Option<&[Ticket]> {
        match self.state {
            LoadState::Ready => Some(&self.tickets),
            _ => None,
        }
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TicketId) -> bool {
        self.get(id).is_some()
    }

    /// Flag the ticket as answered and return the updated copy
    pub fn mark_sent(&mut self, id: TicketId) -> Result<Ticket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ReplydeskError::TicketNotFound(id))?;

        ticket.status = TicketStatus::Sent;
        ticket.reviewed_by_human = true;
        tracing::info!("Ticket {} marked as sent", id);
        Ok(ticket.clone())
    }
}
