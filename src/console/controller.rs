//! Selection, draft text and generation flags for the review console.

use std::collections::{HashMap, HashSet};

use crate::error::{ReplydeskError, Result};
use crate::ticket::TicketStore;
use crate::types::TicketId;

/// Token handed out when a generation starts. A completion is only applied
/// if the controller has not been reset since the token was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken {
    pub id: TicketId,
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct DraftController {
    selected: Option<TicketId>,
    drafts: HashMap<TicketId, String>,
    generating: HashSet<TicketId>,
    epoch: u64,
}

impl DraftController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a ticket from the current list
    pub fn select(&mut self, id: TicketId, store: &TicketStore) -> Result<()> {
        if !store.contains(id) {
            return Err(ReplydeskError::InvalidSelection(id));
        }
        tracing::debug!("Selected ticket {}", id);
        self.selected = Some(id);
        Ok(())
    }

    /// Close the detail view. Drafts and generation flags are kept.
    pub fn deselect(&mut self) {
        if let Some(id) = self.selected.take() {
            tracing::debug!("Deselected ticket {}", id);
        }
    }

    pub fn selected(&self) -> Option<TicketId> {
        self.selected
    }

    /// Overwrite the draft for `id`; the latest write wins
    pub fn set_draft(&mut self, id: TicketId, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!("Draft for ticket {} set ({} chars)", id, text.chars().count());
        self.drafts.insert(id, text);
    }

    /// Current draft, empty when none was written yet
    pub fn draft(&self, id: TicketId) -> &str {
        self.drafts.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn is_generating(&self, id: TicketId) -> bool {
        self.generating.contains(&id)
    }

    pub fn can_send(&self, id: TicketId) -> bool {
        !self.draft(id).is_empty() && !self.is_generating(id)
    }

    /// Mark `id` as generating. Returns `None` when a generation for `id` is
    /// already outstanding.
    pub fn begin_generation(&mut self, id: TicketId) -> Option<GenerationToken> {
        if !self.generating.insert(id) {
            return None;
        }
        Some(GenerationToken {
            id,
            epoch: self.epoch,
        })
    }

    /// Apply a finished generation. Returns false for tokens issued before the
    /// last [`reset`](Self::reset).
    pub fn finish_generation(&mut self, token: GenerationToken, text: impl Into<String>) -> bool {
        if token.epoch != self.epoch {
            return false;
        }
        self.generating.remove(&token.id);
        self.set_draft(token.id, text);
        true
    }

    /// Forget all drafts and generation flags after a full reload.
    /// The selection is left alone.
    pub fn reset(&mut self) {
        self.drafts.clear();
        self.generating.clear();
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock_records;

    fn store() -> TicketStore {
        let mut store = TicketStore::new();
        store.populate(mock_records());
        store
    }

    #[test]
    fn test_select_known_and_unknown() {
        let store = store();
        let mut controller = DraftController::new();

        controller.select(TicketId::new(2), &store).unwrap();
        assert_eq!(controller.selected(), Some(TicketId::new(2)));

        let err = controller.select(TicketId::new(404), &store).unwrap_err();
        assert!(matches!(err, ReplydeskError::InvalidSelection(_)));
        assert_eq!(controller.selected(), Some(TicketId::new(2)), "failed select keeps selection");
    }

    #[test]
    fn test_select_while_loading_fails() {
        let store = TicketStore::new();
        let mut controller = DraftController::new();
        assert!(controller.select(TicketId::new(1), &store).is_err());
    }

    #[test]
    fn test_deselect_keeps_drafts_and_flags() {
        let store = store();
        let mut controller = DraftController::new();
        let id = TicketId::new(1);

        controller.select(id, &store).unwrap();
        controller.set_draft(id, "черновик");
        let token = controller.begin_generation(TicketId::new(3));
        assert!(token.is_some());

        controller.deselect();
        assert_eq!(controller.selected(), None);
        assert_eq!(controller.draft(id), "черновик");
        assert!(controller.is_generating(TicketId::new(3)));
    }

    #[test]
    fn test_absent_draft_is_empty() {
        let controller = DraftController::new();
        assert_eq!(controller.draft(TicketId::new(1)), "");
        assert!(!controller.can_send(TicketId::new(1)));
    }

    #[test]
    fn test_can_send_rules() {
        let mut controller = DraftController::new();
        let id = TicketId::new(1);

        controller.set_draft(id, "");
        assert!(!controller.can_send(id));

        controller.set_draft(id, "x");
        assert!(controller.can_send(id));

        controller.begin_generation(id).unwrap();
        assert!(!controller.can_send(id), "no sending while generating");
    }

    #[test]
    fn test_duplicate_generation_is_refused() {
        let mut controller = DraftController::new();
        let id = TicketId::new(1);

        assert!(controller.begin_generation(id).is_some());
        assert!(controller.begin_generation(id).is_none());
        assert!(controller.begin_generation(TicketId::new(2)).is_some());
        assert!(controller.is_generating(id));
        assert!(controller.is_generating(TicketId::new(2)));
    }

    #[test]
    fn test_finish_generation_overwrites_edit() {
        let mut controller = DraftController::new();
        let id = TicketId::new(1);

        let token = controller.begin_generation(id).unwrap();
        controller.set_draft(id, "ручная правка");
        assert!(controller.finish_generation(token, "сгенерировано"));

        assert_eq!(controller.draft(id), "сгенерировано");
        assert!(!controller.is_generating(id));
    }

    #[test]
    fn test_reset_discards_stale_completion() {
        let mut controller = DraftController::new();
        let id = TicketId::new(1);

        let token = controller.begin_generation(id).unwrap();
        controller.set_draft(TicketId::new(2), "старый");
        controller.reset();

        assert!(!controller.finish_generation(token, "поздний ответ"));
        assert_eq!(controller.draft(id), "");
        assert_eq!(controller.draft(TicketId::new(2)), "");
        assert!(!controller.is_generating(id));
    }
}
