//! Interactive session state: the collection being edited plus a
//! single-slot undo.
//!
//! Only the most recent add or remove can be undone, and only once. The
//! undo slot belongs to the session, not the container: containers know
//! nothing about history.

use crate::cards::CardRecord;
use crate::containers::CardContainer;
use crate::error::Result;
use crate::persistence::Collection;

/// The last mutating action and the amount it actually changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LastAction {
    Added { card: CardRecord, count: i64 },
    Removed { card: CardRecord, count: i64 },
}

/// A collection under edit.
#[derive(Clone, Debug, Default)]
pub struct Session {
    collection: Collection,
    last_action: Option<LastAction>,
    unsaved: bool,
}

impl Session {
    /// Start a session on a loaded collection.
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            last_action: None,
            unsaved: false,
        }
    }

    /// The collection being edited.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// End the session, returning the collection.
    #[must_use]
    pub fn into_collection(self) -> Collection {
        self.collection
    }

    /// The action `undo` would revert.
    #[must_use]
    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }

    /// Whether there are changes since the last `mark_saved`.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Record that the collection has been written out.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Add cards and remember the action.
    pub fn add(&mut self, card: &CardRecord, count: i64) -> Result<()> {
        self.collection.cards.add_card(card, count)?;
        self.last_action = Some(LastAction::Added {
            card: card.clone(),
            count,
        });
        self.unsaved = true;
        Ok(())
    }

    /// Remove cards and remember the action if anything was removed.
    ///
    /// The stored record is remembered, not `card`, so undoing a removal
    /// that deleted the entry restores the full data.
    pub fn remove(&mut self, card: &CardRecord, count: i64) -> Result<i64> {
        let stored = self.collection.cards.get(&card.key()?).cloned();
        let removed = self.collection.cards.remove_card(card, count)?;
        if removed > 0 {
            self.last_action = Some(LastAction::Removed {
                card: stored.unwrap_or_else(|| card.clone()),
                count: removed,
            });
            self.unsaved = true;
        }
        Ok(removed)
    }

    /// Revert the last action. Returns the reverted action, or `None` if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> Result<Option<LastAction>> {
        let Some(action) = self.last_action.take() else {
            return Ok(None);
        };
        match &action {
            LastAction::Added { card, count } => {
                self.collection.cards.remove_card(card, *count)?;
            }
            LastAction::Removed { card, count } => {
                self.collection.cards.add_card(card, *count)?;
            }
        }
        self.unsaved = true;
        tracing::debug!(?action, "undid last action");
        Ok(Some(action))
    }

    /// Forget the last action so it can no longer be undone.
    pub fn clear_undo(&mut self) {
        self.last_action = None;
    }
}
