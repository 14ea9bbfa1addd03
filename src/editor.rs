// The edit "modal": at most one card is staged for editing at a time.

use crate::board::{Board, CardId};
use crate::error::{DashboardError, Result};

/// Values staged in the editor form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub card_id: CardId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct Editor {
    session: Option<EditSession>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Copies the card's displayed title and trimmed content into the form
    /// and opens it. An already open session is replaced. On a missing card
    /// the editor is left as it was.
    pub fn open(&mut self, board: &Board, id: &CardId) -> Result<&EditSession> {
        let card = board
            .get(id)
            .ok_or_else(|| DashboardError::CardNotFound(id.clone()))?;
        Ok(self.session.insert(EditSession {
            card_id: card.id.clone(),
            title: card.title.clone(),
            content: card.content.trim().to_string(),
        }))
    }

    /// Overwrites the staged fields, as typing into the form would.
    pub fn stage(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<()> {
        let session = self.session.as_mut().ok_or(DashboardError::EditorClosed)?;
        session.title = title.into();
        session.content = content.into();
        Ok(())
    }

    pub fn close(&mut self) -> Option<EditSession> {
        self.session.take()
    }
}
