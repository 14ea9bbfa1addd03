// Card editing and deletion.
//
// `Dashboard` turns the three user intents (open the editor, delete a
// card, save the editor) into at most one backend request each and applies
// the answer to the `Board`. Logical failures (`success: false`) end in a
// fixed alert; transport failures end in a generic notice. Neither changes
// the board.

use crate::api::{ApiResponse, CardBackend, CreateCardRequest, UpdateCardRequest};
use crate::board::{Board, CardId, CardView};
use crate::editor::{EditSession, Editor};
use crate::error::{DashboardError, Result};
use crate::prompt::Prompter;
use tracing::{error, info, warn};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this card?";
pub const DELETE_FAILED: &str = "Failed to delete card";
pub const UPDATE_FAILED: &str = "Failed to update card";
pub const CREATE_FAILED: &str = "Failed to create card";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user said no at the confirmation prompt; nothing was sent.
    Declined,
    /// The server answered `success: false`.
    Rejected,
    /// The request or its response was unusable.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(CardId),
    Rejected,
    Failed,
}

pub struct Dashboard<B, P> {
    backend: B,
    prompter: P,
    board: Board,
    editor: Editor,
}

impl<B: CardBackend, P: Prompter> Dashboard<B, P> {
    pub fn new(backend: B, prompter: P, board: Board) -> Self {
        Dashboard {
            backend,
            prompter,
            board,
            editor: Editor::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Opens the editor on a card, staging its title and trimmed content.
    pub fn begin_edit(&mut self, id: &CardId) -> Result<&EditSession> {
        let session = self.editor.open(&self.board, id)?;
        info!(card = %id, "editing card");
        Ok(session)
    }

    /// Replaces the staged title and content of the open editor.
    pub fn stage_edit(&mut self, title: impl Into<String>, content: impl Into<String>) -> Result<()> {
        self.editor.stage(title, content)
    }

    pub fn cancel_edit(&mut self) -> Option<EditSession> {
        self.editor.close()
    }

    /// Asks for confirmation, then deletes the card server-side and removes
    /// it from the board on success.
    pub fn delete_card(&mut self, id: &CardId) -> Result<DeleteOutcome> {
        if !self.prompter.confirm(CONFIRM_DELETE)? {
            info!(card = %id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let res = match self.request("Deleting card...", |b| b.delete_card(id))? {
            Some(res) => res,
            None => return Ok(DeleteOutcome::Failed),
        };
        if !res.success {
            self.prompter.alert(DELETE_FAILED);
            return Ok(DeleteOutcome::Rejected);
        }

        if self.board.remove(id).is_none() {
            warn!(card = %id, "deleted card was not on the board");
        }
        info!(card = %id, "card deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Submits the staged values. On success the card shows exactly what was
    /// submitted and the editor closes; otherwise the editor stays open.
    pub fn save_edit(&mut self) -> Result<SaveOutcome> {
        let session = self
            .editor
            .session()
            .cloned()
            .ok_or(DashboardError::EditorClosed)?;
        let req = UpdateCardRequest {
            title: session.title.clone(),
            content: session.content.clone(),
        };

        let res = match self.request("Saving card...", |b| b.update_card(&session.card_id, &req))? {
            Some(res) => res,
            None => return Ok(SaveOutcome::Failed),
        };
        if !res.success {
            self.prompter.alert(UPDATE_FAILED);
            return Ok(SaveOutcome::Rejected);
        }

        if !self.board.set_text(&session.card_id, &session.title, &session.content) {
            warn!(card = %session.card_id, "saved card is no longer on the board");
        }
        self.editor.close();
        info!(card = %session.card_id, "card saved");
        Ok(SaveOutcome::Saved)
    }

    /// Creates a card server-side and appends it to the board.
    pub fn create_card(&mut self, req: &CreateCardRequest) -> Result<CreateOutcome> {
        let res = match self.request("Creating card...", |b| b.create_card(req))? {
            Some(res) => res,
            None => return Ok(CreateOutcome::Failed),
        };
        if !res.success {
            self.prompter.alert(CREATE_FAILED);
            return Ok(CreateOutcome::Rejected);
        }
        let Some(raw_id) = res.id else {
            error!("create succeeded without returning an id");
            self.prompter.alert(GENERIC_FAILURE);
            return Ok(CreateOutcome::Failed);
        };

        let id = CardId::from(raw_id);
        self.board
            .insert(CardView::new(id.clone(), req.title.clone(), req.content.clone()));
        info!(card = %id, "card created");
        Ok(CreateOutcome::Created(id))
    }

    /// Runs one backend call between the prompter's request hooks. Transport
    /// and decode faults are reported with the generic notice and yield
    /// `None`; any other error is returned.
    fn request(
        &self,
        label: &str,
        call: impl FnOnce(&B) -> Result<ApiResponse>,
    ) -> Result<Option<ApiResponse>> {
        self.prompter.request_started(label);
        let result = call(&self.backend);
        self.prompter.request_finished();
        match result {
            Ok(res) => Ok(Some(res)),
            Err(e) if e.is_transport() => {
                error!(error = %e, "{}", label.trim_end_matches('.'));
                self.prompter.alert(GENERIC_FAILURE);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
