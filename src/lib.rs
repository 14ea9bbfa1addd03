// Library root
// -----------
// This crate exposes the card dashboard as a library; the binary
// (`main.rs`) wires it to the terminal.
//
// Module responsibilities:
// - `api`: blocking HTTP calls to the `/api/cards` endpoints.
// - `board`: the cards on screen, keyed by id, with JSON snapshots.
// - `editor`: the single edit session ("modal").
// - `dashboard`: edit/save/delete flows tying the above together.
// - `prompt`: confirm/alert dialogs and request progress.
// - `ui`: the interactive menu built on `dialoguer`.
// - `config`, `logging`, `error`: ambient plumbing.
pub mod api;
pub mod board;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod ui;

pub use api::{ApiClient, ApiResponse, CardBackend, CreateCardRequest, UpdateCardRequest};
pub use board::{Board, CardId, CardView};
pub use config::Config;
pub use dashboard::{CreateOutcome, Dashboard, DeleteOutcome, SaveOutcome};
pub use editor::{EditSession, Editor};
pub use error::{DashboardError, Result};
pub use prompt::{Prompter, TerminalPrompter};
