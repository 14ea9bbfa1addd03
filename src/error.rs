// Error types shared by the library modules. The binary and the UI loop
// wrap these in `anyhow` the same way the rest of the CLI does.

use crate::board::CardId;
use thiserror::Error;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered but the body was not the JSON we expect.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The configured backend URL cannot be used to build card paths.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// No card with this id is shown on the board.
    #[error("card not found on board: {0}")]
    CardNotFound(CardId),

    /// Save or cancel was requested while no edit session is open.
    #[error("no card is being edited")]
    EditorClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The board snapshot file could not be read or written as JSON.
    #[error("board snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The terminal prompt itself failed (e.g. stdin closed).
    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl DashboardError {
    /// Faults that come from talking to the backend rather than from local
    /// state. These get the generic notice instead of an error return.
    pub fn is_transport(&self) -> bool {
        matches!(self, DashboardError::Http(_) | DashboardError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_transport_but_missing_card_is_not() {
        assert!(DashboardError::Decode("html".into()).is_transport());
        assert!(!DashboardError::CardNotFound(CardId::from(3)).is_transport());
        assert!(!DashboardError::EditorClosed.is_transport());
    }

    #[test]
    fn messages_name_the_card() {
        let err = DashboardError::CardNotFound(CardId::from("42"));
        assert_eq!(err.to_string(), "card not found on board: 42");
    }
}
