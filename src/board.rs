// Board view-model: the cards currently shown on the dashboard.
//
// Each card is looked up by its `CardId` in an explicit map owned by the
// `Board`, so a missing card is an ordinary `None` rather than a dangling
// element lookup. The board can be snapshotted to JSON so a session can be
// resumed later.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque card identifier. The backend hands out integers, but the id is
/// only ever rendered into a path, so it is kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for CardId {
    fn from(id: i64) -> Self {
        CardId(id.to_string())
    }
}

impl From<i32> for CardId {
    fn from(id: i32) -> Self {
        CardId(id.to_string())
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        CardId(id.trim().to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        CardId::from(id.as_str())
    }
}

// Snapshots written by hand or by older tools may carry numeric ids.
impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => CardId::from(n),
            RawId::Text(s) => CardId::from(s),
        })
    }
}

/// One displayed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CardView {
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        CardView {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Cards in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<CardView>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<CardView>) -> Self {
        let mut board = Board::new();
        for card in cards {
            board.insert(card);
        }
        board
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter()
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &CardId) -> Option<&CardView> {
        self.position(id).map(|idx| &self.cards[idx])
    }

    /// Adds a card at the end of the board. A card with the same id is
    /// replaced in place, keeping its position.
    pub fn insert(&mut self, card: CardView) {
        match self.position(&card.id) {
            Some(idx) => self.cards[idx] = card,
            None => self.cards.push(card),
        }
    }

    /// Removes exactly the card with this id.
    pub fn remove(&mut self, id: &CardId) -> Option<CardView> {
        self.position(id).map(|idx| self.cards.remove(idx))
    }

    /// Replaces a card's displayed text. Returns `false` when the card is not
    /// on the board.
    pub fn set_text(&mut self, id: &CardId, title: &str, content: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                let card = &mut self.cards[idx];
                card.title = title.to_string();
                card.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Reads a snapshot. A file that does not exist yet is an empty board.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Board::new()),
            Err(e) => return Err(e.into()),
        };
        let cards: Vec<CardView> = serde_json::from_str(&data)?;
        Ok(Board::from_cards(cards))
    }

    /// Writes the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let data = serde_json::to_string_pretty(&self.cards)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_cards(vec![
            CardView::new(1, "Alpha", "a"),
            CardView::new(7, "Seven", "s"),
            CardView::new(9, "Nine", "n"),
        ])
    }

    #[test]
    fn remove_takes_only_the_target() {
        let mut board = sample();
        let removed = board.remove(&CardId::from(7)).unwrap();
        assert_eq!(removed.title, "Seven");
        let ids: Vec<&str> = board.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "9"]);
    }

    #[test]
    fn insert_with_existing_id_keeps_position() {
        let mut board = sample();
        board.insert(CardView::new(7, "Replaced", ""));
        assert_eq!(board.len(), 3);
        assert_eq!(board.iter().nth(1).unwrap().title, "Replaced");
    }

    #[test]
    fn set_text_on_missing_card_is_false() {
        let mut board = sample();
        assert!(!board.set_text(&CardId::from(100), "x", "y"));
        assert_eq!(board, sample());
    }

    #[test]
    fn numeric_and_text_ids_are_equal() {
        let cards: Vec<CardView> =
            serde_json::from_str(r#"[{"id": 42, "title": "Notes"}, {"id": "43", "title": "x", "content": "y"}]"#)
                .unwrap();
        assert_eq!(cards[0].id, CardId::from("42"));
        assert_eq!(cards[0].content, "");
        assert_eq!(cards[1].id, CardId::from(43));
    }

    #[test]
    fn id_from_text_is_trimmed() {
        assert_eq!(CardId::from(" 5 "), CardId::from(5));
    }
}
