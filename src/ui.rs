// UI layer: an interactive menu built on `dialoguer`. Each entry maps to
// one dashboard operation; the board snapshot is written after every change
// so the next run starts from what the user last saw.

use crate::api::{CardBackend, CreateCardRequest};
use crate::board::CardId;
use crate::dashboard::{CreateOutcome, Dashboard, DeleteOutcome, SaveOutcome};
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use crossterm::style::{style, Stylize};
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

/// Main interactive menu. Runs until the user chooses "Exit" or presses Esc
/// at the top level.
pub fn main_menu<B: CardBackend, P: Prompter>(
    dashboard: &mut Dashboard<B, P>,
    board_path: &Path,
) -> Result<()> {
    loop {
        let items = vec!["List cards", "Edit card", "Delete card", "New card", "Exit"];
        let selection = Select::new()
            .with_prompt("Dashboard")
            .items(&items)
            .default(0)
            .interact_opt()?;
        match selection {
            Some(0) => list_cards(dashboard),
            Some(1) => {
                if handle_edit(dashboard)? {
                    persist(dashboard, board_path)?;
                }
            }
            Some(2) => {
                if let Some(id) = pick_card(dashboard, "Delete which card?")? {
                    if dashboard.delete_card(&id)? == DeleteOutcome::Deleted {
                        println!("Card {} deleted.", id);
                        persist(dashboard, board_path)?;
                    }
                }
            }
            Some(3) => {
                if handle_create(dashboard)? {
                    persist(dashboard, board_path)?;
                }
            }
            Some(4) | None => break,
            _ => {}
        }
    }
    Ok(())
}

fn list_cards<B: CardBackend, P: Prompter>(dashboard: &Dashboard<B, P>) {
    if dashboard.board().is_empty() {
        println!("No cards on the board.");
        return;
    }
    for card in dashboard.board().iter() {
        println!("[{}] {}", card.id, style(&card.title).bold());
        if !card.content.trim().is_empty() {
            println!("    {}", card.content.trim());
        }
    }
}

/// Lets the user choose a card by title. `None` when the board is empty or
/// the user backs out.
fn pick_card<B: CardBackend, P: Prompter>(
    dashboard: &Dashboard<B, P>,
    prompt: &str,
) -> Result<Option<CardId>> {
    let cards: Vec<_> = dashboard.board().iter().collect();
    if cards.is_empty() {
        println!("No cards on the board.");
        return Ok(None);
    }
    let labels: Vec<String> = cards
        .iter()
        .map(|c| format!("[{}] {}", c.id, c.title))
        .collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|idx| cards[idx].id.clone()))
}

/// Edit "modal": stage title/content, then save or cancel. A rejected or
/// failed save keeps the staged values so the user can retry. Returns
/// whether the board changed.
fn handle_edit<B: CardBackend, P: Prompter>(dashboard: &mut Dashboard<B, P>) -> Result<bool> {
    let Some(id) = pick_card(dashboard, "Edit which card?")? else {
        return Ok(false);
    };
    dashboard.begin_edit(&id)?;

    loop {
        let Some(session) = dashboard.editor().session().cloned() else {
            return Ok(false);
        };
        let title: String = Input::new()
            .with_prompt("Title")
            .with_initial_text(session.title)
            .allow_empty(true)
            .interact_text()?;
        let content: String = Input::new()
            .with_prompt("Content")
            .with_initial_text(session.content)
            .allow_empty(true)
            .interact_text()?;
        dashboard.stage_edit(title, content)?;

        if !Confirm::new().with_prompt("Save changes?").default(true).interact()? {
            dashboard.cancel_edit();
            return Ok(false);
        }
        match dashboard.save_edit()? {
            SaveOutcome::Saved => {
                println!("Card {} updated.", id);
                return Ok(true);
            }
            SaveOutcome::Rejected | SaveOutcome::Failed => {
                if !Confirm::new().with_prompt("Keep editing?").default(true).interact()? {
                    dashboard.cancel_edit();
                    return Ok(false);
                }
            }
        }
    }
}

fn handle_create<B: CardBackend, P: Prompter>(dashboard: &mut Dashboard<B, P>) -> Result<bool> {
    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let content: String = Input::new()
        .with_prompt("Content")
        .allow_empty(true)
        .interact_text()?;
    match dashboard.create_card(&CreateCardRequest::new(title, content))? {
        CreateOutcome::Created(id) => {
            println!("Card {} created.", id);
            Ok(true)
        }
        CreateOutcome::Rejected | CreateOutcome::Failed => Ok(false),
    }
}

fn persist<B: CardBackend, P: Prompter>(dashboard: &Dashboard<B, P>, path: &Path) -> Result<()> {
    dashboard
        .board()
        .save(path)
        .with_context(|| format!("Failed to write board snapshot to {}", path.display()))
}
