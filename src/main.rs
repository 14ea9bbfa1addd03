// Entrypoint for the card dashboard.
// - Reads configuration from the environment, lets flags override it.
// - Loads the board snapshot, hands everything to the UI loop, and saves
//   the board again on the way out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use card_dashboard::{logging, ui::main_menu, ApiClient, Board, Config, Dashboard, TerminalPrompter};
use clap::Parser;
use tracing::{info, warn};

/// Edit and delete dashboard cards from the terminal
#[derive(Parser, Debug)]
#[command(name = "card-dashboard", version)]
struct Args {
    /// Backend origin (env: CARDS_API_URL) (default: http://localhost:5000)
    #[arg(long)]
    api_url: Option<String>,

    /// Session cookie value for authenticated requests (env: CARDS_SESSION)
    #[arg(long)]
    session: Option<String>,

    /// Board snapshot file (env: CARDS_BOARD)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = Config::from_env().apply_overrides(
        args.api_url.as_deref(),
        args.session.as_deref(),
        args.board,
    );

    let api = ApiClient::from_config(&config).context("Failed to build HTTP client")?;
    let board = Board::load(&config.board_path).with_context(|| {
        format!("Failed to read board snapshot {}", config.board_path.display())
    })?;
    if !api.has_session() {
        warn!("no session cookie configured, the backend may reject card requests");
    }
    info!(api = %api.base_url(), cards = board.len(), "dashboard ready");

    let mut dashboard = Dashboard::new(api, TerminalPrompter::new(), board);
    main_menu(&mut dashboard, &config.board_path)?;

    dashboard
        .into_board()
        .save(&config.board_path)
        .context("Failed to save board snapshot")?;
    Ok(())
}
