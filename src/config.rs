// Runtime configuration. Values come from the environment first and can be
// overridden by command-line flags in `main.rs`.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "CARDS_API_URL";
pub const SESSION_ENV: &str = "CARDS_SESSION";
pub const BOARD_ENV: &str = "CARDS_BOARD";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backend origin, without a trailing slash.
    pub api_url: String,
    /// Value of the backend's `session` cookie, if the user is logged in.
    pub session: Option<String>,
    /// Where the board snapshot is kept between runs.
    pub board_path: PathBuf,
}

impl Config {
    /// Reads `CARDS_API_URL`, `CARDS_SESSION` and `CARDS_BOARD`, falling back
    /// to `http://localhost:5000`, no session, and the per-user data dir.
    pub fn from_env() -> Self {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.into());
        let board_path = lookup(BOARD_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_board_path);
        Config {
            api_url: normalize_url(&api_url),
            session: None,
            board_path,
        }
        .with_session(lookup(SESSION_ENV).as_deref())
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = normalize_url(url);
        self
    }

    /// Sets the session cookie value. Blank values mean "no session".
    pub fn with_session(mut self, session: Option<&str>) -> Self {
        self.session = session
            .filter(|s| !s.trim().is_empty())
            .map(String::from);
        self
    }

    /// Applies command-line flags on top of the environment. Flags that were
    /// not given leave the current value alone.
    pub fn apply_overrides(
        mut self,
        api_url: Option<&str>,
        session: Option<&str>,
        board_path: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = api_url {
            self = self.with_api_url(url);
        }
        if session.is_some() {
            self = self.with_session(session);
        }
        if let Some(path) = board_path {
            self.board_path = path;
        }
        self
    }
}

pub fn default_board_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("card-dashboard")
        .join("board.json")
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
