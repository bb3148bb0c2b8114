// 📜 Logs - Source tagging and char-level edits on log lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application that emitted a log, identified by an embedded symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Recommendation,
    Search,
    Weather,
    Default,
}

impl Application {
    pub fn as_str(&self) -> &'static str {
        match self {
            Application::Recommendation => "recommendation",
            Application::Search => "search",
            Application::Weather => "weather",
            Application::Default => "default",
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '\u{2757}' => Some(Application::Recommendation), // ❗
            '\u{1F50D}' => Some(Application::Search),        // 🔍
            '\u{2600}' => Some(Application::Weather),         // ☀
            _ => None,
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First recognised symbol wins
pub fn application(log: &str) -> Application {
    log.chars()
        .find_map(Application::from_symbol)
        .unwrap_or(Application::Default)
}

pub fn replace(log: &str, old: char, new: char) -> String {
    log.chars().map(|c| if c == old { new } else { c }).collect()
}

/// Limit is in characters, not bytes
pub fn within_limit(log: &str, limit: usize) -> bool {
    log.chars().count() <= limit
}
