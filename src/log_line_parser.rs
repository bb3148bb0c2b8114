// 🪵 Log Line Parser - "[LEVEL]: message" lines

use once_cell::sync::Lazy;
use regex::Regex;

static LEVEL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([A-Z]+)\]:\s").expect("valid regex"));
static LEVEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([A-Z]+)\]").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    line: String,
}

impl LogLine {
    pub fn new(line: impl Into<String>) -> Self {
        LogLine { line: line.into() }
    }

    /// Message text with the level prefix and surrounding whitespace removed
    pub fn message(&self) -> &str {
        match LEVEL_PREFIX.find(&self.line) {
            Some(prefix) => self.line[prefix.end()..].trim(),
            None => self.line.trim(),
        }
    }

    /// Lowercased level, if the line has one
    pub fn log_level(&self) -> Option<String> {
        LEVEL
            .captures(&self.line)
            .map(|caps| caps[1].to_lowercase())
    }

    /// "message (level)"
    pub fn reformat(&self) -> String {
        format!("{} ({})", self.message(), self.log_level().unwrap_or_default())
    }
}
