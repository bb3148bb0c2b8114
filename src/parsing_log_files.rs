// 🔎 Log File Parsing - Regex-based validation, splitting, redaction, tagging

use once_cell::sync::Lazy;
use regex::Regex;

// Patterns are fixed; compile once.
static VALID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(TRC|DBG|INF|WRN|ERR|FTL)\]").expect("valid regex"));
static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[~*=-]*>").expect("valid regex"));
static QUOTED_PASSWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)".*password.*""#).expect("valid regex"));
static END_OF_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"end-of-line\d+").expect("valid regex"));
static USER_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"User\s+(\S+)").expect("valid regex"));

/// Line starts with a known level tag such as `[ERR]`
pub fn is_valid_line(text: &str) -> bool {
    VALID_LINE.is_match(text)
}

/// Split on separators like `<--->`, `<*~*>` or `<>`
pub fn split_log_line(text: &str) -> Vec<String> {
    SEPARATOR.split(text).map(str::to_string).collect()
}

/// Number of lines with "password" inside double quotes, any case
pub fn count_quoted_passwords<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .filter(|line| QUOTED_PASSWORD.is_match(line.as_ref()))
        .count()
}

pub fn remove_end_of_line_text(text: &str) -> String {
    END_OF_LINE.replace_all(text, "").into_owned()
}

/// Prefix lines mentioning `User <name>` with `[USR] <name> `
pub fn tag_with_user_name<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            match USER_NAME.captures(line) {
                Some(caps) => format!("[USR] {} {}", &caps[1], line),
                None => line.to_string(),
            }
        })
        .collect()
}
