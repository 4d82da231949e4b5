use chrono::NaiveDateTime;

/// Timestamp layout used inside `ideas.txt`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaEntry {
    /// Raw text as typed. May be empty; never escaped.
    pub text: String,
    pub timestamp: NaiveDateTime,
}

impl IdeaEntry {
    pub fn new(text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            timestamp,
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `\n[YYYY-MM-DD HH:MM:SS] <text>`, exactly as appended to disk.
    pub fn render(&self) -> String {
        format!("\n[{}] {}", self.timestamp_str(), self.text)
    }
}
