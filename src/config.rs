use std::path::PathBuf;

pub const IDEAS_PATH: &str = "ideas.txt";
pub const PROMPT: &str = "💡 What's your new idea? ";
pub const CONFIRMATION: &str = "✨ Idea saved to ideas.txt!";

/// Fixed literals the recorder works with.
///
/// The binary always runs with `Config::default()`; nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ideas_path: PathBuf,
    pub prompt: String,
    pub confirmation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ideas_path: PathBuf::from(IDEAS_PATH),
            prompt: PROMPT.to_string(),
            confirmation: CONFIRMATION.to_string(),
        }
    }
}

impl Config {
    /// Same literals, different target file.
    pub fn with_ideas_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ideas_path: path.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_relative_ideas_file() {
        let cfg = Config::default();
        assert_eq!(cfg.ideas_path, PathBuf::from("ideas.txt"));
        assert!(cfg.ideas_path.is_relative());
        assert_eq!(cfg.prompt, "💡 What's your new idea? ");
        assert_eq!(cfg.confirmation, "✨ Idea saved to ideas.txt!");
    }

    #[test]
    fn with_ideas_path_keeps_literals() {
        let cfg = Config::with_ideas_path("/tmp/elsewhere.txt");
        assert_eq!(cfg.ideas_path, PathBuf::from("/tmp/elsewhere.txt"));
        assert_eq!(cfg.prompt, PROMPT);
        assert_eq!(cfg.confirmation, CONFIRMATION);
    }
}
