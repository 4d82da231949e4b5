use std::{fs::OpenOptions, io::Write, path::Path};

use tracing::debug;

use crate::domain::IdeaEntry;
use crate::error::IoFailure;

/// Append one rendered entry to `path`, creating the file if needed.
///
/// Existing bytes are never touched. The handle lives only for the duration
/// of this call and is closed on every return path.
pub fn append_entry(path: impl AsRef<Path>, entry: &IdeaEntry) -> Result<usize, IoFailure> {
    let path = path.as_ref();
    let rendered = entry.render();

    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| IoFailure::Open {
            path: path.to_path_buf(),
            source,
        })?;

    // Single write call so the entry lands contiguously at end-of-file.
    f.write_all(rendered.as_bytes())
        .map_err(|source| IoFailure::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = rendered.len(), "journal.append");
    Ok(rendered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn entry(text: &str) -> IdeaEntry {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        IdeaEntry::new(text, ts)
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.txt");

        let n = append_entry(&path, &entry("Second")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "\n[2024-01-02 00:00:00] Second");
        assert_eq!(n, content.len());
    }

    #[test]
    fn preserves_existing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.txt");
        fs::write(&path, "\n[2024-01-01 00:00:00] First").unwrap();

        append_entry(&path, &entry("Second")).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\n[2024-01-01 00:00:00] First\n[2024-01-02 00:00:00] Second"
        );
    }

    #[test]
    fn directory_target_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();

        let err = append_entry(dir.path(), &entry("nope")).unwrap_err();

        assert!(matches!(err, IoFailure::Open { .. }), "got {err:?}");
    }
}
