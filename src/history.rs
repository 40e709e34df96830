//! Append-only history file for generated batches.
//!
//! Each batch is written as a block:
//!
//! ```text
//! --- Passwords generated on 2026-01-31 09:15:02 ---
//! <password>
//! <password>
//!
//! ```

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// History file used when no path is given.
pub const DEFAULT_FILE: &str = "passwords.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize a user-supplied history path.
///
/// `""` and `"."` map to [`DEFAULT_FILE`], a trailing `/` names a directory
/// that holds [`DEFAULT_FILE`], and a missing extension becomes `.txt`.
pub fn resolve_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if raw.is_empty() || raw == "." {
        return PathBuf::from(DEFAULT_FILE);
    }
    if raw.ends_with('/') {
        return Path::new(raw).join(DEFAULT_FILE);
    }
    let path = PathBuf::from(raw);
    if path.extension().is_none() {
        return path.with_extension("txt");
    }
    path
}

/// Render one batch block.
pub fn format_batch<Tz>(passwords: &[String], at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut block = format!(
        "--- Passwords generated on {} ---\n",
        at.format(TIMESTAMP_FORMAT)
    );
    for pass in passwords {
        block.push_str(pass);
        block.push('\n');
    }
    block.push('\n');
    block
}

/// Append a batch to `path`, creating the file and its parent directories.
///
/// # Errors
///
/// [`Error::NothingToSave`] for an empty batch, [`Error::Io`] if the file
/// cannot be opened or written.
pub fn append_batch<Tz>(path: &Path, passwords: &[String], at: &DateTime<Tz>) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if passwords.is_empty() {
        return Err(Error::NothingToSave);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);

    let mut block = format_batch(passwords, at);
    let written = out.write_all(block.as_bytes()).and_then(|()| out.flush());
    block.zeroize();
    written?;

    info!(path = %path.display(), count = passwords.len(), "Batch appended to history");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, Utc};
    use tempfile::TempDir;

    use super::*;

    fn sample() -> Vec<String> {
        vec!["aB3$aB3$".to_string(), "zY9!zY9!".to_string()]
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path(""), PathBuf::from(DEFAULT_FILE));
        assert_eq!(resolve_path("."), PathBuf::from(DEFAULT_FILE));
        assert_eq!(resolve_path("out/"), PathBuf::from("out/passwords.txt"));
        assert_eq!(resolve_path("vault"), PathBuf::from("vault.txt"));
        assert_eq!(resolve_path("keys.log"), PathBuf::from("keys.log"));
    }

    #[test]
    fn test_format_batch() {
        let at = Utc.with_ymd_and_hms(2026, 1, 31, 9, 15, 2).unwrap();
        let block = format_batch(&sample(), &at);
        assert_eq!(
            block,
            "--- Passwords generated on 2026-01-31 09:15:02 ---\naB3$aB3$\nzY9!zY9!\n\n"
        );
    }

    #[test]
    fn test_append_never_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("passwords.txt");

        append_batch(&path, &sample(), &Local::now()).unwrap();
        append_batch(&path, &["second".to_string()], &Local::now()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("--- Passwords generated on ").count(), 2);
        assert!(content.contains("aB3$aB3$\nzY9!zY9!\n\n"));
        assert!(content.ends_with("second\n\n"));
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwords.txt");

        let err = append_batch(&path, &[], &Local::now()).unwrap_err();
        assert!(matches!(err, Error::NothingToSave));
        assert!(!path.exists());
    }
}
