//! Whole-file I/O: read, write, and numbered backups.
//!
//! Reads slurp the entire file and writes replace it with one call, so no
//! handle outlives an operation. Backups sit next to the original as
//! `<stem>-backup-<n>.<ext>`, numbered one past the highest existing index.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Read the whole file. A missing file is [`ConfigError::NotFound`], bytes
/// that are not UTF-8 are [`ConfigError::InvalidEncoding`].
pub fn read_document(path: &Path) -> Result<String, ConfigError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    String::from_utf8(bytes).map_err(|_| ConfigError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Replace the file's contents with `content` in a single write.
///
/// Parent directories are not created.
pub fn write_document(path: &Path, content: &str) -> Result<(), ConfigError> {
    std::fs::write(path, content).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy `path` to the next free backup name and return that name.
pub fn create_backup(path: &Path) -> Result<PathBuf, ConfigError> {
    let backup = next_backup_path(path)?;
    std::fs::copy(path, &backup).map_err(|e| ConfigError::IoError {
        path: backup.clone(),
        source: e,
    })?;
    Ok(backup)
}

/// The backup name for `path` with the lowest index above every existing one.
pub fn next_backup_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let (prefix, suffix) = backup_affixes(path);

    let entries = std::fs::read_dir(&dir).map_err(|e| ConfigError::IoError {
        path: dir.clone(),
        source: e,
    })?;

    let mut next = 0;
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::IoError {
            path: dir.clone(),
            source: e,
        })?;
        let name = entry.file_name();
        let Some(following) = name
            .to_str()
            .and_then(|n| backup_index(n, &prefix, &suffix))
            .and_then(|index| index.checked_add(1))
        else {
            continue;
        };
        next = next.max(following);
    }

    Ok(dir.join(format!("{prefix}{next}{suffix}")))
}

/// `("<stem>-backup-", ".<ext>")` for a config path.
fn backup_affixes(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    let suffix = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (format!("{stem}-backup-"), suffix)
}

fn backup_index(file_name: &str, prefix: &str, suffix: &str) -> Option<usize> {
    file_name
        .strip_prefix(prefix)?
        .strip_suffix(suffix)?
        .parse()
        .ok()
}
