//! The per-load ledger of setting resolutions.
//!
//! Every declared field ends a load as at least one [`Entry`]: `Missing` when
//! the file lacks it, `Success` once its value was assigned, and one `Invalid`
//! entry per constraint it failed (a field that was assigned but failed a
//! constraint carries both). [`Outcome::resolution`] folds that into a single
//! verdict per field.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// How one setting resolved during a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Present and assigned.
    Success,
    /// Absent from the document; the field kept its previous value.
    Missing,
    /// Present but failed a constraint.
    Invalid,
}

/// Aggregate verdict for a whole file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// No missing or invalid settings.
    #[default]
    Valid,
    /// Some settings were missing or invalid.
    Invalid,
    /// The file could not be read or parsed.
    ReadFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub status: EntryStatus,
    /// Qualified `section.field` name.
    pub key: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    entries: Vec<Entry>,
    file_status: FileStatus,
    unknown_keys: Vec<String>,
    repaired: bool,
    backup_path: Option<PathBuf>,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// An outcome for a file that could not be read or parsed.
    pub fn read_failed() -> Self {
        Self {
            file_status: FileStatus::ReadFailed,
            ..Self::default()
        }
    }

    pub(crate) fn add_success(&mut self, key: impl Into<String>) {
        self.push(EntryStatus::Success, key.into(), None);
    }

    pub(crate) fn add_missing(&mut self, key: impl Into<String>) {
        self.push(EntryStatus::Missing, key.into(), None);
    }

    pub(crate) fn add_invalid(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.push(EntryStatus::Invalid, key.into(), Some(reason.into()));
    }

    pub(crate) fn add_unknown(&mut self, key: impl Into<String>) {
        self.unknown_keys.push(key.into());
    }

    fn push(&mut self, status: EntryStatus, key: String, reason: Option<String>) {
        self.entries.push(Entry {
            status,
            key,
            reason,
        });
    }

    /// Append all of `other`'s entries and unknown keys.
    pub fn merge(&mut self, other: Outcome) {
        self.entries.extend(other.entries);
        self.unknown_keys.extend(other.unknown_keys);
    }

    /// Set the file status from the entries: `Invalid` if anything is missing
    /// or invalid (or, with `strict`, if undeclared keys were found).
    pub(crate) fn derive_status(&mut self, strict: bool) {
        let faulty = self
            .entries
            .iter()
            .any(|e| e.status != EntryStatus::Success)
            || (strict && !self.unknown_keys.is_empty());
        self.file_status = if faulty {
            FileStatus::Invalid
        } else {
            FileStatus::Valid
        };
    }

    pub(crate) fn mark_repaired(&mut self, backup_path: Option<PathBuf>) {
        self.repaired = true;
        self.backup_path = backup_path;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn successful(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Success)
            .map(|e| e.key.as_str())
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Missing)
            .map(|e| e.key.as_str())
    }

    /// `(key, reason)` for every failed constraint.
    pub fn invalid(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Invalid)
            .map(|e| (e.key.as_str(), e.reason.as_deref().unwrap_or_default()))
    }

    /// The single verdict for one qualified key: `Invalid` wins over
    /// `Missing`, which wins over `Success`. `None` if the key never appeared.
    pub fn resolution(&self, key: &str) -> Option<EntryStatus> {
        self.entries
            .iter()
            .filter(|e| e.key == key)
            .map(|e| e.status)
            .max_by_key(|status| match status {
                EntryStatus::Success => 0,
                EntryStatus::Missing => 1,
                EntryStatus::Invalid => 2,
            })
    }

    pub fn file_status(&self) -> FileStatus {
        self.file_status
    }

    pub fn is_valid(&self) -> bool {
        self.file_status == FileStatus::Valid
    }

    /// Keys in the document that the schema does not declare.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    /// True when this outcome comes from the reload after a repair.
    pub fn repaired(&self) -> bool {
        self.repaired
    }

    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Valid => f.write_str("valid"),
            FileStatus::Invalid => f.write_str("invalid"),
            FileStatus::ReadFailed => f.write_str("read failed"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration file is {}", self.file_status)?;
        if self.repaired {
            write!(f, " (repaired")?;
            if let Some(backup) = &self.backup_path {
                write!(f, ", backup at {}", backup.display())?;
            }
            write!(f, ")")?;
        }
        for key in self.missing() {
            write!(f, "\n  missing: {key}")?;
        }
        for (key, reason) in self.invalid() {
            write!(f, "\n  invalid: {key}: {reason}")?;
        }
        for key in &self.unknown_keys {
            write!(f, "\n  unknown: {key}")?;
        }
        Ok(())
    }
}
