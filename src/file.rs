//! File controller: binds a schema instance to a path and runs whole-file
//! write, load and repair passes over all of its sections.
//!
//! # Path binding
//!
//! A [`ConfigFile`] remembers the last path it successfully wrote or loaded
//! (or the one given to the builder). Every operation takes an optional path;
//! `None` falls back to the bound one, and with nothing bound the call fails
//! with [`ConfigError::NoPath`].
//!
//! # Repair
//!
//! [`ConfigFile::load_and_repair`] turns every unusable file into a usable
//! one:
//!
//! ```text
//! load ──► Valid ──────────────────────────────────────────► done
//!   │
//!   ├──► Invalid ─────┐
//!   └──► ReadFailed ──┴─► backup? ─► rewrite ─► load again ─► done
//! ```
//!
//! Undecodable bytes, parse failures and values of the wrong shape count as
//! `ReadFailed`. A
//! file that does not exist is also `ReadFailed`, but there is nothing to
//! back up. Before rewriting, fields that failed a constraint go back to
//! their declared defaults; everything else is written as currently held in
//! memory.

use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, Item};

use crate::builder::ConfigFileBuilder;
use crate::error::ConfigError;
use crate::outcome::{EntryStatus, FileStatus, Outcome};
use crate::persist;
use crate::schema::{Schema, qualify};
use crate::section;
use crate::types::FormatOptions;
use crate::validate;

/// A schema instance bound to a configuration file.
#[derive(Debug)]
pub struct ConfigFile<S: Schema> {
    schema: S,
    path: Option<PathBuf>,
    options: FormatOptions,
    strict: bool,
    checkpoints: Vec<String>,
}

impl<S: Schema> ConfigFile<S> {
    /// Wrap `schema` with default options and no bound path.
    pub fn new(schema: S) -> Self {
        Self::from_parts(schema, None, FormatOptions::default(), false)
    }

    pub fn builder(schema: S) -> ConfigFileBuilder<S> {
        ConfigFileBuilder::new(schema)
    }

    pub(crate) fn from_parts(
        schema: S,
        path: Option<PathBuf>,
        options: FormatOptions,
        strict: bool,
    ) -> Self {
        Self {
            schema,
            path,
            options,
            strict,
            checkpoints: Vec::new(),
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn schema_mut(&mut self) -> &mut S {
        &mut self.schema
    }

    pub fn into_inner(self) -> S {
        self.schema
    }

    /// The currently bound path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn resolve_path(&self, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
            _ => self.path.clone().ok_or(ConfigError::NoPath),
        }
    }

    /// The document [`write`](Self::write) would persist.
    pub fn render(&self) -> String {
        let mut doc = DocumentMut::new();
        for (i, (info, section)) in self.schema.sections().into_iter().enumerate() {
            let mut table = section::write_section(section, &self.options);
            if let Some(comment) = info.comment {
                let mut prefix = if i > 0 { "\n".to_string() } else { String::new() };
                prefix.push_str(&section::comment_lines(comment, ""));
                table.decor_mut().set_prefix(prefix);
            }
            doc.insert(info.name, Item::Table(table));
        }
        doc.to_string()
    }

    /// Write the current values to `path` (or the bound path).
    ///
    /// With `overwrite == false`, an existing file is left untouched and the
    /// call fails with [`ConfigError::AlreadyExists`]. The instance is never
    /// modified; on success the path becomes the bound path.
    pub fn write(&mut self, path: Option<&Path>, overwrite: bool) -> Result<(), ConfigError> {
        let path = self.resolve_path(path)?;
        if !overwrite && path.exists() {
            return Err(ConfigError::AlreadyExists(path));
        }

        let rendered = self.render();
        persist::write_document(&path, &rendered)?;
        tracing::debug!(path = %path.display(), "configuration written");

        self.path = Some(path);
        Ok(())
    }

    /// Load `path` (or the bound path) into the instance.
    ///
    /// Fails with [`ConfigError::NotFound`], [`ConfigError::InvalidEncoding`],
    /// [`ConfigError::ParseError`] or [`ConfigError::TypeMismatch`] when the
    /// file is unusable; missing and
    /// invalid settings are reported in the returned [`Outcome`] instead.
    pub fn load(&mut self, path: Option<&Path>) -> Result<Outcome, ConfigError> {
        let path = self.resolve_path(path)?;
        let content = persist::read_document(&path)?;
        let document: DocumentMut =
            content
                .parse()
                .map_err(|e: toml_edit::TomlError| ConfigError::ParseError {
                    path: path.clone(),
                    source: e,
                })?;

        let outcome = self.load_document(&document)?;
        for key in outcome.unknown_keys() {
            tracing::warn!(
                path = %path.display(),
                key = %key,
                line = validate::find_key_line(&content, key),
                "configuration file contains an undeclared key"
            );
        }
        tracing::debug!(
            path = %path.display(),
            status = %outcome.file_status(),
            "configuration loaded"
        );

        self.path = Some(path);
        Ok(outcome)
    }

    /// Load an already parsed document into the instance.
    pub fn load_document(&mut self, document: &DocumentMut) -> Result<Outcome, ConfigError> {
        let mut outcome = Outcome::new();
        for (info, section) in self.schema.sections_mut() {
            outcome.merge(section::load_section(
                info.name,
                section,
                document.as_table(),
            )?);
        }
        for key in validate::unknown_keys(&self.schema, document.as_table()) {
            outcome.add_unknown(key);
        }
        outcome.derive_status(self.strict);
        Ok(outcome)
    }

    /// Parse `content` and load it into the instance. No path is involved.
    pub fn load_str(&mut self, content: &str) -> Result<Outcome, ConfigError> {
        let document: DocumentMut =
            content
                .parse()
                .map_err(|e: toml_edit::TomlError| ConfigError::ParseError {
                    path: PathBuf::from("<inline>"),
                    source: e,
                })?;
        self.load_document(&document)
    }

    /// Load `path` (or the bound path), repairing the file if it is faulty.
    ///
    /// A valid file is loaded and returned as is. Otherwise the file is
    /// optionally backed up, rewritten from the instance and loaded again;
    /// the second outcome is returned, marked as repaired. I/O errors other
    /// than a missing file are returned unchanged.
    pub fn load_and_repair(
        &mut self,
        path: Option<&Path>,
        create_backup: bool,
    ) -> Result<Outcome, ConfigError> {
        let path = self.resolve_path(path)?;
        let mut create_backup = create_backup;

        let outcome = match self.load(Some(&path)) {
            Ok(outcome) => outcome,
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "configuration file does not exist");
                create_backup = false;
                Outcome::read_failed()
            }
            Err(e) if e.is_corruption() => {
                tracing::warn!(path = %path.display(), error = %e, "configuration file is unreadable");
                Outcome::read_failed()
            }
            Err(e) => return Err(e),
        };

        if outcome.file_status() == FileStatus::Valid {
            return Ok(outcome);
        }
        tracing::warn!(
            path = %path.display(),
            status = %outcome.file_status(),
            "repairing configuration file"
        );

        let backup = if create_backup {
            let backup = persist::create_backup(&path)?;
            tracing::info!(
                path = %path.display(),
                backup = %backup.display(),
                "backed up faulty configuration file"
            );
            Some(backup)
        } else {
            None
        };

        self.reset_invalid(&outcome)?;
        self.write(Some(&path), true)?;

        let mut repaired = self.load(Some(&path))?;
        repaired.mark_repaired(backup);
        tracing::info!(
            path = %path.display(),
            status = %repaired.file_status(),
            "configuration file repaired"
        );
        Ok(repaired)
    }

    /// Restore declared defaults for every field `outcome` marks invalid.
    fn reset_invalid(&mut self, outcome: &Outcome) -> Result<(), ConfigError> {
        for (info, section) in self.schema.sections_mut() {
            let schema = section.schema();
            for field in &schema.fields {
                let key = qualify(info.name, field.name);
                if outcome.resolution(&key) == Some(EntryStatus::Invalid) {
                    tracing::debug!(key = %key, "restoring default for invalid setting");
                    section.reset(field.name)?;
                }
            }
        }
        Ok(())
    }

    /// Remember the current settings so [`revert`](Self::revert) can restore
    /// them.
    pub fn checkpoint(&mut self) {
        let snapshot = self.render();
        self.checkpoints.push(snapshot);
    }

    /// Restore the most recent checkpoint and drop it. Returns how many
    /// checkpoints remain.
    pub fn revert(&mut self) -> Result<usize, ConfigError> {
        let snapshot = self.checkpoints.pop().ok_or(ConfigError::NoCheckpoint)?;
        self.load_str(&snapshot)?;
        Ok(self.checkpoints.len())
    }
}

impl<S: Schema + Default> Default for ConfigFile<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, DEFAULT_DOCUMENT, TunedConfig};
    use std::fs;
    use tempfile::TempDir;

    fn config_file() -> ConfigFile<AppConfig> {
        ConfigFile::new(AppConfig::default())
    }

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.contains("-backup-"))
            .collect();
        names.sort();
        names
    }

    // --- render / write ---

    #[test]
    fn render_orders_sections_and_comments() {
        let text = config_file().render();
        assert!(text.starts_with("# Network settings.\n[network]\n"));
        let network = text.find("[network]").unwrap();
        let storage = text.find("[storage]").unwrap();
        assert!(network < storage);
        assert!(text.contains("    # Cache size in megabytes.\n    cache_mb = 64"));
    }

    #[test]
    fn write_creates_file_and_binds_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let mut file = config_file();

        file.write(Some(&path), true).unwrap();

        assert_eq!(file.path(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), file.render());
    }

    #[test]
    fn write_without_any_path_fails() {
        let mut file = config_file();
        assert!(matches!(file.write(None, true), Err(ConfigError::NoPath)));
        assert!(matches!(file.load(None), Err(ConfigError::NoPath)));
        assert!(matches!(
            file.load_and_repair(None, true),
            Err(ConfigError::NoPath)
        ));
    }

    #[test]
    fn bound_path_is_reused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let mut file = config_file();
        file.write(Some(&path), true).unwrap();

        file.schema_mut().network.port = 1111;
        file.write(None, true).unwrap();

        let mut other = config_file();
        other.load(Some(&path)).unwrap();
        assert_eq!(other.schema().network.port, 1111);
        // And the loader bound it too.
        other.schema_mut().network.port = 2222;
        other.write(None, true).unwrap();
        file.load(None).unwrap();
        assert_eq!(file.schema().network.port, 2222);
    }

    #[test]
    fn overwrite_guard_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "hand = \"edited\"\n").unwrap();

        let mut file = config_file();
        let err = file.write(Some(&path), false).unwrap_err();

        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand = \"edited\"\n");
        assert!(file.path().is_none());
    }

    #[test]
    fn write_without_overwrite_creates_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let mut file = config_file();
        file.write(Some(&path), false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_into_missing_directory_propagates_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.toml");
        let err = config_file().write(Some(&path), true).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    // --- load ---

    #[test]
    fn round_trip_of_defaults_is_clean() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let mut file = config_file();
        file.write(Some(&path), true).unwrap();

        let outcome = file.load(None).unwrap();

        assert_eq!(outcome.file_status(), FileStatus::Valid);
        assert_eq!(outcome.missing().count(), 0);
        assert_eq!(outcome.invalid().count(), 0);
        assert_eq!(outcome.successful().count(), 8);
        assert_eq!(file.schema(), &AppConfig::default());
    }

    #[test]
    fn round_trip_preserves_modified_values() {
        let mut file = config_file();
        file.schema_mut().network.peers = vec!["z".into(), "y".into(), "x".into()];
        file.schema_mut().storage.compress = false;
        let rendered = file.render();

        let mut other = config_file();
        let outcome = other.load_str(&rendered).unwrap();
        assert!(outcome.is_valid());
        assert_eq!(other.schema(), file.schema());
    }

    #[test]
    fn removed_keys_are_counted_as_missing() {
        let content = DEFAULT_DOCUMENT
            .replace("port = 8080\n", "")
            .replace("mode = \"safe\"\n", "")
            .replace("host = \"localhost\"\n", "host = \"example.org\"\n");

        let mut file = config_file();
        file.schema_mut().network.port = 4242;
        let outcome = file.load_str(&content).unwrap();

        assert_eq!(outcome.missing().collect::<Vec<_>>(), ["network.port", "storage.mode"]);
        assert_eq!(outcome.file_status(), FileStatus::Invalid);
        // Absent fields keep their in-memory value, present ones are loaded.
        assert_eq!(file.schema().network.port, 4242);
        assert_eq!(file.schema().network.host, "example.org");
    }

    #[test]
    fn absent_section_is_missing_without_error() {
        let content = "[network]\nport = 1\nhost = \"h\"\npeers = []\nretries = 1\n";
        let mut file = config_file();
        let outcome = file.load_str(content).unwrap();

        assert_eq!(
            outcome.missing().collect::<Vec<_>>(),
            ["storage.path", "storage.cache_mb", "storage.compress", "storage.mode"]
        );
        assert_eq!(file.schema().storage, AppConfig::default().storage);
    }

    #[test]
    fn constraint_violation_is_reported_and_assigned() {
        let content = DEFAULT_DOCUMENT.replace("retries = 3", "retries = 15");
        let mut file = config_file();
        let outcome = file.load_str(&content).unwrap();

        let invalid: Vec<_> = outcome.invalid().collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "network.retries");
        assert!(invalid[0].1.contains('1') && invalid[0].1.contains("10"));
        assert_eq!(outcome.file_status(), FileStatus::Invalid);
        assert_eq!(file.schema().network.retries, 15);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut file = config_file();
        let err = file.load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(file.path().is_none());
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "[network\nport = \n").unwrap();

        let err = config_file().load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn load_wrong_shape_is_type_mismatch() {
        let content = DEFAULT_DOCUMENT.replace("port = 8080", "port = \"8080\"");
        let err = config_file().load_str(&content).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { ref key, .. } if key == "network.port"));
    }

    #[test]
    fn load_document_accepts_parsed_tree() {
        let document: DocumentMut = DEFAULT_DOCUMENT.replace("3", "7").parse().unwrap();
        let mut file = config_file();
        let outcome = file.load_document(&document).unwrap();
        assert!(outcome.is_valid());
        assert_eq!(file.schema().network.retries, 7);
    }

    #[test]
    fn undeclared_keys_are_reported_but_tolerated() {
        let content = format!("{DEFAULT_DOCUMENT}\n[legacy]\nold = true\n");
        let mut file = config_file();
        let outcome = file.load_str(&content).unwrap();
        assert!(outcome.is_valid());
        assert_eq!(outcome.unknown_keys(), ["legacy"]);
    }

    #[test]
    fn strict_mode_rejects_undeclared_keys() {
        let content = DEFAULT_DOCUMENT.replace("retries = 3\n", "retries = 3\ntimeout = 30\n");
        let mut file = ConfigFile::builder(AppConfig::default()).strict(true).build();
        let outcome = file.load_str(&content).unwrap();
        assert_eq!(outcome.file_status(), FileStatus::Invalid);
        assert_eq!(outcome.unknown_keys(), ["network.timeout"]);
    }

    // --- load_and_repair ---

    #[test]
    fn valid_file_is_not_repaired() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let mut file = config_file();
        file.write(Some(&path), true).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let outcome = file.load_and_repair(None, true).unwrap();

        assert!(outcome.is_valid());
        assert!(!outcome.repaired());
        assert!(backups(dir.path()).is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn repair_converges_with_one_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        let faulty = DEFAULT_DOCUMENT
            .replace("host = \"localhost\"\n", "")
            .replace("retries = 3", "retries = 15")
            .replace("port = 8080", "port = 9090");
        fs::write(&path, &faulty).unwrap();

        let mut file = config_file();
        let outcome = file.load_and_repair(Some(&path), true).unwrap();

        assert_eq!(outcome.file_status(), FileStatus::Valid);
        assert!(outcome.repaired());
        assert_eq!(backups(dir.path()), ["app-backup-0.toml"]);
        assert_eq!(
            outcome.backup_path(),
            Some(dir.path().join("app-backup-0.toml").as_path())
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("app-backup-0.toml")).unwrap(),
            faulty
        );

        // Loaded values survive, the invalid one falls back to its default.
        assert_eq!(file.schema().network.port, 9090);
        assert_eq!(file.schema().network.retries, 3);
        assert_eq!(file.schema().network.host, "localhost");

        let mut reloaded = config_file();
        assert!(reloaded.load(Some(&path)).unwrap().is_valid());
        assert_eq!(reloaded.schema(), file.schema());
    }

    #[test]
    fn repair_without_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "[network]\nport = 1\n").unwrap();

        let outcome = config_file().load_and_repair(Some(&path), false).unwrap();

        assert!(outcome.is_valid());
        assert!(outcome.repaired());
        assert!(outcome.backup_path().is_none());
        assert!(backups(dir.path()).is_empty());
    }

    #[test]
    fn repair_of_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, "this is { not toml").unwrap();

        let mut file = config_file();
        let outcome = file.load_and_repair(Some(&path), true).unwrap();

        assert!(outcome.is_valid());
        assert_eq!(backups(dir.path()), ["app-backup-0.toml"]);
        assert_eq!(file.schema(), &AppConfig::default());
    }

    #[test]
    fn repair_of_non_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, [0xff, 0xfe, 0x5b, 0x6e, 0x80]).unwrap();

        let mut file = config_file();
        let outcome = file.load_and_repair(Some(&path), true).unwrap();

        assert!(outcome.is_valid());
        assert!(outcome.repaired());
        assert_eq!(backups(dir.path()), ["app-backup-0.toml"]);
        assert_eq!(
            fs::read(dir.path().join("app-backup-0.toml")).unwrap(),
            [0xff, 0xfe, 0x5b, 0x6e, 0x80]
        );
        assert_eq!(file.schema(), &AppConfig::default());
    }

    #[test]
    fn load_of_non_utf8_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, [0x80, 0x81]).unwrap();
        let err = config_file().load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEncoding { .. }));
    }

    #[test]
    fn repair_of_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, DEFAULT_DOCUMENT.replace("compress = true", "compress = \"yes\"")).unwrap();

        let outcome = config_file().load_and_repair(Some(&path), true).unwrap();

        assert!(outcome.is_valid());
        assert_eq!(backups(dir.path()).len(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("compress = true"));
    }

    #[test]
    fn repair_creates_missing_file_without_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");

        let mut file = config_file();
        let outcome = file.load_and_repair(Some(&path), true).unwrap();

        assert!(outcome.is_valid());
        assert!(outcome.repaired());
        assert!(path.exists());
        assert!(backups(dir.path()).is_empty());
        assert_eq!(file.path(), Some(path.as_path()));
    }

    #[test]
    fn repeated_repairs_number_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");

        for _ in 0..2 {
            fs::write(&path, "broken = = =").unwrap();
            config_file().load_and_repair(Some(&path), true).unwrap();
        }
        assert_eq!(backups(dir.path()), ["app-backup-0.toml", "app-backup-1.toml"]);
    }

    #[test]
    fn strict_repair_drops_undeclared_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.toml");
        fs::write(&path, format!("{DEFAULT_DOCUMENT}\n[legacy]\nold = true\n")).unwrap();

        let mut file = ConfigFile::builder(AppConfig::default()).strict(true).build();
        let outcome = file.load_and_repair(Some(&path), true).unwrap();

        assert!(outcome.is_valid());
        assert!(outcome.repaired());
        assert!(!fs::read_to_string(&path).unwrap().contains("legacy"));
    }

    #[test]
    fn repair_propagates_io_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("app.toml");
        let err = config_file().load_and_repair(Some(&path), true).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    // --- checkpoints ---

    #[test]
    fn revert_restores_checkpoints_in_reverse_order() {
        let mut file = config_file();
        file.checkpoint();
        file.schema_mut().network.port = 1;
        file.checkpoint();
        file.schema_mut().network.port = 2;

        assert_eq!(file.revert().unwrap(), 1);
        assert_eq!(file.schema().network.port, 1);
        assert_eq!(file.revert().unwrap(), 0);
        assert_eq!(file.schema().network.port, 8080);
        assert!(matches!(file.revert(), Err(ConfigError::NoCheckpoint)));
    }

    #[test]
    fn revert_restores_float_settings() {
        let mut file = ConfigFile::new(TunedConfig::default());
        file.checkpoint();
        file.schema_mut().tuning.warm_ratio = 0.125;
        file.schema_mut().tuning.backoff_secs = 10.0;

        assert_eq!(file.revert().unwrap(), 0);
        assert_eq!(file.schema(), &TunedConfig::default());
    }

    // --- float settings ---

    #[test]
    fn float_settings_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tuned.toml");

        let mut written = ConfigFile::new(TunedConfig::default());
        written.schema_mut().tuning.warm_ratio = 0.3;
        written.schema_mut().tuning.backoff_secs = 2.0;
        written.write(Some(&path), false).unwrap();

        let mut loaded = ConfigFile::new(TunedConfig::default());
        let outcome = loaded.load(Some(&path)).unwrap();

        assert!(outcome.is_valid());
        assert_eq!(outcome.successful().count(), 3);
        assert_eq!(loaded.schema().tuning.warm_ratio, 0.3);
        assert_eq!(loaded.schema().tuning.backoff_secs, 2.0);
    }

    #[test]
    fn integer_literal_loads_into_float_setting() {
        let mut file = ConfigFile::new(TunedConfig::default());
        let outcome = file
            .load_str("[tuning]\nwarm_ratio = 1\nbackoff_secs = 4\nadaptive = false\n")
            .unwrap();

        assert!(outcome.is_valid());
        assert_eq!(file.schema().tuning.warm_ratio, 1.0);
        assert_eq!(file.schema().tuning.backoff_secs, 4.0);
    }
}
