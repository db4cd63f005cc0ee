use std::path::PathBuf;

use crate::file::ConfigFile;
use crate::schema::Schema;
use crate::types::FormatOptions;

/// Builder for a [`ConfigFile`].
///
/// Everything is optional: without a path, the first `write` or `load` with
/// an explicit path binds one.
pub struct ConfigFileBuilder<S: Schema> {
    schema: S,
    path: Option<PathBuf>,
    options: FormatOptions,
    strict: bool,
}

impl<S: Schema> ConfigFileBuilder<S> {
    pub(crate) fn new(schema: S) -> Self {
        Self {
            schema,
            path: None,
            options: FormatOptions::default(),
            strict: false,
        }
    }

    /// Bind a path up front, so calls without one use it.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Spaces before each key inside a section (default: 4).
    pub fn indent(mut self, indent: usize) -> Self {
        self.options.indent = indent;
        self
    }

    /// Enable or disable strict mode (default: `false`).
    /// In strict mode, keys the schema does not declare make the file
    /// `Invalid`, so a repair drops them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> ConfigFile<S> {
        ConfigFile::from_parts(self.schema, self.path, self.options, self.strict)
    }
}
