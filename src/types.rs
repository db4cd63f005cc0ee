//! Options controlling how configuration files are rendered.

/// Layout of rendered configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces before each key (and its comment) inside a section.
    pub indent: usize,
}

impl FormatOptions {
    pub(crate) fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}
