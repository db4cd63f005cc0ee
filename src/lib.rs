//! Declarative, self-healing TOML configuration files. Declare typed
//! sections, point at a file, and go.
//!
//! Sectfig maps a schema (sections of named, typed settings) to a commented,
//! human-editable TOML file and back. Every load reports, setting by setting,
//! what was found, what was missing and what broke a rule, and a corrupt or
//! outdated file can be backed up and regenerated in one call.
//!
//! ```ignore
//! let mut file = ConfigFile::new(AppConfig::default());
//! let outcome = file.load_and_repair(Some(Path::new("app.toml")), true)?;
//! println!("{outcome}");
//! ```
//!
//! # Declaring a schema
//!
//! A section is a plain struct declared through [`config_section!`]. Each
//! field carries its default, an optional comment (written above the key in
//! generated files) and optional constraints:
//!
//! ```ignore
//! config_section! {
//!     #[derive(Debug, Clone)]
//!     pub struct Network {
//!         #[comment = "Port the server listens on."]
//!         #[check(IntRange::new(1, 65535))]
//!         pub port: u16 = 8080,
//!
//!         #[check(Required)]
//!         pub host: String = "localhost".into(),
//!
//!         pub peers: Vec<String> = vec![],
//!     }
//! }
//!
//! config_schema! {
//!     #[derive(Debug, Default)]
//!     pub struct AppConfig {
//!         #[comment = "Network settings."]
//!         pub network: Network,
//!     }
//! }
//! ```
//!
//! Fields may be integers (`i64` and the narrower integer types), `f64`,
//! `bool`, `String` or `Vec<String>`. The macros register each section's
//! declarations once, at first use; no reflection happens at load time.
//!
//! # The file
//!
//! Sections become TOML tables in declaration order, fields become keys in
//! declaration order:
//!
//! ```toml
//! # Network settings.
//! [network]
//!     # Port the server listens on.
//!     port = 8080
//!     host = "localhost"
//!     peers = []
//! ```
//!
//! # Loading and outcomes
//!
//! [`ConfigFile::load`] assigns every setting it finds and returns an
//! [`Outcome`] listing each one as `Success`, `Missing` or `Invalid` (with
//! the constraint's reason). Missing settings keep their current value.
//! Settings that break a constraint are still assigned, so the instance
//! always reflects what the file says; the outcome tells you whether to
//! trust it. The aggregate [`FileStatus`] is `Valid` only when nothing is
//! missing or invalid.
//!
//! Schema drift is expected: a file written by an older version simply
//! reports the new settings as missing. Keys the schema no longer declares
//! are listed in [`Outcome::unknown_keys`] and logged; in strict mode they
//! make the file `Invalid`.
//!
//! # Repair
//!
//! [`ConfigFile::load_and_repair`] loads the file and, if it is invalid,
//! malformed or absent, optionally copies it to a numbered backup
//! (`app-backup-0.toml`, `app-backup-1.toml`, ...), rewrites it from the
//! in-memory values (declared defaults for anything invalid or never loaded)
//! and loads it again. The result is always a complete, parseable file.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. Missing and invalid
//! settings are not errors. Unusable files are: a file that is not UTF-8
//! ([`ConfigError::InvalidEncoding`]), does not parse
//! ([`ConfigError::ParseError`]) or holds a value of the wrong type
//! ([`ConfigError::TypeMismatch`]) fails a plain load, and is what
//! `load_and_repair` recovers from.
//!
//! # Logging
//!
//! Progress is reported through [`tracing`]: `debug` for each pass and each
//! missing or invalid setting, `warn` for faulty files and undeclared keys,
//! `info` for backups and repairs. Install any subscriber to see it.

pub mod constraint;
pub mod error;
pub mod types;

mod builder;
mod file;
mod outcome;
mod persist;
mod schema;
mod section;
mod validate;
mod value;

#[cfg(test)]
mod fixtures;

pub use builder::ConfigFileBuilder;
pub use constraint::Constraint;
pub use error::ConfigError;
pub use file::ConfigFile;
pub use outcome::{Entry, EntryStatus, FileStatus, Outcome};
pub use schema::{FieldSpec, Schema, Section, SectionInfo, SectionSchema};
pub use types::FormatOptions;
pub use value::{FieldKind, FieldValue, Value};
