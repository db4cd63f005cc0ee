//! Section mapper: one section's worth of serialize, deserialize and validate.
//!
//! Writing turns a section's current values into a TOML table, with declared
//! comments attached to the keys they describe. Loading walks the declared
//! fields against a parsed document, assigns what it finds and records every
//! field's resolution in an [`Outcome`].

use toml_edit::{Item, Table};

use crate::error::ConfigError;
use crate::outcome::Outcome;
use crate::schema::{Section, qualify};
use crate::types::FormatOptions;
use crate::value::Value;

/// Render a section's fields, in declaration order, into a new table.
///
/// A field with a comment gets it as `# ` lines right above its key, at the
/// same indentation, separated from the previous field by a blank line.
pub fn write_section(section: &dyn Section, options: &FormatOptions) -> Table {
    let indent = options.indentation();
    let mut table = Table::new();

    for (i, field) in section.schema().fields.iter().enumerate() {
        let Some(value) = section.get(field.name) else {
            continue;
        };
        table.insert(field.name, Item::Value(value.to_toml()));

        let mut prefix = String::new();
        if let Some(comment) = field.comment {
            if i > 0 {
                prefix.push('\n');
            }
            prefix.push_str(&comment_lines(comment, &indent));
        }
        prefix.push_str(&indent);

        if let Some(mut key) = table.key_mut(field.name) {
            key.leaf_decor_mut().set_prefix(prefix);
        }
    }
    table
}

/// Turn comment text into `# ` lines, each starting at `indent`.
pub(crate) fn comment_lines(comment: &str, indent: &str) -> String {
    let mut out = String::new();
    for line in comment.lines() {
        out.push_str(indent);
        if line.is_empty() {
            out.push('#');
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Load one section from a parsed document into `section`.
///
/// - Section key absent: every declared field is `Missing`, nothing changes.
/// - Field key absent: `Missing`, the field keeps its value.
/// - Field of the wrong shape: [`ConfigError::TypeMismatch`].
/// - Otherwise every constraint runs in order (a failing `Required` stops
///   the rest), each failure adds an `Invalid` entry, and the value is
///   assigned and recorded as `Success` either way.
pub fn load_section(
    name: &str,
    section: &mut dyn Section,
    document: &Table,
) -> Result<Outcome, ConfigError> {
    let schema = section.schema();
    let mut outcome = Outcome::new();

    let Some(item) = document.get(name).filter(|item| !item.is_none()) else {
        tracing::debug!(section = name, "section absent, all fields missing");
        for field in &schema.fields {
            outcome.add_missing(qualify(name, field.name));
        }
        return Ok(outcome);
    };

    let table = item
        .as_table_like()
        .ok_or_else(|| ConfigError::TypeMismatch {
            key: name.to_string(),
            expected: "table",
            found: item.type_name(),
        })?;

    for field in &schema.fields {
        let key = qualify(name, field.name);

        let Some(raw) = table.get(field.name).filter(|item| !item.is_none()) else {
            tracing::debug!(key = %key, "setting missing");
            outcome.add_missing(key);
            continue;
        };

        let value =
            Value::from_item(raw, field.kind).ok_or_else(|| ConfigError::TypeMismatch {
                key: key.clone(),
                expected: field.kind.name(),
                found: raw.type_name(),
            })?;

        for constraint in &field.constraints {
            if constraint.meets(&value) {
                continue;
            }
            let reason = constraint.reason();
            tracing::debug!(key = %key, %value, reason = %reason, "setting invalid");
            outcome.add_invalid(&key, reason);
            if constraint.halts_validation() {
                break;
            }
        }

        section.set(field.name, value)?;
        outcome.add_success(key);
    }

    Ok(outcome)
}
