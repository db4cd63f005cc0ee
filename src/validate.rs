//! Schema-drift detection: find keys in a document that the schema no longer
//! declares.
//!
//! Stale keys never fail a load on their own. They are reported in the
//! outcome, and in strict mode they make the file `Invalid` so a repair
//! rewrites it without them.

use toml_edit::Table;

use crate::schema::{Schema, qualify};

/// Every key in `document` with no matching section or field declaration.
///
/// Undeclared sections are reported by name; undeclared fields inside a
/// declared section as `section.field`. Keys inside a declared section that
/// is not a table are left to the section mapper.
pub fn unknown_keys<S: Schema + ?Sized>(schema: &S, document: &Table) -> Vec<String> {
    let sections = schema.sections();
    let mut unknown = Vec::new();

    for (name, item) in document.iter() {
        let Some((_, section)) = sections.iter().find(|(info, _)| info.name == name) else {
            unknown.push(name.to_string());
            continue;
        };
        let Some(table) = item.as_table_like() else {
            continue;
        };
        let declared = section.schema();
        for (field, _) in table.iter() {
            if declared.field(field).is_none() {
                unknown.push(qualify(name, field));
            }
        }
    }
    unknown
}

/// Find the 1-indexed line number for a key in TOML content.
///
/// For a dotted key like `"network.typo"`, tracks the current `[section]`
/// header while scanning and only matches the leaf key when inside the
/// correct section. Best effort: quoted keys and inline tables are not
/// handled. Returns 0 if the key cannot be located.
pub fn find_key_line(content: &str, dotted_key: &str) -> usize {
    let segments: Vec<&str> = dotted_key.split('.').collect();
    let leaf = segments.last().copied().unwrap_or(dotted_key);
    let expected_section = &segments[..segments.len() - 1];

    let mut current_section: Vec<String> = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let header = trimmed.trim_start_matches('[').trim_end_matches(']').trim();
            // An undeclared section is reported by its header.
            if expected_section.is_empty() && header == leaf {
                return i + 1;
            }
            current_section = header.split('.').map(|s| s.trim().to_string()).collect();
            continue;
        }

        let in_right_section = expected_section.len() == current_section.len()
            && expected_section
                .iter()
                .zip(&current_section)
                .all(|(a, b)| *a == b);

        if in_right_section
            && let Some(after_key) = trimmed.strip_prefix(leaf)
            && after_key.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, DEFAULT_DOCUMENT};

    fn table(toml_str: &str) -> Table {
        let doc: toml_edit::DocumentMut = toml_str.parse().unwrap();
        doc.as_table().clone()
    }

    #[test]
    fn declared_document_has_no_unknown_keys() {
        let unknown = unknown_keys(&AppConfig::default(), &table(DEFAULT_DOCUMENT));
        assert!(unknown.is_empty());
    }

    #[test]
    fn sparse_document_has_no_unknown_keys() {
        let unknown = unknown_keys(&AppConfig::default(), &table("[network]\nport = 1\n"));
        assert!(unknown.is_empty());
    }

    #[test]
    fn stale_field_is_reported_qualified() {
        let doc = table("[network]\nport = 1\ntimeout = 30\n");
        let unknown = unknown_keys(&AppConfig::default(), &doc);
        assert_eq!(unknown, ["network.timeout"]);
    }

    #[test]
    fn stale_section_and_root_key_are_reported() {
        let doc = table("version = 2\n[legacy]\nx = 1\n");
        let unknown = unknown_keys(&AppConfig::default(), &doc);
        assert_eq!(unknown, ["version", "legacy"]);
    }

    #[test]
    fn line_number_of_nested_key() {
        let content = "[network]\nport = 1\n\n[storage]\nport = 2\ntypo = 3\n";
        assert_eq!(find_key_line(content, "storage.typo"), 6);
        assert_eq!(find_key_line(content, "storage.port"), 5);
    }

    #[test]
    fn line_number_of_indented_key() {
        let content = "[network]\n    # comment\n    timeout = 30\n";
        assert_eq!(find_key_line(content, "network.timeout"), 3);
    }

    #[test]
    fn line_number_of_root_key_and_section() {
        let content = "version = 2\n[network]\nport = 1\n[legacy]\nx = 1\n";
        assert_eq!(find_key_line(content, "version"), 1);
        assert_eq!(find_key_line(content, "legacy"), 4);
    }

    #[test]
    fn line_number_zero_when_absent() {
        assert_eq!(find_key_line("[network]\nport = 1\n", "network.nope"), 0);
    }
}
