//! Pluggable rules a field value must satisfy.
//!
//! Constraints are attached to a field declaration and evaluated after the raw
//! TOML value was converted into the field's declared shape. Each one answers
//! two questions: does the value meet the rule, and if not, how should the
//! failure be explained to a human. New rules implement [`Constraint`]; the
//! section mapper never needs to know about them.

use std::fmt;

use crate::error::ConfigError;
use crate::value::Value;

/// A rule attached to a field declaration.
pub trait Constraint: fmt::Debug + Send + Sync {
    /// Whether `value` satisfies the rule.
    fn meets(&self, value: &Value) -> bool;

    /// Human-readable explanation used when [`meets`](Self::meets) is false.
    fn reason(&self) -> String;

    /// When true, a failure of this constraint ends validation of the field:
    /// later constraints on the same field are not evaluated.
    fn halts_validation(&self) -> bool {
        false
    }
}

/// The value must differ from its shape's empty value (0, "", `[]`, false).
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Constraint for Required {
    fn meets(&self, value: &Value) -> bool {
        !value.is_empty()
    }

    fn reason(&self) -> String {
        "This value is required.".to_string()
    }

    fn halts_validation(&self) -> bool {
        true
    }
}

/// Integer within `begin..=end`. Not applicable to other shapes.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    begin: i64,
    end: i64,
}

impl IntRange {
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }
}

impl Constraint for IntRange {
    fn meets(&self, value: &Value) -> bool {
        match value.as_integer() {
            Some(i) => (self.begin..=self.end).contains(&i),
            None => true,
        }
    }

    fn reason(&self) -> String {
        format!(
            "Value out of range. Must be at least {} and at most {}",
            self.begin, self.end
        )
    }
}

/// String matching a regular expression.
///
/// For string lists every entry must match. Other shapes are not judged.
/// A pattern that fails to compile rejects every value, with the compile
/// error as the reason; use [`Regex::try_new`] to catch it up front.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    compiled: Result<regex::Regex, regex::Error>,
}

impl Regex {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            compiled: regex::Regex::new(pattern),
        }
    }

    pub fn try_new(pattern: &str) -> Result<Self, ConfigError> {
        let compiled = regex::Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            compiled: Ok(compiled),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Constraint for Regex {
    fn meets(&self, value: &Value) -> bool {
        let Ok(re) = &self.compiled else {
            return false;
        };
        match value {
            Value::String(s) => re.is_match(s),
            Value::StringList(entries) => entries.iter().all(|s| re.is_match(s)),
            _ => true,
        }
    }

    fn reason(&self) -> String {
        match &self.compiled {
            Ok(_) => format!("Value must match the pattern '{}'", self.pattern),
            Err(e) => format!("The pattern '{}' is not a valid regex: {e}", self.pattern),
        }
    }
}

/// String equal to one of a fixed set of choices. Other shapes are not judged.
#[derive(Debug, Clone)]
pub struct OneOf {
    choices: Vec<String>,
}

impl OneOf {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

impl Constraint for OneOf {
    fn meets(&self, value: &Value) -> bool {
        match value.as_str() {
            Some(s) => self.choices.iter().any(|c| c == s),
            None => true,
        }
    }

    fn reason(&self) -> String {
        format!("Value must be one of: {}", self.choices.join(", "))
    }
}
