//! Field shapes and the values that flow between TOML and schema structs.
//!
//! [`Value`] is a closed sum type over every shape a field may declare. The
//! section mapper converts raw TOML items into a `Value` of the declared
//! [`FieldKind`] before any constraint sees it, so constraints and accessors
//! never deal with untyped data. [`FieldValue`] maps concrete Rust field
//! types onto that model.

use std::fmt;

use serde::Serialize;

use crate::error::ConfigError;

/// The declared shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    String,
    StringList,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::String => "string",
            FieldKind::StringList => "array of strings",
        }
    }

    /// The shape's zero value. `Required` treats it as "not set".
    pub fn empty_value(self) -> Value {
        match self {
            FieldKind::Integer => Value::Integer(0),
            FieldKind::Float => Value::Float(0.0),
            FieldKind::Boolean => Value::Boolean(false),
            FieldKind::String => Value::String(String::new()),
            FieldKind::StringList => Value::StringList(Vec::new()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value of one of the supported shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    StringList(Vec<String>),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Integer(_) => FieldKind::Integer,
            Value::Float(_) => FieldKind::Float,
            Value::Boolean(_) => FieldKind::Boolean,
            Value::String(_) => FieldKind::String,
            Value::StringList(_) => FieldKind::StringList,
        }
    }

    /// True when the value equals its shape's zero value.
    pub fn is_empty(&self) -> bool {
        *self == self.kind().empty_value()
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::StringList(l) => Some(l),
            _ => None,
        }
    }

    /// Convert a parsed TOML item into the declared shape.
    ///
    /// Returns `None` when the item has a different shape. Integers are
    /// accepted where a float is declared; nothing else is coerced.
    pub(crate) fn from_item(item: &toml_edit::Item, kind: FieldKind) -> Option<Value> {
        match kind {
            FieldKind::Integer => item.as_integer().map(Value::Integer),
            FieldKind::Float => item
                .as_float()
                .or_else(|| item.as_integer().map(|i| i as f64))
                .map(Value::Float),
            FieldKind::Boolean => item.as_bool().map(Value::Boolean),
            FieldKind::String => item.as_str().map(|s| Value::String(s.to_string())),
            FieldKind::StringList => {
                let array = item.as_array()?;
                array
                    .iter()
                    .map(|entry| entry.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(Value::StringList)
            }
        }
    }

    pub(crate) fn to_toml(&self) -> toml_edit::Value {
        match self {
            Value::Integer(i) => toml_edit::Value::from(*i),
            Value::Float(f) => toml_edit::Value::from(*f),
            Value::Boolean(b) => toml_edit::Value::from(*b),
            Value::String(s) => toml_edit::Value::from(s.as_str()),
            Value::StringList(l) => {
                toml_edit::Value::Array(l.iter().map(String::as_str).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::StringList(l) => write!(f, "[{}]", l.join(", ")),
        }
    }
}

/// A Rust type that can back a config field.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    /// `None` when the value has another shape or does not fit the type.
    fn from_value(value: Value) -> Option<Self>;

    /// Replace `self` with `value`, used by generated section accessors.
    fn assign(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let found = value.kind().name();
        *self = Self::from_value(value).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: Self::KIND.name(),
            found,
        })?;
        Ok(())
    }
}

impl FieldValue for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_integer()
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn to_value(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }

                fn from_value(value: Value) -> Option<Self> {
                    value.as_integer().and_then(|i| <$ty>::try_from(i).ok())
                }
            }
        )*
    };
}

narrow_integer!(i8, i16, i32, u8, u16, u32);

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldValue for Vec<String> {
    const KIND: FieldKind = FieldKind::StringList;

    fn to_value(&self) -> Value {
        Value::StringList(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::StringList(l) => Some(l),
            _ => None,
        }
    }
}
