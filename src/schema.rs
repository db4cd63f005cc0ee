//! Schema descriptors: which sections exist, which fields they declare, and
//! how to read and write those fields by name.
//!
//! Descriptors are registered at compile time. The [`config_section!`] and
//! [`config_schema!`] macros generate the [`Section`] and [`Schema`] impls for
//! plain structs; hand-written impls work the same way.
//!
//! [`config_section!`]: crate::config_section
//! [`config_schema!`]: crate::config_schema

use crate::constraint::Constraint;
use crate::error::ConfigError;
use crate::value::{FieldKind, Value};

/// Declaration of one field: name, shape, optional comment, constraints.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub comment: Option<&'static str>,
    pub constraints: Vec<Box<dyn Constraint>>,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            comment: None,
            constraints: Vec::new(),
        }
    }

    /// Attach a comment, written above the field in generated files.
    pub fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Append a constraint. Constraints run in the order they were added.
    pub fn constraint(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

/// The ordered field declarations of one section type.
#[derive(Debug)]
pub struct SectionSchema {
    pub fields: Vec<FieldSpec>,
}

impl SectionSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A group of named, typed settings.
pub trait Section {
    /// The section's field declarations, built once per type.
    fn schema(&self) -> &'static SectionSchema;

    /// Current value of a declared field, `None` for undeclared names.
    fn get(&self, field: &str) -> Option<Value>;

    /// Assign a declared field. Fails on undeclared names and on values of
    /// the wrong shape.
    fn set(&mut self, field: &str, value: Value) -> Result<(), ConfigError>;

    /// Restore a declared field to its declared default.
    fn reset(&mut self, field: &str) -> Result<(), ConfigError>;
}

/// Name and optional comment of a section within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    pub name: &'static str,
    pub comment: Option<&'static str>,
}

impl SectionInfo {
    pub fn new(name: &'static str, comment: Option<&'static str>) -> Self {
        Self { name, comment }
    }
}

/// The root of a configuration file: an ordered set of named sections.
pub trait Schema {
    fn sections(&self) -> Vec<(SectionInfo, &dyn Section)>;

    fn sections_mut(&mut self) -> Vec<(SectionInfo, &mut dyn Section)>;
}

/// Join a section and field name into the key used in outcomes.
pub(crate) fn qualify(section: &str, field: &str) -> String {
    format!("{section}.{field}")
}

/// Declare a config section: a struct whose fields carry defaults, optional
/// comments and constraints.
///
/// Per field, attributes come in this order: doc comments, then
/// `#[comment = "..."]`, then `#[check(constraint, ...)]`. The macro
/// generates the struct, a `Default` impl using the declared defaults, and a
/// [`Section`] impl. Default expressions are evaluated again on every
/// `default()` and `reset()`.
///
/// ```ignore
/// config_section! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Network {
///         #[comment = "Port the server listens on."]
///         #[check(IntRange::new(1, 65535))]
///         pub port: u16 = 8080,
///
///         #[check(Required)]
///         pub host: String = "localhost".into(),
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[comment = $comment:literal])?
                $(#[check($($check:expr),+ $(,)?)])?
                $fvis:vis $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        impl $crate::Section for $name {
            fn schema(&self) -> &'static $crate::SectionSchema {
                static SCHEMA: ::std::sync::OnceLock<$crate::SectionSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::SectionSchema::new(::std::vec![
                        $(
                            $crate::FieldSpec::new(
                                stringify!($field),
                                <$ty as $crate::FieldValue>::KIND,
                            )
                            $(.comment($comment))?
                            $($(.constraint($check))+)?,
                        )*
                    ])
                })
            }

            fn get(&self, field: &str) -> ::std::option::Option<$crate::Value> {
                $(
                    if field == stringify!($field) {
                        return ::std::option::Option::Some(
                            $crate::FieldValue::to_value(&self.$field),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            fn set(
                &mut self,
                field: &str,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::ConfigError> {
                $(
                    if field == stringify!($field) {
                        return $crate::FieldValue::assign(&mut self.$field, field, value);
                    }
                )*
                let _ = value;
                ::std::result::Result::Err($crate::ConfigError::UnknownField {
                    section: stringify!($name).to_string(),
                    field: field.to_string(),
                })
            }

            fn reset(&mut self, field: &str) -> ::std::result::Result<(), $crate::ConfigError> {
                $(
                    if field == stringify!($field) {
                        self.$field = $default;
                        return ::std::result::Result::Ok(());
                    }
                )*
                ::std::result::Result::Err($crate::ConfigError::UnknownField {
                    section: stringify!($name).to_string(),
                    field: field.to_string(),
                })
            }
        }
    };
}

/// Declare the root of a configuration file: a struct whose fields are
/// sections, in file order.
///
/// A section may carry `#[comment = "..."]`, written above its table header.
/// The macro generates the struct and a [`Schema`] impl; derive `Default`
/// yourself to start from every section's declared defaults.
///
/// ```ignore
/// config_schema! {
///     #[derive(Debug, Default)]
///     pub struct AppConfig {
///         #[comment = "Network settings."]
///         pub network: Network,
///         pub storage: Storage,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_schema {
    (@info $field:ident) => {
        $crate::SectionInfo::new(stringify!($field), ::std::option::Option::None)
    };
    (@info $field:ident $comment:literal) => {
        $crate::SectionInfo::new(stringify!($field), ::std::option::Option::Some($comment))
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[comment = $comment:literal])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Schema for $name {
            fn sections(&self) -> ::std::vec::Vec<($crate::SectionInfo, &dyn $crate::Section)> {
                ::std::vec![
                    $(
                        (
                            $crate::config_schema!(@info $field $($comment)?),
                            &self.$field as &dyn $crate::Section,
                        ),
                    )*
                ]
            }

            fn sections_mut(
                &mut self,
            ) -> ::std::vec::Vec<($crate::SectionInfo, &mut dyn $crate::Section)> {
                ::std::vec![
                    $(
                        (
                            $crate::config_schema!(@info $field $($comment)?),
                            &mut self.$field as &mut dyn $crate::Section,
                        ),
                    )*
                ]
            }
        }
    };
}
