use std::{
    fmt,
    hash::{Hash, Hasher},
};

use itertools::Itertools;

/// A directive applied to a field or an argument. Two directives are the same
/// directive when all of their parts are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<(String, ConstValue)>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Directive {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;

        if !self.arguments.is_empty() {
            let arguments = self
                .arguments
                .iter()
                .format_with(", ", |(name, value), f| f(&format_args!("{name}: {value}")));
            write!(f, "({arguments})")?;
        }

        Ok(())
    }
}

/// A constant directive argument value.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum ConstValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<ConstValue>),
    Object(Vec<(String, ConstValue)>),
}

// Floats compare by bit pattern so that directives can be kept in a set.
impl PartialEq for ConstValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstValue::Null, ConstValue::Null) => true,
            (ConstValue::Boolean(left), ConstValue::Boolean(right)) => left == right,
            (ConstValue::Int(left), ConstValue::Int(right)) => left == right,
            (ConstValue::Float(left), ConstValue::Float(right)) => left.to_bits() == right.to_bits(),
            (ConstValue::String(left), ConstValue::String(right)) => left == right,
            (ConstValue::Enum(left), ConstValue::Enum(right)) => left == right,
            (ConstValue::List(left), ConstValue::List(right)) => left == right,
            (ConstValue::Object(left), ConstValue::Object(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for ConstValue {}

impl Hash for ConstValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            ConstValue::Null => {}
            ConstValue::Boolean(value) => value.hash(state),
            ConstValue::Int(value) => value.hash(state),
            ConstValue::Float(value) => value.to_bits().hash(state),
            ConstValue::String(value) | ConstValue::Enum(value) => value.hash(state),
            ConstValue::List(values) => values.hash(state),
            ConstValue::Object(fields) => fields.hash(state),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Null => f.write_str("null"),
            ConstValue::Boolean(value) => write!(f, "{value}"),
            ConstValue::Int(value) => write!(f, "{value}"),
            ConstValue::Float(value) => write!(f, "{value:?}"),
            ConstValue::String(value) => super::display_string_literal(value, f),
            ConstValue::Enum(value) => f.write_str(value),
            ConstValue::List(values) => write!(f, "[{}]", values.iter().format(", ")),
            ConstValue::Object(fields) => {
                let fields = fields
                    .iter()
                    .format_with(", ", |(name, value), f| f(&format_args!("{name}: {value}")));
                write!(f, "{{{fields}}}")
            }
        }
    }
}

impl From<bool> for ConstValue {
    fn from(value: bool) -> Self {
        ConstValue::Boolean(value)
    }
}

impl From<i64> for ConstValue {
    fn from(value: i64) -> Self {
        ConstValue::Int(value)
    }
}

impl From<i32> for ConstValue {
    fn from(value: i32) -> Self {
        ConstValue::Int(value.into())
    }
}

impl From<f64> for ConstValue {
    fn from(value: f64) -> Self {
        ConstValue::Float(value)
    }
}

impl From<&str> for ConstValue {
    fn from(value: &str) -> Self {
        ConstValue::String(value.to_string())
    }
}

impl From<String> for ConstValue {
    fn from(value: String) -> Self {
        ConstValue::String(value)
    }
}
