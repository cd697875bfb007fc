use std::fmt;

use super::{Directive, Extensions, TypeReference};

/// An argument of a field, compiled from a function parameter.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ArgumentNode {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeReference,
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl ArgumentNode {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        ArgumentNode {
            name: name.into(),
            description: None,
            ty,
            directives: Vec::new(),
            extensions: Extensions::new(),
        }
    }
}

impl fmt::Display for ArgumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            super::display_string_literal(description, f)?;
            f.write_str(" ")?;
        }

        write!(f, "{}: {}", self.name, self.ty)?;
        super::display_directives(&self.directives, f)
    }
}
