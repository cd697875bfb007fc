use std::{fmt, sync::Arc};

use itertools::Itertools;

use super::{ArgumentNode, Deprecation, Directive, Extensions, TypeReference};
use crate::FieldResolver;

/// A field definition compiled from a function.
#[derive(Clone, serde::Serialize)]
pub struct FieldNode {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Deprecation,
    pub arguments: Vec<ArgumentNode>,
    pub ty: TypeReference,
    pub directives: Vec<Directive>,
    /// Absent on abstract fields, which only declare their shape.
    #[serde(skip)]
    pub resolver: Option<Arc<dyn FieldResolver>>,
    #[serde(skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        FieldNode {
            name: name.into(),
            description: None,
            deprecation: Deprecation::NoDeprecated,
            arguments: Vec::new(),
            ty,
            directives: Vec::new(),
            resolver: None,
            extensions: Extensions::new(),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentNode> {
        self.arguments.iter().find(|argument| argument.name == name)
    }

    pub fn is_abstract(&self) -> bool {
        self.resolver.is_none()
    }
}

// Resolvers have no identity worth comparing, only their presence is.
impl PartialEq for FieldNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.deprecation == other.deprecation
            && self.arguments == other.arguments
            && self.ty == other.ty
            && self.directives == other.directives
            && self.resolver.is_some() == other.resolver.is_some()
            && self.extensions == other.extensions
    }
}

impl fmt::Debug for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldNode")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("deprecation", &self.deprecation)
            .field("arguments", &self.arguments)
            .field("ty", &self.ty)
            .field("directives", &self.directives)
            .field("resolver", &self.resolver.as_ref().map(|_| ".."))
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl fmt::Display for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.arguments.is_empty() {
            write!(f, "({})", self.arguments.iter().format(", "))?;
        }

        write!(f, ": {}", self.ty)?;

        if self.deprecation.is_deprecated() {
            write!(f, " {}", self.deprecation)?;
        }

        super::display_directives(&self.directives, f)
    }
}
