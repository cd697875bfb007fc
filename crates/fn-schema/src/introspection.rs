//! Metadata describing native callables, filled in once by an introspection adapter.

use std::{fmt, sync::Arc};

use crate::{Directive, NativeFunction};

/// A callable exposed as a field, together with everything the compiler needs to know about it.
#[derive(Clone)]
pub struct IntrospectedFunction {
    pub name: String,
    pub parameters: Vec<IntrospectedParameter>,
    pub return_type: TypeDescriptor,
    pub annotations: Vec<Annotation>,
    pub handle: Arc<dyn NativeFunction>,
}

impl IntrospectedFunction {
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor, handle: Arc<dyn NativeFunction>) -> Self {
        IntrospectedFunction {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            annotations: Vec::new(),
            handle,
        }
    }

    /// Appends a parameter, assigning it the next declaration position.
    #[must_use]
    pub fn with_parameter(mut self, mut parameter: IntrospectedParameter) -> Self {
        parameter.position = self.parameters.len();
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.annotations.iter().any(|annotation| matches!(annotation, Annotation::Ignore))
    }
}

impl fmt::Debug for IntrospectedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntrospectedFunction")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntrospectedParameter {
    /// Native parameter names may not survive compilation, hence the option.
    pub name: Option<String>,
    pub ty: TypeDescriptor,
    pub annotations: Vec<Annotation>,
    pub position: usize,
}

impl IntrospectedParameter {
    pub fn new(name: Option<String>, ty: TypeDescriptor) -> Self {
        IntrospectedParameter {
            name,
            ty,
            annotations: Vec::new(),
            position: 0,
        }
    }

    pub fn named(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(Some(name.into()), ty)
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The declared name, unless it is absent or blank.
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Annotations an adapter may attach to functions and parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Description(String),
    Deprecated { reason: String },
    Directive(Directive),
    /// The parameter carries the request context instead of a client supplied value.
    Context,
    /// The function is not exposed in the schema.
    Ignore,
    Custom { name: String, value: serde_json::Value },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Enum,
    Object,
    Interface,
    Union,
    List,
    /// Request scoped execution context.
    Context,
    /// A container such as a future or a box around the value eventually produced.
    Wrapper,
}

/// Native type of a parameter or a return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    pub nullable: bool,
    /// Generic arguments: the item type of a list, the value type of a wrapper.
    pub arguments: Vec<TypeDescriptor>,
    pub description: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeDescriptor {
            name: name.into(),
            kind,
            nullable: false,
            arguments: Vec::new(),
            description: None,
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Scalar)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Union)
    }

    pub fn context(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Context)
    }

    pub fn list(item: TypeDescriptor) -> Self {
        TypeDescriptor {
            arguments: vec![item],
            ..Self::new("Vec", TypeKind::List)
        }
    }

    pub fn wrapper(name: impl Into<String>, inner: TypeDescriptor) -> Self {
        TypeDescriptor {
            arguments: vec![inner],
            ..Self::new(name, TypeKind::Wrapper)
        }
    }

    #[must_use]
    pub fn nullable(self) -> Self {
        TypeDescriptor { nullable: true, ..self }
    }

    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        TypeDescriptor {
            description: Some(description.into()),
            ..self
        }
    }

    /// The single generic argument of a list or a wrapper.
    pub fn inner(&self) -> Option<&TypeDescriptor> {
        match self.arguments.as_slice() {
            [inner] => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("Option<")?;
        }

        f.write_str(&self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(argument, f)?;
            }
            f.write_str(">")?;
        }

        if self.nullable {
            f.write_str(">")?;
        }

        Ok(())
    }
}
