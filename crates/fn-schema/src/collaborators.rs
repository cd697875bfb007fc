//! Narrow interfaces the compilers delegate to, and the annotation driven defaults.

use std::sync::Arc;

use config::GeneratorConfig;

use crate::{
    Annotation, Directive, IntrospectedFunction, IntrospectedParameter, NoopHooks, SchemaError, SchemaGeneratorHooks,
    TypeDescriptor, TypeKind, TypeReference, Wrapping,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypePosition {
    Input,
    Output,
}

/// Maps native types to schema type references.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, ty: &TypeDescriptor, position: TypePosition) -> Result<TypeReference, SchemaError>;
}

/// Reads descriptions and deprecation reasons.
pub trait MetadataExtractor: Send + Sync {
    fn function_description(&self, function: &IntrospectedFunction) -> Option<String>;

    fn deprecation_reason(&self, function: &IntrospectedFunction) -> Option<String>;

    fn parameter_description(&self, parameter: &IntrospectedParameter) -> Option<String>;

    fn type_description(&self, ty: &TypeDescriptor) -> Option<String>;
}

pub trait DirectiveResolver: Send + Sync {
    fn function_directives(&self, function: &IntrospectedFunction) -> Result<Vec<Directive>, SchemaError>;

    fn parameter_directives(&self, parameter: &IntrospectedParameter) -> Result<Vec<Directive>, SchemaError>;
}

/// Vetoes parameters whose type may not be used as an argument.
pub trait AuthorizationCheck: Send + Sync {
    fn check_authorized(&self, parameter: &IntrospectedParameter) -> Result<(), SchemaError>;
}

pub trait ContextParameterPredicate: Send + Sync {
    fn is_context_parameter(&self, parameter: &IntrospectedParameter) -> bool;
}

/// Reads everything from [`Annotation`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotationMetadata;

impl AnnotationMetadata {
    fn description(annotations: &[Annotation]) -> Option<String> {
        annotations.iter().find_map(|annotation| match annotation {
            Annotation::Description(description) => Some(description.clone()),
            _ => None,
        })
    }

    fn directives(annotations: &[Annotation]) -> Vec<Directive> {
        annotations
            .iter()
            .filter_map(|annotation| match annotation {
                Annotation::Directive(directive) => Some(directive.clone()),
                _ => None,
            })
            .collect()
    }
}

impl MetadataExtractor for AnnotationMetadata {
    fn function_description(&self, function: &IntrospectedFunction) -> Option<String> {
        Self::description(&function.annotations)
    }

    fn deprecation_reason(&self, function: &IntrospectedFunction) -> Option<String> {
        function.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Deprecated { reason } => Some(reason.clone()),
            _ => None,
        })
    }

    fn parameter_description(&self, parameter: &IntrospectedParameter) -> Option<String> {
        Self::description(&parameter.annotations)
    }

    fn type_description(&self, ty: &TypeDescriptor) -> Option<String> {
        ty.description.clone()
    }
}

impl DirectiveResolver for AnnotationMetadata {
    fn function_directives(&self, function: &IntrospectedFunction) -> Result<Vec<Directive>, SchemaError> {
        Ok(Self::directives(&function.annotations))
    }

    fn parameter_directives(&self, parameter: &IntrospectedParameter) -> Result<Vec<Directive>, SchemaError> {
        Ok(Self::directives(&parameter.annotations))
    }
}

impl ContextParameterPredicate for AnnotationMetadata {
    fn is_context_parameter(&self, parameter: &IntrospectedParameter) -> bool {
        parameter.ty.kind == TypeKind::Context
            || parameter
                .annotations
                .iter()
                .any(|annotation| matches!(annotation, Annotation::Context))
    }
}

/// Rejects interface and union typed parameters, including lists of them.
#[derive(Debug, Default, Clone, Copy)]
pub struct InterfaceArgumentCheck;

impl AuthorizationCheck for InterfaceArgumentCheck {
    fn check_authorized(&self, parameter: &IntrospectedParameter) -> Result<(), SchemaError> {
        let mut ty = &parameter.ty;

        loop {
            match ty.kind {
                TypeKind::Interface | TypeKind::Union => {
                    return Err(SchemaError::UnauthorizedInterface {
                        argument: parameter
                            .usable_name()
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("#{}", parameter.position)),
                        ty: parameter.ty.to_string(),
                    });
                }
                TypeKind::List | TypeKind::Wrapper => match ty.inner() {
                    Some(inner) => ty = inner,
                    None => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }
}

/// Resolves descriptors structurally: nullability, lists, the scalar table of the
/// configuration and the input suffix for objects in argument position.
#[derive(Debug, Clone)]
pub struct DefaultTypeResolver {
    config: GeneratorConfig,
}

impl DefaultTypeResolver {
    pub fn new(config: GeneratorConfig) -> Self {
        DefaultTypeResolver { config }
    }

    fn invalid(ty: &TypeDescriptor, position: TypePosition, reason: &str) -> SchemaError {
        let ty = ty.to_string();
        let reason = reason.to_string();

        match position {
            TypePosition::Input => SchemaError::InvalidInputType { ty, reason },
            TypePosition::Output => SchemaError::InvalidOutputType { ty, reason },
        }
    }
}

impl Default for DefaultTypeResolver {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl TypeResolver for DefaultTypeResolver {
    fn resolve(&self, ty: &TypeDescriptor, position: TypePosition) -> Result<TypeReference, SchemaError> {
        let name = match ty.kind {
            TypeKind::List => {
                let item = ty
                    .inner()
                    .ok_or_else(|| Self::invalid(ty, position, "a list needs exactly one item type"))?;
                let item = self.resolve(item, position)?;

                let wrapping = if ty.nullable {
                    item.wrapping.list()
                } else {
                    item.wrapping.list_non_null()
                };

                return Ok(TypeReference::new(item.name, wrapping));
            }
            TypeKind::Wrapper => {
                return Err(Self::invalid(
                    ty,
                    position,
                    "wrapper types must be resolved to the type of the value they produce",
                ));
            }
            TypeKind::Context => {
                return Err(Self::invalid(ty, position, "context types are not part of the schema"));
            }
            TypeKind::Interface | TypeKind::Union if position == TypePosition::Input => {
                return Err(Self::invalid(ty, position, "abstract types are output only"));
            }
            TypeKind::Scalar => match self.config.scalar_for(&ty.name) {
                Some(name) => name.to_string(),
                None => return Err(Self::invalid(ty, position, "no scalar is mapped to this type")),
            },
            TypeKind::Object if position == TypePosition::Input => {
                format!("{}{}", ty.name, self.config.input_type_suffix)
            }
            TypeKind::Object | TypeKind::Enum | TypeKind::Interface | TypeKind::Union => ty.name.clone(),
        };

        let wrapping = if ty.nullable {
            Wrapping::nullable()
        } else {
            Wrapping::required()
        };

        Ok(TypeReference::new(name, wrapping))
    }
}

/// Everything the compilers delegate to.
#[derive(Clone)]
pub struct Collaborators {
    pub type_resolver: Arc<dyn TypeResolver>,
    pub metadata: Arc<dyn MetadataExtractor>,
    pub directives: Arc<dyn DirectiveResolver>,
    pub authorization: Arc<dyn AuthorizationCheck>,
    pub context_parameters: Arc<dyn ContextParameterPredicate>,
    pub hooks: Arc<dyn SchemaGeneratorHooks>,
}

impl Collaborators {
    pub fn new(config: &GeneratorConfig) -> Self {
        Collaborators {
            type_resolver: Arc::new(DefaultTypeResolver::new(config.clone())),
            metadata: Arc::new(AnnotationMetadata),
            directives: Arc::new(AnnotationMetadata),
            authorization: Arc::new(InterfaceArgumentCheck),
            context_parameters: Arc::new(AnnotationMetadata),
            hooks: Arc::new(NoopHooks),
        }
    }

    #[must_use]
    pub fn with_type_resolver(self, type_resolver: impl TypeResolver + 'static) -> Self {
        Collaborators {
            type_resolver: Arc::new(type_resolver),
            ..self
        }
    }

    #[must_use]
    pub fn with_metadata(self, metadata: impl MetadataExtractor + 'static) -> Self {
        Collaborators {
            metadata: Arc::new(metadata),
            ..self
        }
    }

    #[must_use]
    pub fn with_directives(self, directives: impl DirectiveResolver + 'static) -> Self {
        Collaborators {
            directives: Arc::new(directives),
            ..self
        }
    }

    #[must_use]
    pub fn with_authorization(self, authorization: impl AuthorizationCheck + 'static) -> Self {
        Collaborators {
            authorization: Arc::new(authorization),
            ..self
        }
    }

    #[must_use]
    pub fn with_context_parameters(self, context_parameters: impl ContextParameterPredicate + 'static) -> Self {
        Collaborators {
            context_parameters: Arc::new(context_parameters),
            ..self
        }
    }

    #[must_use]
    pub fn with_hooks(self, hooks: impl SchemaGeneratorHooks + 'static) -> Self {
        Collaborators {
            hooks: Arc::new(hooks),
            ..self
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
