use std::sync::Arc;

use crate::{
    AlwaysExecute, ArgumentNode, ExecutionBinding, ExecutionPredicate, FieldNode, FieldResolver, IntrospectedFunction,
    SchemaError, TypeDescriptor, TypeKind,
};

/// Extension points of the compilers. Every hook defaults to passing its input through.
#[allow(unused_variables)]
pub trait SchemaGeneratorHooks: Send + Sync {
    /// Called with the declared return type of a function before it is resolved to a schema
    /// type. Lets a wrapper such as a future be replaced by the type of the value it produces.
    fn will_resolve_effective_type(&self, return_type: &TypeDescriptor) -> Result<TypeDescriptor, SchemaError> {
        Ok(return_type.clone())
    }

    /// Called once the execution binding of a field exists. The returned resolver is the one
    /// attached to the field, which allows wrapping the binding, e.g. for instrumentation.
    fn did_create_execution_binding(
        &self,
        function: &IntrospectedFunction,
        binding: ExecutionBinding,
    ) -> Result<Arc<dyn FieldResolver>, SchemaError> {
        Ok(Arc::new(binding))
    }

    /// Last look at a compiled field, keyed by the effective return type.
    fn on_rewire_field(&self, effective_type: &TypeDescriptor, field: FieldNode) -> Result<FieldNode, SchemaError> {
        Ok(field)
    }

    /// Last look at a compiled argument, keyed by the parameter type.
    fn on_rewire_argument(&self, ty: &TypeDescriptor, argument: ArgumentNode) -> Result<ArgumentNode, SchemaError> {
        Ok(argument)
    }

    /// Consulted by execution bindings at request time.
    fn execution_predicate(&self) -> Arc<dyn ExecutionPredicate> {
        Arc::new(AlwaysExecute)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl SchemaGeneratorHooks for NoopHooks {}

/// Unwraps one level of [`TypeKind::Wrapper`] types, e.g. `Future<User>` into `User`.
///
/// Combined with fixed-point resolution, nested wrappers are removed entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnwrapWrapperTypes;

impl SchemaGeneratorHooks for UnwrapWrapperTypes {
    fn will_resolve_effective_type(&self, return_type: &TypeDescriptor) -> Result<TypeDescriptor, SchemaError> {
        match (return_type.kind, return_type.inner()) {
            (TypeKind::Wrapper, Some(inner)) => Ok(inner.clone()),
            _ => Ok(return_type.clone()),
        }
    }
}
