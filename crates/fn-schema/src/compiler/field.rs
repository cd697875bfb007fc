use config::{EffectiveTypeResolution, GeneratorConfig};

use super::ArgumentCompiler;
use crate::{
    ArgumentNode, Collaborators, Deprecation, ExecutionBinding, FieldNode, GenerationState, IntrospectedFunction, Parameter,
    ParameterBinding, SchemaError, Target, TypeDescriptor, TypePosition,
};

/// Compiles functions into field definitions.
pub struct FieldCompiler<'a> {
    config: &'a GeneratorConfig,
    collaborators: &'a Collaborators,
    state: &'a GenerationState,
}

impl<'a> FieldCompiler<'a> {
    pub fn new(config: &'a GeneratorConfig, collaborators: &'a Collaborators, state: &'a GenerationState) -> Self {
        FieldCompiler {
            config,
            collaborators,
            state,
        }
    }

    /// Compiles one function. `target` is the receiver the function is called on, `None` for
    /// free functions. Abstract fields get no resolver even if a target is given.
    #[tracing::instrument(name = "compile_field", skip_all, fields(function = %function.name, is_abstract = is_abstract))]
    pub fn compile_field(
        &self,
        function: &IntrospectedFunction,
        target: Option<Target>,
        is_abstract: bool,
    ) -> Result<FieldNode, SchemaError> {
        let collaborators = self.collaborators;
        let argument_compiler = ArgumentCompiler::new(collaborators, self.state);

        let description = collaborators.metadata.function_description(function);

        let deprecation = match collaborators.metadata.deprecation_reason(function) {
            Some(reason) => Deprecation::Deprecated { reason: Some(reason) },
            None => Deprecation::NoDeprecated,
        };

        // Registered only once the whole field has compiled.
        let directives = collaborators.directives.function_directives(function)?;
        let mut pending_directives = directives.clone();

        let mut arguments: Vec<ArgumentNode> = Vec::with_capacity(function.parameters.len());
        let mut parameters = ParameterBinding::new();

        for (position, parameter) in function.parameters.iter().enumerate() {
            let name = parameter.usable_name().ok_or_else(|| SchemaError::MissingArgumentName {
                position,
                ty: parameter.ty.to_string(),
            })?;

            let is_context = collaborators.context_parameters.is_context_parameter(parameter);

            if is_context {
                tracing::debug!(parameter = %name, "Context parameter is left out of the arguments");
            } else {
                let argument = argument_compiler.build_argument(parameter, &mut pending_directives)?;

                // Rewire hooks may rename arguments.
                if argument.name.trim().is_empty() {
                    return Err(SchemaError::EmptyArgumentName { position });
                }

                if arguments.iter().any(|existing| existing.name == argument.name) {
                    return Err(SchemaError::DuplicateArgumentName {
                        argument: argument.name,
                    });
                }

                arguments.push(argument);
            }

            let previous = parameters.insert(
                name,
                Parameter {
                    ty: parameter.ty.clone(),
                    annotations: parameter.annotations.clone(),
                    is_context,
                },
            );

            if previous.is_some() {
                return Err(SchemaError::DuplicateArgumentName {
                    argument: name.to_string(),
                });
            }
        }

        let resolver = if is_abstract {
            None
        } else {
            let binding = ExecutionBinding::new(
                function.name.clone(),
                target,
                function.handle.clone(),
                parameters,
                collaborators.hooks.execution_predicate(),
            );
            Some(collaborators.hooks.did_create_execution_binding(function, binding)?)
        };

        let effective_type = self.resolve_effective_type(&function.return_type)?;
        let ty = collaborators
            .type_resolver
            .resolve(&effective_type, TypePosition::Output)?;

        let field = FieldNode {
            name: function.name.clone(),
            description,
            deprecation,
            arguments,
            ty,
            directives,
            resolver,
            extensions: Default::default(),
        };

        let field = collaborators.hooks.on_rewire_field(&effective_type, field)?;
        self.state.register_directives(pending_directives);

        Ok(field)
    }

    fn resolve_effective_type(&self, return_type: &TypeDescriptor) -> Result<TypeDescriptor, SchemaError> {
        let hooks = &self.collaborators.hooks;
        let mut effective_type = hooks.will_resolve_effective_type(return_type)?;

        if self.config.effective_type_resolution == EffectiveTypeResolution::SinglePass {
            return Ok(effective_type);
        }

        for _ in 1..self.config.max_effective_type_depth {
            let next = hooks.will_resolve_effective_type(&effective_type)?;

            if next == effective_type {
                return Ok(effective_type);
            }

            effective_type = next;
        }

        tracing::warn!(
            return_type = %return_type,
            effective_type = %effective_type,
            max_depth = self.config.max_effective_type_depth,
            "Effective type resolution did not settle, using the last resolved type"
        );

        Ok(effective_type)
    }
}
