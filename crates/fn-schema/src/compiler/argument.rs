use crate::{ArgumentNode, Collaborators, Directive, GenerationState, IntrospectedParameter, SchemaError, TypePosition};

/// Compiles function parameters into field arguments.
pub struct ArgumentCompiler<'a> {
    collaborators: &'a Collaborators,
    state: &'a GenerationState,
}

impl<'a> ArgumentCompiler<'a> {
    pub fn new(collaborators: &'a Collaborators, state: &'a GenerationState) -> Self {
        ArgumentCompiler { collaborators, state }
    }

    /// The authorization check always runs first: a rejected parameter never reaches the type
    /// resolver. Directives are registered only if the argument compiles.
    pub fn compile_argument(&self, parameter: &IntrospectedParameter) -> Result<ArgumentNode, SchemaError> {
        let mut directives = Vec::new();
        let argument = self.build_argument(parameter, &mut directives)?;
        self.state.register_directives(directives);

        Ok(argument)
    }

    /// Compiles an argument without touching the generation state. The directives to register
    /// are appended to `directives`.
    #[tracing::instrument(name = "compile_argument", skip_all, fields(position = parameter.position))]
    pub(super) fn build_argument(
        &self,
        parameter: &IntrospectedParameter,
        directives: &mut Vec<Directive>,
    ) -> Result<ArgumentNode, SchemaError> {
        self.collaborators.authorization.check_authorized(parameter)?;

        let name = parameter.usable_name().ok_or_else(|| SchemaError::MissingArgumentName {
            position: parameter.position,
            ty: parameter.ty.to_string(),
        })?;

        let metadata = &self.collaborators.metadata;
        let description = metadata
            .parameter_description(parameter)
            .or_else(|| metadata.type_description(&parameter.ty));

        let ty = self
            .collaborators
            .type_resolver
            .resolve(&parameter.ty, TypePosition::Input)?;

        let mut argument = ArgumentNode::new(name, ty);
        argument.description = description;

        for directive in self.collaborators.directives.parameter_directives(parameter)? {
            directives.push(directive.clone());
            argument.directives.push(directive);
        }

        self.collaborators.hooks.on_rewire_argument(&parameter.ty, argument)
    }
}
