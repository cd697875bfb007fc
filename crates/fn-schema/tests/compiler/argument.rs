use graphql_fn_schema::{
    Annotation, ArgumentCompiler, Collaborators, Directive, GenerationState, IntrospectedParameter, SchemaError,
    TypeDescriptor,
};
use rstest::rstest;

use crate::{compile, function, CountingTypeResolver};

#[rstest]
#[case::interface(TypeDescriptor::interface("Node"))]
#[case::union(TypeDescriptor::union("SearchResult"))]
#[case::list_of_interfaces(TypeDescriptor::list(TypeDescriptor::interface("Node")))]
fn unauthorized_parameters_never_reach_the_type_resolver(#[case] ty: TypeDescriptor) {
    let resolver = CountingTypeResolver::default();
    let collaborators = Collaborators::default().with_type_resolver(resolver.clone());
    let state = GenerationState::new();

    let parameter = IntrospectedParameter::named("node", ty)
        .with_annotation(Annotation::Directive(Directive::new("tracked")));

    let error = ArgumentCompiler::new(&collaborators, &state)
        .compile_argument(&parameter)
        .unwrap_err();

    assert!(matches!(error, SchemaError::UnauthorizedInterface { ref argument, .. } if argument == "node"));
    assert_eq!(resolver.calls(), 0);
    assert!(state.is_empty());
}

#[test]
fn unauthorized_argument_aborts_before_the_return_type_is_resolved() {
    let resolver = CountingTypeResolver::default();
    let collaborators = Collaborators::default().with_type_resolver(resolver.clone());
    let state = GenerationState::new();

    let lookup = function("lookup", TypeDescriptor::object("User"))
        .with_parameter(IntrospectedParameter::named("id", TypeDescriptor::scalar("ID")))
        .with_parameter(IntrospectedParameter::named("node", TypeDescriptor::interface("Node")));

    let error = compile(&collaborators, &state, &lookup).unwrap_err();

    assert!(matches!(error, SchemaError::UnauthorizedInterface { .. }));
    // Only the `id` argument was resolved.
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn arguments_resolve_in_input_position() {
    let resolver = CountingTypeResolver::default();
    let collaborators = Collaborators::default().with_type_resolver(resolver.clone());
    let state = GenerationState::new();

    let parameter = IntrospectedParameter::named("filter", TypeDescriptor::list(TypeDescriptor::object("Filter")));
    let argument = ArgumentCompiler::new(&collaborators, &state)
        .compile_argument(&parameter)
        .unwrap();

    insta::assert_snapshot!(argument, @"filter: [FilterInput!]!");
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn custom_authorization_check() {
    use graphql_fn_schema::AuthorizationCheck;

    struct NoPasswords;

    impl AuthorizationCheck for NoPasswords {
        fn check_authorized(&self, parameter: &IntrospectedParameter) -> Result<(), SchemaError> {
            match parameter.usable_name() {
                Some("password") => Err(SchemaError::UnauthorizedInterface {
                    argument: "password".into(),
                    ty: parameter.ty.to_string(),
                }),
                _ => Ok(()),
            }
        }
    }

    let collaborators = Collaborators::default().with_authorization(NoPasswords);
    let state = GenerationState::new();
    let compiler = ArgumentCompiler::new(&collaborators, &state);

    let node = IntrospectedParameter::named("node", TypeDescriptor::interface("Node"));
    let password = IntrospectedParameter::named("password", TypeDescriptor::scalar("String"));

    // The default check is replaced, so the interface reaches the resolver and fails there.
    let error = compiler.compile_argument(&node).unwrap_err();
    assert!(matches!(error, SchemaError::InvalidInputType { .. }));

    let error = compiler.compile_argument(&password).unwrap_err();
    assert!(matches!(error, SchemaError::UnauthorizedInterface { .. }));
}
