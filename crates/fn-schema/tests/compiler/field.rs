use std::sync::Arc;

use graphql_fn_schema::{
    Annotation, Collaborators, ConstValue, Directive, EffectiveTypeResolution, FieldCompiler,
    GenerationState, GeneratorConfig, IntrospectedParameter, SchemaError, TypeDescriptor, UnwrapWrapperTypes,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{add, compile, function};

#[test]
fn add_two_integers() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let field = compile(&collaborators, &state, &add()).unwrap();

    insta::assert_snapshot!(field, @"add(a: Int!, b: Int!): Int!");
    assert!(!field.deprecation.is_deprecated());
    assert!(field.resolver.is_some());
    assert!(field.directives.is_empty());
    assert_eq!(
        field.arguments.iter().map(|argument| argument.name.as_str()).collect::<Vec<_>>(),
        ["a", "b"]
    );
    assert!(state.is_empty());
}

#[test]
fn context_parameter_is_not_an_argument() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let current_user = function("currentUser", TypeDescriptor::object("User"))
        .with_parameter(IntrospectedParameter::named("ctx", TypeDescriptor::context("RequestContext")));

    let field = compile(&collaborators, &state, &current_user).unwrap();

    insta::assert_snapshot!(field, @"currentUser: User!");
    assert!(field.arguments.is_empty());
}

#[test]
fn context_parameter_between_arguments_keeps_their_order() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let posts = function("posts", TypeDescriptor::list(TypeDescriptor::object("Post")))
        .with_parameter(IntrospectedParameter::named("first", TypeDescriptor::scalar("i32")))
        .with_parameter(
            IntrospectedParameter::named("session", TypeDescriptor::object("Session")).with_annotation(Annotation::Context),
        )
        .with_parameter(IntrospectedParameter::named("after", TypeDescriptor::scalar("String").nullable()));

    let field = compile(&collaborators, &state, &posts).unwrap();

    insta::assert_snapshot!(field, @"posts(first: Int!, after: String): [Post!]!");
}

#[test]
fn deprecation_reason_is_kept_verbatim() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let legacy = function("legacyOp", TypeDescriptor::scalar("bool")).with_annotation(Annotation::Deprecated {
        reason: "use newOp instead".into(),
    });

    let field = compile(&collaborators, &state, &legacy).unwrap();

    assert!(field.deprecation.is_deprecated());
    assert_eq!(field.deprecation.reason(), Some("use newOp instead"));
    insta::assert_snapshot!(field, @r###"legacyOp: Boolean! @deprecated(reason: "use newOp instead")"###);
}

#[test]
fn description_comes_from_the_function() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let described = add().with_annotation(Annotation::Description("Adds two numbers".into()));
    let field = compile(&collaborators, &state, &described).unwrap();
    assert_eq!(field.description.as_deref(), Some("Adds two numbers"));

    let field = compile(&collaborators, &state, &add()).unwrap();
    assert_eq!(field.description, None);
}

#[test]
fn directives_are_attached_and_collected() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let cost = Directive::new("cost").with_argument("weight", 3i64);
    let tag = Directive::new("tag").with_argument("name", ConstValue::String("public".into()));
    let sensitive = Directive::new("sensitive");

    let login = function("login", TypeDescriptor::scalar("String"))
        .with_annotation(Annotation::Directive(cost.clone()))
        .with_annotation(Annotation::Directive(tag.clone()))
        .with_parameter(
            IntrospectedParameter::named("password", TypeDescriptor::scalar("String"))
                .with_annotation(Annotation::Directive(sensitive.clone())),
        );

    let field = compile(&collaborators, &state, &login).unwrap();

    insta::assert_snapshot!(field, @r###"login(password: String! @sensitive): String! @cost(weight: 3) @tag(name: "public")"###);
    assert_eq!(state.directives(), vec![cost, tag, sensitive]);
}

#[test]
fn directives_of_context_parameters_are_not_collected() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let whoami = function("whoami", TypeDescriptor::scalar("ID")).with_parameter(
        IntrospectedParameter::named("ctx", TypeDescriptor::context("RequestContext"))
            .with_annotation(Annotation::Directive(Directive::new("internal"))),
    );

    compile(&collaborators, &state, &whoami).unwrap();

    assert!(state.is_empty());
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
#[case::blank(Some("   "))]
fn unnamed_parameter_fails(#[case] name: Option<&str>) {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let broken = function("broken", TypeDescriptor::scalar("i32"))
        .with_parameter(IntrospectedParameter::named("a", TypeDescriptor::scalar("i32")))
        .with_parameter(IntrospectedParameter::new(
            name.map(str::to_string),
            TypeDescriptor::scalar("String"),
        ));

    let error = compile(&collaborators, &state, &broken).unwrap_err();

    assert!(matches!(error, SchemaError::MissingArgumentName { position: 1, .. }));
    assert_eq!(
        error.to_string(),
        "Could not get the name of the argument at position 1 with type 'String'"
    );
}

#[test]
fn unnamed_context_parameter_fails() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let broken = function("broken", TypeDescriptor::scalar("i32"))
        .with_parameter(IntrospectedParameter::new(None, TypeDescriptor::context("RequestContext")));

    let error = compile(&collaborators, &state, &broken).unwrap_err();

    assert!(matches!(error, SchemaError::MissingArgumentName { position: 0, .. }));
}

#[rstest]
#[case::missing_name(IntrospectedParameter::new(None, TypeDescriptor::scalar("i32")))]
#[case::unauthorized(IntrospectedParameter::named("node", TypeDescriptor::interface("Node")))]
#[case::unmapped_scalar(IntrospectedParameter::named("big", TypeDescriptor::scalar("i128")))]
fn failed_compilation_registers_no_directives(#[case] parameter: IntrospectedParameter) {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let broken = function("broken", TypeDescriptor::scalar("i32"))
        .with_annotation(Annotation::Directive(Directive::new("cost").with_argument("weight", 2i64)))
        .with_parameter(
            IntrospectedParameter::named("first", TypeDescriptor::scalar("i32"))
                .with_annotation(Annotation::Directive(Directive::new("sensitive"))),
        )
        .with_parameter(parameter);

    compile(&collaborators, &state, &broken).unwrap_err();

    assert!(state.is_empty());
}

#[test]
fn failed_field_rewire_registers_no_directives() {
    use graphql_fn_schema::{FieldNode, SchemaGeneratorHooks};

    struct Reject;

    impl SchemaGeneratorHooks for Reject {
        fn on_rewire_field(&self, _: &TypeDescriptor, field: FieldNode) -> Result<FieldNode, SchemaError> {
            Err(SchemaError::DuplicateField {
                type_name: "Query".into(),
                field: field.name,
            })
        }
    }

    let collaborators = Collaborators::default().with_hooks(Reject);
    let state = GenerationState::new();

    let login = function("login", TypeDescriptor::scalar("String"))
        .with_annotation(Annotation::Directive(Directive::new("audited")))
        .with_parameter(
            IntrospectedParameter::named("password", TypeDescriptor::scalar("String"))
                .with_annotation(Annotation::Directive(Directive::new("sensitive"))),
        );

    compile(&collaborators, &state, &login).unwrap_err();

    assert!(state.is_empty());
}

#[test]
fn duplicate_parameter_names_fail() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let twice = function("twice", TypeDescriptor::scalar("i32"))
        .with_parameter(IntrospectedParameter::named("a", TypeDescriptor::scalar("i32")))
        .with_parameter(IntrospectedParameter::named("a", TypeDescriptor::scalar("i32")));

    let error = compile(&collaborators, &state, &twice).unwrap_err();

    assert_eq!(error.to_string(), "Argument 'a' is declared more than once");
}

#[test]
fn unauthorized_parameter_fails_the_field() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let search = function("search", TypeDescriptor::scalar("i32"))
        .with_parameter(IntrospectedParameter::named("node", TypeDescriptor::interface("Node")));

    let error = compile(&collaborators, &state, &search).unwrap_err();

    assert!(matches!(error, SchemaError::UnauthorizedInterface { .. }));
}

#[test]
fn abstract_fields_have_no_resolver() {
    let config = GeneratorConfig::default();
    let collaborators = Collaborators::default();
    let state = GenerationState::new();
    let compiler = FieldCompiler::new(&config, &collaborators, &state);

    let target: graphql_fn_schema::Target = Arc::new(());
    let field = compiler.compile_field(&add(), Some(target), true).unwrap();

    assert!(field.resolver.is_none());
    assert!(field.is_abstract());
    insta::assert_snapshot!(field, @"add(a: Int!, b: Int!): Int!");
}

#[test]
fn compiling_twice_is_idempotent() {
    let collaborators = Collaborators::default();
    let state = GenerationState::new();

    let search = add()
        .with_annotation(Annotation::Directive(Directive::new("cost").with_argument("weight", 1i64)))
        .with_annotation(Annotation::Description("Adds".into()));

    let first = compile(&collaborators, &state, &search).unwrap();
    let second = compile(&collaborators, &state, &search).unwrap();

    assert_eq!(first, second);
    assert_eq!(state.directives(), first.directives);
}

#[test]
fn nested_wrappers_need_fixed_point_resolution() {
    let collaborators = Collaborators::default().with_hooks(UnwrapWrapperTypes);
    let state = GenerationState::new();
    let fetch = function(
        "fetch",
        TypeDescriptor::wrapper(
            "Future",
            TypeDescriptor::wrapper("Box", TypeDescriptor::object("User").nullable()),
        ),
    );

    let single_pass = GeneratorConfig::default();
    let error = FieldCompiler::new(&single_pass, &collaborators, &state)
        .compile_field(&fetch, None, false)
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Type 'Box<Option<User>>' cannot be used as an output: wrapper types must be resolved to the type of the value they produce"
    );

    let fixed_point = GeneratorConfig {
        effective_type_resolution: EffectiveTypeResolution::FixedPoint,
        ..Default::default()
    };
    let field = FieldCompiler::new(&fixed_point, &collaborators, &state)
        .compile_field(&fetch, None, false)
        .unwrap();
    insta::assert_snapshot!(field, @"fetch: User");
}

#[test]
fn fixed_point_resolution_is_bounded() {
    use graphql_fn_schema::SchemaGeneratorHooks;

    // Grows the type on every call and never settles.
    struct Grow;

    impl SchemaGeneratorHooks for Grow {
        fn will_resolve_effective_type(&self, return_type: &TypeDescriptor) -> Result<TypeDescriptor, SchemaError> {
            Ok(TypeDescriptor::list(return_type.clone()))
        }
    }

    let collaborators = Collaborators::default().with_hooks(Grow);
    let state = GenerationState::new();
    let config = GeneratorConfig {
        effective_type_resolution: EffectiveTypeResolution::FixedPoint,
        max_effective_type_depth: 3,
        ..Default::default()
    };

    let field = FieldCompiler::new(&config, &collaborators, &state)
        .compile_field(&function("grow", TypeDescriptor::scalar("i32")), None, false)
        .unwrap();

    insta::assert_snapshot!(field, @"grow: [[[Int!]!]!]!");
}
