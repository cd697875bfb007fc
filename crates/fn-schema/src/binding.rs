//! What a compiled field needs at request time to call back into native code.

use std::{any::Any, fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{Annotation, FetchError, TypeDescriptor};

/// The receiver a method is called on.
pub type Target = Arc<dyn Any + Send + Sync>;

/// Request scoped context injected into context parameters.
pub type RequestContext = Arc<dyn Any + Send + Sync>;

/// A native callable, invoked with its arguments in declaration order.
pub trait NativeFunction: Send + Sync {
    fn call(&self, target: Option<&Target>, arguments: Vec<ArgumentValue>) -> Result<serde_json::Value, FetchError>;
}

impl<F> NativeFunction for F
where
    F: Fn(Option<&Target>, Vec<ArgumentValue>) -> Result<serde_json::Value, FetchError> + Send + Sync,
{
    fn call(&self, target: Option<&Target>, arguments: Vec<ArgumentValue>) -> Result<serde_json::Value, FetchError> {
        self(target, arguments)
    }
}

/// Wraps a closure into a function handle.
pub fn native_fn<F>(function: F) -> Arc<dyn NativeFunction>
where
    F: Fn(Option<&Target>, Vec<ArgumentValue>) -> Result<serde_json::Value, FetchError> + Send + Sync + 'static,
{
    Arc::new(function)
}

#[derive(Clone)]
pub enum ArgumentValue {
    Value(serde_json::Value),
    Context(RequestContext),
    /// The request did not provide this argument.
    Absent,
}

impl ArgumentValue {
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            ArgumentValue::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn downcast_context<T: Any + Send + Sync>(&self) -> Option<&T> {
        match self {
            ArgumentValue::Context(context) => context.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            ArgumentValue::Context(_) => f.write_str("Context(..)"),
            ArgumentValue::Absent => f.write_str("Absent"),
        }
    }
}

/// Native type and annotations of one bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: TypeDescriptor,
    pub annotations: Vec<Annotation>,
    pub is_context: bool,
}

/// Parameters of a function by name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBinding {
    parameters: IndexMap<String, Parameter>,
}

impl ParameterBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous parameter bound under this name, if any.
    pub fn insert(&mut self, name: impl Into<String>, parameter: Parameter) -> Option<Parameter> {
        self.parameters.insert(name.into(), parameter)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> + '_ {
        self.parameters.iter().map(|(name, parameter)| (name.as_str(), parameter))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Raw arguments and context of the request resolving a field.
#[derive(Clone, Default)]
pub struct FetchEnvironment {
    pub arguments: IndexMap<String, serde_json::Value>,
    pub context: Option<RequestContext>,
}

impl FetchEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_context(self, context: RequestContext) -> Self {
        FetchEnvironment {
            context: Some(context),
            ..self
        }
    }
}

/// Produces the value of a field for a request.
pub trait FieldResolver: Send + Sync {
    fn resolve(&self, environment: &FetchEnvironment) -> Result<serde_json::Value, FetchError>;
}

/// Decides at request time whether a field is resolved or short-circuits to null.
pub trait ExecutionPredicate: Send + Sync {
    fn should_execute(&self, environment: &FetchEnvironment, parameters: &ParameterBinding) -> bool;
}

pub struct AlwaysExecute;

impl ExecutionPredicate for AlwaysExecute {
    fn should_execute(&self, _: &FetchEnvironment, _: &ParameterBinding) -> bool {
        true
    }
}

/// Links a compiled field to the native function, and its receiver, producing its value.
#[derive(Clone)]
pub struct ExecutionBinding {
    field_name: String,
    target: Option<Target>,
    function: Arc<dyn NativeFunction>,
    parameters: ParameterBinding,
    predicate: Arc<dyn ExecutionPredicate>,
}

impl ExecutionBinding {
    pub fn new(
        field_name: impl Into<String>,
        target: Option<Target>,
        function: Arc<dyn NativeFunction>,
        parameters: ParameterBinding,
        predicate: Arc<dyn ExecutionPredicate>,
    ) -> Self {
        ExecutionBinding {
            field_name: field_name.into(),
            target,
            function,
            parameters,
            predicate,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// None for free functions.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn arguments(&self, environment: &FetchEnvironment) -> Result<Vec<ArgumentValue>, FetchError> {
        self.parameters
            .iter()
            .map(|(name, parameter)| {
                if parameter.is_context {
                    return environment
                        .context
                        .clone()
                        .map(ArgumentValue::Context)
                        .ok_or_else(|| FetchError::MissingContext {
                            parameter: name.to_string(),
                        });
                }

                Ok(environment
                    .arguments
                    .get(name)
                    .cloned()
                    .map(ArgumentValue::Value)
                    .unwrap_or(ArgumentValue::Absent))
            })
            .collect()
    }
}

impl FieldResolver for ExecutionBinding {
    fn resolve(&self, environment: &FetchEnvironment) -> Result<serde_json::Value, FetchError> {
        if !self.predicate.should_execute(environment, &self.parameters) {
            tracing::debug!(field = %self.field_name, "Execution predicate rejected the field, resolving to null");
            return Ok(serde_json::Value::Null);
        }

        let arguments = self.arguments(environment)?;
        self.function.call(self.target.as_ref(), arguments)
    }
}

impl fmt::Debug for ExecutionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionBinding")
            .field("field_name", &self.field_name)
            .field("has_target", &self.target.is_some())
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
