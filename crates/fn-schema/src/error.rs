#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    #[error("Could not get the name of the argument at position {position} with type '{ty}'")]
    MissingArgumentName { position: usize, ty: String },
    #[error("Argument '{argument}' has the abstract type '{ty}', which cannot be used as an input")]
    UnauthorizedInterface { argument: String, ty: String },
    #[error("Argument '{argument}' is declared more than once")]
    DuplicateArgumentName { argument: String },
    #[error("The argument at position {position} was given an empty name")]
    EmptyArgumentName { position: usize },
    #[error("Type '{ty}' cannot be used as an input: {reason}")]
    InvalidInputType { ty: String, reason: String },
    #[error("Type '{ty}' cannot be used as an output: {reason}")]
    InvalidOutputType { ty: String, reason: String },
    #[error("Field '{field}' is defined more than once on type '{type_name}'")]
    DuplicateField { type_name: String, field: String },
    #[error(transparent)]
    Collaborator(Box<dyn std::error::Error + Send + Sync>),
}

impl SchemaError {
    pub fn collaborator(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SchemaError::Collaborator(error.into())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("No request context is available for the context parameter '{parameter}'")]
    MissingContext { parameter: String },
    #[error("{0}")]
    Native(String),
}
