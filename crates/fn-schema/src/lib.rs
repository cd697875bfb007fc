//! Turns introspected service functions into GraphQL field definitions.
//!
//! An introspection adapter describes each callable as an [`IntrospectedFunction`]. The
//! [`FieldCompiler`] compiles it into a [`FieldNode`] with its arguments, description,
//! deprecation, directives and an execution binding, while the [`SchemaGenerator`] runs a
//! complete build over the root operation types.

mod binding;
mod collaborators;
mod compiler;
mod error;
mod generator;
mod hooks;
mod introspection;
mod nodes;
mod state;

pub use binding::*;
pub use collaborators::*;
pub use compiler::{ArgumentCompiler, FieldCompiler};
pub use config::{EffectiveTypeResolution, GeneratorConfig};
pub use error::*;
pub use generator::*;
pub use hooks::*;
pub use introspection::*;
pub use nodes::*;
pub use state::GenerationState;

#[cfg(test)]
#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("graphql_fn_schema=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .with_test_writer()
        .init();
}
