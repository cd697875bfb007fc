use std::{collections::HashSet, fmt};

use config::GeneratorConfig;

use crate::{Collaborators, Directive, FieldCompiler, GenerationState, IntrospectedFunction, ObjectNode, SchemaError, Target};

/// A service contributing fields to a root operation type: its functions and the receiver they
/// are called on.
#[derive(Clone, Default)]
pub struct TopLevelObject {
    pub target: Option<Target>,
    pub functions: Vec<IntrospectedFunction>,
}

impl TopLevelObject {
    pub fn new(target: Target) -> Self {
        TopLevelObject {
            target: Some(target),
            functions: Vec::new(),
        }
    }

    /// Functions without a receiver.
    pub fn free_functions(functions: impl IntoIterator<Item = IntrospectedFunction>) -> Self {
        TopLevelObject {
            target: None,
            functions: functions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_function(mut self, function: IntrospectedFunction) -> Self {
        self.functions.push(function);
        self
    }
}

impl fmt::Debug for TopLevelObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopLevelObject")
            .field("has_target", &self.target.is_some())
            .field("functions", &self.functions)
            .finish()
    }
}

/// Result of a schema build.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GeneratedSchema {
    pub query: ObjectNode,
    pub mutation: Option<ObjectNode>,
    /// Every directive used by the schema, in first-seen order.
    pub directives: Vec<Directive>,
}

impl fmt::Display for GeneratedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)?;

        if let Some(mutation) = &self.mutation {
            f.write_str("\n\n")?;
            fmt::Display::fmt(mutation, f)?;
        }

        Ok(())
    }
}

pub struct SchemaGenerator {
    config: GeneratorConfig,
    collaborators: Collaborators,
}

impl SchemaGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let collaborators = Collaborators::new(&config);
        SchemaGenerator { config, collaborators }
    }

    /// Uses custom collaborators. The type resolver inside `collaborators` carries its own
    /// scalar table and input suffix, while `config` only drives the root type names and the
    /// effective type resolution. Build the bundle with [`Collaborators::new`] from the same
    /// config to keep both in agreement.
    pub fn with_collaborators(config: GeneratorConfig, collaborators: Collaborators) -> Self {
        SchemaGenerator { config, collaborators }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Builds the root operation types. The mutation type is only present if at least one
    /// mutation object is given.
    #[tracing::instrument(skip_all, fields(queries = queries.len(), mutations = mutations.len()))]
    pub fn generate(
        &self,
        queries: &[TopLevelObject],
        mutations: &[TopLevelObject],
    ) -> Result<GeneratedSchema, SchemaError> {
        let state = GenerationState::new();

        let query = self.generate_root(&self.config.query_type_name, queries, &state)?;

        let mutation = if mutations.is_empty() {
            None
        } else {
            Some(self.generate_root(&self.config.mutation_type_name, mutations, &state)?)
        };

        let directives = state.into_directives();
        tracing::debug!(directives = directives.len(), "Schema generated");

        Ok(GeneratedSchema {
            query,
            mutation,
            directives,
        })
    }

    fn generate_root(
        &self,
        type_name: &str,
        objects: &[TopLevelObject],
        state: &GenerationState,
    ) -> Result<ObjectNode, SchemaError> {
        let compiler = FieldCompiler::new(&self.config, &self.collaborators, state);
        let mut object = ObjectNode::new(type_name);
        let mut seen = HashSet::new();

        for top_level in objects {
            for function in &top_level.functions {
                if function.is_ignored() {
                    tracing::debug!(function = %function.name, "Skipping ignored function");
                    continue;
                }

                let field = compiler.compile_field(function, top_level.target.clone(), false)?;

                if !seen.insert(field.name.clone()) {
                    return Err(SchemaError::DuplicateField {
                        type_name: type_name.to_string(),
                        field: field.name,
                    });
                }

                object.fields.push(field);
            }
        }

        Ok(object)
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
