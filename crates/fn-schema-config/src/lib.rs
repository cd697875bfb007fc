mod effective_type_resolution;

use std::collections::BTreeMap;

pub use effective_type_resolution::EffectiveTypeResolution;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid generator configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings of a single schema build.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the root query type.
    pub query_type_name: String,
    /// Name of the root mutation type.
    pub mutation_type_name: String,
    /// How the effective return type hook is applied to a function's return type.
    pub effective_type_resolution: EffectiveTypeResolution,
    /// Upper bound of hook applications when resolving to a fixed point.
    /// 8 by default.
    pub max_effective_type_depth: usize,
    /// Suffix appended to object type names used in argument position.
    pub input_type_suffix: String,
    /// Native type name to GraphQL scalar name, on top of the built-in table.
    pub scalars: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            query_type_name: "Query".to_string(),
            mutation_type_name: "Mutation".to_string(),
            effective_type_resolution: EffectiveTypeResolution::SinglePass,
            max_effective_type_depth: 8,
            input_type_suffix: "Input".to_string(),
            scalars: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// The GraphQL scalar a native type maps to, if any.
    pub fn scalar_for(&self, native_name: &str) -> Option<&str> {
        if let Some(name) = self.scalars.get(native_name) {
            return Some(name.as_str());
        }

        let name = match native_name {
            "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => "Int",
            "f32" | "f64" => "Float",
            "String" | "str" | "char" => "String",
            "bool" => "Boolean",
            "ID" => "ID",
            _ => return None,
        };

        Some(name)
    }
}
