use std::fmt;

use super::FieldNode;

/// A root operation type assembled from compiled fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ObjectNode {
    pub name: String,
    pub fields: Vec<FieldNode>,
}

impl ObjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectNode {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldNode> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "type {} {{", self.name)?;

        for field in &self.fields {
            if let Some(description) = &field.description {
                f.write_str("  ")?;
                super::display_string_literal(description, f)?;
                f.write_str("\n")?;
            }

            writeln!(f, "  {field}")?;
        }

        f.write_str("}")
    }
}
