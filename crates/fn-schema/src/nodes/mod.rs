mod argument;
mod deprecation;
mod directive;
mod field;
mod object;
mod ty;

use std::fmt;

pub use argument::ArgumentNode;
pub use deprecation::Deprecation;
pub use directive::{ConstValue, Directive};
pub use field::FieldNode;
pub use object::ObjectNode;
pub use ty::{ListWrapping, TypeReference, Wrapping};

/// Free-form metadata rewire hooks may attach to a node.
pub type Extensions = indexmap::IndexMap<String, serde_json::Value>;

pub(crate) fn display_string_literal(value: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("\"")?;

    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => fmt::Write::write_char(f, c)?,
        }
    }

    f.write_str("\"")
}

pub(crate) fn display_directives(directives: &[Directive], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for directive in directives {
        write!(f, " {directive}")?;
    }

    Ok(())
}
