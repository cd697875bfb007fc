use std::fmt;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Default, serde::Serialize)]
pub enum Deprecation {
    #[default]
    NoDeprecated,
    Deprecated {
        reason: Option<String>,
    },
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::NoDeprecated => None,
            Deprecation::Deprecated { reason } => reason.as_deref(),
        }
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deprecation::NoDeprecated => Ok(()),
            Deprecation::Deprecated { reason: None } => f.write_str("@deprecated"),
            Deprecation::Deprecated { reason: Some(reason) } => {
                f.write_str("@deprecated(reason: ")?;
                super::display_string_literal(reason, f)?;
                f.write_str(")")
            }
        }
    }
}
