use std::fmt;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum ListWrapping {
    NullableList,
    RequiredList,
}

/// List and non-null wrappers around a named type, innermost first.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default, serde::Serialize)]
pub struct Wrapping {
    inner_is_required: bool,
    list_wrappings: Vec<ListWrapping>,
}

impl Wrapping {
    pub fn required() -> Self {
        Wrapping {
            inner_is_required: true,
            list_wrappings: Vec::new(),
        }
    }

    pub fn nullable() -> Self {
        Wrapping::default()
    }

    #[must_use]
    pub fn list(mut self) -> Self {
        self.list_wrappings.push(ListWrapping::NullableList);
        self
    }

    #[must_use]
    pub fn list_non_null(mut self) -> Self {
        self.list_wrappings.push(ListWrapping::RequiredList);
        self
    }

    pub fn inner_is_required(&self) -> bool {
        self.inner_is_required
    }

    /// Whether the outermost wrapper is non-null.
    pub fn is_required(&self) -> bool {
        match self.list_wrappings.last() {
            Some(wrapping) => *wrapping == ListWrapping::RequiredList,
            None => self.inner_is_required,
        }
    }

    pub fn is_list(&self) -> bool {
        !self.list_wrappings.is_empty()
    }

    pub fn list_wrappings(&self) -> &[ListWrapping] {
        &self.list_wrappings
    }
}

/// A named schema type with its wrappers.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize)]
pub struct TypeReference {
    pub name: String,
    pub wrapping: Wrapping,
}

impl TypeReference {
    pub fn new(name: impl Into<String>, wrapping: Wrapping) -> Self {
        TypeReference {
            name: name.into(),
            wrapping,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Wrapping::nullable())
    }

    pub fn non_null(name: impl Into<String>) -> Self {
        Self::new(name, Wrapping::required())
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in &self.wrapping.list_wrappings {
            f.write_str("[")?;
        }

        f.write_str(&self.name)?;

        if self.wrapping.inner_is_required {
            f.write_str("!")?;
        }

        for wrapping in &self.wrapping.list_wrappings {
            f.write_str("]")?;
            if *wrapping == ListWrapping::RequiredList {
                f.write_str("!")?;
            }
        }

        Ok(())
    }
}
