use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexSet;

use crate::Directive;

/// Directives seen while building one schema, in first-seen order.
///
/// Compilers only ever append to it, so it can be shared by reference between
/// threads compiling different functions of the same build.
#[derive(Debug, Default)]
pub struct GenerationState {
    directives: Mutex<IndexSet<Directive>>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if an equal directive was already registered.
    pub fn register_directive(&self, directive: Directive) -> bool {
        self.lock().insert(directive)
    }

    /// Registers the directives of a node once it has compiled successfully.
    pub fn register_directives(&self, directives: impl IntoIterator<Item = Directive>) {
        let mut registered = self.lock();

        for directive in directives {
            let name = directive.name.clone();
            if registered.insert(directive) {
                tracing::trace!(directive = %name, "Registered a new directive");
            }
        }
    }

    /// Set union with the directives collected by another build.
    pub fn merge(&self, other: GenerationState) {
        let directives = other.into_directives();
        self.lock().extend(directives);
    }

    pub fn contains(&self, directive: &Directive) -> bool {
        self.lock().contains(directive)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A copy of the directives registered so far.
    pub fn directives(&self) -> Vec<Directive> {
        self.lock().iter().cloned().collect()
    }

    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .collect()
    }

    // Registration cannot leave the set half-updated, a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, IndexSet<Directive>> {
        self.directives.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
