//! Tracked global-variable declarations.

use glint_analysis_common::{DeclId, VariableDecl};
use std::collections::{HashMap, HashSet};

/// The universe of global variables under analysis, each carrying the
/// identities of the functions observed referencing it.
pub(crate) struct GlobalRegistry {
    globals: HashMap<DeclId, TrackedGlobal>,
}

/// One tracked global and its referencing-function set.
pub(crate) struct TrackedGlobal {
    pub decl: VariableDecl,
    pub referenced_by: HashSet<DeclId>,
}

impl GlobalRegistry {
    pub fn new() -> Self {
        Self {
            globals: HashMap::new(),
        }
    }

    /// Track a declaration if it has static storage and does not sit in a
    /// header-like file. Re-tracking a known identity is a no-op that keeps
    /// any references already accumulated.
    pub fn track(&mut self, decl: &VariableDecl) -> bool {
        if decl.in_header || !decl.storage.is_static() {
            return false;
        }
        self.globals
            .entry(decl.id.clone())
            .or_insert_with(|| TrackedGlobal {
                decl: decl.clone(),
                referenced_by: HashSet::new(),
            });
        true
    }

    pub fn is_tracked(&self, id: &DeclId) -> bool {
        self.globals.contains_key(id)
    }

    /// Record that `function` references `variable`. Set semantics: many
    /// references from one function still count as one referencing function.
    pub fn add_reference(&mut self, variable: &DeclId, function: &DeclId) {
        if let Some(global) = self.globals.get_mut(variable) {
            global.referenced_by.insert(function.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedGlobal> {
        self.globals.values()
    }

    pub fn len(&self) -> usize {
        self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_analysis_common::{Location, StorageDuration};
    use std::path::{Path, PathBuf};

    fn variable(name: &str, line: u32, storage: StorageDuration) -> VariableDecl {
        VariableDecl {
            id: DeclId::new(Path::new("unit.c"), line, name),
            name: name.to_string(),
            location: Location {
                file: PathBuf::from("unit.c"),
                line,
                column: 0,
            },
            storage,
            in_header: false,
        }
    }

    #[test]
    fn tracks_static_storage_only() {
        let mut registry = GlobalRegistry::new();
        assert!(registry.track(&variable("counter", 1, StorageDuration::Static)));
        assert!(!registry.track(&variable("local", 4, StorageDuration::Automatic)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn header_declarations_are_rejected() {
        let mut registry = GlobalRegistry::new();
        let mut decl = variable("flag", 2, StorageDuration::Static);
        decl.in_header = true;
        assert!(!registry.track(&decl));
        assert!(registry.is_empty());
    }

    #[test]
    fn retracking_keeps_accumulated_references() {
        let mut registry = GlobalRegistry::new();
        let decl = variable("counter", 1, StorageDuration::Static);
        registry.track(&decl);

        let function = DeclId::from_raw("unit.c::3:increment");
        registry.add_reference(&decl.id, &function);
        registry.track(&decl);

        let tracked = registry.iter().next().unwrap();
        assert_eq!(tracked.referenced_by.len(), 1);
    }

    #[test]
    fn references_to_untracked_ids_are_ignored() {
        let mut registry = GlobalRegistry::new();
        registry.add_reference(
            &DeclId::from_raw("unit.c::1:ghost"),
            &DeclId::from_raw("unit.c::3:increment"),
        );
        assert!(registry.is_empty());
    }
}
