//! Binding resolution over a parsed [`Program`].

use indexmap::IndexMap;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::parser::{NameRef, Program, ScopeId};

/// Errors raised while binding declarations to scopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// A name declared twice in one scope.
    #[error("`{name}` is declared more than once in the same scope (offset {offset})")]
    DuplicateDeclaration { name: SmolStr, offset: u32 },
}

/// Names provided by an external library ("prelude").
///
/// They are visible everywhere, can be shadowed, and have no source location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalLibrary {
    names: Vec<SmolStr>,
}

impl ExternalLibrary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names(&self) -> &[SmolStr] {
        &self.names
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

/// A declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: SmolStr,
    /// `None` for names that come from the external library.
    pub range: Option<TextRange>,
}

/// Declarations of every scope, keyed by name in declaration order.
#[derive(Debug, Clone)]
pub struct ScopeTable {
    bindings: Vec<Binding>,
    per_scope: Vec<IndexMap<SmolStr, BindingId>>,
    externals: IndexMap<SmolStr, BindingId>,
}

impl ScopeTable {
    /// Bind every declaration of `program`.
    ///
    /// With `reject_duplicates` a second declaration of a name in the same
    /// scope is an error; otherwise the first declaration wins.
    pub fn build(
        program: &Program,
        external: &ExternalLibrary,
        reject_duplicates: bool,
    ) -> Result<Self, ScopeError> {
        let mut table = ScopeTable {
            bindings: Vec::new(),
            per_scope: vec![IndexMap::new(); program.scopes().len()],
            externals: IndexMap::new(),
        };

        for name in external.names() {
            let id = table.push_binding(name.clone(), None);
            table.externals.entry(name.clone()).or_insert(id);
        }

        for name in program.names().iter().filter(|n| n.is_declaration()) {
            if table.per_scope[name.scope.index()].contains_key(&name.name) {
                if reject_duplicates {
                    return Err(ScopeError::DuplicateDeclaration {
                        name: name.name.clone(),
                        offset: name.range.start().into(),
                    });
                }
                continue;
            }
            let id = table.push_binding(name.name.clone(), Some(name.range));
            table.per_scope[name.scope.index()].insert(name.name.clone(), id);
        }

        Ok(table)
    }

    fn push_binding(&mut self, name: SmolStr, range: Option<TextRange>) -> BindingId {
        let id = BindingId(self.bindings.len() as u32);
        self.bindings.push(Binding { name, range });
        id
    }

    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.0 as usize]
    }

    /// Resolve `name` starting from `scope` and walking outwards.
    pub fn resolve(&self, program: &Program, scope: ScopeId, name: &str) -> Option<BindingId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(&binding) = self.per_scope[id.index()].get(name) {
                return Some(binding);
            }
            current = program.scope(id).parent;
        }
        self.externals.get(name).copied()
    }

    /// Resolve `name` as seen from a byte offset.
    pub fn resolve_at(&self, program: &Program, offset: TextSize, name: &str) -> Option<BindingId> {
        self.resolve(program, program.scope_at(offset), name)
    }

    /// Resolve the binding a name lexeme refers to (or declares).
    pub fn resolve_name(&self, program: &Program, name: &NameRef) -> Option<BindingId> {
        self.resolve(program, name.scope, &name.name)
    }
}

/// A program together with its resolved scopes.
#[derive(Debug, Clone)]
pub struct ScopedProgram {
    program: Program,
    table: ScopeTable,
}

impl ScopedProgram {
    pub fn new(program: Program, external: &ExternalLibrary) -> Result<Self, ScopeError> {
        let table = ScopeTable::build(&program, external, true)?;
        Ok(Self { program, table })
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn table(&self) -> &ScopeTable {
        &self.table
    }
}
