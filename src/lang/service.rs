//! [`LanguageService`] implementation for the teaching language.

use crate::base::{LanguageLevel, SourceLocation};
use crate::oracle::{Definition, LanguageService};

use super::parser::{ParseMode, Program, parse};
use super::scope::{ExternalLibrary, ScopeTable, ScopedProgram};

/// The reference language service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLanguage;

impl SourceLanguage {
    pub fn new() -> Self {
        Self
    }

    fn parse_with(&self, source: &str, level: LanguageLevel, mode: ParseMode) -> Option<Program> {
        match parse(source, level, mode) {
            Ok(program) => Some(program),
            Err(err) => {
                tracing::debug!("[PARSE] {:?} parse failed: {}", mode, err);
                None
            }
        }
    }
}

impl LanguageService for SourceLanguage {
    type Program = Program;
    type ScopedProgram = ScopedProgram;
    type External = ExternalLibrary;

    fn parse(&self, source: &str, level: LanguageLevel) -> Option<Program> {
        self.parse_with(source, level, ParseMode::Strict)
    }

    fn loose_parse(&self, source: &str, level: LanguageLevel) -> Option<Program> {
        self.parse_with(source, level, ParseMode::Loose)
    }

    fn compute_scopes(
        &self,
        program: Program,
        external: &ExternalLibrary,
    ) -> Option<ScopedProgram> {
        match ScopedProgram::new(program, external) {
            Ok(scoped) => Some(scoped),
            Err(err) => {
                tracing::debug!("[SCOPE] {}", err);
                None
            }
        }
    }

    fn find_definition(
        &self,
        name: &str,
        line: u32,
        column: u32,
        scoped: &ScopedProgram,
    ) -> Option<Definition> {
        let program = scoped.program();
        let offset = program.offset_at(line, column)?;
        let id = scoped.table().resolve_at(program, offset, name)?;
        let range = scoped.table().binding(id).range?;
        Some(Definition {
            location: program.location(range),
        })
    }

    fn find_all_occurrences(
        &self,
        name: &str,
        line: u32,
        column: u32,
        program: &Program,
    ) -> Option<Vec<SourceLocation>> {
        let table = ScopeTable::build(program, &ExternalLibrary::default(), false).ok()?;
        let offset = program.offset_at(line, column)?;
        let target = table.resolve_at(program, offset, name)?;

        let occurrences: Vec<_> = program
            .names()
            .iter()
            .filter(|n| n.name == name)
            .filter(|n| table.resolve_name(program, n) == Some(target))
            .map(|n| program.location(n.range))
            .collect();

        if occurrences.is_empty() {
            None
        } else {
            Some(occurrences)
        }
    }
}
