//! Select-all-occurrences and go-to-definition.
//!
//! Both operations follow the same skeleton:
//!
//! ```text
//! snapshot → candidates (center, left, right) → first candidate the
//! language service resolves → translate once → editor effect
//! ```
//!
//! Candidates are tried in order and the first one with a non-empty answer
//! wins. Results are never merged across candidates.

use crate::base::{EditorRange, LanguageLevel, Position};
use crate::oracle::{EditorHost, LanguageService, TokenKind};

use super::candidates::resolve_candidates;
use super::snapshot::snapshot;
use super::translate::LocationTranslator;

/// The context of one symbol request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolQuery<'a> {
    /// Source text the request runs against.
    pub source: &'a str,
    /// Editor position the request is about.
    pub position: Position,
    pub level: LanguageLevel,
}

impl<'a> SymbolQuery<'a> {
    pub fn new(source: &'a str, position: Position, level: LanguageLevel) -> Self {
        Self {
            source,
            position,
            level,
        }
    }

    /// 1-indexed line of the query position, as the language service expects.
    fn line(&self) -> u32 {
        self.position.row + 1
    }
}

/// The symbol action engine.
///
/// Borrows the language service and owns nothing else; every request brings
/// its source text, position and editor along.
pub struct SymbolActions<'l, L: ?Sized> {
    language: &'l L,
    translator: LocationTranslator,
}

impl<'l, L> SymbolActions<'l, L>
where
    L: LanguageService + ?Sized,
{
    pub fn new(language: &'l L, translator: LocationTranslator) -> Self {
        Self {
            language,
            translator,
        }
    }

    pub fn language(&self) -> &'l L {
        self.language
    }

    pub fn translator(&self) -> LocationTranslator {
        self.translator
    }

    /// Editor ranges of every occurrence of the symbol at the query position.
    ///
    /// `None` when the text cannot be parsed or no candidate resolves.
    pub fn select_all_occurrences<E>(
        &self,
        editor: &E,
        query: &SymbolQuery<'_>,
        offsets: &[i32],
    ) -> Option<Vec<EditorRange>>
    where
        E: EditorHost + ?Sized,
    {
        let program = snapshot(self.language, query.source, query.level)?;
        let candidates = resolve_candidates(editor, query.position, TokenKind::NAMEABLE, offsets);

        for token in &candidates {
            tracing::trace!(
                "[OCCURRENCES] trying `{}` at column {}",
                token.value,
                token.start
            );
            let Some(locations) = self.language.find_all_occurrences(
                &token.value,
                query.line(),
                query.position.column,
                &program,
            ) else {
                continue;
            };
            if locations.is_empty() {
                continue;
            }

            tracing::debug!(
                "[OCCURRENCES] `{}` has {} occurrences",
                token.value,
                locations.len()
            );
            return Some(
                locations
                    .into_iter()
                    .map(|loc| self.translator.to_editor_range(loc))
                    .collect(),
            );
        }

        None
    }

    /// Editor position of the definition of the symbol at the query position.
    ///
    /// `external` is handed to scope analysis untouched. `None` when the text
    /// cannot be parsed or scoped, or no candidate resolves.
    pub fn go_to_definition<E>(
        &self,
        editor: &E,
        query: &SymbolQuery<'_>,
        external: &L::External,
        offsets: &[i32],
    ) -> Option<Position>
    where
        E: EditorHost + ?Sized,
    {
        let program = snapshot(self.language, query.source, query.level)?;
        let Some(scoped) = self.language.compute_scopes(program, external) else {
            tracing::debug!("[DEFINITION] unable to scope program");
            return None;
        };
        let candidates = resolve_candidates(editor, query.position, TokenKind::NAMEABLE, offsets);

        for token in &candidates {
            tracing::trace!(
                "[DEFINITION] trying `{}` at column {}",
                token.value,
                token.start
            );
            let Some(definition) = self.language.find_definition(
                &token.value,
                query.line(),
                query.position.column,
                &scoped,
            ) else {
                continue;
            };

            let location = definition.location;
            tracing::debug!(
                "[DEFINITION] {} found at line {}, col {}",
                token.value,
                location.start_line,
                location.start_column
            );
            return Some(self.translator.to_editor_position(location));
        }

        None
    }

    /// Select every occurrence as an additive multi-range selection and
    /// focus the editor. Returns whether anything was selected.
    pub fn apply_select_all_occurrences<E>(
        &self,
        editor: &mut E,
        query: &SymbolQuery<'_>,
        offsets: &[i32],
    ) -> bool
    where
        E: EditorHost + ?Sized,
    {
        let Some(ranges) = self.select_all_occurrences(&*editor, query, offsets) else {
            return false;
        };
        for range in ranges {
            editor.add_selection_range(range);
        }
        editor.focus();
        true
    }

    /// Move the cursor to the definition and focus the editor. Returns
    /// whether a definition was found.
    pub fn apply_go_to_definition<E>(
        &self,
        editor: &mut E,
        query: &SymbolQuery<'_>,
        external: &L::External,
        offsets: &[i32],
    ) -> bool
    where
        E: EditorHost + ?Sized,
    {
        let Some(target) = self.go_to_definition(&*editor, query, external, offsets) else {
            return false;
        };
        editor.navigate_to(target.row, target.column);
        editor.focus();
        true
    }
}
