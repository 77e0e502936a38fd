//! Occurrence highlighting that follows the cursor.
//!
//! Every cursor move or edit schedules a refresh a short delay later. There
//! is no cancellation: each refresh releases every marker it holds before
//! recomputing from the current text and cursor, so a late refresh still
//! leaves the correct final set. The editor never sees old and new markers
//! at the same time.
//!
//! Only this manager adds or removes highlight markers.

use std::collections::VecDeque;
use std::time::Instant;

use crate::base::{EditorRange, LanguageLevel};
use crate::oracle::{EditorHost, LanguageService, MarkerHandle};

use super::actions::{SymbolActions, SymbolQuery};
use super::config::HighlightConfig;

/// Owns the occurrence markers currently shown in one editor.
#[derive(Debug, Clone, Default)]
pub struct HighlightManager {
    config: HighlightConfig,
    markers: Vec<MarkerHandle>,
    occurrences: Vec<EditorRange>,
    /// Deadlines of scheduled refreshes, oldest first.
    pending: VecDeque<Instant>,
}

impl HighlightManager {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Handles of the markers currently installed.
    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    /// Ranges highlighted by the last refresh.
    pub fn occurrences(&self) -> &[EditorRange] {
        &self.occurrences
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().copied()
    }

    /// Schedule a refresh after the configured delay. Returns its deadline.
    pub fn on_cursor_or_text_changed(&mut self, now: Instant) -> Instant {
        let deadline = now + self.config.delay;
        self.pending.push_back(deadline);
        deadline
    }

    /// Run every scheduled refresh whose deadline has passed, oldest first.
    /// Returns how many ran.
    pub fn run_due<L, E>(
        &mut self,
        now: Instant,
        actions: &SymbolActions<'_, L>,
        editor: &mut E,
        source: &str,
        level: LanguageLevel,
    ) -> usize
    where
        L: LanguageService + ?Sized,
        E: EditorHost + ?Sized,
    {
        let mut ran = 0;
        while self.pending.front().is_some_and(|deadline| *deadline <= now) {
            self.pending.pop_front();
            self.refresh(actions, editor, source, level);
            ran += 1;
        }
        ran
    }

    /// Recompute the highlight set from the editor's current cursor.
    pub fn refresh<L, E>(
        &mut self,
        actions: &SymbolActions<'_, L>,
        editor: &mut E,
        source: &str,
        level: LanguageLevel,
    ) where
        L: LanguageService + ?Sized,
        E: EditorHost + ?Sized,
    {
        self.release(editor);

        let query = SymbolQuery::new(source, editor.cursor_position(), level);
        let Some(ranges) = actions.select_all_occurrences(&*editor, &query, &self.config.offsets)
        else {
            tracing::trace!("[HIGHLIGHT] nothing to highlight at {:?}", query.position);
            return;
        };

        for range in &ranges {
            let handle = editor.add_marker(*range, &self.config.marker_class, self.config.style);
            self.markers.push(handle);
        }
        self.occurrences = ranges;
    }

    /// Release every marker and forget scheduled refreshes.
    pub fn clear<E>(&mut self, editor: &mut E)
    where
        E: EditorHost + ?Sized,
    {
        self.release(editor);
        self.pending.clear();
    }

    fn release<E>(&mut self, editor: &mut E)
    where
        E: EditorHost + ?Sized,
    {
        for handle in self.markers.drain(..) {
            editor.remove_marker(handle);
        }
        self.occurrences.clear();
    }
}
