//! One editor's navigation features wired together.
//!
//! [`Navigator`] owns the language service, the action menu and the
//! occurrence highlighter of a single editor. The editor and its current
//! text are passed into every call; the navigator keeps no copy of either.

use std::time::Instant;

use crate::base::Position;
use crate::oracle::{EditorHost, LanguageService};

use super::actions::{SymbolActions, SymbolQuery};
use super::config::NavigatorConfig;
use super::highlight::HighlightManager;
use super::menu::{ContextMenu, MenuEvent, MenuItem, MenuView};
use super::translate::LocationTranslator;

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeAction {
    /// Select every occurrence of the symbol.
    SelectAllOccurrences,
    GoToDefinition,
}

impl IdeAction {
    pub const ALL: [IdeAction; 2] = [IdeAction::SelectAllOccurrences, IdeAction::GoToDefinition];

    pub fn label(self) -> &'static str {
        match self {
            IdeAction::SelectAllOccurrences => "Refactor",
            IdeAction::GoToDefinition => "Go to definition",
        }
    }
}

/// The menu items a navigator starts with, both always visible.
pub fn default_menu_items() -> Vec<MenuItem<IdeAction>> {
    IdeAction::ALL
        .into_iter()
        .map(|action| MenuItem::new(action.label(), action))
        .collect()
}

/// An action chosen from the menu and run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub action: IdeAction,
    /// The position captured when the menu opened.
    pub position: Position,
    /// Whether the action changed the editor.
    pub applied: bool,
}

pub struct Navigator<L: LanguageService> {
    language: L,
    translator: LocationTranslator,
    config: NavigatorConfig,
    external: L::External,
    menu: ContextMenu<IdeAction>,
    highlight: HighlightManager,
}

impl<L> std::fmt::Debug for Navigator<L>
where
    L: LanguageService + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("language", &self.language)
            .field("config", &self.config)
            .field("menu", &self.menu.state())
            .field("highlight", &self.highlight)
            .finish_non_exhaustive()
    }
}

impl<L: LanguageService> Navigator<L> {
    pub fn new(language: L, config: NavigatorConfig) -> Self {
        let highlight = HighlightManager::new(config.highlight.clone());
        Self {
            language,
            translator: LocationTranslator::default(),
            config,
            external: L::External::default(),
            menu: ContextMenu::new(default_menu_items()),
            highlight,
        }
    }

    pub fn with_translator(mut self, translator: LocationTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the external-library context handed to scope analysis.
    pub fn with_external(mut self, external: L::External) -> Self {
        self.external = external;
        self
    }

    pub fn with_menu_items(mut self, items: Vec<MenuItem<IdeAction>>) -> Self {
        self.menu = ContextMenu::new(items);
        self
    }

    pub fn language(&self) -> &L {
        &self.language
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn external(&self) -> &L::External {
        &self.external
    }

    pub fn menu(&self) -> &ContextMenu<IdeAction> {
        &self.menu
    }

    pub fn highlight(&self) -> &HighlightManager {
        &self.highlight
    }

    pub fn actions(&self) -> SymbolActions<'_, L> {
        SymbolActions::new(&self.language, self.translator)
    }

    /// Run `action` at `position` against `source`.
    pub fn dispatch<E>(
        &self,
        action: IdeAction,
        editor: &mut E,
        source: &str,
        position: Position,
    ) -> bool
    where
        E: EditorHost + ?Sized,
    {
        let query = SymbolQuery::new(source, position, self.config.level);
        let actions = self.actions();
        match action {
            IdeAction::SelectAllOccurrences => {
                actions.apply_select_all_occurrences(editor, &query, &self.config.offsets)
            }
            IdeAction::GoToDefinition => {
                actions.apply_go_to_definition(editor, &query, &self.external, &self.config.offsets)
            }
        }
    }

    /// Feed a pointer event to the menu and run whatever it selects.
    pub fn handle_menu_event<E>(
        &mut self,
        event: MenuEvent,
        editor: Option<&mut E>,
        source: &str,
    ) -> Option<Dispatched>
    where
        E: EditorHost + ?Sized,
    {
        let invocation = self.menu.handle(event, editor.as_deref())?;
        let editor = editor?;
        let applied = self.dispatch(invocation.action, editor, source, invocation.position);
        Some(Dispatched {
            action: invocation.action,
            position: invocation.position,
            applied,
        })
    }

    pub fn render_menu<E>(&self, editor: Option<&E>) -> Option<MenuView>
    where
        E: EditorHost + ?Sized,
    {
        self.menu.render(editor)
    }

    /// Schedule a highlight refresh. Returns its deadline.
    pub fn on_cursor_or_text_changed(&mut self, now: Instant) -> Instant {
        self.highlight.on_cursor_or_text_changed(now)
    }

    /// Run the highlight refreshes that are due. Returns how many ran.
    pub fn tick<E>(&mut self, now: Instant, editor: &mut E, source: &str) -> usize
    where
        E: EditorHost + ?Sized,
    {
        let actions = SymbolActions::new(&self.language, self.translator);
        self.highlight
            .run_due(now, &actions, editor, source, self.config.level)
    }

    /// Drop every highlight, e.g. when the editor is detached.
    pub fn clear_highlights<E>(&mut self, editor: &mut E)
    where
        E: EditorHost + ?Sized,
    {
        self.highlight.clear(editor);
    }
}
