//! Click-triggered action menu.
//!
//! ```text
//!            modifier click (editor attached)
//!   Closed ───────────────────────────────────▶ Open { anchor, captured }
//!     ▲                                           │
//!     └──────── click outside / item selected ────┘
//! ```
//!
//! The cursor position is captured when the menu opens. A selected item
//! runs against that captured position even if the cursor has moved since.

use smol_str::SmolStr;

use crate::base::{Position, ScreenPoint};
use crate::oracle::EditorHost;

/// Text shown when no item is visible.
pub const EMPTY_MENU_LABEL: &str = "No actions available";

type VisibilityFn = Box<dyn Fn(Option<Position>) -> bool>;

/// One entry of the menu.
pub struct MenuItem<A> {
    label: SmolStr,
    action: A,
    visible: VisibilityFn,
}

impl<A: std::fmt::Debug> std::fmt::Debug for MenuItem<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

impl<A> MenuItem<A> {
    /// An item that is always shown.
    pub fn new(label: impl Into<SmolStr>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
            visible: Box::new(|_| true),
        }
    }

    /// Show the item only when `visible` accepts the current cursor
    /// position (`None` without an editor).
    pub fn with_predicate(mut self, visible: impl Fn(Option<Position>) -> bool + 'static) -> Self {
        self.visible = Box::new(visible);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn is_visible(&self, cursor: Option<Position>) -> bool {
        (self.visible)(cursor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open {
        anchor: ScreenPoint,
        captured: Position,
    },
}

/// Input to the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// A click on the editor surface.
    Click { point: ScreenPoint, modifier: bool },
    /// A click anywhere outside the open menu.
    ClickOutside,
    /// The item registered at this index was chosen.
    Select(usize),
}

/// An action to run, and the position it runs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<A> {
    pub action: A,
    pub position: Position,
}

/// A rendered menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { index: usize, label: SmolStr },
    Placeholder(&'static str),
}

/// What an open menu shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub anchor: ScreenPoint,
    pub entries: Vec<MenuEntry>,
}

/// The action menu state machine.
#[derive(Debug)]
pub struct ContextMenu<A> {
    items: Vec<MenuItem<A>>,
    state: MenuState,
}

impl<A: Clone> ContextMenu<A> {
    pub fn new(items: Vec<MenuItem<A>>) -> Self {
        Self {
            items,
            state: MenuState::Closed,
        }
    }

    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    /// Feed one event. Returns the action to run, if one was chosen.
    pub fn handle<E>(&mut self, event: MenuEvent, editor: Option<&E>) -> Option<Invocation<A>>
    where
        E: EditorHost + ?Sized,
    {
        match (self.state, event) {
            (MenuState::Closed, MenuEvent::Click { point, modifier }) => {
                if !modifier {
                    return None;
                }
                let Some(editor) = editor else {
                    tracing::trace!("[MENU] no editor attached, ignoring click");
                    return None;
                };
                let captured = editor.cursor_position();
                tracing::debug!("[MENU] opened at {:?}, captured {:?}", point, captured);
                self.state = MenuState::Open {
                    anchor: point,
                    captured,
                };
                None
            }
            (MenuState::Closed, _) => None,
            (MenuState::Open { .. }, MenuEvent::Click { .. } | MenuEvent::ClickOutside) => {
                self.close();
                None
            }
            (MenuState::Open { captured, .. }, MenuEvent::Select(index)) => {
                self.close();
                let item = self.items.get(index)?;
                let cursor = editor.map(|e| e.cursor_position());
                if !item.is_visible(cursor) {
                    tracing::trace!("[MENU] `{}` is hidden, ignoring selection", item.label);
                    return None;
                }
                tracing::debug!("[MENU] `{}` selected at {:?}", item.label, captured);
                Some(Invocation {
                    action: item.action.clone(),
                    position: captured,
                })
            }
        }
    }

    /// Dismiss the menu without running anything.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// The entries of the open menu, filtered against the current cursor.
    ///
    /// Filtering reads the cursor as it is now and leaves the captured
    /// position alone. `None` while closed.
    pub fn render<E>(&self, editor: Option<&E>) -> Option<MenuView>
    where
        E: EditorHost + ?Sized,
    {
        let MenuState::Open { anchor, .. } = self.state else {
            return None;
        };
        let cursor = editor.map(|e| e.cursor_position());

        let mut entries: Vec<MenuEntry> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_visible(cursor))
            .map(|(index, item)| MenuEntry::Item {
                index,
                label: item.label.clone(),
            })
            .collect();
        if entries.is_empty() {
            entries.push(MenuEntry::Placeholder(EMPTY_MENU_LABEL));
        }

        Some(MenuView { anchor, entries })
    }
}
