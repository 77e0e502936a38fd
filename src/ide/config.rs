//! Navigation settings.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::candidates::{CURSOR_ONLY_OFFSETS, DEFAULT_OFFSETS};
use crate::base::LanguageLevel;
use crate::oracle::MarkerStyle;

/// Default delay between a cursor/text change and the highlight refresh.
pub const DEFAULT_HIGHLIGHT_DELAY: Duration = Duration::from_millis(30);

/// Default marker class of occurrence highlights.
pub const DEFAULT_MARKER_CLASS: &str = "highlight-occurrence";

/// Settings of the occurrence highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightConfig {
    /// Debounce window coalescing bursts of cursor and text events.
    pub delay: Duration,
    /// Column offsets checked around the cursor.
    pub offsets: Vec<i32>,
    pub marker_class: String,
    pub style: MarkerStyle,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_HIGHLIGHT_DELAY,
            offsets: CURSOR_ONLY_OFFSETS.to_vec(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            style: MarkerStyle::default(),
        }
    }
}

impl HighlightConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }
}

/// Settings of a [`Navigator`](super::Navigator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Column offsets checked for menu actions, in priority order.
    pub offsets: Vec<i32>,
    pub highlight: HighlightConfig,
    pub level: LanguageLevel,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            offsets: DEFAULT_OFFSETS.to_vec(),
            highlight: HighlightConfig::default(),
            level: LanguageLevel::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn with_level(mut self, level: impl Into<LanguageLevel>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_offsets(mut self, offsets: impl Into<Vec<i32>>) -> Self {
        self.offsets = offsets.into();
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }
}
