#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The active dialect ("chapter") of the teaching language.
///
/// Navigation code never interprets this value; it is forwarded to the
/// language service unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LanguageLevel(pub u8);

impl LanguageLevel {
    pub const fn new(chapter: u8) -> Self {
        Self(chapter)
    }

    pub const fn chapter(self) -> u8 {
        self.0
    }
}

impl Default for LanguageLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u8> for LanguageLevel {
    fn from(chapter: u8) -> Self {
        Self(chapter)
    }
}
