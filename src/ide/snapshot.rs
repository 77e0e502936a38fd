//! Program snapshots.

use crate::base::LanguageLevel;
use crate::oracle::LanguageService;

/// Parse the current source text.
///
/// Nothing is cached: every request parses the text it is given. A strict
/// parse is tried first and the error-tolerant parse second, so lookups keep
/// working while the user is mid-edit. `None` means neither parse produced
/// a program and the caller should do nothing.
pub fn snapshot<L>(language: &L, source: &str, level: LanguageLevel) -> Option<L::Program>
where
    L: LanguageService + ?Sized,
{
    if let Some(program) = language.parse(source, level) {
        return Some(program);
    }

    tracing::debug!("[SNAPSHOT] strict parse failed, falling back to loose parse");
    let program = language.loose_parse(source, level);
    if program.is_none() {
        tracing::debug!("[SNAPSHOT] unable to parse program");
    }
    program
}
