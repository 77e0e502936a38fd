//! Headless editor host.
//!
//! [`HeadlessEditor`] implements [`EditorHost`](crate::oracle::EditorHost)
//! over an in-memory buffer, tokenized line by line the way the browser
//! editor's highlighting mode does it.

mod headless;
mod mode;

pub use headless::{HeadlessEditor, Marker};
pub use mode::{token_at_column, tokenize_lines};
