//! # Parsing
//!
//! Recursive-descent dispatch over a registry of pluggable rules.
//!
//! ## Architecture
//!
//! ```text
//! text → CRLF normalisation → CursorMut → DocumentRule
//!      → Document category (header | paragraph) per line
//!      → TextRule per inline unit → Text category (spans) | escape | character
//! ```
//!
//! The [`Reader`] asks "which rule, if any, matches here?" and hands the
//! cursor to that rule. Rules recurse through the same reader.
//!
//! ## Modules
//!
//! - **`cursor`**: bounds-safe `Cursor` / `CursorMut` over the source characters
//! - **`registry`**: `Category`, the `Rule` trait, and the frozen `Registry`
//! - **`reader`**: the dispatcher (`matches`, `try_parse`, `parse`)
//! - **`rules`**: the grammar productions and `standard_registry()`
//! - **`error`**: `ParseError` and its recoverable/fatal split
//!
//! ## Error Containment
//!
//! Rule-local failures such as a malformed escape come back as an `Error`
//! node at the point of failure; the rest of the document keeps parsing.
//! Only structural failures abort.

pub mod cursor;
pub mod error;
pub mod reader;
pub mod registry;
pub mod rules;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorMut};
pub use error::{EscapeError, ParseError};
pub use reader::{MAX_NESTING, Reader};
pub use registry::{Category, Registry, RegistryBuilder, Rule, RuleId};
pub use rules::standard_registry;

use crate::ast::Node;
use rules::DocumentRule;

/// Parses `text` into a [`Node::Document`].
///
/// Line endings are normalised to `\n` before scanning. Fails only on
/// structural errors; everything else is reported as `Error` nodes inside
/// the tree.
pub fn parse_document(registry: &Registry, text: &str) -> Result<Node, ParseError> {
    let source: Vec<char> = text.replace("\r\n", "\n").chars().collect();
    let mut cursor = CursorMut::new(&source);
    cursor.step_forward();

    let reader = Reader::new(registry);
    let root = reader.parse(DocumentRule::ID, &mut cursor, true)?.into_node();
    let blocks = match root {
        Node::Group(blocks) => blocks,
        other => vec![other],
    };
    Ok(Node::Document(blocks))
}
