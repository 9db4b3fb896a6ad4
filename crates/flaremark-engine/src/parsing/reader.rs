use std::cell::Cell;

use crate::ast::{Node, Output};

use super::{
    cursor::CursorMut,
    error::ParseError,
    registry::{Category, Registry, RuleId},
};

/// How many category dispatches may be open at once, the top-level block
/// included. Deeper than this, nothing in a category matches and span
/// delimiters read as plain text.
pub const MAX_NESTING: usize = 64;

/// Dispatches rules from a frozen [`Registry`].
///
/// Rules receive the reader so they can recurse into other categories or
/// invoke a known rule directly. One reader serves one parse.
#[derive(Debug)]
pub struct Reader<'r> {
    registry: &'r Registry,
    depth: Cell<usize>,
}

impl<'r> Reader<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            depth: Cell::new(0),
        }
    }

    /// Category dispatches currently open.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Checks whether any rule of `category` matches at the cursor, without
    /// consuming anything.
    pub fn matches(&self, category: Category, cursor: &CursorMut<'_>) -> bool {
        let view = cursor.as_cursor();
        self.registry
            .rules_for(category)
            .any(|rule| rule.matches(view))
    }

    /// Runs the first rule of `category` that matches at the cursor.
    ///
    /// Returns `Ok(None)` when no rule matches, or when [`MAX_NESTING`]
    /// dispatches are already open. The chosen rule runs with error
    /// containment.
    pub fn try_parse(
        &self,
        category: Category,
        cursor: &mut CursorMut<'_>,
    ) -> Result<Option<Output>, ParseError> {
        let depth = self.depth.get();
        if depth >= MAX_NESTING {
            return Ok(None);
        }
        let view = cursor.as_cursor();
        let Some(rule) = self
            .registry
            .rules_for(category)
            .find(|rule| rule.matches(view))
        else {
            return Ok(None);
        };
        self.depth.set(depth + 1);
        let result = self.parse(rule.id(), cursor, true);
        self.depth.set(depth);
        result.map(Some)
    }

    /// Runs the rule registered as `id`, skipping category lookup.
    ///
    /// With `contain` set, a recoverable failure comes back as an
    /// [`Node::Error`] at the point of failure instead of an `Err`.
    pub fn parse(
        &self,
        id: RuleId,
        cursor: &mut CursorMut<'_>,
        contain: bool,
    ) -> Result<Output, ParseError> {
        let rule = self.registry.get(id).ok_or(ParseError::UnknownRule(id))?;
        match rule.consume(cursor, self) {
            Err(err) if contain && err.is_recoverable() => Ok(error_node(&err).into()),
            result => result,
        }
    }
}

fn error_node(err: &ParseError) -> Node {
    Node::Error {
        message: err.to_string(),
        detail: format!("{err:?}"),
    }
}
