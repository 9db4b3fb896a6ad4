use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
    registry::{Rule, RuleId},
};

use super::run::escaped_text;

/// `# Title` through `##### Title`.
///
/// The line after the markers is taken verbatim, without inline parsing.
/// Six or more markers do not match and fall through to the paragraph rule.
pub struct HeaderRule;

impl HeaderRule {
    pub const ID: RuleId = RuleId("header");
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 5;
}

impl Rule for HeaderRule {
    fn id(&self) -> RuleId {
        Self::ID
    }

    fn matches(&self, cursor: Cursor<'_>) -> bool {
        cursor.peek(0) == Some(Self::MARKER)
            && (1..=Self::MAX_LEVEL as isize).any(|i| cursor.peek(i) != Some(Self::MARKER))
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        _reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        let mut level = 0;
        while cursor.peek(0) == Some(Self::MARKER) {
            level += 1;
            cursor.step_forward();
        }
        while cursor.peek(0) == Some(' ') {
            cursor.step_forward();
        }

        let mut line = String::new();
        while let Some(c) = cursor.peek(0) {
            if c == '\n' {
                break;
            }
            line.push(c);
            cursor.step_forward();
        }

        // Markers with nothing after them are not a header.
        if line.is_empty() {
            return Ok(Node::Text(Self::MARKER.to_string().repeat(level)).into());
        }

        Ok(Node::Title {
            level,
            content: vec![escaped_text(&line)],
        }
        .into())
    }
}
