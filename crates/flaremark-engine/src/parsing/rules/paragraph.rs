use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
    registry::{Rule, RuleId},
};

use super::{run::TextRun, text::TextRule};

/// The catch-all block: one line of inline content.
///
/// Always matches, so it must sit below every other `Document` rule.
pub struct ParagraphRule;

impl ParagraphRule {
    pub const ID: RuleId = RuleId("paragraph");
}

impl Rule for ParagraphRule {
    fn id(&self) -> RuleId {
        Self::ID
    }

    fn matches(&self, _cursor: Cursor<'_>) -> bool {
        true
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        let mut indent = 0;
        while cursor.peek(0) == Some(' ') {
            indent += 1;
            cursor.step_forward();
        }

        let mut run = TextRun::default();
        while cursor.peek(0).is_some_and(|c| c != '\n') {
            run.push(reader.parse(TextRule::ID, cursor, true)?);
        }

        Ok(Node::Paragraph {
            children: run.finish(),
            indent,
        }
        .into())
    }
}
