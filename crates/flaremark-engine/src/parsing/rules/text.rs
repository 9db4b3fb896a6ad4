use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
    registry::{Category, Rule, RuleId},
};

use super::escape::EscapeRule;

/// Parses one inline unit: an escape, a line break, a `Text`-category span,
/// or a single plain character.
pub struct TextRule;

impl TextRule {
    pub const ID: RuleId = RuleId("text");
    pub const ESCAPE: char = '\\';
}

impl Rule for TextRule {
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
        match cursor.peek(0) {
            None => Ok(Node::Text(String::new()).into()),
            Some(Self::ESCAPE) => {
                cursor.step_forward();
                reader.parse(EscapeRule::ID, cursor, true)
            }
            Some('\n') => {
                cursor.step_forward();
                Ok(Node::LineBreak.into())
            }
            Some(c) => {
                if let Some(span) = reader.try_parse(Category::Text, cursor)? {
                    return Ok(span);
                }
                cursor.step_forward();
                Ok(Output::Character(c))
            }
        }
    }
}
