use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
    registry::{Category, Rule, RuleId},
};

/// The top-level production: one `Document`-category block per line.
///
/// Not listed in any category; [`parse_document`](crate::parsing::parse_document)
/// invokes it directly.
pub struct DocumentRule;

impl DocumentRule {
    pub const ID: RuleId = RuleId("document");
}

impl Rule for DocumentRule {
    fn id(&self) -> RuleId {
        Self::ID
    }

    fn matches(&self, _cursor: Cursor<'_>) -> bool {
        false
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        let mut blocks = Vec::new();
        if cursor.peek(0).is_none() {
            return Ok(Node::Group(blocks).into());
        }

        loop {
            let offset = cursor.position().unwrap_or_default();
            log::trace!("dispatching block at offset {offset}");
            match reader.try_parse(Category::Document, cursor)? {
                Some(block) => blocks.push(block.into_node()),
                None => return Err(ParseError::InvalidDocument { offset }),
            }
            // Blocks stop on their line break; step over it.
            if !cursor.step_forward() {
                break;
            }
        }

        Ok(Node::Group(blocks).into())
    }
}
