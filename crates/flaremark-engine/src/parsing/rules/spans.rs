use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::ParseError,
    reader::Reader,
    registry::{Rule, RuleId},
};

use super::{run::TextRun, text::TextRule};

/// An inline span opened and closed by the same fixed delimiter.
///
/// The span ends at its closing delimiter, or unclosed at the end of the
/// line or input.
#[derive(Debug, Clone, Copy)]
pub struct SpanRule {
    id: RuleId,
    delimiter: &'static str,
    tag: &'static str,
}

impl SpanRule {
    pub const BOLD: SpanRule = SpanRule::new(RuleId("bold"), "**", "b");
    pub const UNDERLINE: SpanRule = SpanRule::new(RuleId("underline"), "__", "u");
    pub const STRIKETHROUGH: SpanRule = SpanRule::new(RuleId("strikethrough"), "~~", "del");

    pub const fn new(id: RuleId, delimiter: &'static str, tag: &'static str) -> Self {
        Self { id, delimiter, tag }
    }
}

impl Rule for SpanRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn matches(&self, cursor: Cursor<'_>) -> bool {
        cursor.matches_literal(self.delimiter)
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        cursor.skip(self.delimiter.chars().count());
        let children = span_body(cursor, reader, self.delimiter, None)?;
        Ok(Node::Tag {
            name: self.tag,
            children,
        }
        .into())
    }
}

/// `*italic*` or `_italic_`.
///
/// Closes only on the marker that opened it. The other marker inside the
/// span is plain text unless it is doubled into a span of its own.
pub struct ItalicRule;

impl ItalicRule {
    pub const ID: RuleId = RuleId("italic");
    pub const MARKERS: [char; 2] = ['*', '_'];
    pub const TAG: &'static str = "i";
}

impl Rule for ItalicRule {
    fn id(&self) -> RuleId {
        Self::ID
    }

    fn matches(&self, cursor: Cursor<'_>) -> bool {
        cursor.peek(0).is_some_and(|c| Self::MARKERS.contains(&c))
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        let Some(opener) = cursor.peek(0) else {
            return Ok(Node::Text(String::new()).into());
        };
        cursor.step_forward();

        let other = Self::MARKERS.into_iter().find(|&m| m != opener);
        let mut buf = [0; 4];
        let close = opener.encode_utf8(&mut buf);
        let children = span_body(cursor, reader, close, other)?;
        Ok(Node::Tag {
            name: Self::TAG,
            children,
        }
        .into())
    }
}

/// Consumes inline units up to `close`, the end of the line or the input.
///
/// A matched `close` is consumed and dropped; a line break is left for the
/// enclosing block. A lone `stray` character is kept as text instead of
/// being offered to the span rules.
fn span_body(
    cursor: &mut CursorMut<'_>,
    reader: &Reader<'_>,
    close: &str,
    stray: Option<char>,
) -> Result<Vec<Node>, ParseError> {
    let mut run = TextRun::default();
    while let Some(c) = cursor.peek(0) {
        if c == '\n' {
            break;
        }
        if cursor.matches_literal(close) {
            cursor.skip(close.chars().count());
            break;
        }
        if Some(c) == stray && cursor.peek(1) != Some(c) {
            cursor.step_forward();
            run.push(Output::Character(c));
            continue;
        }
        run.push(reader.parse(TextRule::ID, cursor, true)?);
    }
    Ok(run.finish())
}
