use crate::ast::{Node, Output};
use crate::parsing::{
    cursor::{Cursor, CursorMut},
    error::{EscapeError, ParseError},
    reader::Reader,
    registry::{Rule, RuleId},
};

/// The character after a backslash.
///
/// Only reachable by direct dispatch: the text rule steps over the backslash
/// and hands over with the cursor on the designator.
///
/// | Sequence | Result |
/// |----------|--------|
/// | `\n` | line break |
/// | `\uXXXX` | code point from exactly 4 hex digits |
/// | `\UXXXXXXXX` | code point from exactly 8 hex digits |
/// | `\x` + hex run | code point from 1 or more hex digits |
/// | `\` + other | that character, literally |
///
/// A backslash at the end of a line or of the input stays a literal
/// backslash and leaves the line break in place.
pub struct EscapeRule;

impl EscapeRule {
    pub const ID: RuleId = RuleId("escape");
}

impl Rule for EscapeRule {
    fn id(&self) -> RuleId {
        Self::ID
    }

    fn matches(&self, _cursor: Cursor<'_>) -> bool {
        false
    }

    fn consume(
        &self,
        cursor: &mut CursorMut<'_>,
        _reader: &Reader<'_>,
    ) -> Result<Output, ParseError> {
        let offset = cursor.position().unwrap_or_default().saturating_sub(1);
        let fail = |source| ParseError::Escape { offset, source };

        let designator = match cursor.peek(0) {
            None | Some('\n') => return Ok(Output::Character('\\')),
            Some(c) => c,
        };
        cursor.step_forward();

        match designator {
            'n' => Ok(Node::LineBreak.into()),
            'u' => fixed_width(cursor, designator, 4).map_err(fail),
            'U' => fixed_width(cursor, designator, 8).map_err(fail),
            'x' => hex_run(cursor).map_err(fail),
            other => Ok(Output::Character(other)),
        }
    }
}

fn fixed_width(
    cursor: &mut CursorMut<'_>,
    designator: char,
    width: usize,
) -> Result<Output, EscapeError> {
    let digits = cursor.slice(0, width);
    if digits.len() < width || !digits.iter().all(char::is_ascii_hexdigit) {
        return Err(EscapeError::MissingHexDigits {
            designator,
            expected: width,
        });
    }
    let digits: String = digits.iter().collect();
    cursor.skip(width);
    code_point(&digits)
}

fn hex_run(cursor: &mut CursorMut<'_>) -> Result<Output, EscapeError> {
    let mut digits = String::new();
    while let Some(c) = cursor.peek(0).filter(char::is_ascii_hexdigit) {
        digits.push(c);
        cursor.step_forward();
    }
    if digits.is_empty() {
        return Err(EscapeError::MissingHexDigits {
            designator: 'x',
            expected: 1,
        });
    }
    code_point(&digits)
}

fn code_point(digits: &str) -> Result<Output, EscapeError> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .map(Output::Character)
        .ok_or_else(|| EscapeError::InvalidCodePoint(digits.to_string()))
}
