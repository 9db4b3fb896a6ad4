/// A read-only view over the source characters plus a current position.
///
/// Every read is bounds-safe: peeking outside the source, or peeking while
/// the position is unset, yields `None`. Rules treat `None` as end of input
/// instead of checking bounds themselves.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// The characters being parsed.
    pub source: &'a [char],
    /// Current index into `source`, `None` before the first step.
    position: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `source` at `position`.
    pub fn new(source: &'a [char], position: Option<usize>) -> Self {
        Self { source, position }
    }

    /// Returns the current position, or `None` if unset.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Peeks at the character `offset` places away from the current position.
    pub fn peek(&self, offset: isize) -> Option<char> {
        peek_at(self.source, self.position, offset)
    }

    /// Returns up to `len` characters starting `start` places from the
    /// current position, clamped to the end of the source.
    pub fn slice(&self, start: isize, len: usize) -> &'a [char] {
        slice_at(self.source, self.position, start, len)
    }

    /// Checks if the characters at the current position spell `literal`.
    pub fn matches_literal(&self, literal: &str) -> bool {
        matches_at(self.source, self.position, literal)
    }
}

/// The cursor rules consume input through.
///
/// Owns no allocation beyond the borrowed view. A single parse owns exactly
/// one `CursorMut` and lends it to each rule by `&mut`, so only one rule
/// consumes at a time.
#[derive(Debug)]
pub struct CursorMut<'a> {
    /// The characters being parsed.
    pub source: &'a [char],
    position: Option<usize>,
}

impl<'a> CursorMut<'a> {
    /// Creates an unset cursor over `source`. Call [`step_forward`] to move
    /// onto the first character.
    ///
    /// [`step_forward`]: CursorMut::step_forward
    pub fn new(source: &'a [char]) -> Self {
        Self {
            source,
            position: None,
        }
    }

    /// Returns the current position, or `None` if unset.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Returns true once the position has reached the end of the source.
    pub fn at_end(&self) -> bool {
        self.position.is_some_and(|i| i >= self.source.len())
    }

    /// A read-only snapshot of this cursor, used for rule predicates.
    pub fn as_cursor(&self) -> Cursor<'a> {
        Cursor::new(self.source, self.position)
    }

    pub fn peek(&self, offset: isize) -> Option<char> {
        peek_at(self.source, self.position, offset)
    }

    pub fn slice(&self, start: isize, len: usize) -> &'a [char] {
        slice_at(self.source, self.position, start, len)
    }

    pub fn matches_literal(&self, literal: &str) -> bool {
        matches_at(self.source, self.position, literal)
    }

    /// Moves by `count` characters.
    ///
    /// Fails, leaving the cursor untouched, when the target falls outside
    /// `[0, len)`. An unset cursor counts as sitting at `-1`.
    pub fn advance(&mut self, count: isize) -> bool {
        let Some(target) = self.signed_position().checked_add(count) else {
            return false;
        };
        if target < 0 || target >= self.source.len() as isize {
            return false;
        }
        self.position = Some(target as usize);
        true
    }

    /// Moves one character forward, stopping at exactly `len`.
    ///
    /// Returns whether the new position is still on a character.
    pub fn step_forward(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(i) => (i + 1).min(self.source.len()),
        };
        self.position = Some(next);
        next < self.source.len()
    }

    /// Moves one character back. Stepping back from the first character
    /// unsets the position; an unset cursor or one at `len` does not move.
    pub fn step_backward(&mut self) -> bool {
        match self.position {
            Some(i) if i < self.source.len() => {
                self.position = i.checked_sub(1);
                true
            }
            _ => false,
        }
    }

    /// Steps forward up to `count` times, returning how many steps landed on
    /// a character or on the end of the source.
    ///
    /// Unlike [`advance`](CursorMut::advance) this may finish at `len`, which
    /// is what a rule wants after consuming a closing delimiter at the very
    /// end of the input.
    pub fn skip(&mut self, count: usize) -> usize {
        let mut moved = 0;
        while moved < count && !self.at_end() {
            self.step_forward();
            moved += 1;
        }
        moved
    }

    /// Returns to the unset state.
    pub fn reset(&mut self) {
        self.position = None;
    }

    fn signed_position(&self) -> isize {
        self.position.map_or(-1, |i| i as isize)
    }
}

fn peek_at(source: &[char], position: Option<usize>, offset: isize) -> Option<char> {
    let index = position? as isize + offset;
    if index < 0 {
        return None;
    }
    source.get(index as usize).copied()
}

fn slice_at(source: &[char], position: Option<usize>, start: isize, len: usize) -> &[char] {
    let Some(position) = position else {
        return &[];
    };
    let start = position as isize + start;
    if start < 0 || start as usize >= source.len() {
        return &[];
    }
    let start = start as usize;
    let end = start.saturating_add(len).min(source.len());
    &source[start..end]
}

fn matches_at(source: &[char], position: Option<usize>, literal: &str) -> bool {
    literal
        .chars()
        .enumerate()
        .all(|(i, expected)| peek_at(source, position, i as isize) == Some(expected))
}
