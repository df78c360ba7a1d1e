//! Editable formula buffer with subscript marking.
//!
//! The buffer keeps the plain characters the evaluator understands and a
//! separate per-character subscript flag that only affects display.

/// A character of the buffer and whether it is displayed as a subscript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormattedChar {
    character: char,
    subscript: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaInput {
    chars: Vec<FormattedChar>,
    cursor: usize,
    auto_subscript: bool,
}

impl Default for FormulaInput {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FormulaInput {
    pub fn new(auto_subscript: bool) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            auto_subscript,
        }
    }

    /// Plain text, as passed to the evaluator.
    pub fn text(&self) -> String {
        self.chars.iter().map(|fc| fc.character).collect()
    }

    /// Text with subscript digits rendered as Unicode subscripts.
    pub fn display(&self) -> String {
        self.chars
            .iter()
            .map(|fc| match fc.character.to_digit(10) {
                Some(d) if fc.subscript => subscript_digit(d),
                _ => fc.character,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert at the cursor. Returns false if the character is not allowed.
    pub fn insert(&mut self, c: char) -> bool {
        if !(c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | '_')) {
            return false;
        }
        let subscript = self.auto_subscript && c.is_ascii_digit() && self.letter_before(self.cursor);
        self.chars.insert(
            self.cursor,
            FormattedChar {
                character: c,
                subscript,
            },
        );
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.chars.remove(self.cursor - 1);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Replace the contents, recomputing subscripts. The cursor moves to the end.
    pub fn set_text(&mut self, text: &str) {
        let mut prev: Option<char> = None;
        self.chars = text
            .chars()
            .map(|character| {
                let subscript = self.auto_subscript
                    && character.is_ascii_digit()
                    && prev.is_some_and(|p| p.is_ascii_alphabetic());
                prev = Some(character);
                FormattedChar {
                    character,
                    subscript,
                }
            })
            .collect();
        self.cursor = self.chars.len();
    }

    /// Mark the digit run ending just before the cursor as subscript. Only
    /// applies when a letter precedes the run.
    pub fn lower(&mut self) {
        if let Some(run) = self.digit_run() {
            if self.letter_before(run.start) {
                self.chars[run].iter_mut().for_each(|fc| fc.subscript = true);
            }
        }
    }

    /// Clear the subscript flag of the digit run ending just before the cursor.
    pub fn raise(&mut self) {
        if let Some(run) = self.digit_run() {
            self.chars[run].iter_mut().for_each(|fc| fc.subscript = false);
        }
    }

    fn letter_before(&self, pos: usize) -> bool {
        pos > 0 && self.chars[pos - 1].character.is_ascii_alphabetic()
    }

    fn digit_run(&self) -> Option<std::ops::Range<usize>> {
        let end = self.cursor;
        let start = self.chars[..end]
            .iter()
            .rposition(|fc| !fc.character.is_ascii_digit())
            .map_or(0, |i| i + 1);
        (start < end).then_some(start..end)
    }
}

fn subscript_digit(d: u32) -> char {
    char::from_u32('₀' as u32 + d).unwrap_or('?')
}
