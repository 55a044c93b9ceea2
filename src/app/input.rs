// multiprompt - An embeddable multi-line terminal prompt
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Direction for a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Multi-line edit buffer with a `(row, col)` cursor.
///
/// Columns are counted in chars, not bytes, so cursor math stays correct for
/// multi-byte text. `lines` is never empty and the cursor always points at a
/// valid position after any public operation.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    pub(crate) lines: Vec<String>,
    pub(crate) cursor_row: usize,
    pub(crate) cursor_col: usize,
    /// Monotonically increasing version counter. Bumped on every content or cursor change
    /// so that downstream caches (e.g. rendered lines) can detect staleness cheaply.
    pub(crate) version: u64,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0, version: 0 }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    #[must_use]
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    #[must_use]
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn current_line(&self) -> &str {
        self.lines.get(self.cursor_row).map_or("", String::as_str)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.version += 1;
    }

    /// Replace the buffer with the given text, placing the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = char_len(&self.lines[self.cursor_row]);
        self.version += 1;
    }

    /// Pull the cursor back inside the buffer after an out-of-band mutation.
    pub fn clamp_cursor(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_row = self.cursor_row.min(self.lines.len() - 1);
        self.cursor_col = self.cursor_col.min(char_len(&self.lines[self.cursor_row]));
    }

    /// Insert text at the cursor, dropping control characters.
    ///
    /// Returns the number of chars actually inserted.
    pub fn insert_text(&mut self, text: &str) -> usize {
        let printable: String = text.chars().filter(|c| *c >= ' ').collect();
        if printable.is_empty() {
            return 0;
        }
        self.clamp_cursor();
        let inserted = char_len(&printable);
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.insert_str(byte_idx, &printable);
        self.cursor_col += inserted;
        self.version += 1;
        inserted
    }

    /// Split the current line at the cursor and move to the start of the new line.
    pub fn insert_newline(&mut self) {
        self.clamp_cursor();
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let rest = line[byte_idx..].to_owned();
        line.truncate(byte_idx);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, rest);
        self.cursor_col = 0;

        self.version += 1;
        self.cleanup_trailing_blank_lines();
    }

    /// Drop trailing lines while the last two lines are both whitespace-only.
    ///
    /// A cursor left on a dropped line is pulled back onto the last line.
    pub fn cleanup_trailing_blank_lines(&mut self) {
        let before = self.lines.len();
        while self.lines.len() >= 2
            && is_blank(&self.lines[self.lines.len() - 1])
            && is_blank(&self.lines[self.lines.len() - 2])
        {
            self.lines.pop();
        }
        if self.lines.len() != before {
            self.clamp_cursor();
            self.version += 1;
        }
    }

    /// Backspace: remove the char left of the cursor or merge into the previous line.
    pub fn delete_before_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            self.cursor_col -= 1;
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
            self.version += 1;
        } else if self.cursor_row > 0 {
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = char_len(&self.lines[self.cursor_row]);
            self.lines[self.cursor_row].push_str(&removed);
            self.version += 1;
        }
    }

    /// Delete: remove the char under the cursor or pull the next line up.
    pub fn delete_after_cursor(&mut self) {
        self.clamp_cursor();
        let line_len = char_len(&self.lines[self.cursor_row]);
        if self.cursor_col < line_len {
            let line = &mut self.lines[self.cursor_row];
            let byte_idx = char_to_byte_index(line, self.cursor_col);
            line.remove(byte_idx);
            self.version += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
            self.version += 1;
        }
    }

    /// Replace `[start_col, cursor)` on the current line with `text`.
    ///
    /// The cursor lands right after the inserted text.
    pub fn replace_before_cursor(&mut self, start_col: usize, text: &str) {
        self.clamp_cursor();
        let start_col = start_col.min(self.cursor_col);
        let line = &mut self.lines[self.cursor_row];
        let start = char_to_byte_index(line, start_col);
        let end = char_to_byte_index(line, self.cursor_col);
        line.replace_range(start..end, text);
        self.cursor_col = start_col + char_len(text);
        self.version += 1;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.clamp_cursor();
        match movement {
            CursorMove::Up => self.move_up(),
            CursorMove::Down => self.move_down(),
            CursorMove::Left => self.move_left(),
            CursorMove::Right => self.move_right(),
            CursorMove::Home => self.move_home(),
            CursorMove::End => self.move_end(),
        }
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            self.version += 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = char_len(&self.lines[self.cursor_row]);
            self.version += 1;
        }
    }

    fn move_right(&mut self) {
        let line_len = char_len(&self.lines[self.cursor_row]);
        if self.cursor_col < line_len {
            self.cursor_col += 1;
            self.version += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
            self.version += 1;
        }
    }

    fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            let line_len = char_len(&self.lines[self.cursor_row]);
            self.cursor_col = self.cursor_col.min(line_len);
            self.version += 1;
        }
    }

    fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            let line_len = char_len(&self.lines[self.cursor_row]);
            self.cursor_col = self.cursor_col.min(line_len);
            self.version += 1;
        }
    }

    fn move_home(&mut self) {
        self.cursor_col = 0;
        self.version += 1;
    }

    fn move_end(&mut self) {
        self.cursor_col = char_len(&self.lines[self.cursor_row]);
        self.version += 1;
    }

    /// Everything above the cursor row plus the current line up to the cursor.
    #[must_use]
    pub fn text_before_cursor(&self) -> String {
        let Some(current) = self.lines.get(self.cursor_row) else {
            return String::new();
        };
        let mut out = String::new();
        for line in &self.lines[..self.cursor_row] {
            out.push_str(line);
            out.push('\n');
        }
        let col = self.cursor_col.min(char_len(current));
        out.push_str(&current[..char_to_byte_index(current, col)]);
        out
    }

    /// Buffer content with trailing whitespace-only lines dropped.
    ///
    /// This is what gets checked for completeness and handed to the executor.
    #[must_use]
    pub fn joined_non_blank_content(&self) -> String {
        let end = self.lines.iter().rposition(|line| !is_blank(line)).map_or(0, |idx| idx + 1);
        self.lines[..end].join("\n")
    }

    #[must_use]
    pub fn line_count(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a character index to a byte index within a string.
pub(crate) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
