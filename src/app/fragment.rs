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

//! Word-fragment detection left of the cursor.
//!
//! Both functions take the word classifier as an opaque predicate so the host
//! decides what counts as a word (identifiers, dotted paths, ...).

use super::input::LineBuffer;

/// Char column where the run of word chars ending at `col` begins.
///
/// Returns `col` itself when the char left of it is not a word char.
pub fn fragment_start(line: &[char], col: usize, is_word_char: &dyn Fn(char) -> bool) -> usize {
    let mut start = col.min(line.len());
    while start > 0 && is_word_char(line[start - 1]) {
        start -= 1;
    }
    start
}

/// The word fragment immediately left of the cursor, or an empty string.
///
/// A fragment is only reported when the cursor sits directly after a word
/// char; a cursor at column 0 or past the end of its line yields nothing.
pub fn current_fragment(buffer: &LineBuffer, is_word_char: &dyn Fn(char) -> bool) -> String {
    let col = buffer.cursor_col();
    if col == 0 {
        return String::new();
    }
    let Some(line) = buffer.lines().get(buffer.cursor_row()) else {
        return String::new();
    };
    let chars: Vec<char> = line.chars().collect();
    if col > chars.len() || !is_word_char(chars[col - 1]) {
        return String::new();
    }
    let start = fragment_start(&chars, col, is_word_char);
    chars[start..col].iter().collect()
}
