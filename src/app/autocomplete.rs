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

use super::fragment::{current_fragment, fragment_start};
use super::input::LineBuffer;
use serde::{Deserialize, Serialize};

/// Max number of suggestions drawn at once before the list scrolls.
pub const DEFAULT_POPUP_MAX_HEIGHT: usize = 6;

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text inserted in place of the fragment (e.g. `SELECT`).
    pub text: String,
    /// Optional context shown next to the text.
    #[serde(default)]
    pub description: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self { text: text.into(), description: description.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }
}

/// Suggestions for the fragment under the cursor plus the scroll window over them.
///
/// `selected` always lies inside `[scroll_offset, scroll_offset + window_height)`
/// after navigation; scroll follows selection.
#[derive(Debug, Clone)]
pub struct SuggestionSet {
    items: Vec<Suggestion>,
    visible: bool,
    selected: usize,
    scroll_offset: usize,
    source_fragment: String,
    window_height: usize,
}

impl SuggestionSet {
    pub fn new(window_height: usize) -> Self {
        Self {
            items: Vec::new(),
            visible: false,
            selected: 0,
            scroll_offset: 0,
            source_fragment: String::new(),
            window_height: window_height.max(1),
        }
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible and non-empty: navigation and application only act in this state.
    pub fn is_active(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        if self.is_active() { self.items.get(self.selected) } else { None }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn source_fragment(&self) -> &str {
        &self.source_fragment
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.visible = false;
        self.selected = 0;
        self.scroll_offset = 0;
        self.source_fragment.clear();
    }

    /// Bring suggestions in line with the cursor context after an edit.
    ///
    /// The completer is only invoked when the fragment changed since the last
    /// call, so a stable fragment never causes recomputation.
    pub fn refresh(
        &mut self,
        buffer: &LineBuffer,
        is_word_char: &dyn Fn(char) -> bool,
        completer: Option<&dyn Fn(&str, &str) -> Vec<Suggestion>>,
    ) {
        let fragment = current_fragment(buffer, is_word_char);
        if fragment.is_empty() {
            self.clear();
            return;
        }

        if fragment != self.source_fragment {
            self.selected = 0;
            self.scroll_offset = 0;
            self.items = match completer {
                Some(complete) => complete(&buffer.text_before_cursor(), &fragment),
                None => Vec::new(),
            };
            self.visible = !self.items.is_empty();
            tracing::debug!(fragment = %fragment, count = self.items.len(), "suggestions regenerated");
            self.source_fragment = fragment;
            return;
        }

        if self.items.is_empty() {
            self.visible = false;
        }
    }

    pub fn select_previous(&mut self) {
        if !self.is_active() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
            self.scroll_offset = self.items.len().saturating_sub(self.window_height);
        } else {
            self.selected -= 1;
            if self.selected < self.scroll_offset {
                self.scroll_offset = self.selected;
            }
        }
    }

    pub fn select_next(&mut self) {
        if !self.is_active() {
            return;
        }
        self.selected += 1;
        if self.selected >= self.items.len() {
            self.selected = 0;
            self.scroll_offset = 0;
        } else if self.selected >= self.scroll_offset + self.window_height {
            self.scroll_offset = self.selected + 1 - self.window_height;
        }
    }

    /// Replace the word left of the cursor with the selected suggestion.
    ///
    /// The word span is rescanned from the buffer instead of trusting
    /// `source_fragment`, so it still lines up if the cursor drifted. Clears the
    /// set afterwards. Returns whether anything was applied.
    pub fn apply_selected(
        &mut self,
        buffer: &mut LineBuffer,
        is_word_char: &dyn Fn(char) -> bool,
    ) -> bool {
        let Some(text) = self.selected().map(|s| s.text.clone()) else {
            return false;
        };
        buffer.clamp_cursor();
        let line: Vec<char> = buffer.current_line().chars().collect();
        let start = fragment_start(&line, buffer.cursor_col(), is_word_char);
        buffer.replace_before_cursor(start, &text);
        tracing::debug!(suggestion = %text, start, "suggestion applied");
        self.clear();
        true
    }
}

impl Default for SuggestionSet {
    fn default() -> Self {
        Self::new(DEFAULT_POPUP_MAX_HEIGHT)
    }
}
