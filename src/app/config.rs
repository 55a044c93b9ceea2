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

use super::autocomplete::{DEFAULT_POPUP_MAX_HEIGHT, Suggestion};
use crate::ui::theme::PromptStyles;
use std::fmt;

/// Suggestion provider: `(text_before_cursor, fragment) -> suggestions`.
pub type Completer = Box<dyn Fn(&str, &str) -> Vec<Suggestion>>;
/// Runs a submitted input and returns the text to display for it.
pub type Executor = Box<dyn FnMut(&str) -> String>;
/// Decides whether the buffered input is ready to submit.
pub type IsComplete = Box<dyn Fn(&str) -> bool>;
/// Decides which chars belong to a completable word.
pub type IsWordChar = Box<dyn Fn(char) -> bool>;

/// Input is complete once it ends with `;` (ignoring surrounding whitespace).
pub fn default_is_complete(input: &str) -> bool {
    input.trim().ends_with(';')
}

/// Letters, decimal digits, `_` and `.` form words.
///
/// Letter-like numerals (`Ⅳ`) and other numeric symbols (`²`, `½`) do not.
pub fn default_is_word_char(c: char) -> bool {
    (c.is_alphabetic() && !c.is_numeric()) || c.is_ascii_digit() || c == '_' || c == '.'
}

/// Host-supplied behaviour and presentation settings for a `Prompt`.
pub struct PromptConfig {
    pub prompt_primary: String,
    pub prompt_secondary: String,
    pub completer: Option<Completer>,
    pub executor: Option<Executor>,
    pub is_complete: IsComplete,
    pub is_word_char: IsWordChar,
    pub styles: PromptStyles,
    pub show_description: bool,
    /// Suggestions shown at once before the popup scrolls. Zero means default.
    pub popup_max_height: usize,
}

impl PromptConfig {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            prompt_primary: primary.into(),
            prompt_secondary: secondary.into(),
            completer: None,
            executor: None,
            is_complete: Box::new(default_is_complete),
            is_word_char: Box::new(default_is_word_char),
            styles: PromptStyles::default(),
            show_description: false,
            popup_max_height: DEFAULT_POPUP_MAX_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_completer(mut self, f: impl Fn(&str, &str) -> Vec<Suggestion> + 'static) -> Self {
        self.completer = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_executor(mut self, f: impl FnMut(&str) -> String + 'static) -> Self {
        self.executor = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_is_complete(mut self, f: impl Fn(&str) -> bool + 'static) -> Self {
        self.is_complete = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_is_word_char(mut self, f: impl Fn(char) -> bool + 'static) -> Self {
        self.is_word_char = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: PromptStyles) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    #[must_use]
    pub fn with_popup_max_height(mut self, height: usize) -> Self {
        self.popup_max_height = height;
        self
    }

    /// Popup height with the zero case mapped to the default.
    pub fn effective_popup_height(&self) -> usize {
        if self.popup_max_height == 0 { DEFAULT_POPUP_MAX_HEIGHT } else { self.popup_max_height }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new("> ", ". ")
    }
}

impl fmt::Debug for PromptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptConfig")
            .field("prompt_primary", &self.prompt_primary)
            .field("prompt_secondary", &self.prompt_secondary)
            .field("completer", &self.completer.is_some())
            .field("executor", &self.executor.is_some())
            .field("styles", &self.styles)
            .field("show_description", &self.show_description)
            .field("popup_max_height", &self.popup_max_height)
            .finish_non_exhaustive()
    }
}
