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

//! Prompt state machine.
//!
//! `Prompt` owns the line buffer, history log and suggestion set and wires the
//! cross-component resets between them: typing cancels history browsing,
//! horizontal movement drops suggestions, and vertical movement at the top
//! edge (or while browsing) walks history instead of moving the cursor.

pub mod autocomplete;
pub mod config;
pub mod events;
pub mod fragment;
pub mod history;
pub mod input;
pub mod keywords;

use autocomplete::SuggestionSet;
use config::PromptConfig;
use events::{EventOutcome, PromptEvent};
use history::{BrowseStep, HistoryLog};
use input::{CursorMove, LineBuffer};

/// Output of the most recent submission, kept until the next edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutput {
    /// Text returned by the executor.
    Executed(String),
    /// Input was submitted but no executor is configured.
    NoExecutor,
}

/// What a submit event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Executed,
    /// Input is still being composed; a newline was inserted instead.
    Newline,
}

#[derive(Debug)]
pub struct Prompt {
    config: PromptConfig,
    input: LineBuffer,
    history: HistoryLog,
    suggestions: SuggestionSet,
    last_output: Option<ExecutionOutput>,
}

impl Prompt {
    pub fn new(config: PromptConfig) -> Self {
        let suggestions = SuggestionSet::new(config.effective_popup_height());
        Self {
            config,
            input: LineBuffer::new(),
            history: HistoryLog::new(),
            suggestions,
            last_output: None,
        }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn input(&self) -> &LineBuffer {
        &self.input
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    pub fn last_output(&self) -> Option<&ExecutionOutput> {
        self.last_output.as_ref()
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: PromptEvent) -> EventOutcome {
        if !matches!(event, PromptEvent::Submit | PromptEvent::Complete | PromptEvent::Quit) {
            self.last_output = None;
        }
        match event {
            PromptEvent::Insert(text) => self.insert_text(&text),
            PromptEvent::Backspace => self.backspace(),
            PromptEvent::Delete => self.delete(),
            PromptEvent::Submit => {
                self.submit();
            }
            PromptEvent::Complete => {
                self.apply_completion();
            }
            PromptEvent::Up => self.navigate_up(),
            PromptEvent::Down => self.navigate_down(),
            PromptEvent::Left => self.move_cursor(CursorMove::Left),
            PromptEvent::Right => self.move_cursor(CursorMove::Right),
            PromptEvent::Home => self.move_cursor(CursorMove::Home),
            PromptEvent::End => self.move_cursor(CursorMove::End),
            PromptEvent::Quit => return EventOutcome::Quit,
        }
        EventOutcome::Continue
    }

    pub fn insert_text(&mut self, text: &str) {
        if self.input.insert_text(text) > 0 {
            self.history.reset_browse();
        }
        self.refresh_suggestions();
    }

    pub fn backspace(&mut self) {
        self.input.delete_before_cursor();
        self.refresh_suggestions();
    }

    pub fn delete(&mut self) {
        self.input.delete_after_cursor();
        self.refresh_suggestions();
    }

    /// Horizontal movement, which also cancels any suggestions on screen.
    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.input.move_cursor(movement);
        self.suggestions.clear();
    }

    /// Up arrow: suggestion list, then history at the top row, else cursor.
    pub fn navigate_up(&mut self) {
        if self.suggestions.is_visible() {
            self.suggestions.select_previous();
        } else if self.input.cursor_row() == 0 {
            self.history_up();
        } else {
            self.input.move_cursor(CursorMove::Up);
        }
    }

    /// Down arrow: suggestion list, then history while browsing, else cursor.
    pub fn navigate_down(&mut self) {
        if self.suggestions.is_visible() {
            self.suggestions.select_next();
        } else if self.history.is_browsing() {
            self.history_down();
        } else {
            self.input.move_cursor(CursorMove::Down);
        }
    }

    pub fn history_up(&mut self) {
        if let Some(entry) = self.history.browse_up() {
            self.input.set_text(entry);
            self.suggestions.clear();
        }
    }

    pub fn history_down(&mut self) {
        match self.history.browse_down() {
            BrowseStep::Load(entry) => {
                self.input.set_text(entry);
                self.suggestions.clear();
            }
            BrowseStep::Exit => {
                self.input.clear();
                self.suggestions.clear();
            }
            BrowseStep::Idle => {}
        }
    }

    pub fn apply_completion(&mut self) -> bool {
        self.suggestions.apply_selected(&mut self.input, self.config.is_word_char.as_ref())
    }

    /// Submit the buffer if it forms a complete input, otherwise continue on a new line.
    ///
    /// A bare `;` is never executed even when the completeness check accepts it.
    pub fn submit(&mut self) -> SubmitOutcome {
        let input = self.input.joined_non_blank_content();
        let complete = (self.config.is_complete)(&input);

        if !complete || input.trim() == ";" {
            tracing::debug!(complete, lines = self.input.lines().len(), "input continues");
            self.input.insert_newline();
            self.suggestions.clear();
            return SubmitOutcome::Newline;
        }

        let output = match self.config.executor.as_mut() {
            Some(execute) => ExecutionOutput::Executed(execute(&input)),
            None => ExecutionOutput::NoExecutor,
        };
        tracing::debug!(len = input.len(), "input submitted");
        self.last_output = Some(output);
        self.history.record(&input);
        self.input.clear();
        self.history.reset_browse();
        self.suggestions.clear();
        SubmitOutcome::Executed
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions.refresh(
            &self.input,
            self.config.is_word_char.as_ref(),
            self.config.completer.as_deref(),
        );
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new(PromptConfig::default())
    }
}
