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

//! Submitted-input log with an up/down browse cursor.

/// Result of stepping forward through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseStep<'a> {
    /// Load this entry into the buffer.
    Load(&'a str),
    /// Stepped past the newest entry; browsing ended and the buffer should be emptied.
    Exit,
    /// Not browsing, nothing to do.
    Idle,
}

/// Append-only list of submitted inputs.
///
/// `browse_index` is `None` while the user is not browsing. When set, it always
/// indexes into `entries` because entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
    browse_index: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted input unless it is whitespace-only.
    pub fn record(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }
        self.entries.push(input.to_owned());
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn browse_index(&self) -> Option<usize> {
        self.browse_index
    }

    pub fn is_browsing(&self) -> bool {
        self.browse_index.is_some()
    }

    pub fn reset_browse(&mut self) {
        self.browse_index = None;
    }

    /// Step to the next older entry and return it.
    ///
    /// Starts from the newest entry when not browsing. Returns `None` when the
    /// log is empty or the oldest entry is already shown.
    pub fn browse_up(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.browse_index {
            None => self.entries.len() - 1,
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => return None,
        };
        self.browse_index = Some(idx);
        tracing::trace!(idx, "history browse up");
        self.entries.get(idx).map(String::as_str)
    }

    /// Step to the next newer entry, or leave browsing past the newest one.
    pub fn browse_down(&mut self) -> BrowseStep<'_> {
        let Some(idx) = self.browse_index else {
            return BrowseStep::Idle;
        };
        if idx + 1 < self.entries.len() {
            self.browse_index = Some(idx + 1);
            tracing::trace!(idx = idx + 1, "history browse down");
            return BrowseStep::Load(&self.entries[idx + 1]);
        }
        self.browse_index = None;
        BrowseStep::Exit
    }
}
