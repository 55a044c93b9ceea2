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

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Discrete input events the prompt reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Insert(String),
    Backspace,
    Delete,
    Submit,
    /// Apply the selected suggestion (Tab).
    Complete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Quit,
}

/// Whether the host loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Quit,
}

impl PromptEvent {
    /// Map a terminal key press to a prompt event. Releases and unbound keys map to `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let event = match key.code {
            KeyCode::Char('c') if ctrl => Self::Quit,
            KeyCode::Esc => Self::Quit,
            KeyCode::Enter => Self::Submit,
            KeyCode::Tab => Self::Complete,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Self::Insert(c.to_string())
            }
            _ => return None,
        };
        Some(event)
    }
}
