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

use ratatui::style::{Color, Style};

pub const PROMPT_PINK: Color = Color::Indexed(212);
pub const CURSOR_BG: Color = Color::Indexed(240);
pub const POPUP_BG: Color = Color::Indexed(237);
pub const POPUP_FG: Color = Color::Indexed(252);
pub const SELECTED_BG: Color = Color::Indexed(60);
pub const SELECTED_FG: Color = Color::Indexed(255);
pub const DESCRIPTION_FG: Color = Color::Indexed(242);

pub const OUTPUT_HEADER: &str = "--- Executing ---";
pub const OUTPUT_FOOTER: &str = "-----------------";
pub const NO_EXECUTOR_BANNER: &str = "--- No executor configured ---";

/// Styles for each part of the prompt UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStyles {
    /// Primary and secondary prompt prefixes.
    pub prompt: Style,
    /// The cell under the cursor.
    pub cursor: Style,
    /// Suggestion popup container.
    pub popup_box: Style,
    pub selected_item: Style,
    pub unselected_item: Style,
    /// Description column next to a suggestion.
    pub description: Style,
}

impl Default for PromptStyles {
    fn default() -> Self {
        Self {
            prompt: Style::default().fg(PROMPT_PINK),
            cursor: Style::default().bg(CURSOR_BG),
            popup_box: Style::default().bg(POPUP_BG).fg(POPUP_FG),
            selected_item: Style::default().bg(SELECTED_BG).fg(SELECTED_FG),
            unselected_item: Style::default(),
            description: Style::default().fg(DESCRIPTION_FG),
        }
    }
}
