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

//! Ratatui rendering for a `Prompt`.
//!
//! Draws, top to bottom: the last execution output, the buffer with its prompt
//! prefixes and cursor cell, then the suggestion popup.

pub mod autocomplete;
pub mod input;
pub mod output;
pub mod theme;

use crate::app::Prompt;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let [output_area, input_area, popup_area, _rest] = Layout::vertical([
        Constraint::Length(output::height(prompt)),
        Constraint::Length(input::height(prompt)),
        Constraint::Length(autocomplete::compute_height(prompt)),
        Constraint::Min(0),
    ])
    .areas(area);

    output::render(frame, output_area, prompt);
    input::render(frame, input_area, prompt);
    autocomplete::render(frame, popup_area, prompt);
}
