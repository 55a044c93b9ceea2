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

use super::theme;
use crate::app::{ExecutionOutput, Prompt};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    frame.render_widget(Paragraph::new(output_lines(prompt)), area);
}

pub fn height(prompt: &Prompt) -> u16 {
    u16::try_from(output_lines(prompt).len()).unwrap_or(u16::MAX)
}

/// The last execution result framed by header and footer rules.
pub fn output_lines(prompt: &Prompt) -> Vec<Line<'static>> {
    match prompt.last_output() {
        None => Vec::new(),
        Some(ExecutionOutput::NoExecutor) => vec![Line::raw(theme::NO_EXECUTOR_BANNER)],
        Some(ExecutionOutput::Executed(text)) => {
            let mut lines = vec![Line::raw(theme::OUTPUT_HEADER)];
            lines.extend(text.trim_end_matches('\n').split('\n').map(|l| Line::raw(l.to_owned())));
            lines.push(Line::raw(theme::OUTPUT_FOOTER));
            lines
        }
    }
}
