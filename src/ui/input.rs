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

use crate::app::Prompt;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    frame.render_widget(Paragraph::new(input_lines(prompt)), area);
}

/// Rows needed to draw the buffer (one per line, no wrapping).
pub fn height(prompt: &Prompt) -> u16 {
    prompt.input().line_count()
}

/// Display width of the prefix drawn before `row`.
pub fn prefix_width(prompt: &Prompt, row: usize) -> usize {
    UnicodeWidthStr::width(prefix_for(prompt, row))
}

fn prefix_for(prompt: &Prompt, row: usize) -> &str {
    let config = prompt.config();
    if row == 0 { &config.prompt_primary } else { &config.prompt_secondary }
}

/// Buffer lines with their prompt prefix; the cursor row carries a styled cursor cell.
pub fn input_lines(prompt: &Prompt) -> Vec<Line<'static>> {
    let styles = prompt.config().styles;
    let input = prompt.input();
    let (cursor_row, cursor_col) = input.cursor();

    input
        .lines()
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let mut spans = vec![Span::styled(prefix_for(prompt, row).to_owned(), styles.prompt)];
            if row != cursor_row {
                spans.push(Span::raw(text.clone()));
                return Line::from(spans);
            }

            let before: String = text.chars().take(cursor_col).collect();
            let mut rest = text.chars().skip(cursor_col);
            let under = rest.next().map_or_else(|| " ".to_owned(), |c| c.to_string());
            let after: String = rest.collect();

            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(under, styles.cursor));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
            Line::from(spans)
        })
        .collect()
}
