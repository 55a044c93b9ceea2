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
use crate::app::autocomplete::SuggestionSet;
use crate::app::fragment::fragment_start;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal padding inside the popup box, per side.
const POPUP_PAD: u16 = 1;
/// Gap between the suggestion text column and its description.
const DESCRIPTION_GAP: &str = "  ";

pub fn is_active(prompt: &Prompt) -> bool {
    prompt.suggestions().is_active()
}

/// Rows the popup needs: the visible window of items, or 0 when hidden.
#[allow(clippy::cast_possible_truncation)]
pub fn compute_height(prompt: &Prompt) -> u16 {
    let set = prompt.suggestions();
    if !set.is_active() {
        return 0;
    }
    let (start, end) = visible_range(set.items().len(), set.scroll_offset(), set.window_height());
    (end - start).min(u16::MAX as usize) as u16
}

/// Render the suggestion popup into `area`, anchored under the word being completed.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    if !is_active(prompt) || area.width == 0 || area.height == 0 {
        return;
    }

    let lines = popup_lines(prompt);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let wanted = (content_width as u16).saturating_add(POPUP_PAD * 2);

    // Shift left by the padding so item text lines up with the word being completed.
    let anchor = anchor_col(prompt).saturating_sub(usize::from(POPUP_PAD));
    let anchor_x = area.x.saturating_add(anchor.min(u16::MAX as usize) as u16);
    let (x, width) = choose_popup_x(anchor_x, area.x, area.right(), wanted);
    if width == 0 {
        return;
    }
    let popup_area = Rect { x, y: area.y, width, height: area.height };

    let block = Block::default()
        .style(prompt.config().styles.popup_box)
        .padding(Padding::horizontal(POPUP_PAD));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

/// Index range `[start, end)` of items drawn for a scroll offset.
///
/// An offset past the end is pulled back to the last item.
pub fn visible_range(len: usize, scroll_offset: usize, window_height: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let start = scroll_offset.min(len - 1);
    let end = start.saturating_add(window_height.max(1)).min(len);
    (start, end)
}

/// One line per visible suggestion, text padded to the widest visible text.
pub fn popup_lines(prompt: &Prompt) -> Vec<Line<'static>> {
    let set = prompt.suggestions();
    let config = prompt.config();
    let styles = config.styles;
    let (start, end) = visible_range(set.items().len(), set.scroll_offset(), set.window_height());
    let window = &set.items()[start..end];

    let text_width = window.iter().map(|s| UnicodeWidthStr::width(s.text.as_str())).max().unwrap_or(0);

    window
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let padding = text_width.saturating_sub(UnicodeWidthStr::width(suggestion.text.as_str()));
            let mut spans = vec![Span::raw(format!("{}{}", suggestion.text, " ".repeat(padding)))];
            if config.show_description && !suggestion.description.is_empty() {
                spans.push(Span::raw(DESCRIPTION_GAP));
                spans.push(Span::styled(suggestion.description.clone(), styles.description));
            }
            let style = if is_selected(set, start + i) {
                styles.selected_item
            } else {
                styles.unselected_item
            };
            Line::from(spans).style(style)
        })
        .collect()
}

fn is_selected(set: &SuggestionSet, index: usize) -> bool {
    set.selected_index() == index
}

/// Display column (relative to the input area) where the completed word starts.
fn anchor_col(prompt: &Prompt) -> usize {
    let input = prompt.input();
    let line: Vec<char> = input.current_line().chars().collect();
    let start = fragment_start(&line, input.cursor_col(), prompt.config().is_word_char.as_ref());
    let text_width: usize = line[..start].iter().map(|c| UnicodeWidthChar::width(*c).unwrap_or(0)).sum();
    super::input::prefix_width(prompt, input.cursor_row()) + text_width
}

/// Horizontal placement: keep the anchor when the popup fits, otherwise shift left,
/// shrinking only when the area itself is narrower than the popup.
fn choose_popup_x(anchor_x: u16, area_left: u16, area_right: u16, wanted_width: u16) -> (u16, u16) {
    if area_right <= area_left || wanted_width == 0 {
        return (area_left, 0);
    }

    let width = wanted_width.min(area_right - area_left);
    let mut x = anchor_x.clamp(area_left, area_right.saturating_sub(1));
    if x.saturating_add(width) > area_right {
        x = area_right.saturating_sub(width);
    }
    (x.max(area_left), width)
}
