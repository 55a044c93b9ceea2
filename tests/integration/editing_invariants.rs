// Cursor and buffer invariants under long mixed event sequences.

use multiprompt::{Prompt, PromptEvent};
use pretty_assertions::assert_eq;

use crate::helpers::{lines, send, test_prompt, type_text};

fn assert_cursor_valid(prompt: &Prompt) {
    let input = prompt.input();
    let (row, col) = input.cursor();
    assert!(!input.lines().is_empty());
    assert!(row < input.lines().len(), "row {row} out of {} lines", input.lines().len());
    let len = input.lines()[row].chars().count();
    assert!(col <= len, "col {col} past line length {len}");
}

fn event_cycle() -> Vec<PromptEvent> {
    vec![
        PromptEvent::Insert("s".to_owned()),
        PromptEvent::Insert("\u{00e9}".to_owned()),
        PromptEvent::Submit,
        PromptEvent::Up,
        PromptEvent::Insert("\u{1f600};".to_owned()),
        PromptEvent::Left,
        PromptEvent::Backspace,
        PromptEvent::Down,
        PromptEvent::Home,
        PromptEvent::Delete,
        PromptEvent::Insert("f".to_owned()),
        PromptEvent::Complete,
        PromptEvent::End,
        PromptEvent::Right,
        PromptEvent::Submit,
        PromptEvent::Backspace,
        PromptEvent::Backspace,
    ]
}

#[test]
fn cursor_stays_valid_through_mixed_events() {
    let (mut prompt, _) = test_prompt();
    let cycle = event_cycle();
    for _ in 0..20 {
        for event in &cycle {
            prompt.handle(event.clone());
            assert_cursor_valid(&prompt);
        }
    }
}

#[test]
fn no_history_entry_is_blank() {
    let (mut prompt, _) = test_prompt();
    let cycle = event_cycle();
    for _ in 0..10 {
        send(&mut prompt, &cycle);
    }
    assert!(prompt.history().entries().iter().all(|e| !e.trim().is_empty()));
}

#[test]
fn insert_then_backspace_restores_buffer() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT a");
    prompt.handle(PromptEvent::Left);
    let before = lines(&prompt);
    let cursor = prompt.input().cursor();

    type_text(&mut prompt, "x\u{00e9}z");
    for _ in 0..3 {
        prompt.handle(PromptEvent::Backspace);
    }
    assert_eq!(lines(&prompt), before);
    assert_eq!(prompt.input().cursor(), cursor);
}

#[test]
fn newline_then_backspace_rejoins_lines() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT a FROM t");
    prompt.handle(PromptEvent::Left);
    prompt.handle(PromptEvent::Submit);
    assert_eq!(lines(&prompt), vec!["SELECT a FROM ", "t"]);
    prompt.handle(PromptEvent::Backspace);
    assert_eq!(lines(&prompt), vec!["SELECT a FROM t"]);
    assert_eq!(prompt.input().cursor(), (0, 14));
}

#[test]
fn control_characters_are_dropped() {
    let (mut prompt, _) = test_prompt();
    prompt.handle(PromptEvent::Insert("a\tb\u{7}c".to_owned()));
    assert_eq!(lines(&prompt), vec!["abc"]);
    assert_eq!(prompt.input().cursor(), (0, 3));
}

#[test]
fn version_advances_on_every_edit() {
    let (mut prompt, _) = test_prompt();
    let start = prompt.input().version();
    type_text(&mut prompt, "ab");
    prompt.handle(PromptEvent::Backspace);
    assert_eq!(prompt.input().version(), start + 3);
}
