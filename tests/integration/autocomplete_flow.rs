// Suggestion popup integration tests.
// Covers refresh on typing, scrolling the window and applying a completion.

use multiprompt::{KeywordCompleter, Prompt, PromptConfig, PromptEvent};
use pretty_assertions::assert_eq;

use crate::helpers::{lines, send, test_prompt, test_prompt_with, type_text};

fn texts(prompt: &Prompt) -> Vec<String> {
    prompt.suggestions().items().iter().map(|s| s.text.clone()).collect()
}

#[test]
fn completion_replaces_fragment_and_closes_popup() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT * fr");
    assert_eq!(texts(&prompt), vec!["FROM"]);

    prompt.handle(PromptEvent::Complete);
    assert_eq!(lines(&prompt), vec!["SELECT * FROM"]);
    assert_eq!(prompt.input().cursor(), (0, 13));
    assert!(!prompt.suggestions().is_visible());
}

#[test]
fn selection_wraps_and_scrolls_window() {
    let (mut prompt, _) = test_prompt_with(|config| config.with_popup_max_height(1));
    type_text(&mut prompt, "f");
    assert_eq!(texts(&prompt), vec!["FROM", "FORMAT"]);
    assert_eq!(prompt.suggestions().window_height(), 1);

    prompt.handle(PromptEvent::Down);
    assert_eq!(prompt.suggestions().selected_index(), 1);
    assert_eq!(prompt.suggestions().scroll_offset(), 1);

    prompt.handle(PromptEvent::Down);
    assert_eq!(prompt.suggestions().selected_index(), 0);
    assert_eq!(prompt.suggestions().scroll_offset(), 0);

    prompt.handle(PromptEvent::Up);
    assert_eq!(prompt.suggestions().selected_index(), 1);
    assert_eq!(prompt.suggestions().scroll_offset(), 1);

    prompt.handle(PromptEvent::Complete);
    assert_eq!(lines(&prompt), vec!["FORMAT"]);
}

#[test]
fn narrowing_fragment_resets_selection() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "s");
    assert_eq!(texts(&prompt), vec!["SELECT", "SET"]);
    prompt.handle(PromptEvent::Down);
    type_text(&mut prompt, "el");
    assert_eq!(texts(&prompt), vec!["SELECT"]);
    assert_eq!(prompt.suggestions().selected_index(), 0);
}

#[test]
fn no_match_hides_popup_and_complete_is_noop() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "zz");
    assert!(!prompt.suggestions().is_visible());
    prompt.handle(PromptEvent::Complete);
    assert_eq!(lines(&prompt), vec!["zz"]);
}

#[test]
fn completion_inside_a_word_keeps_the_tail() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "fr x");
    send(&mut prompt, &[PromptEvent::Left, PromptEvent::Left]);
    prompt.handle(PromptEvent::Backspace);
    type_text(&mut prompt, "r");
    assert_eq!(texts(&prompt), vec!["FROM"]);
    prompt.handle(PromptEvent::Complete);
    assert_eq!(lines(&prompt), vec!["FROM x"]);
    assert_eq!(prompt.input().cursor(), (0, 4));
}

#[test]
fn completer_receives_text_before_cursor() {
    let config = PromptConfig::new("> ", ". ").with_completer(|before, fragment| {
        if before.ends_with(&format!("FROM {fragment}")) {
            vec![multiprompt::Suggestion::new("users", "table")]
        } else {
            Vec::new()
        }
    });
    let mut prompt = Prompt::new(config);
    type_text(&mut prompt, "SELECT u");
    assert!(!prompt.suggestions().is_visible());
    prompt.handle(PromptEvent::Backspace);
    type_text(&mut prompt, "* FROM u");
    assert!(prompt.suggestions().is_visible());
    assert_eq!(prompt.suggestions().items()[0].description, "table");
}

#[test]
fn keyword_completer_plugs_into_config() {
    let keywords = KeywordCompleter::sql();
    let config = PromptConfig::new("sql> ", "  -> ")
        .with_completer(move |before, fragment| keywords.complete(before, fragment));
    let mut prompt = Prompt::new(config);
    type_text(&mut prompt, "sel");
    assert_eq!(texts(&prompt), vec!["SELECT"]);
    prompt.handle(PromptEvent::Complete);
    assert_eq!(lines(&prompt), vec!["SELECT"]);
}
