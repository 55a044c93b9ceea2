// Submission and history integration tests.
// Drives `Prompt` through host events and checks buffer, history and output.

use multiprompt::{ExecutionOutput, PromptEvent, SubmitOutcome};
use pretty_assertions::assert_eq;

use crate::helpers::{lines, send, test_prompt, test_prompt_with, type_text};

// --- Submission ---

#[test]
fn unterminated_input_continues_on_new_line() {
    let (mut prompt, executed) = test_prompt();
    type_text(&mut prompt, "SELECT 1");
    prompt.handle(PromptEvent::Submit);

    assert_eq!(lines(&prompt), vec!["SELECT 1", ""]);
    assert_eq!(prompt.input().cursor(), (1, 0));
    assert!(executed.borrow().is_empty());
    assert!(prompt.history().is_empty());
}

#[test]
fn terminated_input_executes_once_and_resets() {
    let (mut prompt, executed) = test_prompt();
    type_text(&mut prompt, "SELECT 1;");
    prompt.handle(PromptEvent::Submit);

    assert_eq!(*executed.borrow(), vec!["SELECT 1;".to_owned()]);
    assert_eq!(prompt.history().entries(), &["SELECT 1;"]);
    assert_eq!(lines(&prompt), vec![""]);
    assert_eq!(prompt.input().cursor(), (0, 0));
    assert_eq!(
        prompt.last_output(),
        Some(&ExecutionOutput::Executed("ok: SELECT 1;".to_owned()))
    );
}

#[test]
fn multi_line_statement_submits_joined_text() {
    let (mut prompt, executed) = test_prompt();
    type_text(&mut prompt, "SELECT *");
    prompt.handle(PromptEvent::Submit);
    type_text(&mut prompt, "FROM t;");
    prompt.handle(PromptEvent::Submit);

    assert_eq!(*executed.borrow(), vec!["SELECT *\nFROM t;".to_owned()]);
    assert_eq!(prompt.history().entries(), &["SELECT *\nFROM t;"]);
}

#[test]
fn trailing_blank_lines_are_not_submitted() {
    let (mut prompt, executed) = test_prompt();
    type_text(&mut prompt, "SELECT 1");
    prompt.handle(PromptEvent::Submit);
    assert_eq!(lines(&prompt), vec!["SELECT 1", ""]);

    send(&mut prompt, &[PromptEvent::Up, PromptEvent::End]);
    type_text(&mut prompt, ";");
    assert_eq!(prompt.submit(), SubmitOutcome::Executed);
    assert_eq!(*executed.borrow(), vec!["SELECT 1;".to_owned()]);
}

#[test]
fn bare_terminator_is_never_executed() {
    let (mut prompt, executed) = test_prompt();
    type_text(&mut prompt, ";");
    assert_eq!(prompt.submit(), SubmitOutcome::Newline);
    assert!(executed.borrow().is_empty());
    assert!(prompt.history().is_empty());
}

#[test]
fn whitespace_only_submissions_leave_history_alone() {
    let (mut prompt, _) = test_prompt_with(|config| config.with_is_complete(|_| true));
    for text in ["", " ", "\u{3000}"] {
        type_text(&mut prompt, text);
        prompt.handle(PromptEvent::Submit);
        assert_eq!(prompt.history().len(), 0);
    }
}

#[test]
fn missing_executor_shows_placeholder_but_records_history() {
    let (mut prompt, _) = test_prompt_with(|mut config| {
        config.executor = None;
        config
    });
    type_text(&mut prompt, "SELECT 1;");
    prompt.handle(PromptEvent::Submit);
    assert_eq!(prompt.last_output(), Some(&ExecutionOutput::NoExecutor));
    assert_eq!(prompt.history().entries(), &["SELECT 1;"]);
}

#[test]
fn output_survives_until_next_edit() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT 1;");
    prompt.handle(PromptEvent::Submit);
    prompt.handle(PromptEvent::Complete);
    assert!(prompt.last_output().is_some());
    prompt.handle(PromptEvent::Right);
    assert!(prompt.last_output().is_none());
}

// --- History ---

#[test]
fn history_browse_up_and_back_down() {
    let (mut prompt, _) = test_prompt();
    for statement in ["SELECT 1;", "SELECT 2;"] {
        type_text(&mut prompt, statement);
        prompt.handle(PromptEvent::Submit);
    }
    assert_eq!(prompt.history().browse_index(), None);

    prompt.handle(PromptEvent::Up);
    assert_eq!(lines(&prompt), vec!["SELECT 2;"]);
    assert_eq!(prompt.input().cursor(), (0, 9));

    prompt.handle(PromptEvent::Up);
    assert_eq!(lines(&prompt), vec!["SELECT 1;"]);

    prompt.handle(PromptEvent::Up);
    assert_eq!(lines(&prompt), vec!["SELECT 1;"]);
    assert_eq!(prompt.history().browse_index(), Some(0));

    prompt.handle(PromptEvent::Down);
    assert_eq!(lines(&prompt), vec!["SELECT 2;"]);

    prompt.handle(PromptEvent::Down);
    assert_eq!(lines(&prompt), vec![""]);
    assert_eq!(prompt.history().browse_index(), None);
}

#[test]
fn multi_line_history_entry_loads_with_cursor_at_end() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT *");
    prompt.handle(PromptEvent::Submit);
    type_text(&mut prompt, "FROM users;");
    prompt.handle(PromptEvent::Submit);

    prompt.handle(PromptEvent::Up);
    assert_eq!(lines(&prompt), vec!["SELECT *", "FROM users;"]);
    assert_eq!(prompt.input().cursor(), (1, 11));
}

#[test]
fn up_inside_multi_line_entry_moves_cursor_not_history() {
    let (mut prompt, _) = test_prompt();
    for statement in ["SELECT 0;", "SELECT *"] {
        type_text(&mut prompt, statement);
        prompt.handle(PromptEvent::Submit);
    }
    type_text(&mut prompt, "FROM t;");
    prompt.handle(PromptEvent::Submit);

    prompt.handle(PromptEvent::Up); // loads the two-line entry, cursor on row 1
    prompt.handle(PromptEvent::Up); // row 1 -> row 0
    assert_eq!(prompt.input().cursor_row(), 0);
    assert_eq!(lines(&prompt), vec!["SELECT *", "FROM t;"]);
    prompt.handle(PromptEvent::Up); // row 0 -> older entry
    assert_eq!(lines(&prompt), vec!["SELECT 0;"]);
}

#[test]
fn down_without_browsing_moves_cursor() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT 1");
    prompt.handle(PromptEvent::Submit);
    type_text(&mut prompt, "x");
    send(&mut prompt, &[PromptEvent::Up, PromptEvent::Down]);
    assert_eq!(prompt.input().cursor(), (1, 1));
}

#[test]
fn editing_a_loaded_entry_ends_browsing() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "SELECT 1;");
    prompt.handle(PromptEvent::Submit);
    prompt.handle(PromptEvent::Up);
    type_text(&mut prompt, " ");
    assert!(!prompt.history().is_browsing());

    prompt.handle(PromptEvent::Submit);
    assert_eq!(prompt.history().entries(), &["SELECT 1;", "SELECT 1; "]);
}

#[test]
fn up_with_empty_history_is_noop() {
    let (mut prompt, _) = test_prompt();
    type_text(&mut prompt, "abc ");
    prompt.handle(PromptEvent::Up);
    assert_eq!(lines(&prompt), vec!["abc "]);
    assert!(!prompt.history().is_browsing());
}

#[test]
fn quit_event_reports_quit() {
    let (mut prompt, _) = test_prompt();
    assert_eq!(prompt.handle(PromptEvent::Quit), multiprompt::EventOutcome::Quit);
    assert_eq!(prompt.handle(PromptEvent::Home), multiprompt::EventOutcome::Continue);
}
